//! Free-text dimension parsing.
//!
//! Content plans are hand-edited spreadsheets, so the `Dimensions` column
//! arrives in a handful of loose shapes:
//!
//! - `1080x1350px`
//! - `1080x1920px (vertical Reel) or 1080x1080px (carousel backup)`
//! - `FB: 1200x630px | IG Story: 1080x1920px`
//!
//! Parsing is best-effort and never fails: text that yields no dimension
//! degrades to a single square [`FrameDefinition::fallback`].

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::consts::{DEFAULT_FRAME_LABEL, DEFAULT_FRAME_SIDE};

static DIMENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*x\s*(\d+)\s*px").expect("valid dimension regex"));

static OR_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+or\s+").expect("valid separator regex"));

static SLIDE_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)slide\s+(\d+)").expect("valid slide regex"));

/// A labelled placeholder size parsed from dimension text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FrameDefinition {
    pub label: String,
    pub width: u32,
    pub height: u32,
}

impl FrameDefinition {
    /// The 1080×1080 "Frame" used when no dimension can be read.
    #[must_use]
    pub fn fallback() -> Self {
        Self { label: DEFAULT_FRAME_LABEL.to_owned(), width: DEFAULT_FRAME_SIDE, height: DEFAULT_FRAME_SIDE }
    }

    /// Whether the label was defaulted rather than read from the text.
    #[must_use]
    pub fn has_default_label(&self) -> bool {
        self.label == DEFAULT_FRAME_LABEL
    }
}

/// Parse dimension text into one or more frame definitions.
///
/// `or`-separated alternatives take precedence over `|`-separated platform
/// lists; the two forms are never combined. The result is never empty.
#[must_use]
pub fn parse(text: Option<&str>) -> Vec<FrameDefinition> {
    let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return vec![FrameDefinition::fallback()];
    };

    let alternatives: Vec<&str> = OR_SEPARATOR.split(text).collect();
    let frames: Vec<FrameDefinition> = if alternatives.len() > 1 {
        alternatives.into_iter().filter_map(parse_alternative).collect()
    } else {
        text.split('|').flat_map(parse_platform_segment).collect()
    };

    if frames.is_empty() {
        tracing::debug!(text, "no dimensions found, using fallback frame");
        return vec![FrameDefinition::fallback()];
    }
    frames
}

/// Highest slide number referenced as `Slide N` in a visual brief.
///
/// Returns 0 when the brief never names a slide. A brief mentioning slides 1
/// and 3 yields 3: the count follows the highest index, not the number of
/// mentions.
#[must_use]
pub fn count_carousel_slides(brief: Option<&str>) -> u32 {
    let Some(brief) = brief else {
        return 0;
    };
    SLIDE_REFERENCE
        .captures_iter(brief)
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}

/// One `or` alternative: the first size, labelled by whatever text surrounds it.
fn parse_alternative(segment: &str) -> Option<FrameDefinition> {
    let caps = DIMENSION.captures(segment)?;
    let (width, height) = size_from(&caps)?;
    let remainder = DIMENSION.replace(segment, "");
    let label: String = remainder.chars().filter(|c| !matches!(c, '(' | ')')).collect();
    Some(FrameDefinition { label: label_or_default(&label), width, height })
}

/// One `|` segment: an optional `Name:` prefix followed by any number of sizes.
fn parse_platform_segment(segment: &str) -> Vec<FrameDefinition> {
    let (label, body) = match segment.split_once(':') {
        Some((prefix, rest)) if !DIMENSION.is_match(prefix) => (label_or_default(prefix), rest),
        _ => (DEFAULT_FRAME_LABEL.to_owned(), segment),
    };

    DIMENSION
        .captures_iter(body)
        .filter_map(|caps| size_from(&caps))
        .map(|(width, height)| FrameDefinition { label: label.clone(), width, height })
        .collect()
}

/// Width and height from a dimension match; zero or overflowing sizes are skipped.
fn size_from(caps: &Captures<'_>) -> Option<(u32, u32)> {
    let width = caps[1].parse::<u32>().ok().filter(|w| *w > 0)?;
    let height = caps[2].parse::<u32>().ok().filter(|h| *h > 0)?;
    Some((width, height))
}

fn label_or_default(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() { DEFAULT_FRAME_LABEL.to_owned() } else { trimmed.to_owned() }
}

#[cfg(test)]
#[path = "dimensions_test.rs"]
mod tests;
