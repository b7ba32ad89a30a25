//! Layout planner: places each post's metadata block and content frames.
//!
//! Posts are stacked top to bottom. Within a post row the metadata block sits
//! at `x = 0` and the content frames run left to right from
//! [`LayoutConfig::frame_start_x`], all sharing the row's `y`.

use plan::ContentPost;
use serde::Serialize;

use crate::consts::{FRAME_GAP, FRAME_START_X, METADATA_MIN_HEIGHT, POST_GAP, SCALE_FACTOR, TEXT_BLOCK_WIDTH};
use crate::dimensions::{self, FrameDefinition};

/// Spacing and scale used by the planner.
///
/// The default is the compact canvas layout: frames at a quarter of their real
/// size next to a 380px metadata column. Setting `scale_factor` to `1.0`
/// reproduces the full-size layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub scale_factor: f64,
    pub text_block_width: u32,
    pub metadata_min_height: u32,
    pub frame_start_x: i64,
    pub frame_gap: i64,
    pub post_gap: i64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scale_factor: SCALE_FACTOR,
            text_block_width: TEXT_BLOCK_WIDTH,
            metadata_min_height: METADATA_MIN_HEIGHT,
            frame_start_x: FRAME_START_X,
            frame_gap: FRAME_GAP,
            post_gap: POST_GAP,
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn with_scale_factor(self, scale_factor: f64) -> Self {
        Self { scale_factor, ..self }
    }

    /// Canvas size for a real pixel length, rounded and never below 1.
    #[must_use]
    pub fn scale(&self, pixels: u32) -> u32 {
        let scaled = (f64::from(pixels) * self.scale_factor).round().max(1.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let scaled = scaled.min(f64::from(u32::MAX)) as u32;
        scaled
    }
}

/// A post together with its parsed frames and inferred slide count.
#[derive(Debug, Clone)]
pub struct PostFrames<'a> {
    pub post: &'a ContentPost,
    pub frames: Vec<FrameDefinition>,
    pub slide_count: u32,
}

impl<'a> PostFrames<'a> {
    /// Parse the post's `Dimensions` and count slides in its `Visual_Brief`.
    #[must_use]
    pub fn from_post(post: &'a ContentPost) -> Self {
        Self {
            post,
            frames: dimensions::parse(post.dimensions.as_deref()),
            slide_count: dimensions::count_carousel_slides(post.visual_brief.as_deref()),
        }
    }

    /// How many times each frame definition is repeated on the canvas.
    #[must_use]
    pub fn repeat_count(&self) -> u32 {
        if self.post.is_carousel() { self.slide_count.max(1) } else { 1 }
    }
}

/// What a placement stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PlacementKind {
    /// The text panel summarizing the post.
    MetadataBlock,
    /// One visual placeholder; `slide` is zero-based.
    ContentFrame { frame: FrameDefinition, slide: u32 },
}

/// Where and how large to draw one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementInstruction {
    pub kind: PlacementKind,
    /// Index of the owning post in the planner input.
    pub post_index: usize,
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
    pub name: String,
}

impl PlacementInstruction {
    #[must_use]
    pub fn is_metadata_block(&self) -> bool {
        matches!(self.kind, PlacementKind::MetadataBlock)
    }
}

/// The full placement for an import run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Layout {
    /// Instructions in render order, post by post.
    pub instructions: Vec<PlacementInstruction>,
    /// Number of content-frame instructions.
    pub content_frames: usize,
    /// Vertical cursor after the last post.
    pub height: i64,
}

impl Layout {
    /// Instructions belonging to one post, metadata block first.
    pub fn for_post(&self, post_index: usize) -> impl Iterator<Item = &PlacementInstruction> {
        self.instructions.iter().filter(move |i| i.post_index == post_index)
    }
}

/// Place every post, in input order, below the previous one.
#[must_use]
pub fn plan(posts: &[PostFrames<'_>], config: &LayoutConfig) -> Layout {
    let mut layout = Layout::default();
    let mut current_y: i64 = 0;

    for (post_index, entry) in posts.iter().enumerate() {
        let post_id = entry.post.display_id();
        let repeats = entry.repeat_count();

        let mut frames_x = config.frame_start_x;
        let mut tallest: u32 = 0;
        let mut frames = Vec::new();

        for frame in &entry.frames {
            for slide in 0..repeats {
                let width = config.scale(frame.width);
                let height = config.scale(frame.height);
                frames.push(PlacementInstruction {
                    kind: PlacementKind::ContentFrame { frame: frame.clone(), slide },
                    post_index,
                    x: frames_x,
                    y: current_y,
                    width,
                    height,
                    name: content_frame_name(post_id, &frame.label, slide),
                });
                frames_x += i64::from(width) + config.frame_gap;
                tallest = tallest.max(height);
            }
        }

        let metadata_height = tallest.max(config.metadata_min_height);
        layout.instructions.push(PlacementInstruction {
            kind: PlacementKind::MetadataBlock,
            post_index,
            x: 0,
            y: current_y,
            width: config.text_block_width,
            height: metadata_height,
            name: format!("{post_id} — Info"),
        });

        tracing::debug!(post_id, y = current_y, frames = frames.len(), "placed post");
        layout.content_frames += frames.len();
        layout.instructions.append(&mut frames);

        current_y += i64::from(tallest.max(metadata_height)) + config.post_gap;
    }

    layout.height = current_y;
    layout
}

/// Parse, infer slides, and place a list of posts in one step.
#[must_use]
pub fn plan_posts(posts: &[ContentPost], config: &LayoutConfig) -> Layout {
    let entries: Vec<PostFrames<'_>> = posts.iter().map(PostFrames::from_post).collect();
    plan(&entries, config)
}

fn content_frame_name(post_id: &str, label: &str, slide: u32) -> String {
    if slide > 0 {
        format!("{post_id} — {label} ({})", slide + 1)
    } else {
        format!("{post_id} — {label}")
    }
}

#[cfg(test)]
#[path = "planner_test.rs"]
mod tests;
