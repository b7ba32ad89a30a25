//! Import routine: plans a content plan and realizes it through a renderer.
//!
//! Fonts are loaded once up front, then every placement is drawn in layout
//! order. The first renderer failure ends the run; nodes created before it
//! stay on the canvas.

use std::collections::HashSet;

use layout::{FrameDefinition, PlacementInstruction, PlacementKind, plan_posts};
use plan::ContentPost;

use crate::config::ImporterConfig;
use crate::render::{AutoLayout, Color, FontSpec, FontStyle, RectSpec, RenderError, Renderer, Stroke, TextSpec};

// =============================================================================
// STYLE
// =============================================================================

const BLOCK_FILL: Color = Color::gray(0.97);
const BLOCK_RADIUS: u32 = 8;
const BLOCK_PADDING: u32 = 16;
const BLOCK_SPACING: u32 = 12;

const HEADER_SIZE: u32 = 16;
const HEADER_FILL: Color = Color::gray(0.1);
const META_SIZE: u32 = 11;
const META_FILL: Color = Color::gray(0.5);
const DIVIDER_FILL: Color = Color::gray(0.85);
const SECTION_TITLE_SIZE: u32 = 11;
const SECTION_TITLE_FILL: Color = Color::gray(0.4);
const SECTION_BODY_SIZE: u32 = 12;
const SECTION_BODY_FILL: Color = Color::gray(0.13);

const FRAME_FILL: Color = Color::gray(0.93);
const FRAME_RADIUS: u32 = 4;
const FRAME_STROKE: Stroke = Stroke { color: Color::gray(0.8), weight: 1.0 };
const FRAME_LABEL_SIZE: u32 = 10;
const FRAME_LABEL_INSET: i64 = 8;
const FRAME_NAME_OFFSET: i64 = 22;
const SIZE_LABEL_FILL: Color = Color::gray(0.6);
const NAME_LABEL_FILL: Color = Color::gray(0.5);

/// Failure that aborted an import run.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("could not load font: {0}")]
    Font(#[source] RenderError),
    #[error("could not create \"{node}\": {source}")]
    Render {
        node: String,
        #[source]
        source: RenderError,
    },
}

/// Outcome of a completed import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub posts: usize,
    pub frames: usize,
}

impl ImportSummary {
    /// Human-readable completion message for the UI.
    #[must_use]
    pub fn message(&self) -> String {
        format!("Imported {} posts with {} frames", self.posts, self.frames)
    }
}

/// Lay out `posts` and draw them through `renderer`.
///
/// # Errors
///
/// Returns [`ImportError::Font`] if either font weight fails to load, and
/// [`ImportError::Render`] for the first node the renderer rejects. Posts
/// after the failing one are not drawn.
pub fn import_posts<R: Renderer>(
    renderer: &mut R,
    posts: &[ContentPost],
    config: &ImporterConfig,
) -> Result<ImportSummary, ImportError> {
    let fonts = Fonts::new(&config.font_family);
    renderer.load_font(&fonts.regular).map_err(ImportError::Font)?;
    renderer.load_font(&fonts.bold).map_err(ImportError::Font)?;

    warn_duplicate_ids(posts);

    let layout = plan_posts(posts, &config.layout);
    tracing::info!(posts = posts.len(), frames = layout.content_frames, "importing content plan");

    let mut frames = 0;
    for instruction in &layout.instructions {
        let drawn = match &instruction.kind {
            PlacementKind::MetadataBlock => {
                draw_metadata_block(renderer, &posts[instruction.post_index], instruction, &fonts)
            }
            PlacementKind::ContentFrame { frame, .. } => draw_content_frame(renderer, instruction, frame, &fonts),
        };
        drawn.map_err(|source| ImportError::Render { node: instruction.name.clone(), source })?;
        if !instruction.is_metadata_block() {
            frames += 1;
        }
    }

    Ok(ImportSummary { posts: posts.len(), frames })
}

struct Fonts {
    regular: FontSpec,
    bold: FontSpec,
}

impl Fonts {
    fn new(family: &str) -> Self {
        Self { regular: FontSpec::new(family, FontStyle::Regular), bold: FontSpec::new(family, FontStyle::Bold) }
    }
}

fn warn_duplicate_ids(posts: &[ContentPost]) {
    let mut seen = HashSet::new();
    for post in posts {
        if !seen.insert(post.post_id.as_str()) {
            tracing::warn!(post_id = %post.post_id, "duplicate Post_ID in content plan");
        }
    }
}

/// Metadata panel: ID header, platform line, divider, then text sections.
fn draw_metadata_block<R: Renderer>(
    renderer: &mut R,
    post: &ContentPost,
    placement: &PlacementInstruction,
    fonts: &Fonts,
) -> Result<(), RenderError> {
    let container = renderer.create_rect(&RectSpec {
        name: placement.name.clone(),
        x: placement.x,
        y: placement.y,
        width: placement.width,
        height: placement.height,
        fill: BLOCK_FILL,
        corner_radius: BLOCK_RADIUS,
        stroke: None,
        auto_layout: Some(AutoLayout { padding: BLOCK_PADDING, item_spacing: BLOCK_SPACING }),
        stretch: false,
    })?;

    let header = renderer.create_text(&stacked_text(post.display_id(), &fonts.bold, HEADER_SIZE, HEADER_FILL))?;
    renderer.set_parent(header, container)?;

    let meta = meta_line(post);
    if !meta.is_empty() {
        let line = renderer.create_text(&stacked_text(&meta, &fonts.regular, META_SIZE, META_FILL))?;
        renderer.set_parent(line, container)?;
    }

    let divider = renderer.create_rect(&RectSpec {
        name: "Divider".to_owned(),
        x: 0,
        y: 0,
        width: placement.width.saturating_sub(2 * BLOCK_PADDING).max(1),
        height: 1,
        fill: DIVIDER_FILL,
        corner_radius: 0,
        stroke: None,
        auto_layout: None,
        stretch: true,
    })?;
    renderer.set_parent(divider, container)?;

    let sections = [
        ("CAPTION", post.caption.as_deref()),
        ("VISUAL BRIEF", post.visual_brief.as_deref()),
        ("DIMENSIONS", post.dimensions.as_deref()),
    ];
    for (title, body) in sections {
        let Some(body) = body.filter(|b| !b.trim().is_empty()) else {
            continue;
        };
        let title = renderer.create_text(&stacked_text(title, &fonts.bold, SECTION_TITLE_SIZE, SECTION_TITLE_FILL))?;
        renderer.set_parent(title, container)?;
        let mut body_spec = stacked_text(body, &fonts.regular, SECTION_BODY_SIZE, SECTION_BODY_FILL);
        body_spec.wrap = true;
        let body = renderer.create_text(&body_spec)?;
        renderer.set_parent(body, container)?;
    }

    Ok(())
}

/// Placeholder frame with its real pixel size and, if named, its label.
fn draw_content_frame<R: Renderer>(
    renderer: &mut R,
    placement: &PlacementInstruction,
    definition: &FrameDefinition,
    fonts: &Fonts,
) -> Result<(), RenderError> {
    let frame = renderer.create_rect(&RectSpec {
        name: placement.name.clone(),
        x: placement.x,
        y: placement.y,
        width: placement.width,
        height: placement.height,
        fill: FRAME_FILL,
        corner_radius: FRAME_RADIUS,
        stroke: Some(FRAME_STROKE),
        auto_layout: None,
        stretch: false,
    })?;

    let size = renderer.create_text(&TextSpec {
        characters: format!("{}×{}", definition.width, definition.height),
        font: fonts.regular.clone(),
        font_size: FRAME_LABEL_SIZE,
        fill: SIZE_LABEL_FILL,
        x: FRAME_LABEL_INSET,
        y: FRAME_LABEL_INSET,
        stretch: false,
        wrap: false,
    })?;
    renderer.set_parent(size, frame)?;

    if !definition.has_default_label() {
        let name = renderer.create_text(&TextSpec {
            characters: definition.label.clone(),
            font: fonts.bold.clone(),
            font_size: FRAME_LABEL_SIZE,
            fill: NAME_LABEL_FILL,
            x: FRAME_LABEL_INSET,
            y: FRAME_NAME_OFFSET,
            stretch: false,
            wrap: false,
        })?;
        renderer.set_parent(name, frame)?;
    }

    Ok(())
}

/// `Platform · Format · Date`, skipping blank parts.
fn meta_line(post: &ContentPost) -> String {
    [post.platform.as_deref(), post.content_format.as_deref(), post.scheduled_date.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

fn stacked_text(characters: &str, font: &FontSpec, font_size: u32, fill: Color) -> TextSpec {
    TextSpec {
        characters: characters.to_owned(),
        font: font.clone(),
        font_size,
        fill,
        x: 0,
        y: 0,
        stretch: true,
        wrap: false,
    }
}

#[cfg(test)]
#[path = "import_test.rs"]
mod tests;
