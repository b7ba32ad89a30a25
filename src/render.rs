//! Renderer capability: the narrow surface the importer draws through.
//!
//! DESIGN
//! ======
//! The layout core never touches a host canvas directly. It asks a
//! [`Renderer`] to load fonts, create rectangles and text, and nest nodes.
//! The host decides what a handle is; the importer only passes handles back.
//! Any renderer call may fail, and failures propagate to the import boundary.

use serde::Serialize;

/// Error raised by a renderer when it rejects an operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Text was requested in a font that was never loaded.
    #[error("font {0} is not loaded")]
    FontNotLoaded(FontSpec),
    /// The font could not be loaded at all.
    #[error("font {0} is unavailable")]
    FontUnavailable(FontSpec),
    /// A handle did not refer to a live node.
    #[error("unknown node {0}")]
    UnknownNode(String),
    /// The requested parent cannot hold the child.
    #[error("node {child} cannot be placed inside {parent}")]
    InvalidParent { child: String, parent: String },
    /// Any other host-side refusal.
    #[error("{0}")]
    Host(String),
}

/// Font weight variants used by the importer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FontStyle {
    Regular,
    Bold,
}

impl std::fmt::Display for FontStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Regular => f.write_str("Regular"),
            Self::Bold => f.write_str("Bold"),
        }
    }
}

/// A font family and style pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FontSpec {
    pub family: String,
    pub style: FontStyle,
}

impl FontSpec {
    #[must_use]
    pub fn new(family: impl Into<String>, style: FontStyle) -> Self {
        Self { family: family.into(), style }
    }
}

impl std::fmt::Display for FontSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}

/// Solid RGB color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// A neutral gray with all channels set to `level`.
    #[must_use]
    pub const fn gray(level: f64) -> Self {
        Self { r: level, g: level, b: level }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Color,
    pub weight: f64,
}

/// Vertical auto-layout: children stack top to bottom inside the padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AutoLayout {
    pub padding: u32,
    pub item_spacing: u32,
}

/// A rectangle or frame node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RectSpec {
    pub name: String,
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
    pub fill: Color,
    pub corner_radius: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_layout: Option<AutoLayout>,
    /// Stretch to the parent's inner width when auto-laid out.
    pub stretch: bool,
}

/// A text node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSpec {
    pub characters: String,
    pub font: FontSpec,
    pub font_size: u32,
    pub fill: Color,
    pub x: i64,
    pub y: i64,
    pub stretch: bool,
    /// Grow in height to fit wrapped content.
    pub wrap: bool,
}

/// Host canvas operations needed to realize a layout.
pub trait Renderer {
    /// Opaque reference to a created node.
    type Handle: Copy + std::fmt::Debug;

    /// Make a font available for text nodes.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::FontUnavailable`] if the host cannot provide it.
    fn load_font(&mut self, font: &FontSpec) -> Result<(), RenderError>;

    /// Create a top-level rectangle.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if the host rejects the node.
    fn create_rect(&mut self, spec: &RectSpec) -> Result<Self::Handle, RenderError>;

    /// Create a top-level text node.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::FontNotLoaded`] when `spec.font` was not loaded.
    fn create_text(&mut self, spec: &TextSpec) -> Result<Self::Handle, RenderError>;

    /// Move `child` inside `parent`, after any existing children.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] for unknown handles or parents that cannot
    /// hold children.
    fn set_parent(&mut self, child: Self::Handle, parent: Self::Handle) -> Result<(), RenderError>;
}
