//! Shared constants for dimension parsing and layout.

// ── Dimensions ──────────────────────────────────────────────────

/// Label given to frames whose dimension text carries no name.
pub const DEFAULT_FRAME_LABEL: &str = "Frame";

/// Side length of the square fallback frame, in pixels.
pub const DEFAULT_FRAME_SIDE: u32 = 1080;

// ── Layout ──────────────────────────────────────────────────────

/// Content frames are drawn at a quarter of their real pixel size.
pub const SCALE_FACTOR: f64 = 0.25;

/// Width of the metadata block at the left of each post row.
pub const TEXT_BLOCK_WIDTH: u32 = 380;

/// Minimum height of the metadata block.
pub const METADATA_MIN_HEIGHT: u32 = 400;

/// Horizontal offset of the first content frame in a row.
pub const FRAME_START_X: i64 = 430;

/// Horizontal gap between neighbouring content frames.
pub const FRAME_GAP: i64 = 40;

/// Vertical gap between post rows.
pub const POST_GAP: i64 = 120;
