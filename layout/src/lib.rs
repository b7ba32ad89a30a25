//! Dimension parsing and canvas layout for content-plan imports.
//!
//! Turns the free-text `Dimensions` and `Visual_Brief` columns of a content
//! post into frame definitions, then places one metadata block and the
//! post's content frames on the canvas, one post below the next.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`dimensions`] | Dimension-string parsing and carousel slide inference |
//! | [`planner`] | Placement of metadata blocks and content frames |
//! | [`consts`] | Default frame size and layout spacing constants |

pub mod consts;
pub mod dimensions;
pub mod planner;

pub use dimensions::{FrameDefinition, count_carousel_slides, parse};
pub use planner::{Layout, LayoutConfig, PlacementInstruction, PlacementKind, PostFrames, plan, plan_posts};
