//! Content-plan importer.
//!
//! Reads a social-media content plan, lays each post out as a metadata block
//! plus placeholder frames, and draws the result through a [`render::Renderer`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Environment-driven importer settings |
//! | [`render`] | Renderer trait and node specs |
//! | [`scene`] | In-memory renderer that records a JSON scene |
//! | [`import`] | Font loading, planning and drawing of one import run |
//! | [`channel`] | UI request handling and terminal responses |

pub mod channel;
pub mod config;
pub mod import;
pub mod render;
pub mod scene;

pub use channel::{handle_message, handle_request};
pub use config::ImporterConfig;
pub use import::{ImportError, ImportSummary, import_posts};
pub use scene::Scene;
