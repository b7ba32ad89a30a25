//! UI message boundary: one inbound import request, one terminal response.
//!
//! This is the only place import failures are caught. Whatever went wrong is
//! reported to the UI verbatim as an `error` response.

use plan::{UiRequest, UiResponse, decode_request};

use crate::config::ImporterConfig;
use crate::import::import_posts;
use crate::render::Renderer;

/// Handle a decoded UI request.
///
/// Returns `None` for messages the importer does not answer: non-import
/// types and import requests without a `data` array.
pub fn handle_request<R: Renderer>(
    renderer: &mut R,
    request: UiRequest,
    config: &ImporterConfig,
) -> Option<UiResponse> {
    let UiRequest::Import { data: Some(posts) } = request else {
        tracing::debug!("ignoring message without import data");
        return None;
    };

    match import_posts(renderer, &posts, config) {
        Ok(summary) => {
            tracing::info!(posts = summary.posts, frames = summary.frames, "import complete");
            Some(UiResponse::Success { message: summary.message() })
        }
        Err(error) => {
            tracing::error!(%error, "import failed");
            Some(UiResponse::Error { message: error.to_string() })
        }
    }
}

/// Decode raw message text and handle it.
///
/// Text that does not decode as a UI request is answered with an `error`
/// response.
pub fn handle_message<R: Renderer>(renderer: &mut R, text: &str, config: &ImporterConfig) -> Option<UiResponse> {
    match decode_request(text) {
        Ok(request) => handle_request(renderer, request, config),
        Err(error) => {
            tracing::error!(%error, "undecodable message");
            Some(UiResponse::Error { message: error.to_string() })
        }
    }
}

#[cfg(test)]
#[path = "channel_test.rs"]
mod tests;
