//! Shared content-plan model and UI message codec.
//!
//! This crate owns the record shape consumed by the importer (`ContentPost`),
//! the request/response messages exchanged with the plugin UI, and the CSV
//! ingestion used to produce post records from spreadsheet exports.

pub mod csv;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fallback display identifier for posts with a blank `Post_ID`.
pub const UNKNOWN_POST_ID: &str = "Unknown";

/// Error returned by [`decode_request`] and [`posts_from_records`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The payload was not valid JSON or did not match the message shape.
    #[error("invalid message payload: {0}")]
    Json(#[from] serde_json::Error),
    /// A record could not be read as a content post.
    #[error("row {row} is not a valid post: {source}")]
    InvalidRecord {
        row: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// One row of the content plan.
///
/// Only `Post_ID` is required; every other column is optional free text.
/// Columns not listed here are ignored on decode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPost {
    #[serde(rename = "Post_ID")]
    pub post_id: String,
    #[serde(rename = "Month", default, skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(rename = "Week", default, skip_serializing_if = "Option::is_none")]
    pub week: Option<String>,
    #[serde(rename = "Scheduled_Date", default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    #[serde(rename = "Platform", default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(rename = "Content_Format", default, skip_serializing_if = "Option::is_none")]
    pub content_format: Option<String>,
    #[serde(rename = "Theme", default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(rename = "Product_Focus", default, skip_serializing_if = "Option::is_none")]
    pub product_focus: Option<String>,
    #[serde(rename = "Caption", default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(rename = "Hashtags", default, skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<String>,
    #[serde(rename = "Visual_Brief", default, skip_serializing_if = "Option::is_none")]
    pub visual_brief: Option<String>,
    #[serde(rename = "Dimensions", default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(rename = "Figma_Frame", default, skip_serializing_if = "Option::is_none")]
    pub figma_frame: Option<String>,
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "Approved_By", default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(rename = "Published_URL", default, skip_serializing_if = "Option::is_none")]
    pub published_url: Option<String>,
}

impl ContentPost {
    /// Create a post with only its identifier set.
    #[must_use]
    pub fn new(post_id: impl Into<String>) -> Self {
        Self { post_id: post_id.into(), ..Self::default() }
    }

    /// Whether the post's format names a carousel (case-insensitive).
    #[must_use]
    pub fn is_carousel(&self) -> bool {
        self.content_format
            .as_deref()
            .is_some_and(|format| format.to_lowercase().contains("carousel"))
    }

    /// Identifier used in node names; blank IDs read as [`UNKNOWN_POST_ID`].
    #[must_use]
    pub fn display_id(&self) -> &str {
        if self.post_id.trim().is_empty() { UNKNOWN_POST_ID } else { &self.post_id }
    }
}

/// Message sent from the plugin UI to the importer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiRequest {
    /// Lay out and render the given posts.
    Import {
        #[serde(default)]
        data: Option<Vec<ContentPost>>,
    },
    /// Any other message type; the importer does not answer these.
    #[serde(other)]
    Unknown,
}

/// Terminal message sent from the importer back to the plugin UI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum UiResponse {
    Success { message: String },
    Error { message: String },
}

impl UiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message } | Self::Error { message } => message,
        }
    }
}

/// Decode a UI request from its JSON text.
///
/// # Errors
///
/// Returns [`CodecError::Json`] when the text is not a JSON object carrying a
/// `type` field, or when an `import` payload holds malformed posts.
pub fn decode_request(text: &str) -> Result<UiRequest, CodecError> {
    Ok(serde_json::from_str(text)?)
}

/// Encode a UI response as compact JSON.
///
/// # Errors
///
/// Returns [`CodecError::Json`] if serialization fails.
pub fn encode_response(response: &UiResponse) -> Result<String, CodecError> {
    Ok(serde_json::to_string(response)?)
}

/// Convert loosely typed records (for example converted CSV rows) into posts.
///
/// # Errors
///
/// Returns [`CodecError::InvalidRecord`] naming the first record (1-based) that
/// lacks a `Post_ID` or carries a non-string value in a known column.
pub fn posts_from_records(records: Vec<csv::Record>) -> Result<Vec<ContentPost>, CodecError> {
    records
        .into_iter()
        .enumerate()
        .map(|(row, record)| {
            serde_json::from_value(Value::Object(record))
                .map_err(|source| CodecError::InvalidRecord { row: row + 1, source })
        })
        .collect()
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
