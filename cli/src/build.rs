//! UI build step: bakes a content plan into the UI document.

use serde_json::Value;

/// Marker in the UI template that receives the plan JSON.
pub const DATA_PLACEHOLDER: &str = "__CONTENT_PLAN_DATA__";

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("content plan data must be a JSON array")]
    NotAnArray,
    #[error("template has no __CONTENT_PLAN_DATA__ placeholder")]
    MissingPlaceholder,
    #[error("failed to encode content plan: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Replace every placeholder in `template` with `posts` as compact JSON.
///
/// # Errors
///
/// Fails if `posts` is not an array or the template has no placeholder.
pub fn inline_data(template: &str, posts: &Value) -> Result<String, BuildError> {
    if !posts.is_array() {
        return Err(BuildError::NotAnArray);
    }
    if !template.contains(DATA_PLACEHOLDER) {
        return Err(BuildError::MissingPlaceholder);
    }
    Ok(template.replace(DATA_PLACEHOLDER, &serde_json::to_string(posts)?))
}

#[cfg(test)]
#[path = "build_test.rs"]
mod tests;
