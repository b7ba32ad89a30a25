//! Importer configuration parsed from environment variables.

use std::path::PathBuf;

use layout::LayoutConfig;

pub const DEFAULT_FONT_FAMILY: &str = "Inter";
pub const MAX_SCALE_FACTOR: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid IMPORTER_SCALE_FACTOR '{0}': expected a number greater than 0 and at most 4")]
    InvalidScale(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImporterConfig {
    /// Font family loaded in regular and bold for all text nodes.
    pub font_family: String,
    /// Where the host binary writes the rendered scene, if anywhere.
    pub scene_out: Option<PathBuf>,
    pub layout: LayoutConfig,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self { font_family: DEFAULT_FONT_FAMILY.to_owned(), scene_out: None, layout: LayoutConfig::default() }
    }
}

impl ImporterConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `IMPORTER_FONT_FAMILY`: default `Inter`
    /// - `IMPORTER_SCENE_OUT`: path for the rendered scene JSON
    /// - `IMPORTER_SCALE_FACTOR`: canvas scale for content frames, default 0.25
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidScale`] for a scale that is not a number
    /// in `(0, 4]`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var_os(key).map(|value| value.to_string_lossy().into_owned()))
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// See [`ImporterConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let font_family = get("IMPORTER_FONT_FAMILY").unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_owned());
        let scene_out = get("IMPORTER_SCENE_OUT").map(PathBuf::from);
        let layout = match get("IMPORTER_SCALE_FACTOR") {
            Some(raw) => LayoutConfig::default().with_scale_factor(parse_scale(&raw)?),
            None => LayoutConfig::default(),
        };

        Ok(Self { font_family, scene_out, layout })
    }
}

fn parse_scale(raw: &str) -> Result<f64, ConfigError> {
    match raw.parse::<f64>() {
        Ok(scale) if scale.is_finite() && scale > 0.0 && scale <= MAX_SCALE_FACTOR => Ok(scale),
        _ => Err(ConfigError::InvalidScale(raw.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
