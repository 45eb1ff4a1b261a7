//! Per-call encoding options.
//!
//! [`EncodeOptions`] pairs an optional base [`Config`] (usually a preset) with
//! individual overrides. Resolution is a field-level merge: only overrides that
//! were actually set replace the base value, everything else is inherited.
//!
//! ## Examples
//!
//! ```rust
//! use minemizer::{to_string_with_options, EncodeOptions, Preset};
//! use serde_json::json;
//!
//! let data = json!([{"name": "Alice", "age": 30}]);
//!
//! // CSV preset, but with a pipe delimiter: spaces stay off
//! let options = EncodeOptions::new()
//!     .with_preset(Preset::Csv)
//!     .with_delimiter("|");
//! let out = to_string_with_options(&data, options).unwrap();
//! assert_eq!(out, "name|age\nAlice|30");
//! ```

use crate::{Config, Result};
use serde::{Deserialize, Serialize};

/// A base configuration plus sparse overrides.
///
/// Options deserialize with every field optional, so they can be read straight
/// from a host's own configuration file:
///
/// ```rust
/// use minemizer::{EncodeOptions, Preset};
///
/// let options: EncodeOptions =
///     serde_json::from_str(r#"{"preset": "tsv", "sparsity_threshold": 0.75}"#).unwrap();
/// let config = options.resolve().unwrap();
/// assert_eq!(config.delimiter, "\t");
/// assert_eq!(config.sparsity_threshold, 0.75);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Base configuration; [`Config::default`] when absent.
    #[serde(deserialize_with = "deserialize_preset")]
    pub preset: Option<Config>,
    pub delimiter: Option<String>,
    pub use_spaces: Option<bool>,
    pub sparsity_threshold: Option<f64>,
    pub sparse_indicator: Option<String>,
    pub header_separator: Option<String>,
    pub wrap_lines: Option<String>,
    pub collapse_spaces: Option<bool>,
    pub header_repeat_interval: Option<usize>,
}

impl EncodeOptions {
    /// Creates options with no preset and no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base configuration, typically a [`Preset`](crate::Preset).
    #[must_use]
    pub fn with_preset(mut self, preset: impl Into<Config>) -> Self {
        self.preset = Some(preset.into());
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    #[must_use]
    pub fn with_use_spaces(mut self, use_spaces: bool) -> Self {
        self.use_spaces = Some(use_spaces);
        self
    }

    #[must_use]
    pub fn with_sparsity_threshold(mut self, threshold: f64) -> Self {
        self.sparsity_threshold = Some(threshold);
        self
    }

    #[must_use]
    pub fn with_sparse_indicator(mut self, indicator: impl Into<String>) -> Self {
        self.sparse_indicator = Some(indicator.into());
        self
    }

    #[must_use]
    pub fn with_header_separator(mut self, separator: impl Into<String>) -> Self {
        self.header_separator = Some(separator.into());
        self
    }

    #[must_use]
    pub fn with_wrap_lines(mut self, wrap: impl Into<String>) -> Self {
        self.wrap_lines = Some(wrap.into());
        self
    }

    #[must_use]
    pub fn with_collapse_spaces(mut self, enabled: bool) -> Self {
        self.collapse_spaces = Some(enabled);
        self
    }

    #[must_use]
    pub fn with_header_repeat_interval(mut self, interval: usize) -> Self {
        self.header_repeat_interval = Some(interval);
        self
    }

    /// Merges the overrides onto the base configuration and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the merged config is invalid.
    pub fn resolve(&self) -> Result<Config> {
        let config = match &self.preset {
            Some(base) => base.derive(self),
            None => Config::default().derive(self),
        };
        config.validate()?;
        Ok(config)
    }
}

impl From<Config> for EncodeOptions {
    fn from(config: Config) -> Self {
        EncodeOptions::new().with_preset(config)
    }
}

impl From<crate::Preset> for EncodeOptions {
    fn from(preset: crate::Preset) -> Self {
        EncodeOptions::new().with_preset(preset)
    }
}

/// Accepts either a preset name or a full config object for `preset`.
fn deserialize_preset<'de, D>(deserializer: D) -> std::result::Result<Option<Config>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PresetOrConfig {
        Named(String),
        Full(Config),
    }

    match Option::<PresetOrConfig>::deserialize(deserializer)? {
        None => Ok(None),
        Some(PresetOrConfig::Full(config)) => Ok(Some(config)),
        Some(PresetOrConfig::Named(name)) => name
            .parse::<crate::Preset>()
            .map(|preset| Some(preset.config()))
            .map_err(serde::de::Error::custom),
    }
}
