//! Formatting configuration and named presets.
//!
//! A [`Config`] is resolved once at the start of an encode call and treated as an
//! immutable snapshot for the rest of it. There is no process-wide default to
//! mutate: [`Config::default`] always returns the LLM-oriented preset, and hosts
//! that want a different default thread their own `Config` through their calls.
//!
//! ## Presets
//!
//! | Preset | Delimiter | Spaces | Extras |
//! |--------|-----------|--------|--------|
//! | `default` / `llm` | `;` | yes | |
//! | `markdown` | `\|` | yes | `---` separator row, lines wrapped in `\|` |
//! | `csv` | `,` | no | |
//! | `tsv` | tab | no | |
//! | `compact` | `;` | no | |
//!
//! ```rust
//! use minemizer::{Config, Preset};
//!
//! let csv = Preset::Csv.config();
//! assert_eq!(csv.delimiter, ",");
//! assert_eq!(csv.spaced_delimiter(), ",");
//!
//! let llm = Config::default();
//! assert_eq!(llm.spaced_delimiter(), "; ");
//! assert_eq!(llm.dict_open(), "{ ");
//! ```

use crate::{EncodeOptions, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Formatting options consulted by every encoding decision.
///
/// Fields are public so a config can be built with struct-update syntax, but the
/// derived strings (spaced delimiter, brackets) are always computed from
/// `delimiter` and `use_spaces` so they can never disagree with them.
///
/// # Examples
///
/// ```rust
/// use minemizer::Config;
///
/// let config = Config::default()
///     .with_delimiter("|")
///     .with_use_spaces(false);
/// assert_eq!(config.spaced_delimiter(), "|");
/// assert_eq!(config.list_open(), "[");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Separator between segments of a line.
    pub delimiter: String,
    /// Whether a space follows each delimiter and opening bracket.
    pub use_spaces: bool,
    /// Minimum presence ratio for a key to enter the header, within `[0, 1]`.
    pub sparsity_threshold: f64,
    /// Marker appended to a nested schema whose values carry extra keys.
    pub sparse_indicator: String,
    /// Token repeated once per header element on a line under the header.
    pub header_separator: Option<String>,
    /// String used as both prefix and suffix of every output line.
    pub wrap_lines: Option<String>,
    /// Drop the space after a delimiter or opening bracket when the next part
    /// is empty or a bracketed container. Only applies with `use_spaces`.
    pub collapse_spaces: bool,
    /// Emit the header again before every n-th data row.
    pub header_repeat_interval: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            delimiter: ";".to_string(),
            use_spaces: true,
            sparsity_threshold: 0.5,
            sparse_indicator: "...".to_string(),
            header_separator: None,
            wrap_lines: None,
            collapse_spaces: false,
            header_repeat_interval: None,
        }
    }
}

impl Config {
    /// Creates the default (LLM-oriented) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delimiter followed by a space when `use_spaces` is set.
    #[must_use]
    pub fn spaced_delimiter(&self) -> String {
        if self.use_spaces {
            format!("{} ", self.delimiter)
        } else {
            self.delimiter.clone()
        }
    }

    #[must_use]
    pub fn dict_open(&self) -> &'static str {
        if self.use_spaces {
            "{ "
        } else {
            "{"
        }
    }

    #[must_use]
    pub fn dict_close(&self) -> &'static str {
        "}"
    }

    #[must_use]
    pub fn list_open(&self) -> &'static str {
        if self.use_spaces {
            "[ "
        } else {
            "["
        }
    }

    #[must_use]
    pub fn list_close(&self) -> &'static str {
        "]"
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    #[must_use]
    pub fn with_use_spaces(mut self, use_spaces: bool) -> Self {
        self.use_spaces = use_spaces;
        self
    }

    /// Sets the sparsity threshold. The value is checked by [`Config::validate`].
    #[must_use]
    pub fn with_sparsity_threshold(mut self, threshold: f64) -> Self {
        self.sparsity_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_sparse_indicator(mut self, indicator: impl Into<String>) -> Self {
        self.sparse_indicator = indicator.into();
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
        self.collapse_spaces = enabled;
        self
    }

    #[must_use]
    pub fn with_header_repeat_interval(mut self, interval: usize) -> Self {
        self.header_repeat_interval = Some(interval);
        self
    }

    /// Returns a copy of this config with every `Some` field of `overrides`
    /// applied. Fields left as `None` keep this config's value, and the
    /// override's own `preset` is ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minemizer::{EncodeOptions, Preset};
    ///
    /// let base = Preset::Csv.config();
    /// let derived = base.derive(&EncodeOptions::new().with_delimiter("|"));
    /// assert_eq!(derived.delimiter, "|");
    /// assert!(!derived.use_spaces);
    /// ```
    #[must_use]
    pub fn derive(&self, overrides: &EncodeOptions) -> Config {
        let mut config = self.clone();
        if let Some(delimiter) = &overrides.delimiter {
            config.delimiter = delimiter.clone();
        }
        if let Some(use_spaces) = overrides.use_spaces {
            config.use_spaces = use_spaces;
        }
        if let Some(threshold) = overrides.sparsity_threshold {
            config.sparsity_threshold = threshold;
        }
        if let Some(indicator) = &overrides.sparse_indicator {
            config.sparse_indicator = indicator.clone();
        }
        if let Some(separator) = &overrides.header_separator {
            config.header_separator = Some(separator.clone());
        }
        if let Some(wrap) = &overrides.wrap_lines {
            config.wrap_lines = Some(wrap.clone());
        }
        if let Some(enabled) = overrides.collapse_spaces {
            config.collapse_spaces = enabled;
        }
        if let Some(interval) = overrides.header_repeat_interval {
            config.header_repeat_interval = Some(interval);
        }
        config
    }

    /// Checks that the config can drive an encode call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the threshold is outside `[0, 1]` (or NaN),
    /// the delimiter is empty, or the header repeat interval is zero.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.sparsity_threshold) {
            return Err(Error::config(format!(
                "sparsity_threshold must be within [0, 1], got {}",
                self.sparsity_threshold
            )));
        }
        if self.delimiter.is_empty() {
            return Err(Error::config("delimiter must not be empty"));
        }
        if self.header_repeat_interval == Some(0) {
            return Err(Error::config("header_repeat_interval must be at least 1"));
        }
        Ok(())
    }
}

/// Named configurations for common rendering targets.
///
/// # Examples
///
/// ```rust
/// use minemizer::Preset;
///
/// let preset: Preset = "markdown".parse().unwrap();
/// let config = preset.config();
/// assert_eq!(config.header_separator.as_deref(), Some("---"));
/// assert_eq!(config.wrap_lines.as_deref(), Some("|"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Default,
    Llm,
    Markdown,
    Csv,
    Tsv,
    Compact,
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::Default,
        Preset::Llm,
        Preset::Markdown,
        Preset::Csv,
        Preset::Tsv,
        Preset::Compact,
    ];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Preset::Default => "default",
            Preset::Llm => "llm",
            Preset::Markdown => "markdown",
            Preset::Csv => "csv",
            Preset::Tsv => "tsv",
            Preset::Compact => "compact",
        }
    }

    /// Builds the configuration this preset names.
    #[must_use]
    pub fn config(&self) -> Config {
        let base = Config::default();
        match self {
            Preset::Default | Preset::Llm => base,
            Preset::Markdown => base
                .with_delimiter("|")
                .with_use_spaces(true)
                .with_header_separator("---")
                .with_wrap_lines("|"),
            Preset::Csv => base.with_delimiter(",").with_use_spaces(false),
            Preset::Tsv => base.with_delimiter("\t").with_use_spaces(false),
            Preset::Compact => base.with_delimiter(";").with_use_spaces(false),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::config(format!("unknown preset '{}'", s)))
    }
}

impl From<Preset> for Config {
    fn from(preset: Preset) -> Self {
        preset.config()
    }
}
