//! Joining rendered parts into delimited text.
//!
//! Every delimiter and opening bracket is followed by a space when `use_spaces`
//! is on. With `collapse_spaces` also on, that space is left out where it carries
//! no information:
//!
//! | Next part | Plain | Collapsed |
//! |-----------|-------|-----------|
//! | empty segment | `a; ; b` | `a;; b` |
//! | bracketed container after a delimiter | `x; { 1}` | `x;{ 1}` |
//! | bracketed container first inside a bracket | `[ { a}]` | `[{ a}]` |
//!
//! The decision is made per part while joining, so text inside scalar values is
//! never touched.

use crate::Config;

/// One rendered piece of a row, header or container.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Part {
    text: String,
    /// Starts with a structural `{` or `[`.
    bracketed: bool,
}

impl Part {
    pub(crate) fn text(text: impl Into<String>) -> Self {
        Part {
            text: text.into(),
            bracketed: false,
        }
    }

    pub(crate) fn bracketed(text: impl Into<String>) -> Self {
        Part {
            text: text.into(),
            bracketed: true,
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    pub(crate) fn into_string(self) -> String {
        self.text
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Bracket {
    Object,
    List,
}

fn collapsing(config: &Config) -> bool {
    config.collapse_spaces && config.use_spaces
}

/// Joins parts with the configured delimiter.
pub(crate) fn join(parts: &[Part], config: &Config) -> String {
    let tight = collapsing(config);
    let mut out = String::new();
    for (index, part) in parts.iter().enumerate() {
        if index > 0 {
            out.push_str(&config.delimiter);
            if config.use_spaces && !(tight && (part.bracketed || part.text.is_empty())) {
                out.push(' ');
            }
        }
        out.push_str(&part.text);
    }
    out
}

/// Wraps joined parts in braces or square brackets.
pub(crate) fn enclose(bracket: Bracket, parts: &[Part], config: &Config) -> Part {
    let (open, close) = match bracket {
        Bracket::Object => (config.dict_open(), config.dict_close()),
        Bracket::List => (config.list_open(), config.list_close()),
    };
    let first_bracketed = parts.first().map_or(false, |part| part.bracketed);
    let open = if collapsing(config) && first_bracketed {
        open.trim_end()
    } else {
        open
    };
    Part::bracketed(format!("{}{}{}", open, join(parts, config), close))
}
