//! Typed errors for rule construction
//!
//! Transforming a word never fails. The only failure is a malformed rule
//! literal (or irregular pair) while a [`Pluralizer`](super::Pluralizer) is
//! being built. For the built-in rule set that means a programming error, so
//! [`Pluralizer::global`](super::Pluralizer::global) turns it into a panic.
//! Rule sets that come from configuration report it as a [`RuleError`].
//!
//! # Example
//!
//! ```
//! use inflect::prelude::*;
//!
//! let err = PluralizerBuilder::new()
//!     .with_plural_rule("/(ox$/i", "$1en")
//!     .build()
//!     .unwrap_err();
//!
//! assert_eq!(err.error_code(), "INVALID_PATTERN");
//! ```

/// Errors raised while normalizing and compiling rule data
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// A rule literal was the empty string
    #[error("Rule pattern is empty")]
    EmptyPattern,

    /// A `/`-delimited literal has no closing delimiter
    #[error("Pattern '{pattern}' is missing its closing '/' delimiter")]
    MissingDelimiter { pattern: String },

    /// A delimited literal carries a flag other than `i`
    #[error("Unsupported flag '{flag}' in pattern '{pattern}'")]
    UnsupportedFlag { pattern: String, flag: char },

    /// The normalized pattern is not a valid regular expression
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A replacement template references a group the pattern does not capture
    #[error(
        "Replacement '{template}' references group ${group} but the pattern only has {available} group(s)"
    )]
    UnknownGroup {
        template: String,
        group: usize,
        available: usize,
    },

    /// An irregular pair with an empty singular or plural form
    #[error("Irregular pair ('{singular}', '{plural}') has an empty form")]
    EmptyIrregular { singular: String, plural: String },
}

impl RuleError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            RuleError::EmptyPattern => "EMPTY_PATTERN",
            RuleError::MissingDelimiter { .. } => "MISSING_DELIMITER",
            RuleError::UnsupportedFlag { .. } => "UNSUPPORTED_FLAG",
            RuleError::InvalidPattern { .. } => "INVALID_PATTERN",
            RuleError::UnknownGroup { .. } => "UNKNOWN_GROUP",
            RuleError::EmptyIrregular { .. } => "EMPTY_IRREGULAR",
        }
    }

    /// The literal that caused the error, when there is one
    pub fn pattern(&self) -> Option<&str> {
        match self {
            RuleError::MissingDelimiter { pattern }
            | RuleError::UnsupportedFlag { pattern, .. }
            | RuleError::InvalidPattern { pattern, .. } => Some(pattern.as_str()),
            RuleError::EmptyPattern
            | RuleError::UnknownGroup { .. }
            | RuleError::EmptyIrregular { .. } => None,
        }
    }
}
