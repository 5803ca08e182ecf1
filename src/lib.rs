//! # inflect
//!
//! Rule-based conversion of English nouns between singular and plural form.
//!
//! ## Features
//!
//! - **Priority-Ordered Rules**: Regex rules scanned last-wins (`bus` → `buses`, `city` → `cities`)
//! - **Irregular Forms**: Exact-match exception maps in both directions (`ox` ↔ `oxen`)
//! - **Uncountables**: Words and patterns that never change (`sheep`, `*fish`)
//! - **Case Preservation**: `PERSON` → `PEOPLE`, `Person` → `People`
//! - **Classification**: `is_plural` / `is_singular` reuse the same rules without mutation
//! - **Configuration-Based**: Independent rule sets from YAML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! assert_eq!(inflect::to_plural("knife"), "knives");
//! assert_eq!(inflect::to_singular("cities"), "city");
//! assert_eq!(inflect::pluralize("test", 1, true), "1 test");
//! assert_eq!(inflect::pluralize("test", 5, true), "5 tests");
//! assert!(inflect::is_plural("people"));
//! ```
//!
//! ## Custom Rule Sets
//!
//! ```rust
//! use inflect::prelude::*;
//!
//! let pluralizer = PluralizerBuilder::new()
//!     .with_plural_rule("/s?$/i", "s")
//!     .with_plural_rule("/(x|ch)$/i", "$1es")
//!     .with_irregular("mouse", "mice")
//!     .build()?;
//!
//! assert_eq!(pluralizer.to_plural("box"), "boxes");
//! assert_eq!(pluralizer.to_plural("Mouse"), "Mice");
//! # Ok::<(), inflect::RuleError>(())
//! ```

pub mod config;
pub mod core;

pub use crate::config::RulesConfig;
pub use crate::core::{Pluralizer, PluralizerBuilder, RuleError};

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::config::{IrregularPair, RuleSpec, RulesConfig};
    pub use crate::core::{
        Pluralizer, PluralizerBuilder, Rule, RuleError, RuleTable, Segment, Template,
    };
}

/// Pluralize `word` with the built-in rule set
pub fn to_plural(word: &str) -> String {
    Pluralizer::global().to_plural(word)
}

/// Singularize `word` with the built-in rule set
pub fn to_singular(word: &str) -> String {
    Pluralizer::global().to_singular(word)
}

/// Returns true if `word` is plural under the built-in rule set
pub fn is_plural(word: &str) -> bool {
    Pluralizer::global().is_plural(word)
}

/// Returns true if `word` is singular under the built-in rule set
pub fn is_singular(word: &str) -> bool {
    Pluralizer::global().is_singular(word)
}

/// Pick the singular or plural form of `word` for `count`
///
/// See [`Pluralizer::pluralize`].
pub fn pluralize(word: &str, count: i64, inclusive: bool) -> String {
    Pluralizer::global().pluralize(word, count, inclusive)
}
