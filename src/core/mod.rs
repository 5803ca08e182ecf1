//! Core module containing the rule engine and its building blocks

pub mod builtin;
pub mod case;
pub mod error;
pub mod pluralize;
pub mod rule;

pub use error::RuleError;
pub use pluralize::{Pluralizer, PluralizerBuilder};
pub use rule::{Rule, RuleTable, Segment, Template};
