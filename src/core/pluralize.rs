//! Rule-based pluralization for English nouns
//!
//! A [`Pluralizer`] holds two rule tables, two exception maps and an
//! uncountable set. All of it is built once by a [`PluralizerBuilder`] and is
//! read-only afterwards, so a single instance can be shared across threads.
//!
//! Lookup order for every word:
//!
//! 1. irregular forms (exact match, case restored)
//! 2. uncountable words (returned unchanged)
//! 3. rule table, scanned from the most recently registered rule backward

use super::builtin::{IRREGULAR_RULES, PLURAL_RULES, SINGULAR_RULES, UNCOUNTABLE_RULES};
use super::case::{restore_case, restore_rule_case};
use super::error::RuleError;
use super::rule::{Rule, RuleTable};
use crate::config::RulesConfig;
use indexmap::{IndexMap, IndexSet};
use std::sync::OnceLock;

/// Converts English nouns between singular and plural form
///
/// # Examples
///
/// ```
/// use inflect::core::pluralize::Pluralizer;
///
/// let pluralizer = Pluralizer::global();
///
/// assert_eq!(pluralizer.to_plural("company"), "companies");
/// assert_eq!(pluralizer.to_plural("Person"), "People");
/// assert_eq!(pluralizer.to_singular("knives"), "knife");
/// assert_eq!(pluralizer.pluralize("item", 3, true), "3 items");
/// assert!(pluralizer.is_plural("sheep"));
/// ```
#[derive(Debug, Clone)]
pub struct Pluralizer {
    plural_rules: RuleTable,
    singular_rules: RuleTable,
    /// singular -> plural
    irregular_singles: IndexMap<String, String>,
    /// plural -> singular
    irregular_plurals: IndexMap<String, String>,
    uncountables: IndexSet<String>,
}

impl Pluralizer {
    /// Start an empty [`PluralizerBuilder`]
    pub fn builder() -> PluralizerBuilder {
        PluralizerBuilder::new()
    }

    /// Build a fresh instance with the built-in English rule set
    pub fn builtin() -> Result<Self, RuleError> {
        PluralizerBuilder::builtin().build()
    }

    /// Shared instance with the built-in English rule set
    ///
    /// Built on first use. The built-in data is fixed, so a build failure is
    /// a bug in the crate and panics.
    pub fn global() -> &'static Pluralizer {
        static GLOBAL: OnceLock<Pluralizer> = OnceLock::new();
        GLOBAL.get_or_init(|| match Pluralizer::builtin() {
            Ok(pluralizer) => pluralizer,
            Err(err) => panic!("built-in rule set failed to compile: {err}"),
        })
    }

    /// Convert a singular noun to its plural form
    ///
    /// Words that are already plural are returned unchanged.
    pub fn to_plural(&self, word: &str) -> String {
        self.replace_word(
            word,
            &self.irregular_singles,
            &self.irregular_plurals,
            &self.plural_rules,
        )
    }

    /// Convert a plural noun to its singular form
    ///
    /// Words that are already singular are returned unchanged.
    pub fn to_singular(&self, word: &str) -> String {
        self.replace_word(
            word,
            &self.irregular_plurals,
            &self.irregular_singles,
            &self.singular_rules,
        )
    }

    /// Returns true if `word` is already in plural form
    pub fn is_plural(&self, word: &str) -> bool {
        self.check_word(
            word,
            &self.irregular_singles,
            &self.irregular_plurals,
            &self.plural_rules,
        )
    }

    /// Returns true if `word` is already in singular form
    pub fn is_singular(&self, word: &str) -> bool {
        self.check_word(
            word,
            &self.irregular_plurals,
            &self.irregular_singles,
            &self.singular_rules,
        )
    }

    /// Pick the singular or plural form of `word` for `count`
    ///
    /// Only a count of exactly 1 is singular. With `inclusive` the count is
    /// prepended, separated by a single space.
    pub fn pluralize(&self, word: &str, count: i64, inclusive: bool) -> String {
        let inflected = if count == 1 {
            self.to_singular(word)
        } else {
            self.to_plural(word)
        };

        if inclusive {
            format!("{} {}", count, inflected)
        } else {
            inflected
        }
    }

    /// Returns true if `word` is a literal uncountable word
    ///
    /// Uncountable patterns live in the rule tables and are not consulted here.
    pub fn is_uncountable(&self, word: &str) -> bool {
        self.uncountables.contains(&word.to_lowercase())
    }

    /// Pluralization rules in registration order
    pub fn plural_rules(&self) -> &RuleTable {
        &self.plural_rules
    }

    /// Singularization rules in registration order
    pub fn singular_rules(&self) -> &RuleTable {
        &self.singular_rules
    }

    /// Irregular (singular, plural) pairs in registration order
    pub fn irregular_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.irregular_singles
            .iter()
            .map(|(singular, plural)| (singular.as_str(), plural.as_str()))
    }

    /// Literal uncountable words in registration order
    pub fn uncountables(&self) -> impl Iterator<Item = &str> {
        self.uncountables.iter().map(String::as_str)
    }

    /// Apply the first matching rule to `word`
    ///
    /// `token` is the lowercase form of `word`, used for the empty and
    /// uncountable checks.
    fn sanitize_word(&self, token: &str, word: &str, rules: &RuleTable) -> String {
        if token.is_empty() || self.uncountables.contains(token) {
            return word.to_string();
        }

        match rules.find(word) {
            Some(rule) => {
                tracing::trace!(word, rule = rule.source(), "Rule matched");
                restore_rule_case(word, rule.apply(word))
            }
            None => word.to_string(),
        }
    }

    /// Replace `word` using the exception maps, falling back to `rules`
    ///
    /// `keep` holds forms that are already in the target number and
    /// `replace` maps the other number onto the target.
    fn replace_word(
        &self,
        word: &str,
        replace: &IndexMap<String, String>,
        keep: &IndexMap<String, String>,
        rules: &RuleTable,
    ) -> String {
        let token = word.to_lowercase();

        if keep.contains_key(&token) {
            return restore_case(word, &token);
        }

        if let Some(target) = replace.get(&token) {
            return restore_case(word, target);
        }

        self.sanitize_word(&token, word, rules)
    }

    /// Returns true if `word` is already in the number `rules` produce
    fn check_word(
        &self,
        word: &str,
        replace: &IndexMap<String, String>,
        keep: &IndexMap<String, String>,
        rules: &RuleTable,
    ) -> bool {
        let token = word.to_lowercase();

        if keep.contains_key(&token) {
            return true;
        }

        if replace.contains_key(&token) {
            return false;
        }

        self.sanitize_word(&token, &token, rules) == token
    }
}

impl Default for Pluralizer {
    fn default() -> Self {
        Self::global().clone()
    }
}

/// A pending entry, kept in the order it was added
#[derive(Debug, Clone)]
enum Registration {
    Irregular { singular: String, plural: String },
    Plural { pattern: String, replacement: String },
    Singular { pattern: String, replacement: String },
    Uncountable(String),
}

/// Builder for [`Pluralizer`] instances
///
/// Entries are compiled by [`build`](Self::build) in the order they were
/// added. Rules added later take priority over earlier ones, including the
/// identity rules created for uncountable patterns.
///
/// # Example
///
/// ```
/// use inflect::prelude::*;
///
/// let pluralizer = PluralizerBuilder::builtin()
///     .with_irregular("octopus", "octopuses")
///     .with_uncountable("paper")
///     .build()
///     .unwrap();
///
/// assert_eq!(pluralizer.to_plural("octopus"), "octopuses");
/// assert_eq!(pluralizer.to_plural("paper"), "paper");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PluralizerBuilder {
    registrations: Vec<Registration>,
}

impl PluralizerBuilder {
    /// Create a builder with no rules
    pub fn new() -> Self {
        Self {
            registrations: Vec::new(),
        }
    }

    /// Create a builder seeded with the built-in English rule set
    pub fn builtin() -> Self {
        let mut builder = Self::new();
        for (singular, plural) in IRREGULAR_RULES {
            builder = builder.with_irregular(*singular, *plural);
        }
        for (pattern, replacement) in PLURAL_RULES {
            builder = builder.with_plural_rule(*pattern, *replacement);
        }
        for (pattern, replacement) in SINGULAR_RULES {
            builder = builder.with_singular_rule(*pattern, *replacement);
        }
        for word in UNCOUNTABLE_RULES {
            builder = builder.with_uncountable(*word);
        }
        builder
    }

    /// Add an irregular singular/plural pair
    pub fn with_irregular(mut self, singular: impl Into<String>, plural: impl Into<String>) -> Self {
        self.registrations.push(Registration::Irregular {
            singular: singular.into(),
            plural: plural.into(),
        });
        self
    }

    /// Add a pluralization rule
    pub fn with_plural_rule(
        mut self,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        self.registrations.push(Registration::Plural {
            pattern: pattern.into(),
            replacement: replacement.into(),
        });
        self
    }

    /// Add a singularization rule
    pub fn with_singular_rule(
        mut self,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        self.registrations.push(Registration::Singular {
            pattern: pattern.into(),
            replacement: replacement.into(),
        });
        self
    }

    /// Add an uncountable word or delimited pattern
    ///
    /// A plain word joins the uncountable set. A `/pattern/` is added to both
    /// rule tables with the `$0` identity replacement.
    pub fn with_uncountable(mut self, word: impl Into<String>) -> Self {
        self.registrations.push(Registration::Uncountable(word.into()));
        self
    }

    /// Add every section of a [`RulesConfig`]
    pub fn with_config(mut self, config: RulesConfig) -> Self {
        for pair in config.irregular {
            self = self.with_irregular(pair.singular, pair.plural);
        }
        for rule in config.plural {
            self = self.with_plural_rule(rule.pattern, rule.replacement);
        }
        for rule in config.singular {
            self = self.with_singular_rule(rule.pattern, rule.replacement);
        }
        for word in config.uncountable {
            self = self.with_uncountable(word);
        }
        self
    }

    /// Compile every entry and build the [`Pluralizer`]
    ///
    /// Fails on the first malformed literal.
    pub fn build(self) -> Result<Pluralizer, RuleError> {
        let mut pluralizer = Pluralizer {
            plural_rules: RuleTable::new(),
            singular_rules: RuleTable::new(),
            irregular_singles: IndexMap::new(),
            irregular_plurals: IndexMap::new(),
            uncountables: IndexSet::new(),
        };

        for registration in self.registrations {
            match registration {
                Registration::Irregular { singular, plural } => {
                    if singular.is_empty() || plural.is_empty() {
                        return Err(RuleError::EmptyIrregular { singular, plural });
                    }
                    let singular = singular.to_lowercase();
                    let plural = plural.to_lowercase();
                    pluralizer
                        .irregular_singles
                        .insert(singular.clone(), plural.clone());
                    pluralizer.irregular_plurals.insert(plural, singular);
                }
                Registration::Plural {
                    pattern,
                    replacement,
                } => {
                    pluralizer
                        .plural_rules
                        .push(Rule::new(&pattern, &replacement)?);
                }
                Registration::Singular {
                    pattern,
                    replacement,
                } => {
                    pluralizer
                        .singular_rules
                        .push(Rule::new(&pattern, &replacement)?);
                }
                Registration::Uncountable(word) => {
                    if word.starts_with('/') {
                        pluralizer.plural_rules.push(Rule::new(&word, "$0")?);
                        pluralizer.singular_rules.push(Rule::new(&word, "$0")?);
                    } else if word.is_empty() {
                        return Err(RuleError::EmptyPattern);
                    } else {
                        pluralizer.uncountables.insert(word.to_lowercase());
                    }
                }
            }
        }

        tracing::debug!(
            plural_rules = pluralizer.plural_rules.len(),
            singular_rules = pluralizer.singular_rules.len(),
            irregulars = pluralizer.irregular_singles.len(),
            uncountables = pluralizer.uncountables.len(),
            "Built pluralizer"
        );

        Ok(pluralizer)
    }
}
