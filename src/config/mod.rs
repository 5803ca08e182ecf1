//! Rule set configuration loading and merging

use crate::core::builtin::{IRREGULAR_RULES, PLURAL_RULES, SINGULAR_RULES, UNCOUNTABLE_RULES};
use crate::core::{Pluralizer, PluralizerBuilder, RuleError};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// An irregular word and its plural
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrregularPair {
    /// Singular form (e.g., "ox")
    pub singular: String,

    /// Plural form (e.g., "oxen")
    pub plural: String,
}

impl IrregularPair {
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }
}

/// A pattern and the template that replaces what it matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Plain word (`thou`) or delimited pattern (`/(x|ch)$/i`)
    pub pattern: String,

    /// Replacement template, `$0`..`$9` reference capture groups
    #[serde(default)]
    pub replacement: String,
}

impl RuleSpec {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// Complete rule set for a [`Pluralizer`]
///
/// Sections are applied in field order. Within `plural` and `singular` a
/// later rule overrides an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Irregular singular/plural pairs
    #[serde(default)]
    pub irregular: Vec<IrregularPair>,

    /// Pluralization rules, lowest priority first
    #[serde(default)]
    pub plural: Vec<RuleSpec>,

    /// Singularization rules, lowest priority first
    #[serde(default)]
    pub singular: Vec<RuleSpec>,

    /// Uncountable words or delimited patterns
    #[serde(default)]
    pub uncountable: Vec<String>,
}

impl RulesConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!(path, rules = config.len(), "Loaded rules config");
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Serialize the configuration as YAML
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// The built-in English rule set
    pub fn builtin() -> Self {
        Self {
            irregular: IRREGULAR_RULES
                .iter()
                .map(|(singular, plural)| IrregularPair::new(*singular, *plural))
                .collect(),
            plural: PLURAL_RULES
                .iter()
                .map(|(pattern, replacement)| RuleSpec::new(*pattern, *replacement))
                .collect(),
            singular: SINGULAR_RULES
                .iter()
                .map(|(pattern, replacement)| RuleSpec::new(*pattern, *replacement))
                .collect(),
            uncountable: UNCOUNTABLE_RULES.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Total number of entries across all sections
    pub fn len(&self) -> usize {
        self.irregular.len() + self.plural.len() + self.singular.len() + self.uncountable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Merge several configurations into one
    ///
    /// Rules are concatenated in order, so rules from later configurations
    /// take priority. An irregular pair whose singular (case-insensitive)
    /// already exists replaces the earlier pair in place. Duplicate
    /// uncountable entries are dropped.
    pub fn merge(configs: Vec<RulesConfig>) -> Self {
        let mut merged = Self::default();

        for config in configs {
            for pair in config.irregular {
                let existing = merged
                    .irregular
                    .iter_mut()
                    .find(|p| p.singular.eq_ignore_ascii_case(&pair.singular));
                match existing {
                    Some(slot) => *slot = pair,
                    None => merged.irregular.push(pair),
                }
            }

            merged.plural.extend(config.plural);
            merged.singular.extend(config.singular);

            for word in config.uncountable {
                if !merged.uncountable.contains(&word) {
                    merged.uncountable.push(word);
                }
            }
        }

        tracing::debug!(rules = merged.len(), "Merged rules configs");
        merged
    }

    /// Build a [`Pluralizer`] from this configuration
    pub fn build(&self) -> std::result::Result<Pluralizer, RuleError> {
        PluralizerBuilder::new().with_config(self.clone()).build()
    }
}
