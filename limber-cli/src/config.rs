use std::{fs, path::Path};

use anyhow::Context;
use limber_inflector::InflectorBuilder;
use serde::Deserialize;

/// Custom inflections read from a TOML file. Every table is optional.
///
/// ```toml
/// uncountable = ["pokemon"]
///
/// [[irregular]]
/// singular = "cow"
/// plural = "kine"
///
/// [[plural]]
/// pattern = "(bl)ob$"
/// replacement = "${1}obbies"
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct RulesConfig {
    #[serde(default)]
    pub(crate) uncountable: Vec<String>,
    #[serde(default)]
    pub(crate) irregular: Vec<IrregularConfig>,
    #[serde(default)]
    pub(crate) plural: Vec<RuleConfig>,
    #[serde(default)]
    pub(crate) singular: Vec<RuleConfig>,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct IrregularConfig {
    pub(crate) singular: String,
    pub(crate) plural: String,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct RuleConfig {
    pub(crate) pattern: String,
    pub(crate) replacement: String,
}

impl RulesConfig {
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("Reading inflection rules from {}", path.display()))?;

        Self::parse(&contents).with_context(|| format!("Parsing inflection rules in {}", path.display()))
    }

    pub(crate) fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Registers every entry on `builder`, after whatever it already holds.
    pub(crate) fn register(self, mut builder: InflectorBuilder) -> InflectorBuilder {
        tracing::debug!(
            uncountables = self.uncountable.len(),
            irregulars = self.irregular.len(),
            plurals = self.plural.len(),
            singulars = self.singular.len(),
            "registering custom inflections"
        );

        for rule in self.plural {
            builder = builder.plural(rule.pattern, rule.replacement);
        }

        for rule in self.singular {
            builder = builder.singular(rule.pattern, rule.replacement);
        }

        for pair in self.irregular {
            builder = builder.irregular(pair.singular, pair.plural);
        }

        for word in self.uncountable {
            builder = builder.uncountable(word);
        }

        builder
    }
}
