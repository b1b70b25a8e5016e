//! Analysis result types for eslint-plugin-vue rules.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::schema::RuleSchema;

/// Prefix applied to every generated type name.
pub const TYPE_PREFIX: &str = "Vue";

/// Namespace prefix applied to every rule name.
pub const RULE_NAMESPACE: &str = "vue";

/// Derived facts about a single rule file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleInfo {
    /// File-derived identifier, lowercase-hyphenated (e.g. `attribute-hyphenation`).
    pub name: String,
    /// Namespaced rule name as configured in eslint (e.g. `vue/attribute-hyphenation`).
    pub rule_name: String,
    /// Generated TypeScript type name (e.g. `VueAttributeHyphenation`).
    pub type_name: String,
    /// Extracted option schema, when the extractor reconstructs one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<RuleSchema>,
    /// True iff an option schema was detected in the rule source.
    pub has_options: bool,
    /// Negation of `has_options`, kept explicit for the generator.
    pub is_empty_options: bool,
}

impl RuleInfo {
    /// Builds a `RuleInfo` from a rule name and extraction outcome.
    ///
    /// This is the only constructor, so `has_options == !is_empty_options`
    /// holds by construction.
    #[must_use]
    pub fn new(name: impl Into<String>, has_options: bool, schema: Option<RuleSchema>) -> Self {
        let name = name.into();
        Self {
            rule_name: format!("{RULE_NAMESPACE}/{name}"),
            type_name: type_name(&name),
            schema,
            has_options,
            is_empty_options: !has_options,
            name,
        }
    }
}

/// Converts a lowercase-hyphenated rule name to its TypeScript type name.
///
/// Splits on `-`, upper-cases each segment's first character, concatenates,
/// and prefixes [`TYPE_PREFIX`]: `array-bracket-newline` → `VueArrayBracketNewline`.
#[must_use]
pub fn type_name(rule_name: &str) -> String {
    let pascal: String = rule_name
        .split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect();
    format!("{TYPE_PREFIX}{pascal}")
}

/// A recovered per-file problem, surfaced to the host instead of logged
/// directly by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisWarning {
    /// File the problem occurred on.
    pub path: PathBuf,
    /// Human-readable description.
    pub message: String,
}

impl AnalysisWarning {
    /// Creates a new warning record.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Aggregate result of analyzing one plugin checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginAnalysis {
    /// All analyzed rules, sorted by `name` (lexicographic, case-sensitive).
    pub rules: Vec<RuleInfo>,
    /// `rules.len()`.
    pub total_rules: usize,
    /// Rules where an option schema was detected.
    pub rules_with_options: usize,
    /// Rules without one. Always `total_rules - rules_with_options`.
    pub rules_without_options: usize,
    /// `version` from the plugin's own package.json, when readable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_version: Option<String>,
    /// Per-file problems recovered during analysis.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<AnalysisWarning>,
}

impl PluginAnalysis {
    /// Assembles an analysis from unordered per-file results.
    ///
    /// Sorts by rule name and derives the counts, so the sort order and the
    /// `with + without == total` invariant cannot drift from the rule list.
    #[must_use]
    pub fn from_rules(
        mut rules: Vec<RuleInfo>,
        plugin_version: Option<String>,
        warnings: Vec<AnalysisWarning>,
    ) -> Self {
        rules.sort_by(|a, b| a.name.cmp(&b.name));
        let total_rules = rules.len();
        let rules_with_options = rules.iter().filter(|r| r.has_options).count();
        Self {
            rules_without_options: total_rules - rules_with_options,
            rules,
            total_rules,
            rules_with_options,
            plugin_version,
            warnings,
        }
    }
}
