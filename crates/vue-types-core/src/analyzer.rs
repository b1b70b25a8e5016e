//! Plugin analyzer: discovers rule files and derives per-rule facts.

use std::fs;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::extractor::{MarkerExtractor, SchemaExtractor};
use crate::types::{AnalysisWarning, PluginAnalysis, RuleInfo};

/// Rule files live under this path inside the plugin checkout.
const RULES_SUBDIR: &str = "lib/rules";

/// Extension of rule definition files.
const RULE_EXT: &str = ".js";

/// Fatal analyzer errors. Per-file problems are not errors: they are
/// recovered into [`AnalysisWarning`] records and the batch continues.
#[derive(Debug, Error, Diagnostic)]
pub enum AnalyzerError {
    /// The plugin checkout has no rules directory.
    #[error("rules directory not found: {}", path.display())]
    #[diagnostic(help("expected an eslint-plugin-vue checkout with a lib/rules directory"))]
    DirectoryNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// Listing the rules directory failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Builder for configuring an [`Analyzer`].
pub struct AnalyzerBuilder {
    plugin_root: PathBuf,
    extractor: Box<dyn SchemaExtractor>,
}

impl AnalyzerBuilder {
    fn new(plugin_root: PathBuf) -> Self {
        Self {
            plugin_root,
            extractor: Box::new(MarkerExtractor::new()),
        }
    }

    /// Replaces the default marker-based schema extractor.
    #[must_use]
    pub fn extractor(mut self, extractor: Box<dyn SchemaExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Builds the analyzer.
    #[must_use]
    pub fn build(self) -> Analyzer {
        Analyzer {
            plugin_root: self.plugin_root,
            extractor: self.extractor,
        }
    }
}

/// Analyzes an eslint-plugin-vue checkout and produces a [`PluginAnalysis`].
pub struct Analyzer {
    plugin_root: PathBuf,
    extractor: Box<dyn SchemaExtractor>,
}

impl Analyzer {
    /// Creates a builder rooted at a plugin checkout directory.
    #[must_use]
    pub fn builder(plugin_root: impl Into<PathBuf>) -> AnalyzerBuilder {
        AnalyzerBuilder::new(plugin_root.into())
    }

    /// Returns the plugin root being analyzed.
    #[must_use]
    pub fn plugin_root(&self) -> &Path {
        &self.plugin_root
    }

    /// Analyzes all rule files and assembles the aggregate result.
    ///
    /// Output order is lexicographic by rule name regardless of directory
    /// enumeration order.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::DirectoryNotFound`] when the rules directory
    /// is missing, or [`AnalyzerError::Io`] when it cannot be listed. An
    /// unreadable individual rule file is skipped, not an error.
    pub fn analyze(&self) -> Result<PluginAnalysis, AnalyzerError> {
        let rules_dir = self.plugin_root.join(RULES_SUBDIR);
        if !rules_dir.is_dir() {
            return Err(AnalyzerError::DirectoryNotFound { path: rules_dir });
        }

        info!("Analyzing plugin at {}", self.plugin_root.display());

        let plugin_version = self.read_plugin_version();

        let mut rules = Vec::new();
        let mut warnings = Vec::new();

        for entry in fs::read_dir(&rules_dir)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();

            let Some(name) = candidate_rule_name(&file_name) else {
                continue;
            };

            debug!("Analyzing rule: {name}");

            match fs::read_to_string(entry.path()) {
                Ok(content) => {
                    let extraction = self.extractor.extract(&content);
                    rules.push(RuleInfo::new(name, extraction.has_options, extraction.schema));
                }
                Err(e) => {
                    warn!("Failed to read rule {file_name}: {e}");
                    warnings.push(AnalysisWarning::new(
                        entry.path(),
                        format!("failed to read rule file: {e}"),
                    ));
                }
            }
        }

        let analysis = PluginAnalysis::from_rules(rules, plugin_version, warnings);

        info!(
            "Analysis complete: {} rules ({} with options, {} without)",
            analysis.total_rules, analysis.rules_with_options, analysis.rules_without_options
        );

        Ok(analysis)
    }

    /// Reads `version` from the plugin's package.json. Failures are
    /// swallowed: the version is metadata, not a correctness dependency.
    fn read_plugin_version(&self) -> Option<String> {
        let manifest_path = self.plugin_root.join("package.json");
        let content = match fs::read_to_string(&manifest_path) {
            Ok(content) => content,
            Err(e) => {
                debug!("Could not read plugin package.json: {e}");
                return None;
            }
        };

        match serde_json::from_str::<serde_json::Value>(&content) {
            Ok(manifest) => manifest
                .get("version")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned),
            Err(e) => {
                debug!("Could not parse plugin package.json: {e}");
                None
            }
        }
    }
}

/// Returns the rule name for a candidate file, or `None` when the entry is
/// not a rule (wrong extension, or an underscore-prefixed internal helper).
fn candidate_rule_name(file_name: &str) -> Option<&str> {
    if file_name.starts_with('_') {
        return None;
    }
    file_name.strip_suffix(RULE_EXT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_filtering() {
        assert_eq!(candidate_rule_name("attribute-hyphenation.js"), Some("attribute-hyphenation"));
        assert_eq!(candidate_rule_name("_utils.js"), None);
        assert_eq!(candidate_rule_name("index.ts"), None);
        assert_eq!(candidate_rule_name("README.md"), None);
    }

    #[test]
    fn missing_rules_directory_is_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let analyzer = Analyzer::builder(dir.path()).build();

        let err = analyzer.analyze().expect_err("should fail");
        match err {
            AnalyzerError::DirectoryNotFound { path } => {
                assert!(path.ends_with("lib/rules"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
