//! Schema detection as a pluggable capability.
//!
//! `SchemaExtractor` is the extension point for schema analysis. The default
//! [`MarkerExtractor`] only detects whether a rule declares options at all;
//! a real JavaScript parser can be slotted in behind the same trait without
//! touching the analyzer's control flow.

use crate::schema::RuleSchema;

/// Outcome of inspecting one rule source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// True iff the rule declares an option schema.
    pub has_options: bool,
    /// Reconstructed schema, when the extractor can produce one.
    pub schema: Option<RuleSchema>,
}

/// Trait for deriving a rule's option-schema facts from its source text.
///
/// Implementations must be infallible: a source the extractor cannot make
/// sense of yields `Extraction::default()`, never an error.
pub trait SchemaExtractor: Send + Sync {
    /// Inspects rule source text.
    fn extract(&self, source: &str) -> Extraction;
}

/// Textual marker the vue rule convention places inside `meta`.
const SCHEMA_MARKER: &str = "schema:";

/// Best-effort extractor that scans for a textual `schema:` marker.
///
/// This is a structural signal, not a parse: it reports presence only and
/// never reconstructs the schema itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerExtractor;

impl MarkerExtractor {
    /// Creates the default marker-based extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SchemaExtractor for MarkerExtractor {
    fn extract(&self, source: &str) -> Extraction {
        Extraction {
            has_options: source.contains(SCHEMA_MARKER),
            schema: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_schema_marker() {
        let source = r"
            module.exports = {
              meta: {
                type: 'layout',
                schema: [{ enum: ['always', 'never'] }],
              },
              create(context) { return {} },
            }
        ";
        let extraction = MarkerExtractor::new().extract(source);
        assert!(extraction.has_options);
        assert!(extraction.schema.is_none());
    }

    #[test]
    fn no_marker_means_no_options() {
        let source = "module.exports = { meta: { type: 'problem' }, create() {} }";
        let extraction = MarkerExtractor::new().extract(source);
        assert!(!extraction.has_options);
    }
}
