//! # vue-types-core
//!
//! Analyzes an `eslint-plugin-vue` checkout and generates TypeScript
//! declarations for each rule's options, compatible with ESLint 9's strict
//! rule-option typing (rules without options become the empty tuple `[]`).
//!
//! The pipeline has two stages:
//!
//! - [`Analyzer`] discovers rule files under `lib/rules` and derives a
//!   [`PluginAnalysis`] (naming, option-schema presence, best-effort schema).
//! - [`generate`] translates the analysis into a single declaration blob.
//!
//! Schema detection is pluggable via the [`SchemaExtractor`] trait; the
//! default [`MarkerExtractor`] is a textual signal, not a parser.
//!
//! ## Example
//!
//! ```ignore
//! use vue_types_core::{generate, Analyzer};
//!
//! let analysis = Analyzer::builder("./eslint-plugin-vue").build().analyze()?;
//! let declarations = generate(&analysis)?;
//! print!("{declarations}");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod extractor;
mod generator;
mod schema;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use extractor::{Extraction, MarkerExtractor, SchemaExtractor};
pub use generator::{generate, GeneratorError};
pub use schema::{Items, RuleSchema, SchemaKind};
pub use types::{type_name, AnalysisWarning, PluginAnalysis, RuleInfo};
