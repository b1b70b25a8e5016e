//! Generates TypeScript option-type declarations from a [`PluginAnalysis`].

use std::collections::HashSet;
use std::fmt::Write;

use miette::Diagnostic;
use thiserror::Error;

use crate::schema::{Items, RuleSchema, SchemaKind};
use crate::types::{PluginAnalysis, RuleInfo};

/// Fatal generation errors. Generation is atomic: any error means no output.
#[derive(Debug, Error, Diagnostic)]
pub enum GeneratorError {
    /// Two rules normalized to the same TypeScript type name.
    #[error("duplicate type name: {name}")]
    #[diagnostic(help("two rule files normalize to the same TypeScript type name"))]
    DuplicateTypeName {
        /// The colliding name.
        name: String,
    },
}

/// Generates the full declaration blob for an analysis.
///
/// One `export type` per rule, in the analysis's (already sorted) order,
/// separated by single blank lines and terminated by a trailing newline.
///
/// # Errors
///
/// Returns [`GeneratorError::DuplicateTypeName`] when two rules collide on
/// `type_name`; no partial output is produced.
pub fn generate(analysis: &PluginAnalysis) -> Result<String, GeneratorError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(analysis.rules.len());
    let mut blocks = Vec::with_capacity(analysis.rules.len() + 1);

    blocks.push(header(analysis));

    for rule in &analysis.rules {
        if !seen.insert(rule.type_name.as_str()) {
            return Err(GeneratorError::DuplicateTypeName {
                name: rule.type_name.clone(),
            });
        }
        blocks.push(declaration(rule));
    }

    Ok(blocks.join("\n\n") + "\n")
}

fn header(analysis: &PluginAnalysis) -> String {
    let mut out = String::from("// Generated TypeScript declarations for eslint-plugin-vue");
    if let Some(version) = &analysis.plugin_version {
        let _ = write!(out, "@{version}");
    }
    let _ = write!(
        out,
        "\n// {} rules ({} with options, {} without)",
        analysis.total_rules, analysis.rules_with_options, analysis.rules_without_options
    );
    out
}

fn declaration(rule: &RuleInfo) -> String {
    format!(
        "/** {} */\nexport type {} = {};",
        rule.rule_name,
        rule.type_name,
        options_type(rule)
    )
}

/// Type of the rule's options array.
///
/// ESLint 9 requires rules without options to be typed as the empty tuple,
/// so `[]` here rather than an open placeholder. A rule whose schema was
/// detected but not reconstructed gets `unknown[]`.
fn options_type(rule: &RuleInfo) -> String {
    if rule.is_empty_options {
        return "[]".to_owned();
    }
    match &rule.schema {
        None => "unknown[]".to_owned(),
        Some(schema) => match schema.kind() {
            // The schema already describes the options array itself.
            SchemaKind::Tuple | SchemaKind::Array => type_expr(schema),
            SchemaKind::Empty => "unknown[]".to_owned(),
            // Anything else describes a single positional option.
            _ => format!("[{}?]", parenthesized(schema)),
        },
    }
}

/// Translates one schema into a TypeScript type expression.
///
/// Exhaustive over [`SchemaKind`]; unrecognized or malformed fragments
/// degrade to `unknown` locally instead of failing the batch.
fn type_expr(schema: &RuleSchema) -> String {
    match schema.kind() {
        SchemaKind::Enum => enum_expr(schema),
        SchemaKind::Union => {
            let branches = schema
                .one_of
                .as_deref()
                .or(schema.any_of.as_deref())
                .unwrap_or_default();
            join_branches(branches, " | ", false)
        }
        SchemaKind::Intersection => {
            join_branches(schema.all_of.as_deref().unwrap_or_default(), " & ", true)
        }
        SchemaKind::Object => object_expr(schema),
        SchemaKind::Tuple => tuple_expr(schema),
        SchemaKind::Array => array_expr(schema),
        SchemaKind::Scalar => scalar_expr(schema).to_owned(),
        SchemaKind::Empty => "unknown".to_owned(),
    }
}

/// Union of literal values, first-listed-first, duplicates collapsed.
fn enum_expr(schema: &RuleSchema) -> String {
    let values = schema.enum_values.as_deref().unwrap_or_default();
    let mut rendered: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let literal = value.to_string();
        if !rendered.contains(&literal) {
            rendered.push(literal);
        }
    }
    if rendered.is_empty() {
        return "unknown".to_owned();
    }
    rendered.join(" | ")
}

fn join_branches(branches: &[RuleSchema], separator: &str, parenthesize: bool) -> String {
    if branches.is_empty() {
        return "unknown".to_owned();
    }
    branches
        .iter()
        .map(|branch| {
            if parenthesize {
                parenthesized(branch)
            } else {
                type_expr(branch)
            }
        })
        .collect::<Vec<_>>()
        .join(separator)
}

fn object_expr(schema: &RuleSchema) -> String {
    let mut fields: Vec<String> = Vec::new();

    if let Some(properties) = &schema.properties {
        for (key, sub) in properties {
            let marker = if schema.requires(key) { "" } else { "?" };
            fields.push(format!("{}{marker}: {}", property_key(key), type_expr(sub)));
        }
    }

    if schema.allows_additional_properties() {
        fields.push("[key: string]: unknown".to_owned());
    }

    if fields.is_empty() {
        // Closed object with no declared properties.
        return "Record<string, never>".to_owned();
    }
    format!("{{ {} }}", fields.join("; "))
}

fn tuple_expr(schema: &RuleSchema) -> String {
    let Some(Items::Many(members)) = &schema.items else {
        return "unknown[]".to_owned();
    };
    let mut rendered: Vec<String> = members.iter().map(type_expr).collect();
    if schema.allows_additional_items() {
        rendered.push("...unknown[]".to_owned());
    }
    format!("[{}]", rendered.join(", "))
}

fn array_expr(schema: &RuleSchema) -> String {
    let element = match &schema.items {
        Some(Items::One(inner)) => parenthesized(inner),
        _ => "unknown".to_owned(),
    };
    format!("{element}[]")
}

fn scalar_expr(schema: &RuleSchema) -> &'static str {
    match schema.ty.as_deref() {
        Some("string") => "string",
        Some("number" | "integer") => "number",
        Some("boolean") => "boolean",
        Some("null") => "null",
        _ => "unknown",
    }
}

/// Wraps union-like expressions in parens when used where precedence matters
/// (array elements, intersection branches, optional tuple members).
fn parenthesized(schema: &RuleSchema) -> String {
    let expr = type_expr(schema);
    if is_composite(schema) {
        format!("({expr})")
    } else {
        expr
    }
}

fn is_composite(schema: &RuleSchema) -> bool {
    match schema.kind() {
        SchemaKind::Union | SchemaKind::Intersection => true,
        SchemaKind::Enum => schema.enum_values.as_ref().is_some_and(|v| v.len() > 1),
        _ => false,
    }
}

/// Renders an object property key, quoting it when it is not a valid
/// TypeScript identifier.
fn property_key(key: &str) -> String {
    let mut chars = key.chars();
    let is_ident = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_ident {
        key.to_owned()
    } else {
        serde_json::Value::String(key.to_owned()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RuleInfo;

    fn schema(json: &str) -> RuleSchema {
        serde_json::from_str(json).expect("schema literal")
    }

    #[test]
    fn enum_becomes_ordered_literal_union() {
        let s = schema(r#"{"enum": ["always", "never"]}"#);
        assert_eq!(type_expr(&s), r#""always" | "never""#);
    }

    #[test]
    fn enum_duplicates_collapse_keeping_first() {
        let s = schema(r#"{"enum": ["never", "always", "never"]}"#);
        assert_eq!(type_expr(&s), r#""never" | "always""#);
    }

    #[test]
    fn enum_renders_non_string_literals() {
        let s = schema(r#"{"enum": [1, true, "auto"]}"#);
        assert_eq!(type_expr(&s), r#"1 | true | "auto""#);
    }

    #[test]
    fn object_with_required_and_optional_fields() {
        let s = schema(
            r#"{
                "type": "object",
                "properties": {
                    "ignore": {"type": "array", "items": {"type": "string"}},
                    "max": {"type": "integer"}
                },
                "required": ["max"],
                "additionalProperties": false
            }"#,
        );
        assert_eq!(type_expr(&s), "{ ignore?: string[]; max: number }");
    }

    #[test]
    fn open_object_gets_index_signature() {
        let s = schema(r#"{"type": "object", "properties": {"depth": {"type": "number"}}}"#);
        assert_eq!(
            type_expr(&s),
            "{ depth?: number; [key: string]: unknown }"
        );
    }

    #[test]
    fn closed_empty_object() {
        let s = schema(r#"{"type": "object", "additionalProperties": false}"#);
        assert_eq!(type_expr(&s), "Record<string, never>");
    }

    #[test]
    fn non_identifier_property_keys_are_quoted() {
        let s = schema(
            r#"{"type": "object", "properties": {"v-bind": {"type": "string"}}, "additionalProperties": false}"#,
        );
        assert_eq!(type_expr(&s), r#"{ "v-bind"?: string }"#);
    }

    #[test]
    fn single_items_is_homogeneous_array() {
        let s = schema(r#"{"type": "array", "items": {"enum": ["a", "b"]}}"#);
        assert_eq!(type_expr(&s), r#"("a" | "b")[]"#);
    }

    #[test]
    fn items_list_is_positional_tuple() {
        let s = schema(
            r#"{"type": "array", "items": [{"enum": ["always", "never"]}, {"type": "object", "additionalProperties": false}]}"#,
        );
        assert_eq!(
            type_expr(&s),
            r#"["always" | "never", Record<string, never>]"#
        );
    }

    #[test]
    fn additional_items_adds_rest_element() {
        let s = schema(
            r#"{"items": [{"type": "string"}], "additionalItems": true}"#,
        );
        assert_eq!(type_expr(&s), "[string, ...unknown[]]");
    }

    #[test]
    fn one_of_is_union_all_of_is_intersection() {
        let union = schema(r#"{"oneOf": [{"type": "string"}, {"type": "number"}]}"#);
        assert_eq!(type_expr(&union), "string | number");

        let intersection = schema(
            r#"{"allOf": [{"type": "object"}, {"oneOf": [{"type": "string"}, {"type": "null"}]}]}"#,
        );
        assert_eq!(
            type_expr(&intersection),
            "{ [key: string]: unknown } & (string | null)"
        );
    }

    #[test]
    fn unrecognized_type_degrades_to_unknown() {
        let s = schema(r#"{"type": "function"}"#);
        assert_eq!(type_expr(&s), "unknown");
        assert_eq!(type_expr(&RuleSchema::default()), "unknown");
    }

    #[test]
    fn empty_options_rule_gets_empty_tuple() {
        let rule = RuleInfo::new("this-in-template", false, None);
        assert_eq!(declaration(&rule), "/** vue/this-in-template */\nexport type VueThisInTemplate = [];");
    }

    #[test]
    fn detected_but_unextracted_schema_gets_unknown_array() {
        let rule = RuleInfo::new("max-len", true, None);
        assert!(declaration(&rule).ends_with("= unknown[];"));
    }

    #[test]
    fn single_option_schema_is_wrapped_as_optional_tuple() {
        let rule = RuleInfo::new(
            "attribute-hyphenation",
            true,
            Some(schema(r#"{"enum": ["always", "never"]}"#)),
        );
        assert!(declaration(&rule).ends_with(r#"= [("always" | "never")?];"#));
    }

    #[test]
    fn duplicate_type_name_is_fatal() {
        let analysis = PluginAnalysis::from_rules(
            vec![
                RuleInfo::new("max-len", false, None),
                RuleInfo::new("max-len", true, None),
            ],
            None,
            Vec::new(),
        );
        let err = generate(&analysis).expect_err("should collide");
        let GeneratorError::DuplicateTypeName { name } = err;
        assert_eq!(name, "VueMaxLen");
    }

    #[test]
    fn blob_shape_is_stable() {
        let analysis = PluginAnalysis::from_rules(
            vec![
                RuleInfo::new(
                    "attribute-hyphenation",
                    true,
                    Some(schema(r#"{"enum": ["always", "never"]}"#)),
                ),
                RuleInfo::new("this-in-template", false, None),
            ],
            Some("9.33.0".to_owned()),
            Vec::new(),
        );
        let output = generate(&analysis).expect("generate");

        assert!(output.ends_with(";\n"));
        assert!(!output.ends_with("\n\n"));
        insta::assert_snapshot!(output.trim_end(), @r###"
        // Generated TypeScript declarations for eslint-plugin-vue@9.33.0
        // 2 rules (1 with options, 1 without)

        /** vue/attribute-hyphenation */
        export type VueAttributeHyphenation = [("always" | "never")?];

        /** vue/this-in-template */
        export type VueThisInTemplate = [];
        "###);
    }

    #[test]
    fn header_omits_version_when_unknown() {
        let analysis = PluginAnalysis::from_rules(Vec::new(), None, Vec::new());
        let output = generate(&analysis).expect("generate");
        assert_eq!(
            output,
            "// Generated TypeScript declarations for eslint-plugin-vue\n// 0 rules (0 with options, 0 without)\n"
        );
    }
}
