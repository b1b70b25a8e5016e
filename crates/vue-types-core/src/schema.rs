//! JSON-Schema subset used by eslint-plugin-vue rule option declarations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `items` accepts either a single schema (homogeneous array) or a
/// positional list of schemas (tuple).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Items {
    /// One schema applying to every element.
    One(Box<RuleSchema>),
    /// One schema per tuple position.
    Many(Vec<RuleSchema>),
}

/// Structural description of one rule's options.
///
/// Mirrors the JSON-Schema subset eslint rules actually use. Keys outside
/// that subset are captured in [`extra`](Self::extra) rather than rejected;
/// a schema with no recognized key at all is legal and means "unconstrained".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RuleSchema {
    /// Primitive type name (`"string"`, `"object"`, ...).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,

    /// Ordered literal alternatives.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<serde_json::Value>>,

    /// Named object properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, RuleSchema>>,

    /// Array element schema(s).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Items>,

    /// `false` forbids keys beyond `properties`. Schema-valued forms are
    /// kept verbatim and treated as permissive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<serde_json::Value>,

    /// `true` allows elements beyond the tuple positions in `items`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_items: Option<serde_json::Value>,

    /// Array elements must be distinct. Carried for fidelity; has no
    /// type-level rendering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,

    /// Property names that must be present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    /// Exactly-one-of composition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<RuleSchema>>,

    /// Any-of composition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<RuleSchema>>,

    /// All-of composition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<RuleSchema>>,

    /// Unrecognized keys (`description`, `minimum`, `$ref`, ...), passed
    /// through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Shape classification driving the generator's translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    /// `enum`: union of literal values.
    Enum,
    /// `oneOf` / `anyOf`: union of branch translations.
    Union,
    /// `allOf`: intersection of branch translations.
    Intersection,
    /// `properties` or `type: "object"`: structural record.
    Object,
    /// `items` as a list: fixed-length tuple.
    Tuple,
    /// `items` as a single schema or `type: "array"`: homogeneous array.
    Array,
    /// A bare primitive `type`.
    Scalar,
    /// No recognized shape key at all.
    Empty,
}

impl RuleSchema {
    /// Classifies this schema's shape. Composition and `enum` take priority
    /// over `type`, matching how eslint's validator interprets them.
    #[must_use]
    pub fn kind(&self) -> SchemaKind {
        if self.enum_values.is_some() {
            SchemaKind::Enum
        } else if self.one_of.is_some() || self.any_of.is_some() {
            SchemaKind::Union
        } else if self.all_of.is_some() {
            SchemaKind::Intersection
        } else if self.properties.is_some() || self.ty.as_deref() == Some("object") {
            SchemaKind::Object
        } else if matches!(self.items, Some(Items::Many(_))) {
            SchemaKind::Tuple
        } else if self.items.is_some() || self.ty.as_deref() == Some("array") {
            SchemaKind::Array
        } else if self.ty.is_some() {
            SchemaKind::Scalar
        } else {
            SchemaKind::Empty
        }
    }

    /// True when no recognized shape key is set (the unconstrained schema).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kind() == SchemaKind::Empty
    }

    /// True unless `additionalProperties` is explicitly `false`.
    #[must_use]
    pub fn allows_additional_properties(&self) -> bool {
        !matches!(
            self.additional_properties,
            Some(serde_json::Value::Bool(false))
        )
    }

    /// True only when `additionalItems` is explicitly `true`.
    #[must_use]
    pub fn allows_additional_items(&self) -> bool {
        matches!(self.additional_items, Some(serde_json::Value::Bool(true)))
    }

    /// True when `name` appears in this schema's `required` list.
    #[must_use]
    pub fn requires(&self, name: &str) -> bool {
        self.required
            .as_ref()
            .is_some_and(|r| r.iter().any(|n| n == name))
    }
}
