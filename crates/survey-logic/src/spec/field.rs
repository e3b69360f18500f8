use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::spec::rules::RuleSet;
use crate::value::Value;

/// Input kinds a survey field can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Textarea,
    Number,
    Email,
    Phone,
    Date,
    Datetime,
    Select,
    Multiselect,
    Radio,
    Checkbox,
    Rating,
    File,
}

/// One choice in a select/multiselect/radio option list.
///
/// The optional `filters` map drives cross-field dependencies: an option with
/// `filters: {"country": "USA"}` is only offered once the source field for
/// the `country` filter key holds exactly `"USA"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldOption {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub filters: BTreeMap<String, Value>,
}

/// Individual question within a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldSpec {
    pub id: String,
    pub label: String,
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    /// Carries personal data; values are encrypted by an external
    /// collaborator after validation. The engine only reports the flag.
    #[serde(default)]
    pub sensitive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleSet>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl FieldSpec {
    /// Minimal field with no rules or constraints; tests and builders fill in
    /// the rest.
    pub fn new(id: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        FieldSpec {
            id: id.into(),
            label: label.into(),
            field_type,
            required: false,
            sensitive: false,
            rules: None,
            options: Vec::new(),
            min: None,
            max: None,
            pattern: None,
        }
    }
}
