use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::spec::field::FieldSpec;
use crate::spec::rules::RuleSet;

/// A group of fields with its own visibility rules.
///
/// Visibility cascades one level: a hidden section hides every field it owns,
/// regardless of the fields' own rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SectionSpec {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleSet>,
    pub fields: Vec<FieldSpec>,
}

/// Top-level survey definition: ordered sections, each with ordered fields.
///
/// Supplied as plain data by the caller; the engine never mutates it and is
/// safe to share across concurrent evaluations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SurveySpec {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub sections: Vec<SectionSpec>,
}

impl SurveySpec {
    /// Parse a survey definition from its stored JSON form.
    pub fn from_json(payload: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.sections.iter().flat_map(|section| section.fields.iter())
    }

    pub fn field(&self, field_id: &str) -> Option<&FieldSpec> {
        self.fields().find(|field| field.id == field_id)
    }

    /// Ids of fields flagged as sensitive, in definition order. The external
    /// encryption step selects values by these ids after validation passes.
    pub fn sensitive_field_ids(&self) -> Vec<&str> {
        self.fields()
            .filter(|field| field.sensitive)
            .map(|field| field.id.as_str())
            .collect()
    }
}
