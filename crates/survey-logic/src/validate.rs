use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::evaluate::evaluate_rules;
use crate::spec::field::{FieldSpec, FieldType};
use crate::spec::survey::SurveySpec;
use crate::value::{Value, ValueStore};

// Requires a dot-separated domain; consistent with what the original
// backend's email validator accepted for survey answers.
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Outcome of the final-submission gate. Built fresh per call and never
/// persisted by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SubmissionResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Validate submitted values against visibility and field constraints.
///
/// Single pass over sections then fields, in definition order, accumulating
/// every violation as a plain-language message. Hidden fields must not carry
/// data; visible fields are held to their required/format/range constraints.
/// Malformed values produce error strings, never a panic or an `Err`.
pub fn validate(spec: &SurveySpec, submitted: &ValueStore) -> SubmissionResult {
    let mut errors = Vec::new();

    for section in &spec.sections {
        let section_visible = evaluate_rules(section.rules.as_ref(), submitted);

        for field in &section.fields {
            let field_visible =
                section_visible && evaluate_rules(field.rules.as_ref(), submitted);
            let value = submitted.get(&field.id);
            let has_data = value.is_some_and(|value| !value.is_empty());

            if !field_visible {
                if has_data {
                    errors.push(format!(
                        "Field '{}' should not have data (hidden by logic)",
                        field.label
                    ));
                }
                continue;
            }

            if field.required && value.is_none_or(Value::is_blank) {
                errors.push(format!("Field '{}' is required", field.label));
                // An empty required field has nothing further to check.
                continue;
            }

            let value = match value {
                Some(value) => value,
                None => continue,
            };

            if field.field_type == FieldType::Email && !value.is_empty() {
                check_email(field, value, &mut errors);
            }

            if field.field_type == FieldType::Number && *value != Value::Null {
                check_number(field, value, &mut errors);
            }

            if let Some(pattern) = &field.pattern
                && !value.is_empty()
            {
                check_pattern(field, pattern, value, &mut errors);
            }
        }
    }

    tracing::debug!(
        survey = %spec.id,
        errors = errors.len(),
        "validated submission"
    );

    SubmissionResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

fn check_email(field: &FieldSpec, value: &Value, errors: &mut Vec<String>) {
    let well_formed = Regex::new(EMAIL_PATTERN)
        .map(|regex| regex.is_match(&value.to_string()))
        .unwrap_or(true);
    if !well_formed {
        errors.push(format!(
            "Field '{}' must be a valid email address",
            field.label
        ));
    }
}

fn check_number(field: &FieldSpec, value: &Value, errors: &mut Vec<String>) {
    let number = match value.as_number() {
        Some(number) => number,
        None => {
            errors.push(format!("Field '{}' must be a valid number", field.label));
            return;
        }
    };

    if let Some(min) = field.min
        && number < min
    {
        errors.push(format!("Field '{}' must be at least {min}", field.label));
    }
    if let Some(max) = field.max
        && number > max
    {
        errors.push(format!("Field '{}' must be at most {max}", field.label));
    }
}

// An invalid stored pattern fails open: the constraint is skipped rather
// than every submission being rejected.
fn check_pattern(field: &FieldSpec, pattern: &str, value: &Value, errors: &mut Vec<String>) {
    if let Ok(regex) = Regex::new(pattern)
        && !regex.is_match(&value.to_string())
    {
        errors.push(format!(
            "Field '{}' must match the expected format",
            field.label
        ));
    }
}
