use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Comparison operators available to conditions.
///
/// Rule payloads come from stored JSON the backend does not version-check, so
/// an operator string this crate does not recognize deserializes to
/// `Unknown` instead of failing; the evaluator treats it as never satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    GreaterThanOrEquals,
    LessThanOrEquals,
    Contains,
    NotContains,
    In,
    NotIn,
    IsEmpty,
    IsNotEmpty,
    #[serde(other)]
    Unknown,
}

/// How a rule set combines its condition results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RuleLogic {
    #[default]
    And,
    Or,
    /// Unrecognized logic value; combined as AND.
    #[serde(other)]
    Unknown,
}

/// What a satisfied rule set means for the element that carries it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RuleAction {
    #[default]
    Show,
    Hide,
    /// Unrecognized action value; treated as show.
    #[serde(other)]
    Unknown,
}

/// One atomic comparison between a stored field value and an expected value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Condition {
    pub field_id: String,
    pub operator: Operator,
    #[serde(default = "null_value")]
    pub value: Value,
}

fn null_value() -> Value {
    Value::Null
}

/// Visibility rules attached to a section or field.
///
/// An empty condition list means "always visible"; so does leaving the rule
/// set off the element entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleSet {
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub logic: RuleLogic,
    #[serde(default)]
    pub action: RuleAction,
}
