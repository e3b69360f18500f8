use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A submitted answer value.
///
/// Rule definitions and response payloads are stored as JSON, so the variants
/// mirror the JSON primitives plus lists of them. Keeping this a closed enum
/// (rather than passing `serde_json::Value` around) makes the coercion rules
/// in the condition evaluator explicit and testable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<Value>),
}

impl Value {
    /// True for the values the engine treats as "no answer": null, the empty
    /// string, and the empty list. An absent store entry is equally empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(text) => text.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }

    /// Empty, or a string with nothing but whitespace. Required-field checks
    /// use this wider notion so `"   "` does not satisfy a required field.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::String(text) => text.trim().is_empty(),
            other => other.is_empty(),
        }
    }

    /// Numeric coercion for ordering operators and number-field validation.
    ///
    /// Strings are trimmed and parsed; booleans coerce to 1.0 / 0.0 (rule
    /// payloads written against the original backend rely on this); null and
    /// lists never coerce.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(num) => Some(*num),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
            Value::Null | Value::List(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }
}

/// The textual form used by `equals`, `contains`, and the comma-split `in`
/// path. Numbers print without a trailing `.0` so number `25` and string
/// `"25"` stringify identically.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(flag) => write!(f, "{flag}"),
            Value::Number(num) => write!(f, "{num}"),
            Value::String(text) => write!(f, "{text}"),
            Value::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(num: f64) -> Self {
        Value::Number(num)
    }
}

impl From<i64> for Value {
    fn from(num: i64) -> Self {
        Value::Number(num as f64)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::String(text)
    }
}

/// Read-only snapshot of submitted answers for one evaluation pass, keyed by
/// field id. The engine never mutates it and holds no state across calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ValueStore(BTreeMap<String, Value>);

impl ValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absent entries read as `None`; the evaluator treats that the same as
    /// an explicit null.
    pub fn get(&self, field_id: &str) -> Option<&Value> {
        self.0.get(field_id)
    }

    pub fn insert(&mut self, field_id: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field_id.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ValueStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ValueStore(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
