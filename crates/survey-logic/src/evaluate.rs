use crate::spec::rules::{Condition, Operator, RuleAction, RuleLogic, RuleSet};
use crate::value::{Value, ValueStore};

/// Evaluate one atomic condition against the submitted values.
///
/// Never fails: a missing value, a coercion that does not apply, or an
/// operator this build does not know all evaluate to `false`.
pub fn evaluate_condition(condition: &Condition, store: &ValueStore) -> bool {
    let actual = store.get(&condition.field_id);
    apply_operator(condition.operator, actual, &condition.value)
}

fn apply_operator(operator: Operator, actual: Option<&Value>, expected: &Value) -> bool {
    // Empty checks are the only operators a missing value can satisfy.
    let empty = actual.is_none_or(Value::is_empty);
    match operator {
        Operator::IsEmpty => return empty,
        Operator::IsNotEmpty => return !empty,
        _ => {}
    }

    let actual = match actual {
        None | Some(Value::Null) => return false,
        Some(value) => value,
    };

    match operator {
        Operator::Equals => text_eq(actual, expected),
        Operator::NotEquals => !text_eq(actual, expected),
        Operator::GreaterThan => ordered(actual, expected, |a, e| a > e),
        Operator::LessThan => ordered(actual, expected, |a, e| a < e),
        Operator::GreaterThanOrEquals => ordered(actual, expected, |a, e| a >= e),
        Operator::LessThanOrEquals => ordered(actual, expected, |a, e| a <= e),
        Operator::Contains => text_contains(actual, expected),
        Operator::NotContains => !text_contains(actual, expected),
        Operator::In => is_member(actual, expected),
        Operator::NotIn => !is_member(actual, expected),
        // Returned above before the null check.
        Operator::IsEmpty | Operator::IsNotEmpty => false,
        Operator::Unknown => false,
    }
}

/// Case-insensitive comparison of the textual forms. The comparison is
/// deliberately textual rather than type-aware; stored rule payloads rely on
/// `25` matching `"25"`.
fn text_eq(actual: &Value, expected: &Value) -> bool {
    actual.to_string().to_lowercase() == expected.to_string().to_lowercase()
}

/// Case-insensitive substring test: expected's text inside actual's text.
fn text_contains(actual: &Value, expected: &Value) -> bool {
    actual
        .to_string()
        .to_lowercase()
        .contains(&expected.to_string().to_lowercase())
}

/// Numeric ordering. Either side failing to coerce makes the condition false
/// rather than an error.
fn ordered(actual: &Value, expected: &Value, compare: impl Fn(f64, f64) -> bool) -> bool {
    match (actual.as_number(), expected.as_number()) {
        (Some(a), Some(e)) => compare(a, e),
        _ => false,
    }
}

/// Membership: a list expected is matched by direct value equality; anything
/// else is read as a comma-separated string and matched against the actual's
/// exact text form (case-sensitive, members not trimmed).
fn is_member(actual: &Value, expected: &Value) -> bool {
    match expected {
        Value::List(members) => members.contains(actual),
        other => {
            let actual_text = actual.to_string();
            other.to_string().split(',').any(|member| member == actual_text)
        }
    }
}

impl RuleSet {
    /// Combine every condition with the set's logic, then apply the action.
    ///
    /// An empty condition list is the "always visible" sentinel and yields
    /// `true` before any logic or action is considered.
    pub fn evaluate(&self, store: &ValueStore) -> bool {
        if self.conditions.is_empty() {
            return true;
        }

        let met = match self.logic {
            RuleLogic::And | RuleLogic::Unknown => self
                .conditions
                .iter()
                .all(|condition| evaluate_condition(condition, store)),
            RuleLogic::Or => self
                .conditions
                .iter()
                .any(|condition| evaluate_condition(condition, store)),
        };

        match self.action {
            RuleAction::Show | RuleAction::Unknown => met,
            RuleAction::Hide => !met,
        }
    }
}

/// Rule-set evaluation as sections and fields carry it: absent means no
/// gating, i.e. visible.
pub fn evaluate_rules(rules: Option<&RuleSet>, store: &ValueStore) -> bool {
    rules.is_none_or(|rule_set| rule_set.evaluate(store))
}
