use crate::spec::field::FieldOption;
use crate::value::Value;

/// Filter a target field's option list by a source field's current value.
///
/// Example: `country = "USA"` narrows a state list to US states. An empty or
/// absent source value returns the input unchanged, so an unanswered source
/// field never hides downstream options. Options without a `filters` map are
/// unconditional and always kept. Matching is direct value equality, not the
/// textual coercion the condition evaluator uses.
pub fn filter_options(
    source_value: Option<&Value>,
    options: &[FieldOption],
    filter_key: &str,
) -> Vec<FieldOption> {
    let source = match source_value {
        Some(value) if !value.is_empty() => value,
        _ => return options.to_vec(),
    };

    options
        .iter()
        .filter(|option| {
            option.filters.is_empty() || option.filters.get(filter_key) == Some(source)
        })
        .cloned()
        .collect()
}
