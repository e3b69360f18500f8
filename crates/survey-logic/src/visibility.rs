use std::collections::BTreeMap;

use crate::evaluate::evaluate_rules;
use crate::spec::field::FieldSpec;
use crate::spec::survey::{SectionSpec, SurveySpec};
use crate::value::ValueStore;

/// Visibility decision for every section and field of one survey, against one
/// value store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityMap {
    sections: BTreeMap<String, bool>,
    fields: BTreeMap<String, bool>,
}

impl VisibilityMap {
    /// Unknown section ids read as visible, matching the no-rules default.
    pub fn section_visible(&self, section_id: &str) -> bool {
        self.sections.get(section_id).copied().unwrap_or(true)
    }

    pub fn field_visible(&self, field_id: &str) -> bool {
        self.fields.get(field_id).copied().unwrap_or(true)
    }

    pub fn sections(&self) -> &BTreeMap<String, bool> {
        &self.sections
    }

    pub fn fields(&self) -> &BTreeMap<String, bool> {
        &self.fields
    }
}

/// Compute visibility for the whole survey tree.
///
/// A field's own rules are always evaluated, but the final decision ANDs in
/// the owning section's state: field visible implies section visible.
pub fn resolve_visibility(spec: &SurveySpec, store: &ValueStore) -> VisibilityMap {
    let mut map = VisibilityMap::default();

    for section in &spec.sections {
        let section_visible = evaluate_rules(section.rules.as_ref(), store);
        map.sections.insert(section.id.clone(), section_visible);

        for field in &section.fields {
            let own_visible = evaluate_rules(field.rules.as_ref(), store);
            map.fields
                .insert(field.id.clone(), section_visible && own_visible);
        }
    }

    tracing::debug!(
        survey = %spec.id,
        hidden_sections = map.sections.values().filter(|visible| !**visible).count(),
        hidden_fields = map.fields.values().filter(|visible| !**visible).count(),
        "resolved visibility"
    );

    map
}

/// Sections currently visible, in definition order.
pub fn visible_sections<'a>(spec: &'a SurveySpec, store: &ValueStore) -> Vec<&'a SectionSpec> {
    spec.sections
        .iter()
        .filter(|section| evaluate_rules(section.rules.as_ref(), store))
        .collect()
}

/// Fields of one section that are visible on their own rules. Callers that
/// need the cascaded decision should use [`resolve_visibility`].
pub fn visible_fields<'a>(section: &'a SectionSpec, store: &ValueStore) -> Vec<&'a FieldSpec> {
    section
        .fields
        .iter()
        .filter(|field| evaluate_rules(field.rules.as_ref(), store))
        .collect()
}
