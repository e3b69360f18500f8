use survey_logic::{
    Condition, FieldSpec, FieldType, Operator, RuleSet, SectionSpec, SurveySpec, Value, ValueStore,
    validate,
};

fn show_when_equals(field_id: &str, expected: &str) -> Option<RuleSet> {
    Some(RuleSet {
        conditions: vec![Condition {
            field_id: field_id.into(),
            operator: Operator::Equals,
            value: expected.into(),
        }],
        ..RuleSet::default()
    })
}

fn single_section(fields: Vec<FieldSpec>) -> SurveySpec {
    SurveySpec {
        id: "intake".into(),
        title: "Intake".into(),
        description: None,
        sections: vec![SectionSpec {
            id: "main".into(),
            title: "Main".into(),
            rules: None,
            fields,
        }],
    }
}

fn store(entries: &[(&str, Value)]) -> ValueStore {
    entries
        .iter()
        .map(|(id, value)| (id.to_string(), value.clone()))
        .collect()
}

#[test]
fn missing_required_field_fails() {
    let survey = single_section(vec![FieldSpec {
        required: true,
        ..FieldSpec::new("name", "Name", FieldType::Text)
    }]);
    let result = validate(&survey, &ValueStore::new());
    assert!(!result.is_valid);
    assert_eq!(result.errors, vec!["Field 'Name' is required"]);
}

#[test]
fn whitespace_only_does_not_satisfy_required() {
    let survey = single_section(vec![FieldSpec {
        required: true,
        ..FieldSpec::new("name", "Name", FieldType::Text)
    }]);
    let result = validate(&survey, &store(&[("name", "   ".into())]));
    assert_eq!(result.errors, vec!["Field 'Name' is required"]);
}

#[test]
fn hidden_field_with_data_reports_exactly_one_error() {
    let survey = SurveySpec {
        id: "intake".into(),
        title: "Intake".into(),
        description: None,
        sections: vec![SectionSpec {
            id: "us_details".into(),
            title: "US Details".into(),
            rules: show_when_equals("country", "USA"),
            // Required and email-typed, but hidden: only the hidden-data
            // violation may be reported.
            fields: vec![FieldSpec {
                required: true,
                ..FieldSpec::new("work_email", "Work Email", FieldType::Email)
            }],
        }],
    };
    let values = store(&[("country", "Canada".into()), ("work_email", "nope".into())]);
    let result = validate(&survey, &values);
    assert_eq!(
        result.errors,
        vec!["Field 'Work Email' should not have data (hidden by logic)"]
    );
}

#[test]
fn hidden_field_without_data_is_fine() {
    let survey = single_section(vec![FieldSpec {
        required: true,
        rules: show_when_equals("country", "USA"),
        ..FieldSpec::new("state", "State", FieldType::Select)
    }]);
    let result = validate(&survey, &store(&[("state", Value::Null)]));
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}

#[test]
fn email_format_is_checked_when_visible_and_filled() {
    let survey = single_section(vec![FieldSpec::new("email", "Email", FieldType::Email)]);

    let ok = validate(&survey, &store(&[("email", "user@example.com".into())]));
    assert!(ok.is_valid);

    let bad = validate(&survey, &store(&[("email", "not-an-email".into())]));
    assert_eq!(
        bad.errors,
        vec!["Field 'Email' must be a valid email address"]
    );
}

#[test]
fn empty_optional_email_is_not_checked() {
    let survey = single_section(vec![FieldSpec::new("email", "Email", FieldType::Email)]);
    let result = validate(&survey, &store(&[("email", "".into())]));
    assert!(result.is_valid);
}

#[test]
fn non_numeric_value_in_number_field() {
    let survey = single_section(vec![FieldSpec::new("age", "Age", FieldType::Number)]);
    let result = validate(&survey, &store(&[("age", "abc".into())]));
    assert_eq!(result.errors, vec!["Field 'Age' must be a valid number"]);
}

#[test]
fn numeric_strings_are_accepted_for_number_fields() {
    let survey = single_section(vec![FieldSpec {
        min: Some(18.0),
        max: Some(99.0),
        ..FieldSpec::new("age", "Age", FieldType::Number)
    }]);
    let result = validate(&survey, &store(&[("age", "42".into())]));
    assert!(result.is_valid);
}

#[test]
fn number_bounds_each_produce_one_message() {
    let survey = single_section(vec![FieldSpec {
        min: Some(18.0),
        max: Some(99.0),
        ..FieldSpec::new("age", "Age", FieldType::Number)
    }]);

    let low = validate(&survey, &store(&[("age", Value::Number(15.0))]));
    assert_eq!(low.errors, vec!["Field 'Age' must be at least 18"]);

    let high = validate(&survey, &store(&[("age", Value::Number(120.0))]));
    assert_eq!(high.errors, vec!["Field 'Age' must be at most 99"]);
}

#[test]
fn required_failure_short_circuits_format_checks() {
    let survey = single_section(vec![FieldSpec {
        required: true,
        min: Some(18.0),
        ..FieldSpec::new("age", "Age", FieldType::Number)
    }]);
    let result = validate(&survey, &store(&[("age", "".into())]));
    assert_eq!(result.errors, vec!["Field 'Age' is required"]);
}

#[test]
fn pattern_constraint_applies_to_visible_filled_fields() {
    let survey = single_section(vec![FieldSpec {
        pattern: Some(r"^\d{5}$".into()),
        ..FieldSpec::new("zip", "ZIP Code", FieldType::Text)
    }]);

    let ok = validate(&survey, &store(&[("zip", "94110".into())]));
    assert!(ok.is_valid);

    let bad = validate(&survey, &store(&[("zip", "9411".into())]));
    assert_eq!(
        bad.errors,
        vec!["Field 'ZIP Code' must match the expected format"]
    );
}

#[test]
fn unparseable_pattern_fails_open() {
    let survey = single_section(vec![FieldSpec {
        pattern: Some("(unclosed".into()),
        ..FieldSpec::new("zip", "ZIP Code", FieldType::Text)
    }]);
    let result = validate(&survey, &store(&[("zip", "anything".into())]));
    assert!(result.is_valid);
}

#[test]
fn errors_accumulate_in_definition_order() {
    let survey = SurveySpec {
        id: "intake".into(),
        title: "Intake".into(),
        description: None,
        sections: vec![
            SectionSpec {
                id: "first".into(),
                title: "First".into(),
                rules: None,
                fields: vec![
                    FieldSpec {
                        required: true,
                        ..FieldSpec::new("name", "Name", FieldType::Text)
                    },
                    FieldSpec::new("email", "Email", FieldType::Email),
                ],
            },
            SectionSpec {
                id: "second".into(),
                title: "Second".into(),
                rules: None,
                fields: vec![FieldSpec::new("age", "Age", FieldType::Number)],
            },
        ],
    };
    let values = store(&[("email", "broken@".into()), ("age", "abc".into())]);
    let result = validate(&survey, &values);
    assert_eq!(
        result.errors,
        vec![
            "Field 'Name' is required",
            "Field 'Email' must be a valid email address",
            "Field 'Age' must be a valid number",
        ]
    );
}

#[test]
fn clean_submission_passes() {
    let survey = single_section(vec![
        FieldSpec {
            required: true,
            ..FieldSpec::new("name", "Name", FieldType::Text)
        },
        FieldSpec {
            min: Some(0.0),
            ..FieldSpec::new("age", "Age", FieldType::Number)
        },
        FieldSpec::new("email", "Email", FieldType::Email),
    ]);
    let values = store(&[
        ("name", "Ada".into()),
        ("age", Value::Number(36.0)),
        ("email", "ada@example.com".into()),
    ]);
    let result = validate(&survey, &values);
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}

#[test]
fn survey_definitions_parse_from_stored_json() {
    let survey = SurveySpec::from_json(
        r#"{
            "id": "travel",
            "title": "Travel",
            "sections": [{
                "id": "us_details",
                "title": "US Details",
                "rules": {
                    "conditions": [
                        {"field_id": "country", "operator": "equals", "value": "USA"}
                    ],
                    "logic": "and",
                    "action": "show"
                },
                "fields": [{
                    "id": "state",
                    "label": "State",
                    "field_type": "select",
                    "required": true,
                    "options": [
                        {"value": "CA", "filters": {"country": "USA"}},
                        {"value": "ON", "filters": {"country": "Canada"}}
                    ]
                }]
            }]
        }"#,
    )
    .expect("definition should parse");

    let field = survey.field("state").expect("field present");
    assert_eq!(field.field_type, survey_logic::FieldType::Select);
    assert!(field.required);
    assert_eq!(field.options.len(), 2);

    let result = validate(&survey, &store(&[("country", "Canada".into())]));
    assert!(result.is_valid, "hidden required field stays unreported");

    assert!(SurveySpec::from_json("{\"id\": 1}").is_err());
}

#[test]
fn sensitive_field_ids_are_reported_in_order() {
    let survey = single_section(vec![
        FieldSpec {
            sensitive: true,
            ..FieldSpec::new("ssn", "SSN", FieldType::Text)
        },
        FieldSpec::new("color", "Favourite Colour", FieldType::Text),
        FieldSpec {
            sensitive: true,
            ..FieldSpec::new("dob", "Date of Birth", FieldType::Date)
        },
    ]);
    assert_eq!(survey.sensitive_field_ids(), vec!["ssn", "dob"]);
}
