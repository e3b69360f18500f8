#![allow(missing_docs)]

pub mod dependency;
pub mod error;
pub mod evaluate;
pub mod spec;
pub mod validate;
pub mod value;
pub mod visibility;

pub use dependency::filter_options;
pub use error::SpecError;
pub use evaluate::{evaluate_condition, evaluate_rules};
pub use spec::{
    Condition, FieldOption, FieldSpec, FieldType, Operator, RuleAction, RuleLogic, RuleSet,
    SectionSpec, SurveySpec,
};
pub use validate::{SubmissionResult, validate};
pub use value::{Value, ValueStore};
pub use visibility::{VisibilityMap, resolve_visibility, visible_fields, visible_sections};
