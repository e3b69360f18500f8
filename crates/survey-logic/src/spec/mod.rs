pub mod field;
pub mod rules;
pub mod survey;

pub use field::{FieldOption, FieldSpec, FieldType};
pub use rules::{Condition, Operator, RuleAction, RuleLogic, RuleSet};
pub use survey::{SectionSpec, SurveySpec};
