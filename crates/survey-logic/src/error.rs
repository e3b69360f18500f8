use thiserror::Error;

/// Failure to read a stored survey definition.
///
/// This is the only fallible boundary in the crate: once a `SurveySpec` has
/// been constructed, every evaluation and validation pass is infallible by
/// design (malformed rule data degrades to boolean defaults instead).
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("invalid survey definition: {0}")]
    Parse(#[from] serde_json::Error),
}
