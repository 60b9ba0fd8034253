use crate::types::DbId;
use crate::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<FieldViolation>),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Render a violation list as `field: message; field: message` for logs
/// and error displays. The structured list itself travels on the enum
/// variant so the HTTP layer can serialize it in full.
fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}
