use thiserror::Error;

/// Raised when a create or update would give two live records the same natural key.
///
/// Carries the identifier of the record already holding the key so callers can offer to
/// edit that record instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DuplicateEntityError {
    /// Human readable message naming the conflicting field values
    pub message: String,
    /// Type name of the entity, e.g. `DraftPick`
    pub entity_type: &'static str,
    /// Identifier of the record already holding the natural key
    pub existing_id: Option<i32>,
}

impl DuplicateEntityError {
    pub fn new(
        message: impl Into<String>,
        entity_type: &'static str,
        existing_id: Option<i32>,
    ) -> Self {
        Self {
            message: message.into(),
            entity_type,
            existing_id,
        }
    }
}
