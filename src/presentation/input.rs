use thiserror::Error;

use crate::errors::LedgerError;
use crate::ledger::RecordKind;

/// A validated add request, ready to hand to the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryInput {
    pub kind: RecordKind,
    pub description: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error(transparent)]
    Kind(#[from] LedgerError),
    #[error("Description must not be empty")]
    EmptyDescription,
    #[error("Value `{0}` is not a number")]
    NotANumber(String),
    #[error("Value must be greater than zero, got {0}")]
    NotPositive(f64),
}

/// Validates raw add-form fields: known kind, non-empty description, positive finite value.
pub fn parse_input(kind: &str, description: &str, value: &str) -> Result<EntryInput, InputError> {
    let kind: RecordKind = kind.parse()?;
    let description = description.trim();
    if description.is_empty() {
        return Err(InputError::EmptyDescription);
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| InputError::NotANumber(value.to_string()))?;
    if !value.is_finite() {
        return Err(InputError::NotANumber(value.to_string()));
    }
    if value <= 0.0 {
        return Err(InputError::NotPositive(value));
    }
    Ok(EntryInput {
        kind,
        description: description.to_string(),
        value,
    })
}
