use thiserror::Error;

use crate::ledger::RecordKind;

/// Failures surfaced by ledger mutations and kind parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("Invalid amount: {0} (amounts must be finite and greater than zero)")]
    InvalidAmount(f64),
    #[error("Unknown record kind: `{0}` (expected `income` or `expense`)")]
    UnknownKind(String),
    #[error("No {kind} record with id {id}")]
    RecordNotFound { kind: RecordKind, id: u32 },
    #[error("No {0} ids left to assign")]
    IdsExhausted(RecordKind),
}

/// Failures while loading or saving the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
