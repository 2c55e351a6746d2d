use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Percentage value used when total income is not positive.
pub const UNDEFINED_PERCENTAGE: i64 = -1;

/// Discriminates the two record sequences held by a [`Ledger`](super::Ledger).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Income,
    Expense,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Income => "income",
            RecordKind::Expense => "expense",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = LedgerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "income" | "inc" | "+" => Ok(RecordKind::Income),
            "expense" | "exp" | "-" => Ok(RecordKind::Expense),
            _ => Err(LedgerError::UnknownKind(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncomeRecord {
    pub id: u32,
    pub description: String,
    pub value: f64,
}

impl IncomeRecord {
    pub fn new(id: u32, description: impl Into<String>, value: f64) -> Self {
        Self {
            id,
            description: description.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub id: u32,
    pub description: String,
    pub value: f64,
    /// Share of total income, or [`UNDEFINED_PERCENTAGE`] until computed.
    pub percentage_of_income: i64,
}

impl ExpenseRecord {
    pub fn new(id: u32, description: impl Into<String>, value: f64) -> Self {
        Self {
            id,
            description: description.into(),
            value,
            percentage_of_income: UNDEFINED_PERCENTAGE,
        }
    }

    /// Updates the cached percentage against the supplied income total.
    pub fn calculate_percentage(&mut self, total_income: f64) {
        self.percentage_of_income = percentage_of(self.value, total_income);
    }
}

/// A record of either kind, as returned by ledger mutations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Income(IncomeRecord),
    Expense(ExpenseRecord),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Income(_) => RecordKind::Income,
            Record::Expense(_) => RecordKind::Expense,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            Record::Income(record) => record.id,
            Record::Expense(record) => record.id,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Record::Income(record) => &record.description,
            Record::Expense(record) => &record.description,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Record::Income(record) => record.value,
            Record::Expense(record) => record.value,
        }
    }

    /// Label in the `<kind>-<id>` form used by the shell and the rendered lists.
    pub fn label(&self) -> String {
        format!("{}-{}", self.kind(), self.id())
    }
}

/// Rounds `part / whole * 100`, or returns the sentinel when `whole` is not positive.
pub(crate) fn percentage_of(part: f64, whole: f64) -> i64 {
    if whole > 0.0 {
        (part / whole * 100.0).round() as i64
    } else {
        UNDEFINED_PERCENTAGE
    }
}
