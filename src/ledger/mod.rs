//! Income/expense records and the ledger that aggregates them.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod record;
pub mod summary;

pub use ledger::Ledger;
pub use record::{ExpenseRecord, IncomeRecord, Record, RecordKind, UNDEFINED_PERCENTAGE};
pub use summary::BudgetSummary;
