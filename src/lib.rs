#![doc(test(attr(deny(warnings))))]

//! Budget Ledger keeps income and expense line items in memory and derives
//! totals, the net budget, and each expense's share of income.
//!
//! ```
//! use budget_ledger::{controller::BudgetController, ledger::RecordKind};
//!
//! let mut controller = BudgetController::new();
//! controller.add(RecordKind::Income, "Salary", 100.0).unwrap();
//! let update = controller.add(RecordKind::Expense, "Groceries", 25.0).unwrap();
//! assert_eq!(update.snapshot.summary.net_budget, 75.0);
//! assert_eq!(update.snapshot.expense_percentages(), vec![25]);
//! ```

pub mod cli;
pub mod config;
pub mod controller;
pub mod errors;
pub mod ledger;
pub mod presentation;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Ledger tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
