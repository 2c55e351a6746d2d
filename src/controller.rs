//! Coordinates ledger mutations with the recompute pass so callers only ever
//! observe fresh aggregates.

use serde::Serialize;
use tracing::warn;

use crate::errors::LedgerError;
use crate::ledger::{BudgetSummary, ExpenseRecord, IncomeRecord, Ledger, Record, RecordKind};

/// Fresh view of the ledger taken right after a recompute.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Snapshot {
    pub summary: BudgetSummary,
    pub income: Vec<IncomeRecord>,
    pub expenses: Vec<ExpenseRecord>,
}

impl Snapshot {
    /// Per-expense percentages in display order.
    pub fn expense_percentages(&self) -> Vec<i64> {
        self.expenses
            .iter()
            .map(|expense| expense.percentage_of_income)
            .collect()
    }
}

/// Result of a mutation: the record touched plus the recomputed state.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Update {
    pub record: Record,
    pub snapshot: Snapshot,
}

/// Owns a [`Ledger`] and runs mutate, recompute totals, recompute percentages, query.
#[derive(Debug, Default)]
pub struct BudgetController {
    ledger: Ledger,
}

impl BudgetController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ledger(ledger: Ledger) -> Self {
        let mut controller = Self { ledger };
        controller.refresh();
        controller
    }

    pub fn add(
        &mut self,
        kind: RecordKind,
        description: impl Into<String>,
        value: f64,
    ) -> Result<Update, LedgerError> {
        let record = self
            .ledger
            .add_record(kind, description, value)
            .inspect_err(|err| warn!(%err, "add rejected"))?;
        Ok(Update {
            record,
            snapshot: self.refresh(),
        })
    }

    pub fn delete(&mut self, kind: RecordKind, id: u32) -> Result<Update, LedgerError> {
        let record = self
            .ledger
            .delete_record(kind, id)
            .inspect_err(|err| warn!(%err, "delete rejected"))?;
        Ok(Update {
            record,
            snapshot: self.refresh(),
        })
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            summary: self.ledger.budget_summary(),
            income: self.ledger.income_records().to_vec(),
            expenses: self.ledger.expense_records().to_vec(),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn refresh(&mut self) -> Snapshot {
        self.ledger.recompute_totals();
        self.ledger.recompute_expense_percentages();
        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::UNDEFINED_PERCENTAGE;

    #[test]
    fn add_returns_recomputed_snapshot() {
        let mut controller = BudgetController::new();
        controller.add(RecordKind::Income, "Salary", 200.0).unwrap();
        let update = controller.add(RecordKind::Expense, "Food", 50.0).unwrap();

        assert_eq!(update.record.label(), "expense-0");
        assert_eq!(update.snapshot.summary.net_budget, 150.0);
        assert_eq!(update.snapshot.expense_percentages(), vec![25]);
    }

    #[test]
    fn delete_returns_recomputed_snapshot() {
        let mut controller = BudgetController::new();
        controller.add(RecordKind::Income, "Salary", 100.0).unwrap();
        controller.add(RecordKind::Expense, "Food", 30.0).unwrap();
        let update = controller.delete(RecordKind::Income, 0).unwrap();

        assert_eq!(update.snapshot.summary.total_income, 0.0);
        assert_eq!(
            update.snapshot.summary.overall_spend_percentage,
            UNDEFINED_PERCENTAGE
        );
        assert_eq!(
            update.snapshot.expense_percentages(),
            vec![UNDEFINED_PERCENTAGE]
        );
    }

    #[test]
    fn failed_mutation_leaves_snapshot_unchanged() {
        let mut controller = BudgetController::new();
        controller.add(RecordKind::Income, "Salary", 100.0).unwrap();
        let before = controller.snapshot();

        assert!(controller.delete(RecordKind::Expense, 3).is_err());
        assert!(controller.add(RecordKind::Expense, "Oops", -1.0).is_err());
        assert_eq!(controller.snapshot(), before);
    }

    #[test]
    fn initial_snapshot_shows_empty_budget() {
        let snapshot = BudgetController::new().snapshot();
        assert_eq!(snapshot.summary, BudgetSummary::default());
        assert!(snapshot.income.is_empty());
        assert!(snapshot.expenses.is_empty());
    }

    #[test]
    fn with_ledger_recomputes_existing_records() {
        let mut ledger = Ledger::new();
        ledger.add_record(RecordKind::Income, "Salary", 80.0).unwrap();
        ledger.add_record(RecordKind::Expense, "Rent", 20.0).unwrap();

        let controller = BudgetController::with_ledger(ledger);
        assert_eq!(controller.snapshot().summary.overall_spend_percentage, 25);
    }
}
