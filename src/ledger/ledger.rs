use tracing::debug;

use crate::errors::LedgerError;

use super::{
    record::{percentage_of, ExpenseRecord, IncomeRecord, Record, RecordKind},
    summary::BudgetSummary,
};

/// Authoritative store of income and expense records.
///
/// Aggregates are not kept in sync with mutations: they reflect the records as
/// of the last [`Ledger::recompute_totals`] call, and each expense's percentage
/// reflects the last [`Ledger::recompute_expense_percentages`] call. Use
/// [`Ledger::recompute`] (or [`crate::controller::BudgetController`]) to run both.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    income: Vec<IncomeRecord>,
    expenses: Vec<ExpenseRecord>,
    summary: BudgetSummary,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record of `kind` with the next sequential id for that kind.
    pub fn add_record(
        &mut self,
        kind: RecordKind,
        description: impl Into<String>,
        value: f64,
    ) -> Result<Record, LedgerError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(LedgerError::InvalidAmount(value));
        }
        let id = self.next_id(kind)?;
        let record = match kind {
            RecordKind::Income => {
                let record = IncomeRecord::new(id, description, value);
                self.income.push(record.clone());
                Record::Income(record)
            }
            RecordKind::Expense => {
                let record = ExpenseRecord::new(id, description, value);
                self.expenses.push(record.clone());
                Record::Expense(record)
            }
        };
        debug!(kind = %kind, id, value, "record added");
        Ok(record)
    }

    /// Removes the record with `id` from the `kind` sequence, keeping the order of the rest.
    pub fn delete_record(&mut self, kind: RecordKind, id: u32) -> Result<Record, LedgerError> {
        let missing = LedgerError::RecordNotFound { kind, id };
        let removed = match kind {
            RecordKind::Income => {
                let index = self
                    .income
                    .iter()
                    .position(|record| record.id == id)
                    .ok_or(missing)?;
                Record::Income(self.income.remove(index))
            }
            RecordKind::Expense => {
                let index = self
                    .expenses
                    .iter()
                    .position(|record| record.id == id)
                    .ok_or(missing)?;
                Record::Expense(self.expenses.remove(index))
            }
        };
        debug!(kind = %kind, id, "record deleted");
        Ok(removed)
    }

    /// Recomputes both totals from scratch along with the net budget and overall spend share.
    pub fn recompute_totals(&mut self) {
        let total_income: f64 = self.income.iter().map(|record| record.value).sum();
        let total_expense: f64 = self.expenses.iter().map(|record| record.value).sum();
        self.summary = BudgetSummary {
            total_income,
            total_expense,
            net_budget: total_income - total_expense,
            overall_spend_percentage: percentage_of(total_expense, total_income),
        };
        debug!(
            total_income,
            total_expense,
            percentage = self.summary.overall_spend_percentage,
            "totals recomputed"
        );
    }

    /// Refreshes each expense's share of the income total from the last totals recompute.
    pub fn recompute_expense_percentages(&mut self) {
        let total_income = self.summary.total_income;
        for expense in &mut self.expenses {
            expense.calculate_percentage(total_income);
        }
    }

    /// Runs both recompute steps in the required order.
    pub fn recompute(&mut self) {
        self.recompute_totals();
        self.recompute_expense_percentages();
    }

    pub fn budget_summary(&self) -> BudgetSummary {
        self.summary
    }

    /// Per-expense percentages in display order.
    pub fn expense_percentages(&self) -> Vec<i64> {
        self.expenses
            .iter()
            .map(|expense| expense.percentage_of_income)
            .collect()
    }

    pub fn income_records(&self) -> &[IncomeRecord] {
        &self.income
    }

    pub fn expense_records(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    /// Records of one kind, cloned into the common [`Record`] shape.
    pub fn records(&self, kind: RecordKind) -> Vec<Record> {
        match kind {
            RecordKind::Income => self.income.iter().cloned().map(Record::Income).collect(),
            RecordKind::Expense => self.expenses.iter().cloned().map(Record::Expense).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty()
    }

    fn next_id(&self, kind: RecordKind) -> Result<u32, LedgerError> {
        let last = match kind {
            RecordKind::Income => self.income.last().map(|record| record.id),
            RecordKind::Expense => self.expenses.last().map(|record| record.id),
        };
        match last {
            None => Ok(0),
            Some(id) => id
                .checked_add(1)
                .ok_or(LedgerError::IdsExhausted(kind)),
        }
    }
}
