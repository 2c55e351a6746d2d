use serde::{Deserialize, Serialize};

use super::record::UNDEFINED_PERCENTAGE;

/// Totals and derived figures from the last totals recompute.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BudgetSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub net_budget: f64,
    pub overall_spend_percentage: i64,
}

impl BudgetSummary {
    /// Overall spend share, or `None` while total income is not positive.
    pub fn spend_percentage(&self) -> Option<i64> {
        (self.overall_spend_percentage != UNDEFINED_PERCENTAGE)
            .then_some(self.overall_spend_percentage)
    }
}

impl Default for BudgetSummary {
    fn default() -> Self {
        Self {
            total_income: 0.0,
            total_expense: 0.0,
            net_budget: 0.0,
            overall_spend_percentage: UNDEFINED_PERCENTAGE,
        }
    }
}
