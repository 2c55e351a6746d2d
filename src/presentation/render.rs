use chrono::NaiveDate;

use crate::controller::Snapshot;
use crate::ledger::RecordKind;

use super::format::{
    format_amount, format_net_budget, format_percentage, period_label, FormatOptions,
};

/// Renders the budget header followed by the income and expense lists.
pub fn render_snapshot(snapshot: &Snapshot, date: NaiveDate, options: &FormatOptions) -> String {
    let summary = &snapshot.summary;
    let mut lines = vec![
        format!("Available budget in {}", period_label(date)),
        format!("  Budget:   {}", format_net_budget(summary, options)),
        format!(
            "  Income:   {}",
            format_amount(summary.total_income, RecordKind::Income, options)
        ),
        format!(
            "  Expenses: {}  {}",
            format_amount(summary.total_expense, RecordKind::Expense, options),
            format_percentage(summary.overall_spend_percentage)
        ),
    ];

    lines.push("Income".to_string());
    if snapshot.income.is_empty() {
        lines.push("  (none)".to_string());
    }
    for record in &snapshot.income {
        lines.push(format!(
            "  income-{}  {}  {}",
            record.id,
            record.description,
            format_amount(record.value, RecordKind::Income, options)
        ));
    }

    lines.push("Expenses".to_string());
    if snapshot.expenses.is_empty() {
        lines.push("  (none)".to_string());
    }
    for record in &snapshot.expenses {
        lines.push(format!(
            "  expense-{}  {}  {}  {}",
            record.id,
            record.description,
            format_amount(record.value, RecordKind::Expense, options),
            format_percentage(record.percentage_of_income)
        ));
    }

    lines.join("\n")
}
