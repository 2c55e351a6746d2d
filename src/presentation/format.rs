use chrono::NaiveDate;
use colored::Colorize;

use crate::ledger::{BudgetSummary, RecordKind};

/// Separators and styling applied to rendered amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub grouping_separator: char,
    pub decimal_separator: char,
    pub color: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            grouping_separator: ',',
            decimal_separator: '.',
            color: false,
        }
    }
}

/// Formats `value` as a signed, grouped, two-decimal amount.
///
/// The sign comes from `kind`, never from `value`: income is prefixed `"+ "`,
/// expense `"- "`. Amounts that round to zero carry no prefix.
pub fn format_amount(value: f64, kind: RecordKind, options: &FormatOptions) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, digit) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(options.grouping_separator);
        }
        grouped.push(digit);
    }
    let grouped: String = grouped.chars().rev().collect();

    let is_zero = fixed.chars().all(|ch| ch == '0' || ch == '.');
    let prefix = match (is_zero, kind) {
        (true, _) => "",
        (false, RecordKind::Income) => "+ ",
        (false, RecordKind::Expense) => "- ",
    };
    let text = format!(
        "{prefix}{grouped}{}{dec_part}",
        options.decimal_separator
    );
    paint(text, kind, options)
}

/// Net budget reads as income while positive and as expense otherwise.
pub fn format_net_budget(summary: &BudgetSummary, options: &FormatOptions) -> String {
    let kind = if summary.net_budget > 0.0 {
        RecordKind::Income
    } else {
        RecordKind::Expense
    };
    format_amount(summary.net_budget, kind, options)
}

/// `"25%"` for positive percentages, `"--"` for zero or the undefined sentinel.
pub fn format_percentage(percentage: i64) -> String {
    if percentage > 0 {
        format!("{percentage}%")
    } else {
        "--".to_string()
    }
}

/// Month and year heading, e.g. `October 2026`.
pub fn period_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

fn paint(text: String, kind: RecordKind, options: &FormatOptions) -> String {
    if !options.color {
        return text;
    }
    match kind {
        RecordKind::Income => text.green().to_string(),
        RecordKind::Expense => text.red().to_string(),
    }
}
