//! Renders ledger state as shell output.

use chrono::{Local, NaiveDate};

use crate::{
    currency::{format_amount, format_budget, format_month, format_percentage},
    ledger::{BudgetSummary, Entry, EntryKind, Ledger},
};

use super::output;

pub fn render_month(today: NaiveDate) {
    output::section(format!("Available budget in {}", format_month(today)));
}

pub fn render_current_month() {
    render_month(Local::now().date_naive());
}

pub fn render_budget(summary: &BudgetSummary) {
    output::plain(format!("Budget:   {}", format_budget(summary)));
    output::plain(format!(
        "Income:   {}",
        format_amount(summary.total_income, EntryKind::Income)
    ));
    output::plain(format!(
        "Expenses: {}  {}",
        format_amount(summary.total_expense, EntryKind::Expense),
        format_percentage(summary.percentage)
    ));
}

pub fn item_row(entry: &Entry) -> String {
    let mut row = format!(
        "{:<12} {:<24} {}",
        entry.item_id(),
        entry.description,
        format_amount(entry.value, entry.kind())
    );
    if let Some(percentage) = entry.percentage() {
        row.push_str("  ");
        row.push_str(&format_percentage(percentage));
    }
    row
}

pub fn render_item(entry: &Entry) {
    output::plain(item_row(entry));
}

/// Shows each expense with the percentage at the same position in `percentages`.
pub fn render_percentages(expenses: &[Entry], percentages: &[i32]) {
    for (entry, percentage) in expenses.iter().zip(percentages) {
        output::plain(format!(
            "{:<12} {}",
            entry.item_id(),
            format_percentage(*percentage)
        ));
    }
}

pub fn render_ledger(ledger: &Ledger) {
    for kind in EntryKind::ALL {
        let entries = ledger.entries(kind);
        output::section(match kind {
            EntryKind::Income => "Income",
            EntryKind::Expense => "Expenses",
        });
        if entries.is_empty() {
            output::hint(format!("No {} recorded.", kind));
            continue;
        }
        for entry in entries {
            render_item(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_row_carries_percentage() {
        let mut entry = Entry::expense(2, "Rent", 800.0);
        entry.calc_percentage(2000.0);
        let row = item_row(&entry);
        assert!(row.starts_with("expense-2"));
        assert!(row.contains("Rent"));
        assert!(row.ends_with("- 800.00  40%"));
    }

    #[test]
    fn income_row_has_no_percentage() {
        let row = item_row(&Entry::income(0, "Salary", 2000.0));
        assert!(row.ends_with("+ 2,000.00"));
    }
}
