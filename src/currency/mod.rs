//! Display formatting for amounts, percentages, and the month banner.

use chrono::{Datelike, NaiveDate};

use crate::ledger::{BudgetSummary, EntryKind};

const GROUPING_SEPARATOR: char = ',';
const PRECISION: usize = 2;
/// Shown in place of a percentage that is zero or undefined.
pub const PERCENTAGE_PLACEHOLDER: &str = "---";

/// Formats `value` as `"+ 1,234.50"` / `"- 1,234.50"`, signed by entry kind.
/// The sign of `value` itself is dropped.
pub fn format_amount(value: f64, kind: EntryKind) -> String {
    let sign = match kind {
        EntryKind::Income => '+',
        EntryKind::Expense => '-',
    };
    format!("{} {}", sign, format_number(value.abs()))
}

/// Net budget label: income sign for a surplus, expense sign otherwise.
pub fn format_budget(summary: &BudgetSummary) -> String {
    let kind = if summary.is_surplus() {
        EntryKind::Income
    } else {
        EntryKind::Expense
    };
    format_amount(summary.budget, kind)
}

/// `"40%"` for positive percentages, the placeholder for zero or the undefined marker.
pub fn format_percentage(percentage: i32) -> String {
    if percentage > 0 {
        format!("{}%", percentage)
    } else {
        PERCENTAGE_PLACEHOLDER.to_string()
    }
}

/// `"October 2026"` style banner text.
pub fn format_month(date: NaiveDate) -> String {
    format!("{} {}", month_name(date.month()), date.year())
}

fn format_number(value: f64) -> String {
    let body = format!("{:.*}", PRECISION, value);
    match body.split_once('.') {
        Some((int_part, decimals)) => format!("{}.{}", group_digits(int_part), decimals),
        None => group_digits(&body),
    }
}

fn group_digits(digits: &str) -> String {
    let mut reversed = Vec::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            reversed.push(GROUPING_SEPARATOR);
        }
        reversed.push(ch);
    }
    reversed.into_iter().rev().collect()
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}
