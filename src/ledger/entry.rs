use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::errors::InputError;

/// Marker stored in percentage fields while income is zero or nothing has been computed.
pub const PERCENTAGE_UNDEFINED: i32 = -1;

/// Identifier of an entry, unique within its own kind only.
pub type EntryId = u64;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub const ALL: [EntryKind; 2] = [EntryKind::Income, EntryKind::Expense];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "income" | "inc" | "+" => Ok(EntryKind::Income),
            "expense" | "exp" | "-" => Ok(EntryKind::Expense),
            other => Err(InputError::UnknownEntryType(other.to_string())),
        }
    }
}

/// Variant-specific payload of an entry.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntryDetail {
    Income,
    /// Share of total income, rounded; stale until the ledger recomputes it.
    Expense { percentage: i32 },
}

/// A single income or expense record held by the ledger.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    pub description: String,
    pub value: f64,
    #[serde(flatten)]
    pub detail: EntryDetail,
}

impl Entry {
    pub fn income(id: EntryId, description: impl Into<String>, value: f64) -> Self {
        Self {
            id,
            description: description.into(),
            value,
            detail: EntryDetail::Income,
        }
    }

    pub fn expense(id: EntryId, description: impl Into<String>, value: f64) -> Self {
        Self {
            id,
            description: description.into(),
            value,
            detail: EntryDetail::Expense {
                percentage: PERCENTAGE_UNDEFINED,
            },
        }
    }

    pub fn new(kind: EntryKind, id: EntryId, description: impl Into<String>, value: f64) -> Self {
        match kind {
            EntryKind::Income => Self::income(id, description, value),
            EntryKind::Expense => Self::expense(id, description, value),
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self.detail {
            EntryDetail::Income => EntryKind::Income,
            EntryDetail::Expense { .. } => EntryKind::Expense,
        }
    }

    /// Percentage of income for expenses; `None` for income entries.
    pub fn percentage(&self) -> Option<i32> {
        match self.detail {
            EntryDetail::Income => None,
            EntryDetail::Expense { percentage } => Some(percentage),
        }
    }

    /// Recomputes the expense share against `total_income`. No-op for income.
    pub fn calc_percentage(&mut self, total_income: f64) {
        if let EntryDetail::Expense { percentage } = &mut self.detail {
            *percentage = percentage_of(self.value, total_income);
        }
    }

    /// Display id in the `<kind>-<id>` form used by the shell.
    pub fn item_id(&self) -> String {
        format!("{}-{}", self.kind(), self.id)
    }
}

/// `round(part / whole * 100)`, or the undefined marker when `whole` is not positive.
pub(crate) fn percentage_of(part: f64, whole: f64) -> i32 {
    if whole > 0.0 {
        (part / whole * 100.0).round() as i32
    } else {
        PERCENTAGE_UNDEFINED
    }
}
