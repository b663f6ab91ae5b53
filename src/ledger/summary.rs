use serde::Serialize;

use super::entry::PERCENTAGE_UNDEFINED;

/// Snapshot of the ledger's derived budget figures.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub budget: f64,
    pub total_income: f64,
    pub total_expense: f64,
    /// Share of income spent, or [`PERCENTAGE_UNDEFINED`] with no income.
    pub percentage: i32,
}

impl BudgetSummary {
    /// Figures shown before anything has been recorded.
    pub const fn empty() -> Self {
        Self {
            budget: 0.0,
            total_income: 0.0,
            total_expense: 0.0,
            percentage: PERCENTAGE_UNDEFINED,
        }
    }

    pub fn is_surplus(&self) -> bool {
        self.budget > 0.0
    }
}

impl Default for BudgetSummary {
    fn default() -> Self {
        Self::empty()
    }
}
