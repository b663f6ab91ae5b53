use serde::Serialize;

use super::{
    entry::{percentage_of, Entry, EntryId, EntryKind, PERCENTAGE_UNDEFINED},
    summary::BudgetSummary,
};

/// Entries grouped by kind, each in insertion order.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Entries {
    pub expense: Vec<Entry>,
    pub income: Vec<Entry>,
}

impl Entries {
    pub fn of(&self, kind: EntryKind) -> &[Entry] {
        match kind {
            EntryKind::Income => &self.income,
            EntryKind::Expense => &self.expense,
        }
    }

    fn of_mut(&mut self, kind: EntryKind) -> &mut Vec<Entry> {
        match kind {
            EntryKind::Income => &mut self.income,
            EntryKind::Expense => &mut self.expense,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct Totals {
    pub expense: f64,
    pub income: f64,
}

/// Income/expense entries plus the budget figures derived from them.
///
/// Derived state (`totals`, `budget`, `percentage` and each expense's percentage)
/// is only refreshed by [`Ledger::calculate_budget`] and
/// [`Ledger::calculate_percentages`]; mutations leave it stale.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Ledger {
    entries: Entries,
    totals: Totals,
    budget: f64,
    percentage: i32,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        let empty = BudgetSummary::empty();
        Self {
            entries: Entries::default(),
            totals: Totals::default(),
            budget: empty.budget,
            percentage: empty.percentage,
        }
    }

    pub fn entries(&self, kind: EntryKind) -> &[Entry] {
        self.entries.of(kind)
    }

    pub fn find(&self, kind: EntryKind, id: EntryId) -> Option<&Entry> {
        self.entries.of(kind).iter().find(|entry| entry.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.income.is_empty() && self.entries.expense.is_empty()
    }

    /// Next id for `kind`: one past the largest id in use, or 0 when none exist.
    /// Ids freed by removing the largest entry are handed out again.
    pub fn next_id(&self, kind: EntryKind) -> EntryId {
        self.entries
            .of(kind)
            .iter()
            .map(|entry| entry.id)
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Appends a new entry and returns a copy for the caller to render.
    ///
    /// The value is taken as given; callers validate it first.
    pub fn add_item(&mut self, kind: EntryKind, description: impl Into<String>, value: f64) -> Entry {
        let id = self.next_id(kind);
        let entry = Entry::new(kind, id, description, value);
        self.entries.of_mut(kind).push(entry.clone());
        tracing::debug!(%kind, id, value, "entry added");
        entry
    }

    /// Removes the entry with `id`, keeping the order of the rest.
    /// Unknown ids are ignored.
    pub fn delete_item(&mut self, kind: EntryKind, id: EntryId) -> Option<Entry> {
        let items = self.entries.of_mut(kind);
        let index = items.iter().position(|entry| entry.id == id)?;
        let removed = items.remove(index);
        tracing::debug!(%kind, id, "entry deleted");
        Some(removed)
    }

    /// Re-sums both kinds and refreshes the budget and overall spend percentage.
    pub fn calculate_budget(&mut self) {
        self.totals.income = self.total(EntryKind::Income);
        self.totals.expense = self.total(EntryKind::Expense);
        self.budget = self.totals.income - self.totals.expense;
        self.percentage = percentage_of(self.totals.expense, self.totals.income);
        tracing::debug!(
            income = self.totals.income,
            expense = self.totals.expense,
            budget = self.budget,
            percentage = self.percentage,
            "budget recalculated"
        );
    }

    /// Refreshes each expense's share of income.
    ///
    /// Uses the income total from the last [`Ledger::calculate_budget`] call,
    /// so run that first.
    pub fn calculate_percentages(&mut self) {
        let income = self.totals.income;
        for entry in &mut self.entries.expense {
            entry.calc_percentage(income);
        }
    }

    /// Runs [`Ledger::calculate_budget`] then [`Ledger::calculate_percentages`].
    pub fn recompute_all(&mut self) {
        self.calculate_budget();
        self.calculate_percentages();
    }

    pub fn budget(&self) -> BudgetSummary {
        BudgetSummary {
            budget: self.budget,
            total_income: self.totals.income,
            total_expense: self.totals.expense,
            percentage: self.percentage,
        }
    }

    /// Expense percentages, one per expense in expense order.
    pub fn percentages(&self) -> Vec<i32> {
        self.entries
            .expense
            .iter()
            .map(|entry| entry.percentage().unwrap_or(PERCENTAGE_UNDEFINED))
            .collect()
    }

    fn total(&self, kind: EntryKind) -> f64 {
        self.entries.of(kind).iter().map(|entry| entry.value).sum()
    }
}
