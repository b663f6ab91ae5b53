//! Income/expense ledger and the budget figures derived from it.

pub mod entry;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod summary;

pub use entry::{Entry, EntryDetail, EntryId, EntryKind, PERCENTAGE_UNDEFINED};
pub use ledger::{Entries, Ledger, Totals};
pub use summary::BudgetSummary;
