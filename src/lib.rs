#![doc(test(attr(deny(warnings))))]

//! Budgety keeps a personal income/expense ledger and derives the running
//! totals, net budget, and per-expense share of income from it.
//!
//! ```
//! use budgety::ledger::{EntryKind, Ledger};
//!
//! let mut ledger = Ledger::new();
//! ledger.add_item(EntryKind::Income, "Salary", 2000.0);
//! ledger.add_item(EntryKind::Expense, "Rent", 800.0);
//! ledger.recompute_all();
//! assert_eq!(ledger.budget().budget, 1200.0);
//! assert_eq!(ledger.percentages(), vec![40]);
//! ```

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budgety tracing initialized.");
    });
}
