//! Shared runtime state for CLI interactions and command execution.

use crate::{
    config::{Config, ConfigManager},
    ledger::{BudgetSummary, EntryKind, Ledger},
};

use super::{commands, core::CliError, output, view};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub ledger: Ledger,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_config_manager(mode, ConfigManager::new()?)
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let config = config_manager.load()?;
        output::apply_config(&config);

        Ok(Self {
            mode,
            ledger: Ledger::new(),
            config_manager,
            config,
            running: true,
        })
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        commands::names().collect()
    }

    pub fn prompt(&self) -> String {
        "budgety> ".to_string()
    }

    /// Start-up banner: current month and the zeroed budget.
    pub fn greet(&self) {
        if self.config.show_month_on_start {
            view::render_current_month();
        }
        view::render_budget(&BudgetSummary::empty());
    }

    /// Recomputes totals and shows them.
    pub fn update_budget(&mut self) {
        self.ledger.calculate_budget();
        view::render_budget(&self.ledger.budget());
    }

    /// Recomputes expense shares and shows them. Run after [`Self::update_budget`].
    pub fn update_percentages(&mut self) {
        self.ledger.calculate_percentages();
        let percentages = self.ledger.percentages();
        view::render_percentages(self.ledger.entries(EntryKind::Expense), &percentages);
    }
}
