//! Core CLI dispatch, error types, and shell context helpers.

use std::io;

use rustyline::error::ReadlineError;
use strsim::levenshtein;

use crate::errors::{ConfigError, InputError};

use super::commands;
use super::io as cli_io;
pub use super::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Largest edit distance still offered as a "did you mean" suggestion.
const SUGGESTION_DISTANCE: usize = 3;

impl ShellContext {
    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(entry) = commands::find(command) {
            match (entry.handler)(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match super::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                self.print_warning(&err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };

        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = commands::names()
            .map(|key| (levenshtein(key, &needle), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= SUGGESTION_DISTANCE {
                cli_io::print_info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action("Exit shell?").map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::Input(err) => {
                // Rejected input never reaches the ledger.
                self.print_warning(&err.to_string());
                self.print_hint("Use `help add` or `help delete` for usage details.");
            }
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                self.print_hint("Use `help <command>` for usage details.");
            }
            other => self.print_error(&other.to_string()),
        }
    }

    pub(crate) fn print_error(&self, message: &str) {
        cli_io::print_error(message);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }

    pub(crate) fn print_hint(&self, message: &str) {
        cli_io::print_hint(message);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

/// Errors that end the shell session.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

#[cfg(test)]
pub(crate) fn process_script(
    config_manager: crate::config::ConfigManager,
    lines: &[&str],
) -> Result<ShellContext, CliError> {
    let mut app = ShellContext::with_config_manager(CliMode::Script, config_manager)?;
    for line in lines {
        match app.process_line(line)? {
            LoopControl::Continue => {}
            LoopControl::Exit => break,
        }
    }
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use crate::ledger::{BudgetSummary, EntryKind};
    use tempfile::TempDir;

    fn run(lines: &[&str]) -> (ShellContext, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let manager =
            ConfigManager::with_base_dir(temp.path().to_path_buf()).expect("config manager");
        let app = process_script(manager, lines).expect("script runs");
        (app, temp)
    }

    #[test]
    fn add_and_delete_refresh_derived_state() {
        let (app, _temp) = run(&[
            "add income Salary 2000",
            "add expense Rent 800",
        ]);
        assert_eq!(
            app.ledger.budget(),
            BudgetSummary {
                budget: 1200.0,
                total_income: 2000.0,
                total_expense: 800.0,
                percentage: 40,
            }
        );
        assert_eq!(app.ledger.percentages(), vec![40]);

        let (app, _temp) = run(&[
            "add income Salary 2000",
            "add expense Rent 800",
            "delete expense-0",
        ]);
        assert_eq!(app.ledger.budget().budget, 2000.0);
        assert_eq!(app.ledger.budget().percentage, 0);
    }

    #[test]
    fn invalid_input_does_not_touch_ledger() {
        let temp = TempDir::new().expect("temp dir");
        let manager =
            ConfigManager::with_base_dir(temp.path().to_path_buf()).expect("config manager");
        let mut app =
            ShellContext::with_config_manager(CliMode::Script, manager).expect("context");
        for line in ["add expense Coffee -5", "add expense \"  \" 5", "add gift Pen 3"] {
            let err = app.process_line(line).expect_err("input rejected");
            assert!(matches!(err, CommandError::Input(_)), "unexpected: {err}");
        }
        assert!(app.ledger.is_empty());
    }

    #[test]
    fn multi_word_descriptions_are_joined() {
        let (app, _temp) = run(&["add expense Weekly groceries run 42.5"]);
        let entry = &app.ledger.entries(EntryKind::Expense)[0];
        assert_eq!(entry.description, "Weekly groceries run");
        assert_eq!(entry.value, 42.5);
    }

    #[test]
    fn exit_stops_processing() {
        let (app, _temp) = run(&["exit", "add income Salary 10"]);
        assert!(!app.running);
        assert!(app.ledger.is_empty());
    }

    #[test]
    fn config_set_persists() {
        let (app, temp) = run(&["config set quiet_mode true"]);
        assert!(app.config.quiet_mode);
        let reloaded = ConfigManager::with_base_dir(temp.path().to_path_buf())
            .and_then(|manager| manager.load())
            .expect("reload config");
        assert!(reloaded.quiet_mode);
    }
}
