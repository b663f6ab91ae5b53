use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::input::{parse_item_input, parse_item_ref};
use crate::cli::{help, io as cli_io, output, view};
use crate::utils::build_info;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

/// Every shell command, in help order.
pub(crate) static COMMANDS: &[CommandEntry] = &[
    CommandEntry::new(
        "add",
        "Record an income or expense entry",
        "add <income|expense> <description> <amount>",
        cmd_add,
    ),
    CommandEntry::new(
        "delete",
        "Remove an entry by its item id",
        "delete <type>-<id> | delete <type> <id>",
        cmd_delete,
    ),
    CommandEntry::new("list", "Show all entries", "list", cmd_list),
    CommandEntry::new(
        "budget",
        "Show the available budget and totals",
        "budget",
        cmd_budget,
    ),
    CommandEntry::new(
        "percentages",
        "Show each expense as a share of income",
        "percentages",
        cmd_percentages,
    ),
    CommandEntry::new("month", "Show the current month", "month", cmd_month),
    CommandEntry::new("dump", "Print the ledger state as JSON", "dump", cmd_dump),
    CommandEntry::new(
        "config",
        "Show or change display preferences",
        "config [show | set <key> <true|false>]",
        cmd_config,
    ),
    CommandEntry::new("version", "Show build metadata", "version", cmd_version),
    CommandEntry::new(
        "help",
        "Show available commands",
        "help [command]",
        cmd_help,
    ),
    CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
];

/// Looks a command up by name, ignoring ASCII case.
pub(crate) fn find(name: &str) -> Option<&'static CommandEntry> {
    COMMANDS
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
}

pub(crate) fn names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|entry| entry.name)
}

fn usage_error(name: &str) -> CommandError {
    let usage = find(name).map(|entry| entry.usage).unwrap_or(name);
    CommandError::InvalidArguments(format!("usage: {}", usage))
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [kind, description @ .., value] = args else {
        return Err(usage_error("add"));
    };
    if description.is_empty() {
        return Err(usage_error("add"));
    }
    let input = parse_item_input(kind, &description.join(" "), value)?;
    let entry = context
        .ledger
        .add_item(input.kind, input.description, input.value);
    view::render_item(&entry);
    context.update_budget();
    context.update_percentages();
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(usage_error("delete"));
    }
    let (kind, id) = parse_item_ref(args)?;
    match context.ledger.delete_item(kind, id) {
        Some(entry) => {
            cli_io::print_success(format!(
                "Deleted {} ({}).",
                entry.item_id(),
                entry.description
            ));
            context.update_budget();
            context.update_percentages();
        }
        None => cli_io::print_info(format!("No {} entry with id {}.", kind, id)),
    }
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    view::render_ledger(&context.ledger);
    Ok(())
}

fn cmd_budget(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    view::render_budget(&context.ledger.budget());
    Ok(())
}

fn cmd_percentages(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let expenses = context.ledger.entries(crate::ledger::EntryKind::Expense);
    if expenses.is_empty() {
        cli_io::print_info("No expenses recorded.");
        return Ok(());
    }
    view::render_percentages(expenses, &context.ledger.percentages());
    Ok(())
}

fn cmd_month(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    view::render_current_month();
    Ok(())
}

fn cmd_dump(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let json = serde_json::to_string_pretty(&context.ledger)?;
    output::plain(json);
    Ok(())
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            output::section("Configuration");
            for (key, value) in context.config.entries() {
                output::plain(format!("{:<22} {}", key, value));
            }
            output::hint(format!("Stored at {}", context.config_manager.path().display()));
            Ok(())
        }
        ["set", key, value] => {
            context.config.set(key, value)?;
            context.config_manager.save(&context.config)?;
            output::apply_config(&context.config);
            tracing::info!(key = %key, value = %value, "configuration updated");
            cli_io::print_success("Configuration updated.");
            Ok(())
        }
        _ => Err(usage_error("config")),
    }
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("Budgety {}", meta.version));
    for (label, value) in meta.rows() {
        output::plain(format!("{:<12} {}", label, value));
    }
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match find(name) {
            Some(entry) => help::print_command(entry),
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    help::print_overview(COMMANDS);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
