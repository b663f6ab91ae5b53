use crate::cli::commands::CommandEntry;
use crate::cli::output;

pub fn print_overview(commands: &[CommandEntry]) {
    output::section("Available commands");
    for entry in commands {
        output::plain(format!("  {:<12} {}", entry.name, entry.description));
    }
    output::hint("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    output::section(format!("Help: {}", entry.name));
    output::plain(format!("description: {}", entry.description));
    output::plain(format!("usage:       {}", entry.usage));
}
