use anyhow::Result;

use habikino_rating::cli::Command;
use habikino_rating::{
    handle_adjust, handle_history, handle_names, handle_roster, handle_serve, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Roster { input, json } => handle_roster(input.as_deref(), *json),
        Command::Names { input } => handle_names(input.as_deref()),
        Command::Adjust {
            reference,
            losses,
            input,
            json,
        } => handle_adjust(*reference, losses, input.as_deref(), *json),
        Command::History {
            csv,
            members,
            roster,
            from,
            to,
            json,
        } => handle_history(csv.as_deref(), members, roster.as_deref(), *from, *to, *json),
        Command::Serve { port, csv } => handle_serve(*port, csv.clone()),
    }
}
