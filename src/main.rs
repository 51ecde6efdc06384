use anyhow::Result;

use pingpong_league::cli::Command;
use pingpong_league::{handle_report, handle_serve, interpret};

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
    execute_command(command)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Serve { port, upstream } => handle_serve(port, upstream),
        Command::Report { file, upstream } => handle_report(file, upstream),
    }
}
