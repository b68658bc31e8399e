//! Todo List - Main Entry Point
//!
//! Command line front end. The actual implementation is in the `todo_list`
//! library.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use todo_list::{Filter, TodoHandler, TodoId, date, logging, shell, validation};

/// Todo List - keep track of what is due today, overdue or scheduled
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the todo data file
    #[arg(env = "TODO_LIST_FILE")]
    file: String,

    /// View to show after each command
    #[arg(long, global = true, value_enum, ignore_case = true, default_value_t = Filter::All)]
    filter: Filter,

    /// Treat this date as today (YYYY-MM-DD or DD/MM/YYYY)
    #[arg(long, global = true, value_parser = date::parse_date)]
    today: Option<NaiveDate>,

    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = logging::DEFAULT_LOG_LEVEL)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new todo
    Add {
        /// Due date (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(long, short)]
        date: String,
        /// Todo text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Mark a todo completed, or pending again
    Toggle {
        /// Todo ID
        #[arg(value_parser = validation::parse_id)]
        id: TodoId,
    },
    /// Remove a todo
    Delete {
        /// Todo ID
        #[arg(value_parser = validation::parse_id)]
        id: TodoId,
    },
    /// Show the selected view
    List,
    /// Start an interactive session
    Shell,
}

fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    logging::init_logging(&args.log_level)?;

    let stdin = io::stdin();
    run(args, stdin.lock(), io::stdout().lock())
}

/// Apply the parsed command and write the resulting view to `output`
///
/// `input` is only read by the interactive shell.
fn run<R: BufRead, W: Write>(args: Args, input: R, mut output: W) -> Result<()> {
    let fixed_today = args.today;
    let today = move || fixed_today.unwrap_or_else(date::local_date_today);

    let mut handler = TodoHandler::new(&args.file);
    handler.set_active_filter(args.filter);

    match args.command {
        Command::Add { date: due, text } => {
            if handler.handle_create(&text.join(" "), &due)?.is_none() {
                eprintln!("Nothing added: text and date are required");
            }
        }
        Command::Toggle { id } => {
            if handler.handle_toggle_state(id)?.is_none() {
                eprintln!("No todo with ID {}", id);
            }
        }
        Command::Delete { id } => {
            if handler.handle_delete(id)?.is_none() {
                eprintln!("No todo with ID {}", id);
            }
        }
        Command::List => {}
        Command::Shell => return shell::run_shell(&mut handler, today, input, output),
    }

    writeln!(output, "{}", handler.handle_list(None, today()).trim_end())?;
    Ok(())
}
