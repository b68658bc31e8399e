//! Interactive command loop
//!
//! Reads one command per line, applies it to a [`TodoHandler`] and prints the
//! active view after every change. Bad input is reported and the loop keeps
//! going.

use crate::TodoHandler;
use crate::todo::{Filter, TodoId};
use crate::validation;
use anyhow::{Result, bail};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

pub const HELP: &str = "\
Commands:
  add <date> <text...>   add a todo due on <date> (YYYY-MM-DD or DD/MM/YYYY)
  toggle <id>            mark a todo completed, or pending again
  delete <id>            remove a todo
  filter <name>          show all, today, overdue, scheduled, pending or completed
  list                   show the current view
  help                   show this message
  quit                   leave the shell";

const PROMPT: &str = "> ";

/// One parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add { date: String, text: String },
    Toggle(TodoId),
    Delete(TodoId),
    Filter(Filter),
    List,
    Help,
    Quit,
    /// Blank line
    Nothing,
}

impl ShellCommand {
    /// Parse a single input line
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "" => ShellCommand::Nothing,
            "add" => {
                let Some((date, text)) = rest.split_once(char::is_whitespace) else {
                    bail!("Usage: add <date> <text...>");
                };
                ShellCommand::Add {
                    date: date.to_string(),
                    text: text.trim().to_string(),
                }
            }
            "toggle" => ShellCommand::Toggle(validation::parse_id(rest)?),
            "delete" | "rm" => ShellCommand::Delete(validation::parse_id(rest)?),
            "filter" => ShellCommand::Filter(validation::parse_filter(rest)?),
            "list" | "ls" => ShellCommand::List,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => bail!("Unknown command '{}'. Type 'help' for a list of commands", other),
        };
        Ok(command)
    }
}

impl TodoHandler {
    /// Apply one command and return the text to print
    ///
    /// Mutations that hit an unknown ID or empty input change nothing but
    /// still re-render the active view.
    pub fn execute(&mut self, command: ShellCommand, today: NaiveDate) -> Result<String> {
        let output = match command {
            ShellCommand::Add { date, text } => {
                self.handle_create(&text, &date)?;
                self.handle_list(None, today)
            }
            ShellCommand::Toggle(id) => {
                self.handle_toggle_state(id)?;
                self.handle_list(None, today)
            }
            ShellCommand::Delete(id) => {
                self.handle_delete(id)?;
                self.handle_list(None, today)
            }
            ShellCommand::Filter(filter) => self.handle_filter(filter, today),
            ShellCommand::List => self.handle_list(None, today),
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::Quit | ShellCommand::Nothing => String::new(),
        };
        Ok(output)
    }
}

/// Run the shell until `quit` or end of input
///
/// # Arguments
/// * `handler` - Session to operate on
/// * `today` - Called before each command to get the reference date
/// * `input` - Source of command lines
/// * `output` - Where views, help and error messages are written
pub fn run_shell<R, W, F>(
    handler: &mut TodoHandler,
    today: F,
    input: R,
    mut output: W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: Fn() -> NaiveDate,
{
    writeln!(output, "{}", handler.handle_list(None, today()))?;
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        match ShellCommand::parse(&line) {
            Ok(ShellCommand::Quit) => return Ok(()),
            Ok(command) => match handler.execute(command, today()) {
                Ok(text) if text.is_empty() => {}
                Ok(text) => writeln!(output, "{}", text.trim_end())?,
                Err(e) => writeln!(output, "Error: {:#}", e)?,
            },
            Err(e) => writeln!(output, "Error: {:#}", e)?,
        }
        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    Ok(())
}
