use combine::parser::char::{char, letter, spaces};
use combine::parser::choice::choice;
use combine::parser::repeat::many1;
use combine::{eof, Parser};
use thiserror::Error;

/// Actions available from the home view's command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeCommand {
    Add,
    Complete,
    Reminders,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("Enter a command")]
    Empty,
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Could not parse: {0}")]
    Invalid(String),
}

pub const HELP: &str = "add (a)        open the new task form
complete (c)   complete the selected task
remind (r)     show tasks due today
quit (q)       exit
Up/Down select a task, Esc quits.";

pub fn parse_home_command(input: &str) -> Result<HomeCommand, CommandParseError> {
    if input.trim().is_empty() {
        return Err(CommandParseError::Empty);
    }
    let lower = input.to_ascii_lowercase();
    let mut word = spaces()
        .with(choice((
            many1::<String, _, _>(letter()),
            char('?').map(|c: char| c.to_string()),
        )))
        .skip(spaces())
        .skip(eof());
    let (word, _) = word
        .parse(lower.as_str())
        .map_err(|_| CommandParseError::Invalid(input.trim().to_owned()))?;

    Ok(match word.as_str() {
        "a" | "add" => HomeCommand::Add,
        "c" | "complete" | "done" => HomeCommand::Complete,
        "r" | "remind" | "reminders" => HomeCommand::Reminders,
        "h" | "help" | "?" => HomeCommand::Help,
        "q" | "quit" | "exit" => HomeCommand::Quit,
        _ => return Err(CommandParseError::UnknownCommand(word)),
    })
}
