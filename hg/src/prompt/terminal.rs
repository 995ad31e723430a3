//! Terminal prompter backed by rustyline

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use super::{Choice, Prompter};
use crate::error::{GenError, GenResult};

/// Reads answers from the terminal; Ctrl-C and Ctrl-D cancel
pub struct RustylinePrompter {
    rl: DefaultEditor,
}

impl RustylinePrompter {
    pub fn new() -> GenResult<Self> {
        let rl = DefaultEditor::new().map_err(|e| GenError::Prompt(format!("Failed to initialize readline: {}", e)))?;
        Ok(Self { rl })
    }

    /// Read one line; `None` on interrupt or end of input
    fn read_line(&mut self, prompt: &str) -> GenResult<Option<String>> {
        match self.rl.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                debug!("RustylinePrompter::read_line: input cancelled");
                Ok(None)
            }
            Err(err) => Err(GenError::Prompt(format!("Readline error: {}", err))),
        }
    }
}

impl Prompter for RustylinePrompter {
    fn text(&mut self, message: &str, initial: &str) -> GenResult<Option<String>> {
        let prompt = if initial.is_empty() {
            format!("{} {} ", "?".bright_green(), message.bold())
        } else {
            format!("{} {} ({}) ", "?".bright_green(), message.bold(), initial.dimmed())
        };
        self.read_line(&prompt)
    }

    fn select(&mut self, message: &str, choices: &[Choice], initial: usize) -> GenResult<Option<usize>> {
        println!("{} {}", "?".bright_green(), message.bold());
        for (i, choice) in choices.iter().enumerate() {
            let marker = if i == initial { ">".cyan() } else { " ".normal() };
            println!("{} {}) {}", marker, i + 1, choice.label);
        }

        loop {
            let Some(line) = self.read_line(&format!("  Choose [{}]: ", initial + 1))? else {
                return Ok(None);
            };
            match parse_choice(&line, choices, initial) {
                Some(index) => return Ok(Some(index)),
                None => println!("  {} Enter a number between 1 and {}", "!".yellow(), choices.len()),
            }
        }
    }

    fn confirm(&mut self, message: &str, default: bool) -> GenResult<Option<bool>> {
        let hint = if default { "Y/n" } else { "y/N" };
        loop {
            let Some(line) = self.read_line(&format!("{} {} ({}) ", "?".bright_green(), message.bold(), hint))? else {
                return Ok(None);
            };
            match parse_confirm(&line, default) {
                Some(answer) => return Ok(Some(answer)),
                None => println!("  {} Please answer y or n", "!".yellow()),
            }
        }
    }
}

/// Resolve a select answer given as a 1-based index, a value or a label
pub fn parse_choice(input: &str, choices: &[Choice], initial: usize) -> Option<usize> {
    let input = input.trim();
    if input.is_empty() {
        return (initial < choices.len()).then_some(initial);
    }
    if let Ok(n) = input.parse::<usize>() {
        return (n >= 1 && n <= choices.len()).then(|| n - 1);
    }
    choices
        .iter()
        .position(|c| c.value.eq_ignore_ascii_case(input) || c.label.eq_ignore_ascii_case(input))
}

/// Resolve a yes/no answer; empty input takes the default
pub fn parse_confirm(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
