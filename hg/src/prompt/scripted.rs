//! Prompter that replays a fixed list of answers

use std::collections::VecDeque;

use super::{Answer, Choice, Prompter};
use crate::error::{GenError, GenResult};

/// Replays canned answers in order; running out counts as a cancel
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    confirms: VecDeque<bool>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            confirms: VecDeque::new(),
        }
    }

    /// Queue answers for `confirm` calls
    pub fn with_confirms(mut self, confirms: Vec<bool>) -> Self {
        self.confirms = confirms.into();
        self
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty()
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&mut self, message: &str, _initial: &str) -> GenResult<Option<String>> {
        match self.answers.pop_front() {
            None => Ok(None),
            Some(Answer::Text(value)) => Ok(Some(value)),
            Some(other) => Err(GenError::Prompt(format!("expected text for '{}', got {:?}", message, other))),
        }
    }

    fn select(&mut self, message: &str, _choices: &[Choice], _initial: usize) -> GenResult<Option<usize>> {
        match self.answers.pop_front() {
            None => Ok(None),
            Some(Answer::Choice(index)) => Ok(Some(index)),
            Some(other) => Err(GenError::Prompt(format!("expected a choice for '{}', got {:?}", message, other))),
        }
    }

    fn confirm(&mut self, _message: &str, _default: bool) -> GenResult<Option<bool>> {
        Ok(self.confirms.pop_front())
    }
}
