//! Interactive prompting
//!
//! The flow (`PromptFlow`) decides which question comes next; a `Prompter`
//! shows it to the user. `RustylinePrompter` talks to the terminal and
//! `ScriptedPrompter` replays canned answers.

mod flow;
mod scripted;
mod terminal;

pub use flow::{
    Answer, Answers, Choice, DEFAULT_PAGE_CONTENT, DEFAULT_PAGE_TITLE, Prompt, PromptFlow, PromptKind, Question,
};
pub use scripted::ScriptedPrompter;
pub use terminal::RustylinePrompter;

use tracing::{debug, info};

use crate::config::Settings;
use crate::error::GenResult;
use crate::generator::Request;

/// Source of user answers. `Ok(None)` means the user cancelled.
pub trait Prompter {
    /// Ask for free text; an empty answer means "use the initial value"
    fn text(&mut self, message: &str, initial: &str) -> GenResult<Option<String>>;

    /// Ask the user to pick one of `choices`, returning its index
    fn select(&mut self, message: &str, choices: &[Choice], initial: usize) -> GenResult<Option<usize>>;

    /// Ask a yes/no question
    fn confirm(&mut self, message: &str, default: bool) -> GenResult<Option<bool>>;
}

/// Run the question flow to completion
///
/// Returns `Ok(None)` if the user cancels at any question.
pub fn collect_request(prompter: &mut dyn Prompter, settings: &Settings) -> GenResult<Option<Request>> {
    let flow = PromptFlow::new(settings);
    let mut answers = Answers::default();

    while let Some(question) = flow.next_question(&answers) {
        let prompt = flow.prompt_for(question, &answers);
        let answer = match &prompt.kind {
            PromptKind::Text { initial } => prompter.text(&prompt.message, initial)?.map(Answer::Text),
            PromptKind::Select { choices, initial } => {
                prompter.select(&prompt.message, choices, *initial)?.map(Answer::Choice)
            }
        };

        let Some(answer) = answer else {
            info!(?question, "User cancelled the prompt");
            return Ok(None);
        };
        flow.apply(&mut answers, question, answer)?;
    }

    debug!(?answers, "collect_request: answers complete");
    answers.into_request().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::RawInput;
    use crate::domain::Theme;
    use crate::output::OutputFormat;

    #[test]
    fn test_collect_simple_request() {
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::Choice(0),
            Answer::Text("Test Title".to_string()),
            Answer::Text("Test Content".to_string()),
            Answer::Choice(0),
            Answer::Choice(0),
        ]);
        let request = collect_request(&mut prompter, &Settings::default()).unwrap().unwrap();
        assert_eq!(request.format, OutputFormat::Html);
        assert_eq!(
            request.input,
            RawInput::Simple {
                title: "Test Title".to_string(),
                content: "Test Content".to_string(),
                theme: Some(Theme::Light),
            }
        );
        assert!(prompter.is_exhausted());
    }

    #[test]
    fn test_collect_course_request_with_defaults() {
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::Choice(1),
            Answer::Text(String::new()),
            Answer::Text(String::new()),
            Answer::Text(String::new()),
            Answer::Text(String::new()),
            Answer::Choice(2),
        ]);
        let request = collect_request(&mut prompter, &Settings::default()).unwrap().unwrap();
        let RawInput::Course { title, image, .. } = request.input else {
            panic!("expected course input");
        };
        assert_eq!(title, crate::domain::course::DEFAULT_COURSE_TITLE);
        assert_eq!(image.as_deref(), Some(""));
        assert_eq!(request.format, OutputFormat::Both);
    }

    #[test]
    fn test_cancel_at_every_question() {
        let full = vec![
            Answer::Choice(0),
            Answer::Text("T".to_string()),
            Answer::Text("C".to_string()),
            Answer::Choice(0),
            Answer::Choice(0),
        ];
        for cut in 0..full.len() {
            let mut prompter = ScriptedPrompter::new(full[..cut].to_vec());
            let result = collect_request(&mut prompter, &Settings::default()).unwrap();
            assert!(result.is_none(), "cancelling after {} answers should yield None", cut);
        }
    }
}
