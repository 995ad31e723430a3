//! Question sequencing
//!
//! `PromptFlow::next_question` looks only at the answers collected so far and
//! returns the next question to ask, or `None` once the request is complete.

use tracing::debug;

use crate::assemble::RawInput;
use crate::config::Settings;
use crate::domain::course::{DEFAULT_COURSE_DESCRIPTION, DEFAULT_COURSE_SUBTITLE, DEFAULT_COURSE_TITLE};
use crate::domain::{TemplateKind, Theme};
use crate::error::{GenError, GenResult};
use crate::generator::Request;
use crate::output::OutputFormat;

pub const DEFAULT_PAGE_TITLE: &str = "My Page";
pub const DEFAULT_PAGE_CONTENT: &str = "This page was generated by a script";

/// A question in the interactive flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    TemplateKind,
    Title,
    Content,
    Theme,
    CourseSubtitle,
    CourseDescription,
    CourseImage,
    OutputFormat,
}

/// One selectable option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// How a question is presented
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    Text { initial: String },
    Select { choices: Vec<Choice>, initial: usize },
}

/// A question ready to show to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub message: String,
    pub kind: PromptKind,
}

/// A raw answer from a prompter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Choice(usize),
}

/// Answers collected so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub template_kind: Option<TemplateKind>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub theme: Option<Theme>,
    pub course_subtitle: Option<String>,
    pub course_description: Option<String>,
    pub course_image: Option<String>,
    pub output_format: Option<OutputFormat>,
}

impl Answers {
    /// Convert a finished set of answers into a generation request
    pub fn into_request(self) -> GenResult<Request> {
        let incomplete = |what: &str| GenError::Prompt(format!("missing answer for {}", what));

        let kind = self.template_kind.ok_or_else(|| incomplete("template type"))?;
        let title = self.title.ok_or_else(|| incomplete("title"))?;
        let format = self.output_format.ok_or_else(|| incomplete("output format"))?;

        let input = match kind {
            TemplateKind::Simple => RawInput::Simple {
                title,
                content: self.content.ok_or_else(|| incomplete("content"))?,
                theme: self.theme,
            },
            TemplateKind::Course => RawInput::Course {
                title,
                subtitle: self.course_subtitle,
                description: self.course_description,
                image: self.course_image,
            },
        };

        Ok(Request { input, format })
    }
}

/// State machine driving the interactive questions
#[derive(Debug, Clone)]
pub struct PromptFlow {
    default_theme: Theme,
}

impl PromptFlow {
    pub fn new(settings: &Settings) -> Self {
        Self {
            default_theme: settings.default_theme,
        }
    }

    /// Next unanswered question, or `None` when the answers are complete
    pub fn next_question(&self, answers: &Answers) -> Option<Question> {
        let Some(kind) = answers.template_kind else {
            return Some(Question::TemplateKind);
        };
        if answers.title.is_none() {
            return Some(Question::Title);
        }

        let next = match kind {
            TemplateKind::Simple => {
                if answers.content.is_none() {
                    Some(Question::Content)
                } else if answers.theme.is_none() {
                    Some(Question::Theme)
                } else {
                    None
                }
            }
            TemplateKind::Course => {
                if answers.course_subtitle.is_none() {
                    Some(Question::CourseSubtitle)
                } else if answers.course_description.is_none() {
                    Some(Question::CourseDescription)
                } else if answers.course_image.is_none() {
                    Some(Question::CourseImage)
                } else {
                    None
                }
            }
        };

        let next = next.or(if answers.output_format.is_none() {
            Some(Question::OutputFormat)
        } else {
            None
        });
        debug!(?next, "PromptFlow::next_question: resolved");
        next
    }

    /// Message, input kind and initial value for a question
    pub fn prompt_for(&self, question: Question, answers: &Answers) -> Prompt {
        let is_course = answers.template_kind == Some(TemplateKind::Course);
        let (message, kind) = match question {
            Question::TemplateKind => (
                "Choose a template type:",
                PromptKind::Select {
                    choices: TemplateKind::ALL
                        .iter()
                        .map(|k| Choice::new(k.label(), k.as_str()))
                        .collect(),
                    initial: 0,
                },
            ),
            Question::Title => (
                if is_course {
                    "Course title:"
                } else {
                    "Page title:"
                },
                text(if is_course { DEFAULT_COURSE_TITLE } else { DEFAULT_PAGE_TITLE }),
            ),
            Question::Content => ("Page content:", text(DEFAULT_PAGE_CONTENT)),
            Question::Theme => (
                "Choose a theme:",
                PromptKind::Select {
                    choices: Theme::ALL.iter().map(|t| Choice::new(t.label(), t.as_str())).collect(),
                    initial: Theme::ALL.iter().position(|t| *t == self.default_theme).unwrap_or(0),
                },
            ),
            Question::CourseSubtitle => ("Course subtitle:", text(DEFAULT_COURSE_SUBTITLE)),
            Question::CourseDescription => ("Course description:", text(DEFAULT_COURSE_DESCRIPTION)),
            Question::CourseImage => ("Course image URL (optional, leave blank for the default icon):", text("")),
            Question::OutputFormat => (
                "Choose an output format:",
                PromptKind::Select {
                    choices: OutputFormat::ALL
                        .iter()
                        .map(|f| Choice::new(f.label(), f.as_str()))
                        .collect(),
                    initial: OutputFormat::ALL
                        .iter()
                        .position(|f| *f == OutputFormat::Both)
                        .unwrap_or(0),
                },
            ),
        };
        Prompt {
            message: message.to_string(),
            kind,
        }
    }

    /// Record an answer; empty text falls back to the question's initial value
    pub fn apply(&self, answers: &mut Answers, question: Question, answer: Answer) -> GenResult<()> {
        debug!(?question, ?answer, "PromptFlow::apply: called");
        let prompt = self.prompt_for(question, answers);

        match (&prompt.kind, answer) {
            (PromptKind::Text { initial }, Answer::Text(value)) => {
                let value = if value.trim().is_empty() { initial.clone() } else { value };
                match question {
                    Question::Title => answers.title = Some(value),
                    Question::Content => answers.content = Some(value),
                    Question::CourseSubtitle => answers.course_subtitle = Some(value),
                    Question::CourseDescription => answers.course_description = Some(value),
                    Question::CourseImage => answers.course_image = Some(value),
                    _ => return Err(mismatch(question)),
                }
            }
            (PromptKind::Select { choices, .. }, Answer::Choice(index)) => {
                let choice = choices
                    .get(index)
                    .ok_or_else(|| GenError::Prompt(format!("choice {} out of range for {:?}", index, question)))?;
                let parse_err = |e: String| GenError::Prompt(e);
                match question {
                    Question::TemplateKind => {
                        answers.template_kind = Some(match choice.value.as_str() {
                            "course" => TemplateKind::Course,
                            _ => TemplateKind::Simple,
                        })
                    }
                    Question::Theme => answers.theme = Some(choice.value.parse().map_err(parse_err)?),
                    Question::OutputFormat => answers.output_format = Some(choice.value.parse().map_err(parse_err)?),
                    _ => return Err(mismatch(question)),
                }
            }
            _ => return Err(mismatch(question)),
        }
        Ok(())
    }
}

fn text(initial: &str) -> PromptKind {
    PromptKind::Text {
        initial: initial.to_string(),
    }
}

fn mismatch(question: Question) -> GenError {
    GenError::Prompt(format!("answer type does not match question {:?}", question))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow() -> PromptFlow {
        PromptFlow::new(&Settings::default())
    }

    /// Walk the flow, answering every question with the given answers in order
    fn walk(answers_in: Vec<Answer>) -> (Vec<Question>, Answers) {
        let flow = flow();
        let mut answers = Answers::default();
        let mut asked = Vec::new();
        let mut script = answers_in.into_iter();
        while let Some(q) = flow.next_question(&answers) {
            asked.push(q);
            let answer = script.next().expect("script ran out of answers");
            flow.apply(&mut answers, q, answer).unwrap();
        }
        (asked, answers)
    }

    #[test]
    fn test_simple_path_order() {
        let (asked, answers) = walk(vec![
            Answer::Choice(0),
            Answer::Text("Hello".to_string()),
            Answer::Text("Body".to_string()),
            Answer::Choice(1),
            Answer::Choice(0),
        ]);
        assert_eq!(
            asked,
            vec![
                Question::TemplateKind,
                Question::Title,
                Question::Content,
                Question::Theme,
                Question::OutputFormat,
            ]
        );
        assert_eq!(answers.theme, Some(Theme::Dark));
        assert_eq!(answers.output_format, Some(OutputFormat::Html));
    }

    #[test]
    fn test_course_path_order() {
        let (asked, answers) = walk(vec![
            Answer::Choice(1),
            Answer::Text(String::new()),
            Answer::Text(String::new()),
            Answer::Text("Custom description".to_string()),
            Answer::Text(String::new()),
            Answer::Choice(2),
        ]);
        assert_eq!(
            asked,
            vec![
                Question::TemplateKind,
                Question::Title,
                Question::CourseSubtitle,
                Question::CourseDescription,
                Question::CourseImage,
                Question::OutputFormat,
            ]
        );
        assert_eq!(answers.title.as_deref(), Some(DEFAULT_COURSE_TITLE));
        assert_eq!(answers.course_subtitle.as_deref(), Some(DEFAULT_COURSE_SUBTITLE));
        assert_eq!(answers.course_description.as_deref(), Some("Custom description"));
        assert_eq!(answers.course_image.as_deref(), Some(""));
        assert_eq!(answers.output_format, Some(OutputFormat::Both));
    }

    #[test]
    fn test_title_initial_depends_on_kind() {
        let flow = flow();
        let mut answers = Answers::default();
        let PromptKind::Text { initial } = flow.prompt_for(Question::Title, &answers).kind else {
            panic!("title should be a text prompt");
        };
        assert_eq!(initial, DEFAULT_PAGE_TITLE);

        answers.template_kind = Some(TemplateKind::Course);
        let prompt = flow.prompt_for(Question::Title, &answers);
        assert_eq!(prompt.message, "Course title:");
        assert_eq!(
            prompt.kind,
            PromptKind::Text {
                initial: DEFAULT_COURSE_TITLE.to_string()
            }
        );
    }

    #[test]
    fn test_theme_initial_follows_settings() {
        let settings = Settings {
            default_theme: Theme::Dark,
            ..Settings::default()
        };
        let flow = PromptFlow::new(&settings);
        let PromptKind::Select { initial, .. } = flow.prompt_for(Question::Theme, &Answers::default()).kind else {
            panic!("theme should be a select prompt");
        };
        assert_eq!(initial, 1);
    }

    #[test]
    fn test_apply_keeps_surrounding_whitespace() {
        let flow = flow();
        let mut answers = Answers::default();
        flow.apply(&mut answers, Question::TemplateKind, Answer::Choice(0)).unwrap();
        flow.apply(&mut answers, Question::Content, Answer::Text("  indented\n".to_string())).unwrap();
        assert_eq!(answers.content.as_deref(), Some("  indented\n"));

        flow.apply(&mut answers, Question::Title, Answer::Text("   ".to_string())).unwrap();
        assert_eq!(answers.title.as_deref(), Some(DEFAULT_PAGE_TITLE));
    }

    #[test]
    fn test_apply_rejects_out_of_range_choice() {
        let flow = flow();
        let mut answers = Answers::default();
        let err = flow
            .apply(&mut answers, Question::TemplateKind, Answer::Choice(7))
            .unwrap_err();
        assert!(matches!(err, GenError::Prompt(_)));
        assert_eq!(answers, Answers::default());
    }

    #[test]
    fn test_apply_rejects_mismatched_answer() {
        let flow = flow();
        let mut answers = Answers::default();
        assert!(flow.apply(&mut answers, Question::Title, Answer::Choice(0)).is_err());
        assert!(
            flow.apply(&mut answers, Question::OutputFormat, Answer::Text("html".to_string()))
                .is_err()
        );
    }

    #[test]
    fn test_into_request() {
        let (_, answers) = walk(vec![
            Answer::Choice(0),
            Answer::Text("Hello".to_string()),
            Answer::Text("Body".to_string()),
            Answer::Choice(0),
            Answer::Choice(1),
        ]);
        let request = answers.into_request().unwrap();
        assert_eq!(request.format, OutputFormat::Json);
        assert_eq!(
            request.input,
            RawInput::Simple {
                title: "Hello".to_string(),
                content: "Body".to_string(),
                theme: Some(Theme::Light),
            }
        );
    }

    #[test]
    fn test_into_request_incomplete() {
        let answers = Answers {
            template_kind: Some(TemplateKind::Simple),
            ..Answers::default()
        };
        assert!(answers.into_request().is_err());
    }
}
