//! htmlgen - template-driven page generator
//!
//! Collects a description of a simple page or an Oboe course page, renders
//! it through a Handlebars template and writes HTML and/or JSON files.
//!
//! # Pipeline
//!
//! ```text
//! prompt ──► RawInput ──► assemble ──► OutputData ──► Renderer ──► write_outputs
//!                            ▲                           ▲
//!                        Settings                  TemplateStore
//! ```
//!
//! # Example
//!
//! ```ignore
//! use htmlgen::{Generator, OutputFormat, RawInput, Request, Settings, Theme};
//!
//! let settings = Settings::from_env()?;
//! let report = Generator::new(&settings).generate(&Request {
//!     input: RawInput::Simple {
//!         title: "Hello".into(),
//!         content: "World".into(),
//!         theme: Some(Theme::Dark),
//!     },
//!     format: OutputFormat::Both,
//! })?;
//! println!("{:?}", report.files);
//! ```

pub mod assemble;
pub mod browser;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod templates;

pub use assemble::{RawInput, assemble, assemble_at};
pub use config::{LogLevel, RunMode, Settings};
pub use domain::{
    ActivityItem, ActivitySection, ActivityType, CourseData, Metadata, OutputData, SimplePageData, TemplateKind,
    Theme, ThemeStyle,
};
pub use error::{GenError, GenResult};
pub use generator::{GenerationReport, Generator, Request};
pub use output::{OutputFormat, RenderedOutput, read_json, write_outputs};
pub use prompt::{Prompter, RustylinePrompter, ScriptedPrompter, collect_request};
pub use templates::{Renderer, TemplateStore};
