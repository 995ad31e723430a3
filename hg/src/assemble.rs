//! Data assembly
//!
//! Turns raw user input into a template-ready `OutputData`. Assembly is pure
//! apart from reading the clock; `assemble_at` takes the clock explicitly.

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use crate::config::Settings;
use crate::domain::course::{
    DEFAULT_COURSE_DESCRIPTION, DEFAULT_COURSE_SUBTITLE, default_activity_sections, default_topic_list,
};
use crate::domain::{CourseData, Metadata, OutputData, SimplePageData, TemplateKind, Theme};
use crate::error::{GenError, GenResult};

/// Raw fields collected from the user, before defaults are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    Simple {
        title: String,
        content: String,
        theme: Option<Theme>,
    },
    Course {
        title: String,
        subtitle: Option<String>,
        description: Option<String>,
        image: Option<String>,
    },
}

impl RawInput {
    pub fn kind(&self) -> TemplateKind {
        match self {
            RawInput::Simple { .. } => TemplateKind::Simple,
            RawInput::Course { .. } => TemplateKind::Course,
        }
    }
}

/// Assemble input using the current time
pub fn assemble(input: &RawInput, settings: &Settings) -> GenResult<OutputData> {
    assemble_at(input, settings, Utc::now())
}

/// Assemble input with an explicit timestamp
pub fn assemble_at(input: &RawInput, settings: &Settings, now: DateTime<Utc>) -> GenResult<OutputData> {
    debug!(kind = %input.kind(), "assemble_at: called");
    let timestamp = iso_timestamp(now);

    match input {
        RawInput::Simple { title, content, theme } => {
            let title = require_title(title)?;
            if content.trim().is_empty() {
                return Err(GenError::InvalidInput("page content must not be empty".to_string()));
            }
            let theme = theme.unwrap_or(settings.default_theme);
            debug!(%theme, "assemble_at: built simple page data");
            Ok(OutputData::Simple(SimplePageData {
                title,
                content: content.clone(),
                theme,
                timestamp,
                metadata: Metadata::default(),
            }))
        }
        RawInput::Course {
            title,
            subtitle,
            description,
            image,
        } => {
            let title = require_title(title)?;
            debug!(site_name = %settings.site_name, "assemble_at: built course data");
            Ok(OutputData::Course(CourseData {
                title: title.clone(),
                timestamp,
                metadata: Metadata::default(),
                site_name: settings.site_name.clone(),
                course_title: title,
                course_subtitle: non_blank(subtitle).unwrap_or_else(|| DEFAULT_COURSE_SUBTITLE.to_string()),
                course_description: non_blank(description).unwrap_or_else(|| DEFAULT_COURSE_DESCRIPTION.to_string()),
                course_image: non_blank(image),
                activity_sections: default_activity_sections(),
                topic_list: default_topic_list(),
            }))
        }
    }
}

/// RFC 3339 with millisecond precision and a `Z` suffix
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn require_title(title: &str) -> GenResult<String> {
    if title.trim().is_empty() {
        return Err(GenError::InvalidInput("title must not be empty".to_string()));
    }
    Ok(title.to_string())
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}
