//! Output data records
//!
//! `OutputData` is what the assembler produces and what the renderer and the
//! JSON writer consume. Field names serialize in camelCase because templates
//! refer to them that way (`{{courseTitle}}`, `{{#each activitySections}}`).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::theme::Theme;

/// Generator name stamped into every record
pub const GENERATOR_NAME: &str = "script-html-generator";

/// Generator version stamped into every record
pub const GENERATOR_VERSION: &str = "1.0.0";

/// Media type of an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Video,
    Audio,
    Text,
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActivityType::Video => "video",
            ActivityType::Audio => "audio",
            ActivityType::Text => "text",
        };
        write!(f, "{}", s)
    }
}

/// A single unit of course content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub title: String,
    pub content: String,
    /// Human-readable estimate such as "10 min read"
    pub time: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_type: Option<String>,
}

impl ActivityItem {
    pub fn new(title: &str, content: &str, time: &str, activity_type: ActivityType, icon: &str) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
            time: time.to_string(),
            activity_type,
            icon: icon.to_string(),
            sidebar_type: None,
        }
    }

    /// Attach a sidebar variant tag
    pub fn with_sidebar(mut self, sidebar_type: &str) -> Self {
        self.sidebar_type = Some(sidebar_type.to_string());
        self
    }
}

/// Ordered group of activities under a heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySection {
    pub section_title: String,
    pub section_description: String,
    pub activities: Vec<ActivityItem>,
}

/// Generator identification attached to every record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub generator: String,
    pub version: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            generator: GENERATOR_NAME.to_string(),
            version: GENERATOR_VERSION.to_string(),
        }
    }
}

/// Record for the simple page template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplePageData {
    pub title: String,
    pub content: String,
    pub theme: Theme,
    /// RFC 3339 instant, UTC
    pub timestamp: String,
    pub metadata: Metadata,
}

/// Record for the course page template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseData {
    pub title: String,
    pub timestamp: String,
    pub metadata: Metadata,
    pub site_name: String,
    pub course_title: String,
    pub course_subtitle: String,
    pub course_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_image: Option<String>,
    pub activity_sections: Vec<ActivitySection>,
    pub topic_list: Vec<String>,
}

/// Which template family a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    Simple,
    Course,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 2] = [TemplateKind::Simple, TemplateKind::Course];

    /// Name of the template file (without extension)
    pub fn template_name(&self) -> &'static str {
        match self {
            TemplateKind::Simple => "page",
            TemplateKind::Course => "oboe-course",
        }
    }

    /// Prefix used for output file names
    pub fn file_prefix(&self) -> &'static str {
        match self {
            TemplateKind::Simple => "output",
            TemplateKind::Course => "oboe-course",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Simple => "simple",
            TemplateKind::Course => "course",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemplateKind::Simple => "Simple page",
            TemplateKind::Course => "Oboe course page",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fully assembled, template-ready record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum OutputData {
    Simple(SimplePageData),
    Course(CourseData),
}

impl OutputData {
    pub fn kind(&self) -> TemplateKind {
        match self {
            OutputData::Simple(_) => TemplateKind::Simple,
            OutputData::Course(_) => TemplateKind::Course,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            OutputData::Simple(page) => &page.title,
            OutputData::Course(course) => &course.title,
        }
    }

    pub fn timestamp(&self) -> &str {
        match self {
            OutputData::Simple(page) => &page.timestamp,
            OutputData::Course(course) => &course.timestamp,
        }
    }

    pub fn metadata(&self) -> &Metadata {
        match self {
            OutputData::Simple(page) => &page.metadata,
            OutputData::Course(course) => &course.metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page() -> SimplePageData {
        SimplePageData {
            title: "Test".to_string(),
            content: "Body".to_string(),
            theme: Theme::Dark,
            timestamp: "2023-01-01T00:00:00.000Z".to_string(),
            metadata: Metadata::default(),
        }
    }

    #[test]
    fn test_activity_item_omits_missing_sidebar() {
        let item = ActivityItem::new("Flashcards", "Cards", "5 min drill", ActivityType::Text, "📚");
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], "text");
        assert!(value.get("sidebarType").is_none());

        let item = item.with_sidebar("deep-dive");
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["sidebarType"], "deep-dive");
    }

    #[test]
    fn test_output_data_is_tagged() {
        let data = OutputData::Simple(sample_page());
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["kind"], "simple");
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["metadata"]["generator"], GENERATOR_NAME);
    }

    #[test]
    fn test_output_data_accessors() {
        let data = OutputData::Simple(sample_page());
        assert_eq!(data.kind(), TemplateKind::Simple);
        assert_eq!(data.title(), "Test");
        assert_eq!(data.timestamp(), "2023-01-01T00:00:00.000Z");
        assert_eq!(data.metadata().version, GENERATOR_VERSION);
    }

    #[test]
    fn test_template_kind_names() {
        assert_eq!(TemplateKind::Simple.template_name(), "page");
        assert_eq!(TemplateKind::Course.template_name(), "oboe-course");
        assert_eq!(TemplateKind::Simple.file_prefix(), "output");
        assert_eq!(TemplateKind::Course.file_prefix(), "oboe-course");
    }
}
