//! Binds output data to its template

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::debug;

use super::store::TemplateStore;
use crate::domain::{CourseData, OutputData, SimplePageData, ThemeStyle};
use crate::error::GenResult;

/// Flat context handed to the simple page template
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContext<'a> {
    pub title: &'a str,
    pub content: &'a str,
    /// Display form of the record timestamp
    pub timestamp: String,
    pub generator: &'a str,
    pub version: &'a str,
    #[serde(flatten)]
    pub style: &'static ThemeStyle,
}

impl<'a> PageContext<'a> {
    pub fn new(page: &'a SimplePageData) -> Self {
        debug!(theme = %page.theme, "PageContext::new: called");
        Self {
            title: &page.title,
            content: &page.content,
            timestamp: display_timestamp(&page.timestamp),
            generator: &page.metadata.generator,
            version: &page.metadata.version,
            style: page.theme.style(),
        }
    }
}

/// Render an RFC 3339 stamp in local time; unparseable stamps pass through
pub fn display_timestamp(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => {
            debug!(%timestamp, "display_timestamp: not RFC 3339, using as-is");
            timestamp.to_string()
        }
    }
}

/// Renders output data through the template for its kind
pub struct Renderer<'a> {
    store: &'a TemplateStore,
}

impl<'a> Renderer<'a> {
    pub fn new(store: &'a TemplateStore) -> Self {
        Self { store }
    }

    pub fn render(&self, data: &OutputData) -> GenResult<String> {
        let name = data.kind().template_name();
        debug!(%name, "Renderer::render: called");
        match data {
            OutputData::Simple(page) => self.render_page(name, page),
            OutputData::Course(course) => self.render_course(name, course),
        }
    }

    fn render_page(&self, name: &str, page: &SimplePageData) -> GenResult<String> {
        let context = PageContext::new(page);
        self.store.render(name, &context)
    }

    fn render_course(&self, name: &str, course: &CourseData) -> GenResult<String> {
        debug!(
            sections = course.activity_sections.len(),
            topics = course.topic_list.len(),
            "Renderer::render_course: rendering"
        );
        self.store.render(name, course)
    }
}
