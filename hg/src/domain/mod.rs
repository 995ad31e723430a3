//! Domain types for generated pages

pub mod course;
mod data;
mod theme;

pub use data::{
    ActivityItem, ActivitySection, ActivityType, CourseData, GENERATOR_NAME, GENERATOR_VERSION, Metadata, OutputData,
    SimplePageData, TemplateKind,
};
pub use theme::{Theme, ThemeStyle};
