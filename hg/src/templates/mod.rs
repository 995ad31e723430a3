//! Template System
//!
//! Loads `.hbs` files from the templates directory and renders output data
//! through them.
//!
//! - Simple pages use `page.hbs` with the theme's style attributes merged in
//! - Course pages use `oboe-course.hbs` with the course record as-is
//!
//! Templates use Handlebars syntax for variable substitution.

mod render;
mod store;

pub use render::{PageContext, Renderer, display_timestamp};
pub use store::{TEMPLATE_EXTENSIONS, TemplateStore};
