//! Template Store
//!
//! Resolves template names to Handlebars source files in one directory.

use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{GenError, GenResult};

/// File extensions tried, in order, when resolving a template name
pub const TEMPLATE_EXTENSIONS: [&str; 3] = ["hbs", "handlebars", "html"];

/// Loads and renders Handlebars templates from a directory
///
/// A name resolves only to `{name}.hbs`, `{name}.handlebars` or `{name}.html`,
/// tried in that order. Files with any other extension are never found.
pub struct TemplateStore {
    /// Handlebars template engine
    hbs: Handlebars<'static>,
    /// Directory holding `{name}.hbs` files
    dir: PathBuf,
}

impl TemplateStore {
    /// Create a store rooted at `dir`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref().to_path_buf();
        debug!(?dir, exists = dir.is_dir(), "TemplateStore::new: called");
        Self {
            hbs: Handlebars::new(),
            dir,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the first file matching `name`, if any
    pub fn path_for(&self, name: &str) -> Option<PathBuf> {
        TEMPLATE_EXTENSIONS
            .iter()
            .map(|ext| self.dir.join(format!("{}.{}", name, ext)))
            .find(|path| path.is_file())
    }

    /// Check whether a template file exists for `name`
    pub fn exists(&self, name: &str) -> bool {
        let found = self.path_for(name).is_some();
        debug!(%name, %found, "TemplateStore::exists: checked");
        found
    }

    /// Read the source text of a template
    pub fn load(&self, name: &str) -> GenResult<String> {
        debug!(%name, "TemplateStore::load: called");
        let path = self.path_for(name).ok_or_else(|| GenError::TemplateNotFound {
            name: name.to_string(),
            dir: self.dir.clone(),
        })?;
        debug!(?path, "TemplateStore::load: reading template");
        std::fs::read_to_string(&path).map_err(|e| GenError::filesystem(path, e))
    }

    /// Render a template with the given data
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> GenResult<String> {
        let template = self.load(name)?;
        info!("Rendering template '{}' from {}", name, self.dir.display());

        self.hbs
            .render_template(&template, data)
            .map_err(|e| GenError::TemplateRender {
                name: name.to_string(),
                message: e.to_string(),
            })
    }
}
