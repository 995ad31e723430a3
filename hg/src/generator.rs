//! Runs a single generation request end to end

use std::path::PathBuf;

use tracing::{debug, info};

use crate::assemble::{RawInput, assemble};
use crate::config::Settings;
use crate::domain::OutputData;
use crate::error::GenResult;
use crate::output::{OutputFormat, RenderedOutput, to_json, write_outputs};
use crate::templates::{Renderer, TemplateStore};

/// Everything needed to produce one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub input: RawInput,
    pub format: OutputFormat,
}

/// Result of a completed request
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub data: OutputData,
    /// Files written, JSON before HTML
    pub files: Vec<PathBuf>,
}

impl GenerationReport {
    /// The generated HTML file, if one was requested
    pub fn html_path(&self) -> Option<&PathBuf> {
        self.files.iter().find(|p| p.extension().is_some_and(|e| e == "html"))
    }

    pub fn json_path(&self) -> Option<&PathBuf> {
        self.files.iter().find(|p| p.extension().is_some_and(|e| e == "json"))
    }
}

/// Assembles, renders and writes pages according to the settings
pub struct Generator<'a> {
    settings: &'a Settings,
    store: TemplateStore,
}

impl<'a> Generator<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            store: TemplateStore::new(&settings.templates_dir),
        }
    }

    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    pub fn generate(&self, request: &Request) -> GenResult<GenerationReport> {
        let kind = request.input.kind();
        info!(%kind, format = %request.format, "Generating page");

        let data = assemble(&request.input, self.settings)?;

        // Render before touching the disk so a missing template writes nothing
        let mut output = RenderedOutput::default();
        if request.format.includes_json() {
            output.json = Some(to_json(&data)?);
        }
        if request.format.includes_html() {
            output.html = Some(Renderer::new(&self.store).render(&data)?);
        }
        debug!(
            html = output.html.is_some(),
            json = output.json.is_some(),
            "Generator::generate: rendered"
        );

        let files = write_outputs(&self.settings.output_dir, kind.file_prefix(), &output)?;
        Ok(GenerationReport { data, files })
    }
}
