//! Output writer
//!
//! Writes rendered HTML and the JSON form of the data record to
//! `{base}-{stamp}.{ext}` files in the output directory.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::assemble::iso_timestamp;
use crate::domain::OutputData;
use crate::error::{GenError, GenResult};

/// Which files a request should produce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Json,
    #[default]
    Both,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Html, OutputFormat::Json, OutputFormat::Both];

    pub fn includes_html(&self) -> bool {
        matches!(self, OutputFormat::Html | OutputFormat::Both)
    }

    pub fn includes_json(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
            OutputFormat::Both => "both",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Html => "HTML only",
            OutputFormat::Json => "JSON only",
            OutputFormat::Both => "HTML and JSON",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            "both" => Ok(OutputFormat::Both),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// Rendered artifacts waiting to be written
#[derive(Debug, Clone, Default)]
pub struct RenderedOutput {
    pub html: Option<String>,
    pub json: Option<String>,
}

/// Timestamp safe for use in file names on every platform
pub fn file_stamp(now: DateTime<Utc>) -> String {
    iso_timestamp(now).replace([':', '.'], "-")
}

/// Write outputs using the current time for the file names
pub fn write_outputs(dir: &Path, base: &str, output: &RenderedOutput) -> GenResult<Vec<PathBuf>> {
    write_outputs_at(dir, base, output, Utc::now())
}

/// Write outputs with an explicit file-name timestamp
pub fn write_outputs_at(
    dir: &Path,
    base: &str,
    output: &RenderedOutput,
    now: DateTime<Utc>,
) -> GenResult<Vec<PathBuf>> {
    ensure_dir(dir)?;

    let stamp = file_stamp(now);
    let mut written = Vec::new();

    if let Some(ref json) = output.json {
        let path = dir.join(format!("{}-{}.json", base, stamp));
        fs::write(&path, json).map_err(|e| GenError::filesystem(&path, e))?;
        info!(path = %path.display(), "JSON file saved");
        written.push(path);
    }

    if let Some(ref html) = output.html {
        let path = dir.join(format!("{}-{}.html", base, stamp));
        fs::write(&path, html).map_err(|e| GenError::filesystem(&path, e))?;
        info!(path = %path.display(), "HTML file saved");
        written.push(path);
    }

    info!(count = written.len(), "Finished writing output files");
    Ok(written)
}

/// Create the output directory if it is missing
pub fn ensure_dir(dir: &Path) -> GenResult<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| GenError::filesystem(dir, e))?;
        debug!(?dir, "ensure_dir: created output directory");
    }
    Ok(())
}

/// Pretty JSON form of a record, as written to `.json` files
pub fn to_json(data: &OutputData) -> GenResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Read a JSON output file back into a record
pub fn read_json(path: &Path) -> GenResult<OutputData> {
    let content = fs::read_to_string(path).map_err(|e| GenError::filesystem(path, e))?;
    Ok(serde_json::from_str(&content)?)
}
