//! oboe-course - generate the built-in course page without prompting

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{error, info, warn};

use htmlgen::browser::open_in_browser;
use htmlgen::cli::CourseCli;
use htmlgen::domain::course::DEFAULT_COURSE_TITLE;
use htmlgen::logging::setup_logging;
use htmlgen::{Generator, OutputFormat, RawInput, Request, Settings};

fn run(settings: &Settings) -> Result<()> {
    let request = Request {
        input: RawInput::Course {
            title: DEFAULT_COURSE_TITLE.to_string(),
            subtitle: None,
            description: None,
            image: None,
        },
        format: OutputFormat::Html,
    };

    let report = Generator::new(settings)
        .generate(&request)
        .context("Failed to generate course page")?;

    let Some(html) = report.html_path() else {
        return Err(eyre::eyre!("No HTML file was written"));
    };
    println!("{} Course page generated: {}", "✓".green(), html.display().to_string().cyan());

    if settings.auto_open_browser {
        open_in_browser(html).context("Failed to open browser")?;
        info!(path = %html.display(), "Opened course page in browser");
        println!("🌐 Opened in your browser");
    }
    Ok(())
}

fn main() {
    let _cli = CourseCli::parse();

    // Process variables win over the file; a missing file is fine
    dotenvy::dotenv().ok();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            std::process::exit(1);
        }
    };

    if let Err(e) = setup_logging(&settings) {
        eprintln!("{} {:#}", "✗".red(), e);
        std::process::exit(1);
    }
    for warning in &settings.warnings {
        warn!("{}", warning);
    }

    if let Err(e) = run(&settings) {
        error!("Course generation failed: {:#}", e);
        eprintln!("{} An error occurred: {:#}", "✗".red(), e);
        std::process::exit(1);
    }
}
