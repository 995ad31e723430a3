//! hg - interactive page generator
//!
//! Asks what to generate, renders it and writes the files.

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, error, info, warn};

use htmlgen::browser::open_in_browser;
use htmlgen::cli::Cli;
use htmlgen::logging::setup_logging;
use htmlgen::{Generator, Prompter, RustylinePrompter, Settings, collect_request};

fn run(settings: &Settings) -> Result<()> {
    info!("Application starting");
    println!("{}\n", "Welcome to the script HTML generator!".bright_cyan().bold());

    let mut prompter = RustylinePrompter::new().context("Failed to start interactive prompt")?;

    let Some(request) = collect_request(&mut prompter, settings).context("Failed to read answers")? else {
        warn!("User cancelled the operation");
        println!("{} Operation cancelled", "✋".yellow());
        return Ok(());
    };
    debug!(?request, "main: collected request");

    println!("\n📝 Generating files...");
    let report = Generator::new(settings)
        .generate(&request)
        .context("Failed to generate page")?;

    for file in &report.files {
        println!("{} Saved {}", "✓".green(), file.display().to_string().cyan());
    }

    if let Some(html) = report.html_path() {
        if settings.auto_open_browser {
            let open = prompter
                .confirm("Open the generated HTML file in your browser?", true)
                .context("Failed to read answer")?;
            if open == Some(true) {
                open_in_browser(html).context("Failed to open browser")?;
                info!(path = %html.display(), "Opened HTML file in browser");
                println!("🌐 Opened in your browser");
            }
        } else {
            debug!("main: auto open browser is disabled");
        }
    }

    info!("Task complete");
    println!("\n🎉 Done!");
    Ok(())
}

fn main() {
    let _cli = Cli::parse();

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
        error!("Application failed: {:#}", e);
        eprintln!("{} An error occurred: {:#}", "✗".red(), e);
        std::process::exit(1);
    }
}
