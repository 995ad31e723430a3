//! Command-line definitions
//!
//! Neither binary takes options; everything else comes from the environment
//! or from interactive prompts.

use clap::Parser;

const ENV_HELP: &str = "\
Environment:
  NODE_ENV             development | production | test (default: development)
  SITE_NAME            Site name shown on course pages (default: Oboe)
  OUTPUT_DIR           Directory for generated files (default: ./output)
  TEMPLATES_DIR        Directory holding page.hbs and oboe-course.hbs (default: ./templates)
  DEFAULT_THEME        light | dark (default: light)
  AUTO_OPEN_BROWSER    Offer to open the generated HTML (default: true)
  LOG_LEVEL            debug | info | warn | error (default: info)
  ENABLE_CONSOLE_LOG   Write logs to stderr (default: true)";

/// Interactive page generator
#[derive(Parser, Debug)]
#[command(name = "hg")]
#[command(author, version, about = "Generate simple pages and Oboe course pages from templates", long_about = None)]
#[command(after_help = ENV_HELP)]
pub struct Cli {}

/// Non-interactive generator for the built-in Oboe course
#[derive(Parser, Debug)]
#[command(name = "oboe-course")]
#[command(author, version, about = "Generate the built-in Oboe course page", long_about = None)]
#[command(after_help = ENV_HELP)]
pub struct CourseCli {}
