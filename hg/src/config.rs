//! Settings resolved from the process environment
//!
//! Settings are read once at startup and handed to every component by
//! reference. Unset and empty variables fall back to their defaults.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::Theme;
use crate::error::{GenError, GenResult};

pub const DEFAULT_SITE_NAME: &str = "Oboe";
pub const DEFAULT_OUTPUT_DIR: &str = "./output";
pub const DEFAULT_TEMPLATES_DIR: &str = "./templates";

/// Run mode, as given by `NODE_ENV`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    #[default]
    Development,
    Production,
    Test,
}

impl RunMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunMode::Development => "development",
            RunMode::Production => "production",
            RunMode::Test => "test",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(RunMode::Development),
            "production" => Ok(RunMode::Production),
            "test" => Ok(RunMode::Test),
            other => Err(format!("unknown run mode '{}'", other)),
        }
    }
}

/// Minimum severity written to the console
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

/// Console logging settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    pub level: LogLevel,
    pub enable_console: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            enable_console: true,
        }
    }
}

/// Process-wide generator settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub run_mode: RunMode,
    pub site_name: String,
    pub output_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub default_theme: Theme,
    pub auto_open_browser: bool,
    pub logging: LoggingSettings,
    /// Non-fatal problems found while resolving, reported once logging is up
    pub warnings: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            run_mode: RunMode::Development,
            site_name: DEFAULT_SITE_NAME.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            templates_dir: PathBuf::from(DEFAULT_TEMPLATES_DIR),
            default_theme: Theme::Light,
            auto_open_browser: true,
            logging: LoggingSettings::default(),
            warnings: Vec::new(),
        }
    }
}

impl Settings {
    /// Resolve settings from the process environment
    pub fn from_env() -> GenResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve settings from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> GenResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();

        let run_mode = env_choice(&lookup, "NODE_ENV", RunMode::Development, &mut warnings);
        let default_theme = env_choice(&lookup, "DEFAULT_THEME", Theme::Light, &mut warnings);
        let level = env_choice(&lookup, "LOG_LEVEL", LogLevel::Info, &mut warnings);

        Ok(Self {
            run_mode,
            site_name: env_var(&lookup, "SITE_NAME", Some(DEFAULT_SITE_NAME))?,
            output_dir: PathBuf::from(env_var(&lookup, "OUTPUT_DIR", Some(DEFAULT_OUTPUT_DIR))?),
            templates_dir: PathBuf::from(env_var(&lookup, "TEMPLATES_DIR", Some(DEFAULT_TEMPLATES_DIR))?),
            default_theme,
            auto_open_browser: env_bool(&lookup, "AUTO_OPEN_BROWSER", Some(true))?,
            logging: LoggingSettings {
                level,
                enable_console: env_bool(&lookup, "ENABLE_CONSOLE_LOG", Some(true))?,
            },
            warnings,
        })
    }

    pub fn is_development(&self) -> bool {
        self.run_mode == RunMode::Development
    }
}

fn lookup_non_empty<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|v| !v.is_empty())
}

/// Read a string variable, falling back to `default`
pub fn env_var<F>(lookup: &F, name: &str, default: Option<&str>) -> GenResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    match (lookup_non_empty(lookup, name), default) {
        (Some(value), _) => Ok(value),
        (None, Some(default)) => Ok(default.to_string()),
        (None, None) => Err(GenError::MissingConfiguration { name: name.to_string() }),
    }
}

/// Read a boolean variable (`true/1/yes/on`, `false/0/no/off`)
pub fn env_bool<F>(lookup: &F, name: &str, default: Option<bool>) -> GenResult<bool>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup_non_empty(lookup, name) else {
        return default.ok_or_else(|| GenError::MissingConfiguration { name: name.to_string() });
    };
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(GenError::InvalidConfigurationValue {
            name: name.to_string(),
            value,
            expected: "a boolean".to_string(),
        }),
    }
}

/// Read a variable that must parse into one of a fixed set of values
///
/// Unknown values fall back to `default` and leave a warning behind.
pub fn env_choice<F, T>(lookup: &F, name: &str, default: T, warnings: &mut Vec<String>) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + fmt::Display,
{
    let Some(value) = lookup_non_empty(lookup, name) else {
        return default;
    };
    match value.parse::<T>() {
        Ok(parsed) => parsed,
        Err(_) => {
            warnings.push(format!("Invalid {}: {}, falling back to '{}'", name, value, default));
            default
        }
    }
}
