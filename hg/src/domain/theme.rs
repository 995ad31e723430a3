//! Page themes and their style attributes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color theme for simple pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// All themes, in the order they are offered to the user
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Label shown in interactive prompts
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light theme",
            Theme::Dark => "Dark theme",
        }
    }

    /// Style attributes merged into the page template context
    pub fn style(&self) -> &'static ThemeStyle {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

/// Inline CSS fragments for one theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeStyle {
    pub theme_styles: &'static str,
    pub container_styles: &'static str,
    pub footer_color: &'static str,
    pub border_color: &'static str,
}

static LIGHT: ThemeStyle = ThemeStyle {
    theme_styles: "background-color: #ffffff; color: #333333;",
    container_styles: "background-color: #fafafa; box-shadow: 0 4px 20px rgba(0,0,0,0.1); border: 1px solid #e0e0e0;",
    footer_color: "#666666",
    border_color: "#e0e0e0",
};

static DARK: ThemeStyle = ThemeStyle {
    theme_styles: "background-color: #1a1a1a; color: #ffffff;",
    container_styles: "background-color: #2d2d2d; box-shadow: 0 4px 20px rgba(0,0,0,0.3); border: 1px solid #404040;",
    footer_color: "#999999",
    border_color: "#404040",
};
