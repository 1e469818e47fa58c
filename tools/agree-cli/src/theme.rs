//! Light and dark color palettes.

use std::fmt;
use std::str::FromStr;

use console::Style;
use serde::{Deserialize, Serialize};

/// Display theme, held in session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Style for headings and the brand name.
    pub fn accent(&self) -> Style {
        match self {
            Theme::Light => Style::new().green().bold(),
            Theme::Dark => Style::new().cyan().bold(),
        }
    }

    /// Style for prices and totals.
    pub fn price(&self) -> Style {
        match self {
            Theme::Light => Style::new().magenta(),
            Theme::Dark => Style::new().yellow(),
        }
    }

    /// Style for secondary text such as descriptions.
    pub fn muted(&self) -> Style {
        match self {
            Theme::Light => Style::new().dim(),
            Theme::Dark => Style::new().white().dim(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {} (expected light or dark)", other)),
        }
    }
}
