use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::AppError;

/// Key under which the chosen theme is persisted in `localStorage`
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute on `<html>` that stylesheets select the palette from
pub const THEME_ATTRIBUTE: &str = "theme";

/// Media query for the platform's dark appearance preference
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// The visitor's theme. There is no "auto" state: the platform
/// preference is resolved once at bootstrap and stamped as one of these.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Text shown next to the toggler, e.g. `dark mode`
    pub fn label(self) -> String {
        format!("{} mode", self.as_str())
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(AppError::InvalidTheme(other.to_string())),
        }
    }
}
