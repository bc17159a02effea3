use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local storage key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";
/// Class set on the root element while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ThemeParseError(String);

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Class list entry for the root element. The server renders
    /// `Theme::default()` with this before any stored preference is known.
    pub fn root_class(self) -> &'static str {
        match self {
            Self::Light => "",
            Self::Dark => DARK_CLASS,
        }
    }

    /// Theme to start with given whatever was found in storage.
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::from_stored(None), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("sepia")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    }

    #[test]
    fn test_double_toggle_is_identity() {
        for start in [Theme::Light, Theme::Dark] {
            let once = start.toggled();
            assert_ne!(once, start);
            assert_eq!(once.toggled(), start);
        }
    }

    #[test]
    fn test_stored_value_matches_memory() {
        // the storage codec writes Display and reads FromStr
        let mut theme = Theme::default();
        for _ in 0..3 {
            theme = theme.toggled();
            let stored = theme.to_string();
            assert!(stored == "light" || stored == "dark");
            assert_eq!(stored.parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn test_server_render_matches_unhydrated_default() {
        // the client keeps Theme::default() until hydration finishes, so the
        // server's root class has to come from the same value
        assert_eq!(Theme::default().root_class(), DARK_CLASS);
        assert_eq!(Theme::Light.root_class(), "");
        assert_eq!(Theme::from_stored(None).root_class(), Theme::default().root_class());
    }

    #[test]
    fn test_parse_error() {
        let err = "DARK".parse::<Theme>().unwrap_err();
        assert_eq!(err.to_string(), "unknown theme: DARK");
    }
}
