//! Palette selection for blocks, passed explicitly through props.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Neon,
    Emerald,
    Amber,
    Slate,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Neon, Theme::Emerald, Theme::Amber, Theme::Slate];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Neon => "neon",
            Theme::Emerald => "emerald",
            Theme::Amber => "amber",
            Theme::Slate => "slate",
        }
    }

    /// Root class applied to each block, e.g. `theme-emerald`.
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Neon => "theme-neon",
            Theme::Emerald => "theme-emerald",
            Theme::Amber => "theme-amber",
            Theme::Slate => "theme-slate",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownTheme(raw.to_string()))
    }
}
