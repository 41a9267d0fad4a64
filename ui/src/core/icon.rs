//! Closed set of icons blocks can ask for, resolved to 24×24 SVG paths.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    Check,
    Star,
    Cart,
    ArrowRight,
    Bolt,
    Shield,
    Heart,
    Truck,
    Chart,
    Quote,
}

impl IconKind {
    pub fn path_data(self) -> &'static str {
        match self {
            IconKind::Check => "M5 12l5 5L20 7",
            IconKind::Star => {
                "M12 3l2.7 5.6 6.1.9-4.4 4.3 1 6.1L12 17l-5.4 2.9 1-6.1-4.4-4.3 6.1-.9z"
            }
            IconKind::Cart => "M3 4h2l2.4 10.2a2 2 0 002 1.8h7.7a2 2 0 002-1.6L21 8H6",
            IconKind::ArrowRight => "M5 12h14M13 6l6 6-6 6",
            IconKind::Bolt => "M13 2L4 14h7l-1 8 9-12h-7z",
            IconKind::Shield => "M12 3l8 3v6c0 5-3.5 8.5-8 9.5C7.5 20.5 4 17 4 12V6z",
            IconKind::Heart => {
                "M12 20s-7-4.4-7-10a4 4 0 017-2.6A4 4 0 0119 10c0 5.6-7 10-7 10z"
            }
            IconKind::Truck => "M3 6h11v9H3zM14 10h4l3 3v2h-7M7 18a2 2 0 100-4 2 2 0 000 4zM17 18a2 2 0 100-4 2 2 0 000 4z",
            IconKind::Chart => "M4 20V10M10 20V4M16 20v-7M22 20H2",
            IconKind::Quote => "M7 7h4v4c0 3-2 5-4 6M15 7h4v4c0 3-2 5-4 6",
        }
    }

    /// Outline icons are stroked; the rest are filled.
    pub fn filled(self) -> bool {
        matches!(self, IconKind::Star | IconKind::Heart | IconKind::Bolt)
    }
}
