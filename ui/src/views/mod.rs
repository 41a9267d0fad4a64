//! Gallery pages. Each page previews one family of blocks with demo data.

mod commerce;
mod dashboard;
mod demo;
mod home;
mod marketing;

pub use commerce::Commerce;
pub use dashboard::Dashboard;
pub use home::Home;
pub use marketing::Marketing;

use dioxus::prelude::*;

use crate::core::config::BlockConfig;

/// Config chosen in the navbar, or defaults when no shell provided one.
pub(crate) fn use_gallery_config() -> BlockConfig {
    try_use_context::<Signal<BlockConfig>>()
        .map(|config| config())
        .unwrap_or_default()
}

/// Re-render marker for language switches made elsewhere in the app.
pub(crate) fn use_lang_marker() -> String {
    try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_default()
}
