//! Shared UI crate for Blockshelf: the block catalog plus the pure
//! derived-metric helpers the blocks are built on.

pub mod blocks;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized gallery navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
