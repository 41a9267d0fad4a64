//! Pure derived-metric helpers shared by every block.
//!
//! Nothing in here touches Dioxus, the filesystem or the clock: each
//! function takes caller-owned data and returns fresh display values.

pub mod carousel;
pub mod chart;
pub mod config;
pub mod error;
pub mod format;
pub mod heatmap;
pub mod icon;
pub mod money;
pub mod ratio;
pub mod theme;

pub use error::InputError;
