#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::config::BlockConfig;

use ui::views::{Commerce, Dashboard, Home, Marketing};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/commerce")]
    Commerce {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/marketing")]
    Marketing {},
}

// Shared theme embedded at build time; no separate desktop /assets needed.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    init_tracing();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Blockshelf – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resolve_resource_dir()),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_tracing();
    LaunchBuilder::server().launch(App);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed by the launcher; keep that one.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_commerce(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Commerce {}, "{label}" })
}
fn nav_dashboard(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" })
}
fn nav_marketing(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Marketing {}, "{label}" })
}

/// `config.json` from the platform config dir, or defaults.
fn load_config() -> BlockConfig {
    let Some(dirs) = directories::ProjectDirs::from("com", "Blockshelf", "Blockshelf") else {
        tracing::warn!("no home directory; using default block config");
        return BlockConfig::default();
    };
    let path = dirs.config_dir().join("config.json");
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file; using defaults");
        return BlockConfig::default();
    }
    match BlockConfig::load(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), theme = %config.theme, "loaded block config");
            config
        }
        Err(err) => {
            tracing::warn!(%err, "ignoring unreadable block config");
            BlockConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppNavbar updates both signals from its language and theme pickers.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    let config = use_signal(load_config);
    use_context_provider(|| config);

    register_nav(NavBuilder {
        home: nav_home,
        commerce: nav_commerce,
        dashboard: nav_dashboard,
        marketing: nav_marketing,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed by language so the routed subtree remounts on change.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout: shared navbar above the routed page.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
