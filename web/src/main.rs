use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::config::BlockConfig;
use ui::views::{Commerce, Dashboard, Home, Marketing};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/commerce")]
    Commerce {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/marketing")]
    Marketing {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_commerce(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Commerce {},
        "{label}"
    })
}
fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Dashboard {},
        "{label}"
    })
}
fn nav_marketing(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Marketing {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        home: nav_home,
        commerce: nav_commerce,
        dashboard: nav_dashboard,
        marketing: nav_marketing,
    });

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    // Browsers have no config dir; the navbar picker is the only way to change it.
    let config = use_signal(BlockConfig::default);
    use_context_provider(|| config);
    tracing::debug!("web gallery mounted");

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web layout: shared navbar above the routed page.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
