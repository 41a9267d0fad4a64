use crate::core::{config::BlockConfig, theme::Theme};
use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platform crates register a `NavBuilder` so `ui` never needs their `Route`
/// enum. Each function receives the localized label and returns a `Link`
/// that already contains it:
///
/// ```ignore
/// use ui::components::app_navbar::{NavBuilder, register_nav};
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///     commerce: |label| rsx!( Link { class: "navbar__link", to: Route::Commerce {}, "{label}" } ),
///     dashboard: |label| rsx!( Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" } ),
///     marketing: |label| rsx!( Link { class: "navbar__link", to: Route::Marketing {}, "{label}" } ),
/// });
/// ```
///
/// Without a builder the navbar renders whatever `children` it was given.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub commerce: fn(label: &str) -> Element,
    pub dashboard: fn(label: &str) -> Element,
    pub marketing: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("nav builder already registered; keeping the first one");
    }
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Shell-provided signals; either may be absent (e.g. in isolated previews).
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let config_ctx: Option<Signal<BlockConfig>> = try_use_context::<Signal<BlockConfig>>();
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();
    let current_theme = config_ctx
        .as_ref()
        .map(|c| c().theme)
        .unwrap_or_default();

    tracing::trace!(lang = %lang_marker, theme = %current_theme, "navbar render");

    let on_lang_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, lang = %val, "language switch failed"),
        }
    };

    let on_theme_change = move |evt: dioxus::events::FormEvent| {
        let raw = evt.value();
        match raw.parse::<Theme>() {
            Ok(theme) => {
                if let Some(mut config) = config_ctx {
                    config.with_mut(|c| c.theme = theme);
                }
            }
            Err(err) => tracing::warn!(%err, "ignoring theme selection"),
        }
    };

    let internal_nav: Option<Element> = NAV_BUILDER.get().map(|b| {
        let home = (b.home)(&t!("nav-home"));
        let commerce = (b.commerce)(&t!("nav-commerce"));
        let dashboard = (b.dashboard)(&t!("nav-dashboard"));
        let marketing = (b.marketing)(&t!("nav-marketing"));

        rsx! {
            nav { class: "navbar__links",
                {home}
                {commerce}
                {dashboard}
                {marketing}
            }
        }
    });

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { style: "display:none", "{lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "Blockshelf" }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }

                div { class: "navbar__controls",
                    if config_ctx.is_some() {
                        label { class: "visually-hidden", r#for: "theme-select", {t!("nav-theme-label")} }
                        select {
                            id: "theme-select",
                            value: "{current_theme}",
                            oninput: on_theme_change,
                            for theme in Theme::ALL {
                                option { key: "{theme}", value: "{theme}", "{theme}" }
                            }
                        }
                    }

                    if show_switcher {
                        label { class: "visually-hidden", r#for: "locale-select", {t!("nav-language-label")} }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_lang_change,
                            for code in langs().into_iter() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
