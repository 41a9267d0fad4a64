use dioxus::prelude::*;

use crate::blocks::{block_class, Icon};
use crate::core::{config::BlockConfig, icon::IconKind};

/// Landing-page hero with an eyebrow badge and one call to action.
#[component]
pub fn Hero(
    config: BlockConfig,
    eyebrow: String,
    headline: String,
    subheadline: String,
    cta_label: String,
    #[props(default = IconKind::Bolt)] badge_icon: IconKind,
) -> Element {
    rsx! {
        section { class: block_class("hero", config.theme),
            span { class: "hero__eyebrow",
                Icon { kind: badge_icon, class: "hero__eyebrow-icon" }
                "{eyebrow}"
            }
            h1 { class: "hero__headline", "{headline}" }
            p { class: "hero__subheadline", "{subheadline}" }
            div { class: "hero__actions",
                button { r#type: "button", class: "button button--primary",
                    "{cta_label}"
                    Icon { kind: IconKind::ArrowRight, class: "button__icon" }
                }
            }
        }
    }
}
