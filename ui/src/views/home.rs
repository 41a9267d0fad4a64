use dioxus::prelude::*;

use super::{use_gallery_config, use_lang_marker};
use crate::blocks::Hero;
use crate::core::icon::IconKind;

#[component]
pub fn Home() -> Element {
    let lang = use_lang_marker();
    let config = use_gallery_config();
    tracing::debug!(%lang, theme = %config.theme, "home render");

    rsx! {
        div { style: "display:none", "{lang}" }
        section { class: "page page-home",
            Hero {
                config: config.clone(),
                eyebrow: "Blockshelf",
                headline: crate::t!("home-title"),
                subheadline: crate::t!("home-intro"),
                cta_label: crate::t!("nav-commerce"),
                badge_icon: IconKind::Star,
            }
            ul { class: "page-home__sections",
                li { {crate::t!("home-section-commerce")} }
                li { {crate::t!("home-section-dashboard")} }
                li { {crate::t!("home-section-marketing")} }
            }
        }
    }
}
