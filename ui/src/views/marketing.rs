use dioxus::prelude::*;

use super::{demo, use_gallery_config, use_lang_marker};
use crate::blocks::{FeatureGrid, Hero, TestimonialCarousel};

#[component]
pub fn Marketing() -> Element {
    let lang = use_lang_marker();
    let config = use_gallery_config();

    rsx! {
        div { style: "display:none", "{lang}" }
        section { class: "page page-marketing",
            h1 { {crate::t!("page-marketing-title")} }
            Hero {
                config: config.clone(),
                eyebrow: "New",
                headline: "Launch pages that convert",
                subheadline: "Mix and match blocks, keep your brand.",
                cta_label: crate::t!("pricing-cta"),
            }
            FeatureGrid { config: config.clone(), features: demo::features() }
            TestimonialCarousel { config: config.clone(), testimonials: demo::testimonials() }
        }
    }
}
