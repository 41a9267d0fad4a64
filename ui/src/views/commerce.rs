use dioxus::prelude::*;

use super::{demo, use_gallery_config, use_lang_marker};
use crate::blocks::{CartSummary, PricingTable, ProductCard};

#[component]
pub fn Commerce() -> Element {
    let lang = use_lang_marker();
    let config = use_gallery_config();

    rsx! {
        div { style: "display:none", "{lang}" }
        section { class: "page page-commerce",
            h1 { {crate::t!("page-commerce-title")} }
            PricingTable { config: config.clone(), tiers: demo::pricing_tiers() }
            div { class: "gallery__row",
                for product in demo::products() {
                    ProductCard { key: "{product.name}", config: config.clone(), product: product.clone() }
                }
            }
            div { class: "gallery__row",
                CartSummary {
                    config: config.clone(),
                    items: demo::cart_items(),
                    adjustments: demo::cart_adjustments(),
                    tax_rate_percent: 8.0,
                }
                CartSummary { config: config.clone(), items: Vec::new() }
            }
        }
    }
}
