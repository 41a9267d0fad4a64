use dioxus::prelude::*;

use crate::blocks::{block_class, invalid_data, Icon};
use crate::core::{
    config::BlockConfig,
    icon::IconKind,
    ratio::{self, StarRating},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub image_url: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub rating: f64,
    pub review_count: u32,
}

/// Storefront card: image, sale badge, stars and an add-to-cart button.
#[component]
pub fn ProductCard(config: BlockConfig, product: Product) -> Element {
    let discount = match product
        .original_price
        .map(|original| ratio::discount_percent(product.price, original))
        .transpose()
    {
        Ok(pct) => pct.filter(|pct| *pct > 0),
        Err(err) => return invalid_data("product", config.theme, &err),
    };
    let stars = match StarRating::from_score(product.rating, 5) {
        Ok(stars) => stars,
        Err(err) => return invalid_data("product", config.theme, &err),
    };

    let price = config.currency.format(product.price);
    let original = product
        .original_price
        .filter(|_| discount.is_some())
        .map(|original| config.currency.format(original));
    let review_count = product.review_count;

    rsx! {
        article { class: block_class("product", config.theme),
            div { class: "product__media",
                img { src: "{product.image_url}", alt: "{product.name}" }
                if let Some(pct) = discount {
                    span { class: "badge badge--discount product__badge",
                        {crate::t!("product-off", percent = pct)}
                    }
                }
            }
            h3 { class: "product__name", "{product.name}" }
            div { class: "product__rating",
                for i in 0..stars.full {
                    span { key: "full-{i}", class: "star star--full",
                        Icon { kind: IconKind::Star, class: "star__icon" }
                    }
                }
                if stars.half {
                    span { class: "star star--half",
                        Icon { kind: IconKind::Star, class: "star__icon" }
                    }
                }
                for i in 0..stars.empty {
                    span { key: "empty-{i}", class: "star star--empty",
                        Icon { kind: IconKind::Star, class: "star__icon" }
                    }
                }
                span { class: "product__reviews", {crate::t!("product-reviews", count = review_count)} }
            }
            div { class: "product__pricing",
                strong { class: "product__price", "{price}" }
                if let Some(original) = original {
                    s { class: "product__original", "{original}" }
                }
            }
            button { r#type: "button", class: "button button--primary",
                Icon { kind: IconKind::Cart, class: "button__icon" }
                {crate::t!("product-add-to-cart")}
            }
        }
    }
}
