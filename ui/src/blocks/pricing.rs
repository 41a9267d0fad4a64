use dioxus::prelude::*;

use crate::blocks::{block_class, invalid_data, Icon};
use crate::core::{config::BlockConfig, icon::IconKind, ratio, InputError};

#[derive(Debug, Clone, PartialEq)]
pub struct PricingTier {
    pub name: String,
    pub monthly_price: f64,
    /// Struck-through list price when the tier is on sale.
    pub original_price: Option<f64>,
    pub features: Vec<String>,
    pub highlighted: bool,
}

struct TierView {
    name: String,
    price: String,
    original: Option<String>,
    discount: Option<u8>,
    features: Vec<String>,
    highlighted: bool,
}

fn tier_view(tier: &PricingTier, config: &BlockConfig) -> Result<TierView, InputError> {
    let discount = tier
        .original_price
        .map(|original| ratio::discount_percent(tier.monthly_price, original))
        .transpose()?
        .filter(|pct| *pct > 0);

    Ok(TierView {
        name: tier.name.clone(),
        price: config.currency.format(tier.monthly_price),
        original: discount
            .and(tier.original_price)
            .map(|original| config.currency.format(original)),
        discount,
        features: tier.features.clone(),
        highlighted: tier.highlighted,
    })
}

#[component]
pub fn PricingTable(config: BlockConfig, tiers: Vec<PricingTier>) -> Element {
    let views = match tiers
        .iter()
        .map(|tier| tier_view(tier, &config))
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(views) => views,
        Err(err) => return invalid_data("pricing", config.theme, &err),
    };

    rsx! {
        section { class: block_class("pricing", config.theme),
            h2 { class: "block__title", {crate::t!("pricing-title")} }
            div { class: "pricing__tiers",
                for view in views.into_iter() {
                    {render_tier(view)}
                }
            }
        }
    }
}

fn render_tier(view: TierView) -> Element {
    let TierView {
        name,
        price,
        original,
        discount,
        features,
        highlighted,
    } = view;
    let class = if highlighted {
        "pricing__tier pricing__tier--highlighted"
    } else {
        "pricing__tier"
    };

    rsx! {
        article { key: "{name}", class: class,
            if highlighted {
                span { class: "pricing__popular", {crate::t!("pricing-popular")} }
            }
            h3 { class: "pricing__name", "{name}" }
            div { class: "pricing__price",
                strong { "{price}" }
                span { class: "pricing__period", {crate::t!("pricing-per-month")} }
            }
            if let (Some(original), Some(pct)) = (original, discount) {
                div { class: "pricing__sale",
                    s { "{original}" }
                    span { class: "badge badge--discount", {crate::t!("product-off", percent = pct)} }
                }
            }
            ul { class: "pricing__features",
                for (index, feature) in features.iter().enumerate() {
                    li { key: "{index}",
                        Icon { kind: IconKind::Check, class: "pricing__check" }
                        "{feature}"
                    }
                }
            }
            button { r#type: "button", class: "button button--primary", {crate::t!("pricing-cta")} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(price: f64, original: Option<f64>) -> PricingTier {
        PricingTier {
            name: "Pro".into(),
            monthly_price: price,
            original_price: original,
            features: vec!["Unlimited projects".into()],
            highlighted: true,
        }
    }

    #[test]
    fn sale_tier_shows_badge_and_list_price() {
        let view = tier_view(&tier(9.0, Some(12.0)), &BlockConfig::default()).unwrap();
        assert_eq!(view.discount, Some(25));
        assert_eq!(view.price, "$9.00");
        assert_eq!(view.original.as_deref(), Some("$12.00"));
    }

    #[test]
    fn zero_discount_hides_the_badge() {
        let view = tier_view(&tier(12.0, Some(12.0)), &BlockConfig::default()).unwrap();
        assert_eq!(view.discount, None);
        assert_eq!(view.original, None);
    }

    #[test]
    fn price_above_list_is_rejected() {
        assert!(tier_view(&tier(20.0, Some(12.0)), &BlockConfig::default()).is_err());
    }
}
