use dioxus::prelude::*;

use crate::blocks::{block_class, invalid_data};
use crate::core::{
    config::BlockConfig,
    money::{self, Adjustments, CartTotals, LineItem},
    InputError,
};

/// Checkout sidebar: line items, fees, discount and the grand total.
///
/// A positive `tax_rate_percent` overrides `adjustments.tax` with a tax line
/// computed from the subtotal.
#[component]
pub fn CartSummary(
    config: BlockConfig,
    items: Vec<LineItem>,
    #[props(default)] adjustments: Adjustments,
    #[props(default)] tax_rate_percent: f64,
) -> Element {
    let rate = (tax_rate_percent > 0.0).then_some(tax_rate_percent);
    let totals = match summarize(&items, adjustments, rate, &config) {
        Ok(totals) => totals,
        Err(err) => return invalid_data("cart", config.theme, &err),
    };
    let currency = &config.currency;
    let capped = totals.discount_was_capped(adjustments.discount);
    let rows: Vec<(String, &LineItem)> = items
        .iter()
        .enumerate()
        .map(|(index, item)| (row_key(index, item), item))
        .collect();

    rsx! {
        section { class: block_class("cart", config.theme),
            div { class: "block__header",
                h2 { class: "block__title", {crate::t!("cart-title")} }
                span { class: "block__meta", {crate::t!("cart-items", count = totals.item_count)} }
            }

            if items.is_empty() {
                p { class: "block__placeholder", {crate::t!("cart-empty")} }
            } else {
                ul { class: "cart__items",
                    for (key, item) in rows.iter() {
                        li { key: "{key}", class: "cart__item",
                            span { class: "cart__item-name", "{item.name}" }
                            span { class: "cart__item-qty", "×{item.quantity}" }
                            span { class: "cart__item-total", {currency.format(item.line_total())} }
                        }
                    }
                }
            }

            dl { class: "cart__totals",
                dt { {crate::t!("cart-subtotal")} }
                dd { {currency.format(totals.subtotal)} }
                dt { {crate::t!("cart-shipping")} }
                dd {
                    if totals.shipping == 0.0 {
                        {crate::t!("cart-shipping-free")}
                    } else {
                        {currency.format(totals.shipping)}
                    }
                }
                dt { {crate::t!("cart-tax")} }
                dd { {currency.format(totals.tax)} }
                if totals.discount > 0.0 {
                    dt { {crate::t!("cart-discount")} }
                    dd { class: "cart__discount", {currency.format(-totals.discount)} }
                }
                dt { class: "cart__total-label", {crate::t!("cart-total")} }
                dd { class: "cart__total", {currency.format(totals.total)} }
            }

            if capped {
                p { class: "block__meta block__meta--warning", {crate::t!("cart-discount-capped")} }
            }

            button {
                r#type: "button",
                class: "button button--primary cart__checkout",
                disabled: items.is_empty(),
                {crate::t!("cart-checkout")}
            }
        }
    }
}

/// Names can repeat (two sizes of the same shirt), so rows key on position too.
fn row_key(index: usize, item: &LineItem) -> String {
    format!("{index}-{}", item.name)
}

fn summarize(
    items: &[LineItem],
    mut adjustments: Adjustments,
    tax_rate_percent: Option<f64>,
    config: &BlockConfig,
) -> Result<CartTotals, InputError> {
    if let Some(rate) = tax_rate_percent {
        adjustments.tax = money::tax_from_rate(money::subtotal(items), rate)?;
    }
    CartTotals::compute(items, adjustments, config.discount_policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::money::DiscountPolicy;

    fn items() -> Vec<LineItem> {
        vec![
            LineItem::new("Linen shirt", 40.0, 1).unwrap(),
            LineItem::new("Socks", 5.0, 2).unwrap(),
        ]
    }

    #[test]
    fn tax_rate_replaces_flat_tax() {
        let adjustments = Adjustments {
            shipping: 0.0,
            tax: 99.0,
            discount: 0.0,
        };
        let totals = summarize(&items(), adjustments, Some(10.0), &BlockConfig::default()).unwrap();
        assert_eq!(totals.tax, 5.0);
        assert_eq!(totals.total, 55.0);
    }

    #[test]
    fn repeated_names_get_distinct_row_keys() {
        let items = vec![
            LineItem::new("Socks", 5.0, 1).unwrap(),
            LineItem::new("Socks", 5.0, 3).unwrap(),
        ];
        let keys: Vec<String> = items
            .iter()
            .enumerate()
            .map(|(index, item)| row_key(index, item))
            .collect();
        assert_eq!(keys, vec!["0-Socks", "1-Socks"]);
    }

    #[test]
    fn config_policy_is_respected() {
        let adjustments = Adjustments {
            discount: 70.0,
            ..Default::default()
        };
        let mut config = BlockConfig::default();
        let clamped = summarize(&items(), adjustments, None, &config).unwrap();
        assert_eq!(clamped.total, 0.0);

        config.discount_policy = DiscountPolicy::Permissive;
        let permissive = summarize(&items(), adjustments, None, &config).unwrap();
        assert_eq!(permissive.total, -20.0);
    }
}
