//! Cart and invoice arithmetic.
//!
//! Amounts are plain `f64` in the display currency. Sums are carried at full
//! precision and rounded to cents only when a [`CartTotals`] is produced.

use serde::{Deserialize, Serialize};

use super::error::{finite, non_negative, InputError};

/// One row of a cart, invoice or order summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(
        name: impl Into<String>,
        unit_price: f64,
        quantity: u32,
    ) -> Result<Self, InputError> {
        let item = Self {
            name: name.into(),
            unit_price,
            quantity,
        };
        item.validate()?;
        Ok(item)
    }

    /// Re-check an item that arrived through deserialization or a struct literal.
    pub fn validate(&self) -> Result<(), InputError> {
        non_negative("unit price", self.unit_price)?;
        if self.quantity == 0 {
            return Err(InputError::ZeroQuantity {
                item: self.name.clone(),
            });
        }
        Ok(())
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Charges and reductions applied on top of the item subtotal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Adjustments {
    #[serde(default)]
    pub shipping: f64,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub discount: f64,
}

impl Adjustments {
    pub fn validate(&self) -> Result<(), InputError> {
        non_negative("shipping", self.shipping)?;
        non_negative("tax", self.tax)?;
        non_negative("discount", self.discount)?;
        Ok(())
    }
}

/// What happens when a discount is larger than the subtotal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountPolicy {
    /// Applied discount is capped at the subtotal; fees are never discounted.
    #[default]
    ClampToSubtotal,
    /// Subtract the full discount even if the total goes negative.
    Permissive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: f64,
    pub shipping: f64,
    pub tax: f64,
    /// Discount actually applied (after the policy).
    pub discount: f64,
    pub total: f64,
    pub item_count: u32,
}

impl CartTotals {
    pub fn compute(
        items: &[LineItem],
        adjustments: Adjustments,
        policy: DiscountPolicy,
    ) -> Result<Self, InputError> {
        for item in items {
            item.validate()?;
        }
        adjustments.validate()?;

        // Each item is finite but the products and sums can still overflow.
        let raw_subtotal = finite("subtotal", subtotal(items))?;
        let discount = match policy {
            DiscountPolicy::ClampToSubtotal => adjustments.discount.min(raw_subtotal),
            DiscountPolicy::Permissive => adjustments.discount,
        };
        let total = finite(
            "total",
            raw_subtotal + adjustments.shipping + adjustments.tax - discount,
        )?;
        let item_count = items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity));

        Ok(Self {
            subtotal: round_cents(raw_subtotal),
            shipping: round_cents(adjustments.shipping),
            tax: round_cents(adjustments.tax),
            discount: round_cents(discount),
            total: round_cents(total),
            item_count,
        })
    }

    /// True when the policy cut the requested discount down.
    pub fn discount_was_capped(&self, requested: f64) -> bool {
        requested > self.discount + 0.005
    }
}

/// Σ unit_price × quantity. Empty input sums to zero.
pub fn subtotal(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::line_total).sum()
}

/// Tax line for a "Tax (8%)" row. `rate_percent` is 0–100.
pub fn tax_from_rate(subtotal: f64, rate_percent: f64) -> Result<f64, InputError> {
    non_negative("subtotal", subtotal)?;
    non_negative("tax rate", rate_percent)?;
    let tax = finite("tax", subtotal * rate_percent / 100.0)?;
    Ok(round_cents(tax))
}

/// Nearest cent. Values too large to scale by 100 are already whole.
pub fn round_cents(value: f64) -> f64 {
    let cents = value * 100.0;
    if cents.is_finite() {
        cents.round() / 100.0
    } else {
        value
    }
}
