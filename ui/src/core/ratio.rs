//! Percentages for progress bars, health scores, discount badges and
//! review stars.

use std::fmt;

use super::error::{finite, non_negative, positive, InputError};

/// A display percentage already clamped into `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percent(f64);

impl Percent {
    pub fn value(self) -> f64 {
        self.0
    }

    /// Rounded integer for badges and bar labels.
    pub fn whole(self) -> u8 {
        self.0.round() as u8
    }

    /// `width: 62.45%` style value for bar fills.
    pub fn css_width(self) -> String {
        format!("{:.2}%", self.0)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.whole())
    }
}

/// `min(current / target * 100, 100)`.
pub fn progress_ratio(current: f64, target: f64) -> Result<Percent, InputError> {
    let current = non_negative("current value", current)?;
    let target = positive("target", target)?;
    Ok(Percent((current / target * 100.0).min(100.0)))
}

/// `round((1 - price / original_price) * 100)`. A free item is 100% off.
pub fn discount_percent(price: f64, original_price: f64) -> Result<u8, InputError> {
    let price = non_negative("price", price)?;
    let original = positive("original price", original_price)?;
    if price > original {
        return Err(InputError::PriceAboveOriginal { price, original });
    }
    Ok(((1.0 - price / original) * 100.0).round() as u8)
}

/// Review score rounded to the nearest half star.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    pub fn from_score(score: f64, out_of: u8) -> Result<Self, InputError> {
        let score = finite("rating", score)?;
        if out_of == 0 {
            return Err(InputError::EmptyCollection { what: "star rating" });
        }
        // Up to 2 * 255 half steps, so count them in u16.
        let halves = (score.clamp(0.0, f64::from(out_of)) * 2.0).round() as u16;
        let full = (halves / 2) as u8;
        let half = halves % 2 == 1;
        let empty = out_of - full - u8::from(half);
        Ok(Self { full, half, empty })
    }

    pub fn total(&self) -> u8 {
        self.full + u8::from(self.half) + self.empty
    }
}
