//! Formatting helpers for presenting derived values.

use serde::{Deserialize, Serialize};

/// Display currency. Only the symbol and its placement matter for blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub symbol: String,
    #[serde(default)]
    pub symbol_after: bool,
}

impl Currency {
    pub fn usd() -> Self {
        Self {
            code: "USD".into(),
            symbol: "$".into(),
            symbol_after: false,
        }
    }

    pub fn eur() -> Self {
        Self {
            code: "EUR".into(),
            symbol: "€".into(),
            symbol_after: true,
        }
    }

    /// `$1,249.50` / `1,249.50 €`. Negative totals keep the sign in front.
    pub fn format(&self, amount: f64) -> String {
        let body = format_grouped(amount.abs(), 2);
        let sign = if amount < 0.0 && body != "0.00" { "-" } else { "" };
        if self.symbol_after {
            format!("{sign}{body} {}", self.symbol)
        } else {
            format!("{sign}{}{body}", self.symbol)
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::usd()
    }
}

/// Percent with no decimals. NaN renders as an em dash.
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    format!("{value:.0}%")
}

pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    format!("{value:.decimals$}")
}

/// Compact figures for dashboard tiles: 950, 12.4k, 3.1M.
pub fn format_compact(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else {
        format!("{value:.0}")
    }
}

/// Fixed decimals with `,` thousands separators on the integer part.
fn format_grouped(value: f64, decimals: usize) -> String {
    let raw = format!("{value:.decimals$}");
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{grouped}.{frac}"),
        None => grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(Currency::usd().format(1249.5), "$1,249.50");
        assert_eq!(Currency::usd().format(49.97), "$49.97");
        assert_eq!(Currency::usd().format(1_000_000.0), "$1,000,000.00");
        assert_eq!(Currency::eur().format(12.0), "12.00 €");
    }

    #[test]
    fn negative_amounts_keep_sign_outside_symbol() {
        assert_eq!(Currency::usd().format(-5.0), "-$5.00");
        assert_eq!(Currency::usd().format(-0.001), "$0.00");
    }

    #[test]
    fn compact_figures() {
        assert_eq!(format_compact(950.0), "950");
        assert_eq!(format_compact(12_400.0), "12.4k");
        assert_eq!(format_compact(3_100_000.0), "3.1M");
        assert_eq!(format_percent(f64::NAN), "—");
        assert_eq!(format_number(2.0 / 3.0, 2), "0.67");
    }
}
