//! Property-based tests for the derived-metric helpers.
//!
//! Uses proptest to check the invariants every block relies on.

use proptest::prelude::*;
use ui::core::{
    carousel::Cycler,
    chart::{line_chart, Frame, PathStyle, SeriesPoint},
    error::InputError,
    heatmap::{HeatmapGrid, Intensity},
    money::{subtotal, Adjustments, CartTotals, DiscountPolicy, LineItem},
    ratio::{discount_percent, progress_ratio, StarRating},
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Prices in whole cents up to $10k.
fn price_strategy() -> impl Strategy<Value = f64> {
    (0u32..1_000_000).prop_map(|cents| f64::from(cents) / 100.0)
}

fn line_item_strategy() -> impl Strategy<Value = LineItem> {
    ("[a-z]{1,12}", price_strategy(), 1u32..50)
        .prop_map(|(name, unit_price, quantity)| LineItem::new(name, unit_price, quantity).unwrap())
}

fn series_strategy(max_len: usize) -> impl Strategy<Value = Vec<SeriesPoint>> {
    prop::collection::vec(-1.0e6..1.0e6f64, 1..max_len).prop_map(to_series)
}

/// Any finite magnitude, including spans too wide to subtract.
fn wide_series_strategy(max_len: usize) -> impl Strategy<Value = Vec<SeriesPoint>> {
    prop::collection::vec(prop::num::f64::NORMAL | prop::num::f64::ZERO, 1..max_len)
        .prop_map(to_series)
}

fn to_series(values: Vec<f64>) -> Vec<SeriesPoint> {
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| SeriesPoint::new(format!("P{i}"), v))
        .collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Subtotal is the plain sum of line totals.
    #[test]
    fn subtotal_matches_sum(items in prop::collection::vec(line_item_strategy(), 0..20)) {
        let expected: f64 = items.iter().map(|i| i.unit_price * f64::from(i.quantity)).sum();
        prop_assert!((subtotal(&items) - expected).abs() < 1e-6);
    }

    /// Adding an item never lowers the subtotal.
    #[test]
    fn subtotal_is_monotonic(
        items in prop::collection::vec(line_item_strategy(), 0..20),
        extra in line_item_strategy(),
    ) {
        let before = subtotal(&items);
        let mut more = items.clone();
        more.push(extra);
        prop_assert!(subtotal(&more) >= before);
    }

    /// With clamping, the discount can eat the items but never the fees.
    #[test]
    fn clamped_total_never_below_fees(
        items in prop::collection::vec(line_item_strategy(), 0..10),
        shipping in price_strategy(),
        tax in price_strategy(),
        discount in price_strategy(),
    ) {
        let adjustments = Adjustments { shipping, tax, discount };
        let totals = CartTotals::compute(&items, adjustments, DiscountPolicy::ClampToSubtotal).unwrap();
        prop_assert!(totals.total >= totals.shipping + totals.tax - 0.011);
        prop_assert!(totals.discount <= totals.subtotal + 0.005);
    }

    /// Progress always lands in [0, 100].
    #[test]
    fn progress_is_bounded(current in 0.0..1.0e9f64, target in 0.001..1.0e9f64) {
        let pct = progress_ratio(current, target).unwrap().value();
        prop_assert!((0.0..=100.0).contains(&pct));
    }

    #[test]
    fn progress_at_target_is_full(target in 0.001..1.0e9f64) {
        prop_assert_eq!(progress_ratio(target, target).unwrap().value(), 100.0);
    }

    /// A price at or below the list price gives a 0–100 badge; anything
    /// at or above 0.6% of the list price stays strictly below 100.
    #[test]
    fn discount_is_bounded(original in 0.01..1.0e6f64, fraction in 0.0..=1.0f64) {
        let price = original * fraction;
        let pct = discount_percent(price, original).unwrap();
        prop_assert!(pct <= 100);
        if fraction >= 0.006 {
            prop_assert!(pct < 100);
        }
    }

    /// Same samples, same bytes.
    #[test]
    fn chart_paths_are_deterministic(series in series_strategy(40), smooth in any::<bool>()) {
        let style = if smooth { PathStyle::Smooth } else { PathStyle::Linear };
        let a = line_chart(&series, Frame::default(), style).unwrap();
        let b = line_chart(&series, Frame::default(), style).unwrap();
        prop_assert_eq!(a.d, b.d);
    }

    /// Every projected point stays finite and inside the viewBox.
    #[test]
    fn chart_points_stay_in_viewbox(series in series_strategy(40)) {
        let chart = line_chart(&series, Frame::default(), PathStyle::Smooth).unwrap();
        prop_assert!(!chart.d.contains("NaN"));
        for point in &chart.points {
            prop_assert!(point.x.is_finite() && point.y.is_finite());
            prop_assert!((0.0..=100.0).contains(&point.x));
            prop_assert!((0.0..=100.0).contains(&point.y));
        }
    }

    /// Extreme magnitudes either plot inside the viewBox or are rejected.
    #[test]
    fn wide_charts_never_print_nan(series in wide_series_strategy(20)) {
        match line_chart(&series, Frame::default(), PathStyle::Smooth) {
            Ok(chart) => {
                prop_assert!(!chart.d.contains("NaN") && !chart.d.contains("inf"));
                for point in &chart.points {
                    prop_assert!((0.0..=100.0).contains(&point.x));
                    prop_assert!((0.0..=100.0).contains(&point.y));
                }
            }
            Err(err) => {
                prop_assert_eq!(err, InputError::NonFinite { field: "chart range" });
            }
        }
    }

    /// Identical samples draw a flat line.
    #[test]
    fn equal_samples_are_flat(value in -1.0e6..1.0e6f64, len in 1usize..30) {
        let series: Vec<SeriesPoint> =
            (0..len).map(|i| SeriesPoint::new(format!("P{i}"), value)).collect();
        let chart = line_chart(&series, Frame::default(), PathStyle::Linear).unwrap();
        let first_y = chart.points[0].y;
        prop_assert!(chart.points.iter().all(|p| p.y == first_y));
    }

    /// Each value in [0, max] lands in exactly the bucket its ratio selects,
    /// and buckets never go backwards as the value grows.
    #[test]
    fn heatmap_buckets_partition(max in 0.001..1.0e6f64, a in 0.0..=1.0f64, b in 0.0..=1.0f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let low = Intensity::classify(lo * max, max).unwrap();
        let high = Intensity::classify(hi * max, max).unwrap();
        prop_assert!(low <= high);
        prop_assert!(Intensity::ALL.contains(&low));
    }

    #[test]
    fn heatmap_grid_peak_is_max(counts in prop::collection::vec(0.0..500.0f64, 1..60)) {
        let grid = HeatmapGrid::from_counts(7, &counts).unwrap();
        prop_assert_eq!(grid.cells.len(), counts.len());
        if grid.max > 0.0 {
            prop_assert!(grid.cells.iter().any(|c| c.intensity == Intensity::Peak));
        }
    }

    /// Stars always add up to the scale, whatever its size.
    #[test]
    fn stars_sum_to_scale(score in -2.0..300.0f64, out_of in 1u8..=255) {
        let rating = StarRating::from_score(score, out_of).unwrap();
        prop_assert_eq!(rating.total(), out_of);
        let expected_halves = (score.clamp(0.0, f64::from(out_of)) * 2.0).round();
        prop_assert_eq!(f64::from(rating.full) * 2.0 + f64::from(u8::from(rating.half)), expected_halves);
    }

    /// n steps forward then n steps back returns to the start.
    #[test]
    fn cycler_round_trips(len in 1usize..20, steps in 0usize..50, start in 0usize..40) {
        let mut cycler = Cycler::new(len).unwrap();
        let origin = cycler.go_to(start);
        prop_assert_eq!(origin, start % len);
        for _ in 0..steps {
            cycler.next();
        }
        prop_assert_eq!(cycler.index(), (origin + steps) % len);
        for _ in 0..steps {
            cycler.prev();
        }
        prop_assert_eq!(cycler.index(), origin);
    }
}

// ============================================================================
// End-to-end examples
// ============================================================================

#[test]
fn two_totes_and_stickers() {
    let items = vec![
        LineItem::new("Tote", 19.99, 2).unwrap(),
        LineItem::new("Stickers", 9.99, 1).unwrap(),
    ];
    let totals =
        CartTotals::compute(&items, Adjustments::default(), DiscountPolicy::default()).unwrap();
    assert_eq!(totals.subtotal, 49.97);
    assert_eq!(totals.total, 49.97);
}

#[test]
fn progress_examples() {
    assert_eq!(progress_ratio(1249.0, 2000.0).unwrap().whole(), 62);
    assert_eq!(progress_ratio(2500.0, 2000.0).unwrap().value(), 100.0);
}

#[test]
fn discount_example() {
    assert_eq!(discount_percent(9.0, 12.0).unwrap(), 25);
}

#[test]
fn single_month_chart() {
    let chart = line_chart(
        &[SeriesPoint::new("Jan", 100.0)],
        Frame::default(),
        PathStyle::Smooth,
    )
    .unwrap();
    assert_eq!(chart.points.len(), 1);
    assert_eq!(chart.points[0].x, 50.0);
    assert!(!chart.d.contains("NaN"));
}
