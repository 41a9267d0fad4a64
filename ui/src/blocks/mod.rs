//! Self-contained presentational blocks. Each takes its data plus a
//! [`BlockConfig`](crate::core::config::BlockConfig) and renders markup;
//! none of them share state with another.

mod cart;
pub use cart::CartSummary;

mod charts;
pub use charts::{ForecastChartCard, TrendChartCard};

mod features;
pub use features::{Feature, FeatureGrid};

mod heatmap;
pub use heatmap::ActivityHeatmap;

mod hero;
pub use hero::Hero;

mod icon;
pub use icon::Icon;

mod pricing;
pub use pricing::{PricingTable, PricingTier};

mod product;
pub use product::{Product, ProductCard};

mod progress;
pub use progress::ProgressCard;

mod testimonials;
pub use testimonials::{Testimonial, TestimonialCarousel};

use dioxus::prelude::*;

use crate::core::{theme::Theme, InputError};

/// Outer class list shared by every block: `block block--cart theme-neon`.
pub(crate) fn block_class(kind: &str, theme: Theme) -> String {
    format!("block block--{kind} {}", theme.css_class())
}

/// Stand-in markup when caller data fails validation.
pub(crate) fn invalid_data(block: &'static str, theme: Theme, err: &InputError) -> Element {
    tracing::warn!(block, %err, "rejected block input");
    let reason = err.to_string();
    rsx! {
        section { class: block_class(block, theme),
            p { class: "block__placeholder", {crate::t!("block-invalid-data", reason = reason)} }
        }
    }
}
