use dioxus::prelude::*;

use crate::blocks::{block_class, invalid_data};
use crate::core::{config::BlockConfig, format, ratio};

/// Goal/health tile: big current value, a filled bar and "of target".
#[component]
pub fn ProgressCard(
    config: BlockConfig,
    label: String,
    current: f64,
    target: f64,
    #[props(default)] money: bool,
) -> Element {
    let pct = match ratio::progress_ratio(current, target) {
        Ok(pct) => pct,
        Err(err) => return invalid_data("progress", config.theme, &err),
    };

    let (current_text, target_text) = if money {
        (config.currency.format(current), config.currency.format(target))
    } else {
        (format::format_compact(current), format::format_compact(target))
    };
    let width = pct.css_width();

    rsx! {
        section { class: block_class("progress", config.theme),
            div { class: "block__header",
                h3 { class: "block__title", "{label}" }
                span { class: "progress__percent", "{pct}" }
            }
            strong { class: "progress__value", "{current_text}" }
            span { class: "block__meta", {crate::t!("progress-of-target", target = target_text)} }
            div {
                class: "progress__track",
                role: "progressbar",
                aria_valuenow: "{pct.whole()}",
                aria_valuemin: "0",
                aria_valuemax: "100",
                div { class: "progress__fill", style: "width: {width}" }
            }
        }
    }
}
