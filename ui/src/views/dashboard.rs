use dioxus::prelude::*;

use super::{demo, use_gallery_config, use_lang_marker};
use crate::blocks::{ActivityHeatmap, ForecastChartCard, ProgressCard, TrendChartCard};
use crate::core::chart::{PathStyle, SeriesPoint};

#[component]
pub fn Dashboard() -> Element {
    let lang = use_lang_marker();
    let config = use_gallery_config();

    rsx! {
        div { style: "display:none", "{lang}" }
        section { class: "page page-dashboard",
            h1 { {crate::t!("page-dashboard-title")} }
            div { class: "gallery__row",
                ProgressCard {
                    config: config.clone(),
                    label: "Monthly goal",
                    current: 1249.0,
                    target: 2000.0,
                    money: true,
                }
                ProgressCard {
                    config: config.clone(),
                    label: "Signups",
                    current: 2500.0,
                    target: 2000.0,
                }
            }
            div { class: "gallery__row",
                TrendChartCard { config: config.clone(), title: "Revenue", series: demo::revenue() }
                TrendChartCard {
                    config: config.clone(),
                    title: "First month",
                    series: vec![SeriesPoint::new("Jan", 100.0)],
                    style: PathStyle::Linear,
                }
            }
            ForecastChartCard {
                config: config.clone(),
                title: "Revenue vs. forecast",
                actual: demo::revenue(),
                forecast: demo::forecast(),
            }
            ActivityHeatmap { config: config.clone(), columns: 7, counts: demo::activity() }
        }
    }
}
