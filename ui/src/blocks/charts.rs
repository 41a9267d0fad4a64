use dioxus::prelude::*;

use crate::blocks::{block_class, invalid_data};
use crate::core::{
    chart::{self, DualChart, Frame, PathStyle, PlotPoint, SeriesPoint, VIEWBOX},
    config::BlockConfig,
    format,
};

/// Sparkline-style card: filled area under a single series plus a dot on
/// the latest sample.
#[component]
pub fn TrendChartCard(
    config: BlockConfig,
    title: String,
    series: Vec<SeriesPoint>,
    #[props(default)] style: PathStyle,
) -> Element {
    let line = match chart::line_chart(&series, Frame::default(), style) {
        Ok(line) => line,
        Err(err) => return invalid_data("trend-chart", config.theme, &err),
    };
    let area = line.area();
    let marker = line.last().map(marker_coords);
    let latest = series.last().map(|p| format::format_compact(p.value));
    let first_label = series.first().map(|p| p.label.clone()).unwrap_or_default();
    let last_label = series.last().map(|p| p.label.clone()).unwrap_or_default();

    rsx! {
        section { class: block_class("trend-chart", config.theme),
            div { class: "block__header",
                h3 { class: "block__title", "{title}" }
                if let Some(latest) = latest {
                    span { class: "block__meta",
                        {crate::t!("chart-latest")}
                        " "
                        strong { "{latest}" }
                    }
                }
            }
            svg {
                class: "chart",
                view_box: VIEWBOX,
                preserve_aspect_ratio: "none",
                path { class: "chart__area", d: "{area}" }
                path { class: "chart__line", d: "{line.d}", fill: "none" }
                if let Some((cx, cy)) = marker {
                    circle { class: "chart__marker", cx: "{cx}", cy: "{cy}", r: "2" }
                }
            }
            div { class: "chart__axis",
                span { "{first_label}" }
                span { "{last_label}" }
            }
        }
    }
}

/// Actual vs. forecast on one scale; the forecast is drawn dashed beneath.
#[component]
pub fn ForecastChartCard(
    config: BlockConfig,
    title: String,
    actual: Vec<SeriesPoint>,
    forecast: Vec<SeriesPoint>,
) -> Element {
    let dual = match DualChart::build(&actual, &forecast, Frame::default(), PathStyle::Smooth) {
        Ok(dual) => dual,
        Err(err) => return invalid_data("forecast-chart", config.theme, &err),
    };
    let actual_area = dual.actual.area();
    let marker = dual.actual.last().map(marker_coords);

    rsx! {
        section { class: block_class("forecast-chart", config.theme),
            div { class: "block__header",
                h3 { class: "block__title", "{title}" }
                div { class: "chart__legend",
                    span { class: "chart__legend-swatch chart__legend-swatch--actual" }
                    {crate::t!("chart-actual")}
                    span { class: "chart__legend-swatch chart__legend-swatch--forecast" }
                    {crate::t!("chart-forecast")}
                }
            }
            svg {
                class: "chart",
                view_box: VIEWBOX,
                preserve_aspect_ratio: "none",
                path {
                    class: "chart__line chart__line--forecast",
                    d: "{dual.forecast.d}",
                    fill: "none",
                    stroke_dasharray: "3 2",
                }
                path { class: "chart__area", d: "{actual_area}" }
                path { class: "chart__line", d: "{dual.actual.d}", fill: "none" }
                if let Some((cx, cy)) = marker {
                    circle { class: "chart__marker", cx: "{cx}", cy: "{cy}", r: "2" }
                }
            }
        }
    }
}

fn marker_coords(point: PlotPoint) -> (String, String) {
    (format!("{:.2}", point.x), format!("{:.2}", point.y))
}
