use dioxus::prelude::*;

use crate::blocks::{block_class, invalid_data};
use crate::core::{
    config::BlockConfig,
    heatmap::{HeatmapGrid, Intensity},
};

/// Contribution-style grid. `counts` is row-major with `columns` per row.
#[component]
pub fn ActivityHeatmap(config: BlockConfig, columns: usize, counts: Vec<f64>) -> Element {
    let grid = match HeatmapGrid::from_counts(columns, &counts) {
        Ok(grid) => grid,
        Err(err) => return invalid_data("heatmap", config.theme, &err),
    };
    let template = format!("grid-template-columns: repeat({}, 1fr)", grid.columns);

    rsx! {
        section { class: block_class("heatmap", config.theme),
            h3 { class: "block__title", {crate::t!("heatmap-title")} }
            div { class: "heatmap__grid", style: "{template}",
                for (index, cell) in grid.cells.iter().enumerate() {
                    span {
                        key: "{index}",
                        class: "heatmap__cell {cell.intensity.css_class()}",
                        title: "{cell.value}",
                    }
                }
            }
            div { class: "heatmap__legend",
                span { {crate::t!("heatmap-less")} }
                for level in Intensity::ALL {
                    span { key: "{level.level()}", class: "heatmap__cell {level.css_class()}" }
                }
                span { {crate::t!("heatmap-more")} }
            }
        }
    }
}
