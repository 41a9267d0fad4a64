use dioxus::prelude::*;

use crate::core::icon::IconKind;

#[component]
pub fn Icon(kind: IconKind, #[props(default = "icon".to_string())] class: String) -> Element {
    let (fill, stroke) = if kind.filled() {
        ("currentColor", "none")
    } else {
        ("none", "currentColor")
    };

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            width: "24",
            height: "24",
            fill: fill,
            stroke: stroke,
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: kind.path_data() }
        }
    }
}
