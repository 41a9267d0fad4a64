use dioxus::prelude::*;

use crate::blocks::{block_class, Icon};
use crate::core::{config::BlockConfig, icon::IconKind};

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub icon: IconKind,
    pub title: String,
    pub body: String,
}

#[component]
pub fn FeatureGrid(config: BlockConfig, features: Vec<Feature>) -> Element {
    rsx! {
        section { class: block_class("features", config.theme),
            h2 { class: "block__title", {crate::t!("features-title")} }
            div { class: "features__grid",
                for (index, feature) in features.iter().enumerate() {
                    article { key: "{index}", class: "features__item",
                        span { class: "features__icon",
                            Icon { kind: feature.icon }
                        }
                        h3 { "{feature.title}" }
                        p { "{feature.body}" }
                    }
                }
            }
        }
    }
}
