use dioxus::prelude::*;

use crate::blocks::{block_class, invalid_data, Icon};
use crate::core::{carousel::Cycler, config::BlockConfig, icon::IconKind};

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

/// One quote at a time with prev/next arrows and slide dots.
#[component]
pub fn TestimonialCarousel(config: BlockConfig, testimonials: Vec<Testimonial>) -> Element {
    let count = testimonials.len();
    let mut stored = use_signal(move || Cycler::new(count));

    // A caller may swap in a list of another length; restart from slide 0 then.
    let current = match stored() {
        Ok(cycler) if cycler.len() == count => cycler,
        _ => match Cycler::new(count) {
            Ok(fresh) => fresh,
            Err(err) => return invalid_data("testimonials", config.theme, &err),
        },
    };
    let active = &testimonials[current.index()];

    let mut step = move |transition: fn(&mut Cycler) -> usize| {
        let mut next = current;
        transition(&mut next);
        stored.set(Ok(next));
    };

    rsx! {
        section { class: block_class("testimonials", config.theme),
            h2 { class: "block__title", {crate::t!("testimonials-title")} }
            figure { class: "testimonials__slide",
                Icon { kind: IconKind::Quote, class: "testimonials__quote-icon" }
                blockquote { "{active.quote}" }
                figcaption {
                    strong { "{active.author}" }
                    span { class: "block__meta", "{active.role}" }
                }
            }
            div { class: "testimonials__controls",
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    aria_label: crate::t!("testimonials-prev"),
                    onclick: move |_| step(Cycler::prev),
                    "‹"
                }
                div { class: "testimonials__dots",
                    for index in 0..count {
                        button {
                            key: "{index}",
                            r#type: "button",
                            class: dot_class(current.is_active(index)),
                            onclick: move |_| {
                                let mut next = current;
                                next.go_to(index);
                                stored.set(Ok(next));
                            },
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    aria_label: crate::t!("testimonials-next"),
                    onclick: move |_| step(Cycler::next),
                    "›"
                }
            }
        }
    }
}

fn dot_class(active: bool) -> &'static str {
    if active {
        "testimonials__dot testimonials__dot--active"
    } else {
        "testimonials__dot"
    }
}
