use dioxus::prelude::*;

use crate::common::browser::scroll_to_element;
use crate::components::AnimatedSection;
use crate::content::{FULL_NAME, RESUME_URL, TAGLINE};

#[component]
pub fn Hero() -> Element {
    rsx! {
        AnimatedSection { class: "hero space-y-4".to_owned(),
            h1 { class: "text-4xl font-bold sm:text-5xl md:text-6xl",
                "Hi, I'm "
                span { class: "text-primary", "{FULL_NAME}" }
            }
            p { class: "hero-tagline text-muted-foreground sm:text-xl", "{TAGLINE}" }
            div { class: "flex gap-4 mt-6",
                a {
                    class: "btn btn-primary",
                    href: "#projects",
                    onclick: move |evt| {
                        evt.prevent_default();
                        scroll_to_element("projects");
                    },
                    "View Projects"
                }
                a {
                    class: "btn btn-outline",
                    href: RESUME_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Resume"
                }
            }
        }
    }
}
