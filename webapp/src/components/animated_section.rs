use dioxus::prelude::*;

use crate::common::motion::FADE_UP;
use crate::components::entrance::use_entrance;

#[derive(Clone, PartialEq, Props)]
pub struct AnimatedSectionProps {
    children: Element,
    class: Option<String>,
    id: Option<String>,
}

// a page section that fades up the first time it scrolls into view
#[component]
pub fn AnimatedSection(props: AnimatedSectionProps) -> Element {
    let entrance = use_entrance(FADE_UP);
    let watcher = entrance.clone();

    rsx! {
        section {
            id: props.id,
            class: props.class,
            "data-reveal": entrance.key(),
            style: entrance.style(),
            onmounted: move |_| watcher.clone().watch(),
            {props.children}
        }
    }
}
