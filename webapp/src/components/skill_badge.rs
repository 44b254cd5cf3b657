use dioxus::prelude::*;

use crate::cn;
use crate::common::motion::POP;
use crate::components::entrance::use_entrance;

#[derive(Clone, PartialEq, Props)]
pub struct SkillBadgeProps {
    name: String,
    class: Option<String>,
}

#[component]
pub fn SkillBadge(props: SkillBadgeProps) -> Element {
    let entrance = use_entrance(POP);
    let watcher = entrance.clone();

    rsx! {
        div {
            "data-reveal": entrance.key(),
            style: entrance.style(),
            onmounted: move |_| watcher.clone().watch(),
            span { class: cn!("badge skill-badge px-3 py-1 text-sm", props.class), "{props.name}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_name() {
        let html = dioxus_ssr::render_element(rsx! {
            SkillBadge { name: "Docker".to_owned() }
        });

        assert!(html.contains(r#"<span class="badge skill-badge px-3 py-1 text-sm">Docker</span>"#));
        assert!(html.contains("scale(0.8)"));
    }

    #[test]
    fn names_are_escaped() {
        let html = dioxus_ssr::render_element(rsx! {
            SkillBadge { name: "<C/C++>".to_owned() }
        });

        assert!(!html.contains("<C/C++>"));
    }
}
