use dioxus::prelude::*;

use crate::components::{AnimatedSection, SkillBadge};
use crate::content::SKILL_GROUPS;

#[component]
pub fn Skills() -> Element {
    rsx! {
        AnimatedSection { id: "skills".to_owned(), class: "space-y-6".to_owned(),
            h2 { class: "text-3xl font-bold tracking-tight", "Skills" }
            div { class: "space-y-6",
                for group in SKILL_GROUPS.iter() {
                    div { key: "{group.heading}", class: "space-y-3",
                        h3 { class: "text-xl font-semibold", "{group.heading}" }
                        div { class: "flex flex-wrap gap-2",
                            for skill in group.skills.iter() {
                                SkillBadge { key: "{skill}", name: skill.to_string() }
                            }
                        }
                    }
                }
            }
        }
    }
}
