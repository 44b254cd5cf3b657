use dioxus::prelude::*;

use crate::components::{AnimatedSection, DijkstraVideo, ProjectCard};
use crate::content::PROJECTS;

#[component]
pub fn Projects() -> Element {
    rsx! {
        AnimatedSection { id: "projects".to_owned(), class: "space-y-6".to_owned(),
            h2 { class: "text-3xl font-bold tracking-tight", "Projects" }
            div { class: "grid gap-6 md:grid-cols-2 lg:grid-cols-3",
                for project in PROJECTS.iter() {
                    ProjectCard {
                        key: "{project.title}",
                        title: project.title.to_owned(),
                        description: project.description.to_owned(),
                        tags: project.tag_list(),
                        github_url: project.github_url.to_owned(),
                        demo_url: project.demo_url.to_owned(),
                    }
                }
            }
            div { class: "flex flex-col items-center gap-4",
                h3 { class: "text-xl font-semibold", "Dijkstra visualizer in action" }
                DijkstraVideo {}
            }
        }
    }
}
