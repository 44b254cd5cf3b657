use dioxus::prelude::*;

use crate::cn;
use crate::common::motion::CARD;
use crate::components::entrance::use_entrance;

#[derive(Clone, PartialEq, Props)]
pub struct ProjectCardProps {
    title: String,
    description: String,
    tags: Vec<String>,
    github_url: String,
    demo_url: String,
    class: Option<String>,
}

#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let entrance = use_entrance(CARD);
    let watcher = entrance.clone();

    rsx! {
        div {
            "data-reveal": entrance.key(),
            style: entrance.style(),
            onmounted: move |_| watcher.clone().watch(),
            div { class: cn!("card h-full overflow-hidden", props.class),
                div { class: "card-header",
                    h3 { class: "card-title flex items-center justify-between",
                        span { "{props.title}" }
                    }
                }
                div { class: "card-content space-y-4",
                    p { class: "text-muted-foreground", "{props.description}" }
                    div { class: "flex flex-wrap gap-2",
                        for tag in props.tags.iter() {
                            span { key: "{tag}", class: "badge badge-secondary", "{tag}" }
                        }
                    }
                }
                div { class: "card-footer justify-between",
                    a {
                        class: "btn btn-outline btn-sm",
                        href: "{props.github_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Code"
                    }
                    a {
                        class: "btn btn-primary btn-sm",
                        href: "{props.demo_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Demo"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(tags: &[&str], github_url: &str, demo_url: &str) -> String {
        let tags = tags.iter().map(|t| t.to_string()).collect::<Vec<_>>();
        let github_url = github_url.to_owned();
        let demo_url = demo_url.to_owned();

        dioxus_ssr::render_element(rsx! {
            ProjectCard {
                title: "Task Management App".to_owned(),
                description: "A collaborative task management application.".to_owned(),
                tags,
                github_url,
                demo_url,
            }
        })
    }

    fn badges(html: &str) -> Vec<&str> {
        html.split(r#"class="badge badge-secondary">"#)
            .skip(1)
            .filter_map(|rest| rest.split_once("</span>").map(|(tag, _)| tag))
            .collect()
    }

    #[test]
    fn tags_keep_their_order() {
        let cases: &[&[&str]] = &[
            &["React", "Firebase", "Tailwind CSS"],
            &["C++", "SFML Framework", "Python"],
            &["Zig", "Ada", "Rust", "Go", "C"],
            &["solo"],
            &[],
        ];

        for tags in cases {
            let html = render(tags, "https://github.com/x/y", "https://example.com");
            assert_eq!(badges(&html), tags.to_vec());
        }
    }

    #[test]
    fn links_point_at_the_project() {
        let html = render(
            &["Rust"],
            "https://github.com/jerinmulangan/dir",
            "https://task-app-demo.com",
        );

        let code = html.find(r#"href="https://github.com/jerinmulangan/dir""#).unwrap();
        let demo = html.find(r#"href="https://task-app-demo.com""#).unwrap();

        assert!(code < demo);
        assert!(html[code..].contains("Code"));
        assert!(html[demo..].contains("Demo"));
        assert_eq!(html.matches(r#"target="_blank""#).count(), 2);
    }

    #[test]
    fn header_body_footer_order() {
        let html = render(&["Rust"], "https://a.example", "https://b.example");

        let title = html.find("Task Management App").unwrap();
        let description = html.find("A collaborative task").unwrap();
        let footer = html.find("card-footer").unwrap();

        assert!(title < description && description < footer);
    }

    #[test]
    fn long_descriptions_are_shown_in_full() {
        let description = "word ".repeat(100);

        let html = dioxus_ssr::render_element(rsx! {
            ProjectCard {
                title: "t".to_owned(),
                description,
                tags: vec![],
                github_url: "#".to_owned(),
                demo_url: "#".to_owned(),
            }
        });

        assert!(html.contains(&"word ".repeat(100)));
        assert!(!html.contains("..."));
    }

    #[test]
    fn caller_classes_are_merged() {
        let html = dioxus_ssr::render_element(rsx! {
            ProjectCard {
                title: "t".to_owned(),
                description: "d".to_owned(),
                tags: vec![],
                github_url: "#".to_owned(),
                demo_url: "#".to_owned(),
                class: "h-auto shadow-lg".to_owned(),
            }
        });

        assert!(html.contains(r#"class="card overflow-hidden h-auto shadow-lg""#));
    }
}
