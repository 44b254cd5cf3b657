use dioxus::prelude::*;
use tracing::info;

use crate::common::{browser::copy_to_clipboard, text::is_valid_email};
use crate::components::AnimatedSection;
use crate::content::{ABOUT, EMAIL, GITHUB_LABEL, GITHUB_URL, LINKEDIN_LABEL, LINKEDIN_URL, mailto};

#[component]
fn EmailRow() -> Element {
    // None until the button has been pressed
    let mut copied = use_signal(|| None::<bool>);

    rsx! {
        div { class: "contact-row",
            span { class: "contact-icon", "@" }
            if is_valid_email(EMAIL) {
                a { class: "hover-primary", href: mailto(), "{EMAIL}" }
            } else {
                span { "{EMAIL}" }
            }
            button {
                class: "btn btn-ghost btn-sm",
                "aria-label": "Copy email address",
                onclick: move |_| async move {
                    let ok = copy_to_clipboard(EMAIL).await;
                    info!({ copied = ok }, "copy email");
                    copied.set(Some(ok));
                },
                "Copy"
            }
            {
                match copied() {
                    Some(true) => rsx! { span { class: "copy-status", "Copied!" } },
                    Some(false) => rsx! { span { class: "copy-status", "Copy failed" } },
                    None => rsx! {},
                }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        AnimatedSection { id: "about".to_owned(), class: "space-y-6".to_owned(),
            h2 { class: "text-3xl font-bold tracking-tight", "About Me" }
            div { class: "grid gap-6 md:grid-cols-2",
                div { class: "space-y-4",
                    for paragraph in ABOUT.iter() {
                        p { "{paragraph}" }
                    }
                }
                div { class: "contact-panel bg-muted rounded-lg p-6",
                    div { class: "space-y-4",
                        EmailRow {}
                        div { class: "contact-row",
                            span { class: "contact-icon", "GH" }
                            a {
                                class: "hover-primary",
                                href: GITHUB_URL,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{GITHUB_LABEL}"
                            }
                        }
                        div { class: "contact-row",
                            span { class: "contact-icon", "in" }
                            a {
                                class: "hover-primary",
                                href: LINKEDIN_URL,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{LINKEDIN_LABEL}"
                            }
                        }
                    }
                }
            }
        }
    }
}
