use chrono::{Datelike, Local};
use dioxus::prelude::*;

use crate::common::text::format_date;
use crate::content::{FULL_NAME, GITHUB_URL, LAST_UPDATED, LINKEDIN_URL, mailto};

#[component]
pub fn Footer() -> Element {
    let year = Local::now().year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container py-8 flex flex-col md:flex-row items-center justify-between",
                div {
                    p { class: "text-sm text-muted-foreground",
                        "© {year} {FULL_NAME}. All rights reserved."
                    }
                    p { class: "text-sm text-muted-foreground",
                        "Last updated {format_date(LAST_UPDATED)}"
                    }
                }
                div { class: "social-links mt-6 md:mt-0",
                    a {
                        class: "hover-primary",
                        href: GITHUB_URL,
                        target: "_blank",
                        "aria-label": "GitHub",
                        "GitHub"
                    }
                    a {
                        class: "hover-primary",
                        href: LINKEDIN_URL,
                        target: "_blank",
                        "aria-label": "LinkedIn",
                        "LinkedIn"
                    }
                    a { class: "hover-primary", href: mailto(), "aria-label": "Email", "Email" }
                }
            }
        }
    }
}
