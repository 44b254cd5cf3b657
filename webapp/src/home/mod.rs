use dioxus::prelude::*;

mod about;
mod footer;
mod header;
mod hero;
mod projects;
mod skills;

use about::About;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;
use skills::Skills;

// the anchors the header scrolls to, in page order
pub const SECTION_IDS: &[&str] = &["about", "skills", "projects"];

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "page",
            Header {}
            main { class: "container py-10 space-y-24",
                Hero {}
                About {}
                Skills {}
                Projects {}
            }
            Footer {}
        }
    }
}
