use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use crate::Route;
use crate::cn;
use crate::common::{
    browser::{is_mobile_device, is_mobile_width, scroll_to_element},
    debounce::{BrowserScheduler, debounce},
    text::capitalize_first_letter,
};
use crate::components::ThemeToggle;
use crate::content::{FIRST_NAME, LAST_NAME};
use crate::home::SECTION_IDS;

const RESIZE_DEBOUNCE_MS: u32 = 150;

// reports every resize; the rust side does the debouncing
const RESIZE_SCRIPT: &str = r#"
window.addEventListener("resize", () => dioxus.send(window.innerWidth));
await new Promise(() => {});
"#;

#[component]
fn NavAnchor(target: &'static str) -> Element {
    let label = capitalize_first_letter(target);

    rsx! {
        a {
            class: "nav-link hover-primary",
            href: "#{target}",
            onclick: move |evt| {
                evt.prevent_default();
                scroll_to_element(target);
            },
            "{label}"
        }
    }
}

#[component]
pub fn Header() -> Element {
    let compact = use_signal(is_mobile_device);

    use_future(move || async move {
        let on_resize = debounce(
            move |width: f64| {
                let mut compact = compact;
                let mobile = is_mobile_width(Some(width));

                if compact() != mobile {
                    debug!({ width = width, mobile = mobile }, "viewport crossed the breakpoint");
                    compact.set(mobile);
                }
            },
            RESIZE_DEBOUNCE_MS,
            BrowserScheduler,
        );

        let mut resizes = document::eval(RESIZE_SCRIPT);

        while let Ok(width) = resizes.recv::<f64>().await {
            on_resize(width);
        }
    });

    rsx! {
        header { class: "site-header",
            div { class: "container",
                Link { to: Route::Home {}, class: "brand",
                    span { class: "text-primary", "{FIRST_NAME}" }
                    "{LAST_NAME}"
                }
                nav { class: cn!("site-nav", ("compact", compact())),
                    for target in SECTION_IDS.iter() {
                        NavAnchor { key: "{target}", target: *target }
                    }
                    ThemeToggle {}
                }
            }
        }
    }
}
