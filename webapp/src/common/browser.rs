use dioxus::prelude::*;
use tracing::{debug, error, warn};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

// thin wrappers over the browser.  the decisions live in plain functions so
// they can be tested without one

pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub fn is_mobile_width(width: Option<f64>) -> bool {
    width.is_some_and(|w| w <= MOBILE_BREAKPOINT_PX)
}

pub fn viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
}

pub fn is_mobile_device() -> bool {
    is_mobile_width(viewport_width())
}

// smooth scroll to the element with this id, if there is one
pub fn scroll_to_element(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        debug!({ id = id }, "no element to scroll to");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);

    element.scroll_into_view_with_scroll_into_view_options(&options);
}

const CLIPBOARD_SCRIPT: &str = r#"
const text = await dioxus.recv();
try {
    await navigator.clipboard.writeText(text);
    return true;
} catch (err) {
    console.error("clipboard write failed", err);
    return false;
}
"#;

// resolves to whether the text made it onto the clipboard.  failures are
// logged and never surfaced
pub async fn copy_to_clipboard(text: &str) -> bool {
    let eval = document::eval(CLIPBOARD_SCRIPT);

    if let Err(err) = eval.send(text) {
        error!({ error = ?err }, "failed to hand text to the clipboard script");
        return false;
    }

    match eval.join::<bool>().await {
        Ok(copied) => {
            if !copied {
                warn!("clipboard write was refused");
            }
            copied
        }
        Err(err) => {
            error!({ error = ?err }, "clipboard script failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(is_mobile_width(Some(320.0)));
        assert!(is_mobile_width(Some(768.0)));
        assert!(!is_mobile_width(Some(768.5)));
        assert!(!is_mobile_width(Some(1440.0)));
    }

    #[test]
    fn no_viewport_is_not_mobile() {
        assert!(!is_mobile_width(None));
    }
}
