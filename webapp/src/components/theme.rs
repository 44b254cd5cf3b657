use dioxus::prelude::*;
use tracing::debug;

use crate::common::theme::{BrowserDisplay, DisplayContext, Theme, is_dark, resolve_theme};

fn display_context(display: &Option<BrowserDisplay>) -> Option<&dyn DisplayContext> {
    display.as_ref().map(|d| d as &dyn DisplayContext)
}

fn dark_class_script(dark: bool) -> String {
    format!("document.documentElement.classList.toggle(\"dark\", {dark});")
}

// owns the theme signal for everything below it, and keeps the .dark class on
// the root element in step with it
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let theme = use_context_provider(|| {
        let display = BrowserDisplay::current();
        Signal::new(resolve_theme(display_context(&display)))
    });

    use_effect(move || {
        let theme = theme();
        let display = BrowserDisplay::current();
        let dark = is_dark(theme, display_context(&display));

        debug!({ theme = %theme, dark = dark }, "applying theme");

        document::eval(&dark_class_script(dark));
    });

    rsx! {
        {children}
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<Theme>>();

    let icon = match theme() {
        Theme::Light => "☀",
        Theme::Dark => "☾",
        Theme::System => "◐",
    };

    rsx! {
        button {
            class: "btn btn-ghost btn-sm",
            "aria-label": "Toggle theme",
            title: "Theme: {theme().label()}",
            onclick: move |_| {
                let next = theme().next();
                theme.set(next);

                if let Some(display) = BrowserDisplay::current() {
                    display.store_theme(next);
                }
            },
            "{icon}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_sets_or_clears_the_dark_class() {
        assert_eq!(
            dark_class_script(true),
            r#"document.documentElement.classList.toggle("dark", true);"#
        );
        assert!(dark_class_script(false).ends_with(r#"toggle("dark", false);"#));
    }
}
