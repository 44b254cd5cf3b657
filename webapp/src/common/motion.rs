// entrance animations
//
// an element starts in its "from" state and moves to rest the first time it
// scrolls into view.  the transition itself is plain css; the only thing the
// browser has to tell us is when the element became visible, see
// observer_script below
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub offset_y_px: f64,
    pub scale: f64,
    pub duration_ms: u32,
    // shrinks the viewport for the visibility check, so that the element is
    // well on screen before it animates
    pub root_margin: Option<&'static str>,
}

pub const FADE_UP: Entrance = Entrance {
    offset_y_px: 20.0,
    scale: 1.0,
    duration_ms: 500,
    root_margin: Some("-100px"),
};

pub const CARD: Entrance = Entrance {
    root_margin: None,
    ..FADE_UP
};

pub const POP: Entrance = Entrance {
    offset_y_px: 0.0,
    scale: 0.8,
    duration_ms: 300,
    root_margin: None,
};

impl Entrance {
    pub fn style(&self, revealed: bool) -> String {
        let transition = format!(
            "transition: opacity {0}ms ease-out, transform {0}ms ease-out;",
            self.duration_ms
        );

        if revealed {
            format!("opacity: 1; transform: none; {transition}")
        } else {
            format!(
                "opacity: 0; transform: translateY({}px) scale({}); {transition}",
                self.offset_y_px, self.scale
            )
        }
    }

    fn observer_options(&self) -> String {
        match self.root_margin {
            Some(margin) => format!("{{ rootMargin: \"{margin}\" }}"),
            None => String::from("{}"),
        }
    }

    // js for document::eval: watches the element carrying data-reveal="key" and
    // sends a single message once it intersects the viewport.  browsers without
    // IntersectionObserver (or a missing element) reveal right away
    pub fn observer_script(&self, key: &str) -> String {
        format!(
            r#"
const el = document.querySelector('[data-reveal="{key}"]');
if (!el || !("IntersectionObserver" in window)) {{
    dioxus.send(true);
}} else {{
    const observer = new IntersectionObserver((entries) => {{
        if (entries.some((entry) => entry.isIntersecting)) {{
            observer.disconnect();
            dioxus.send(true);
        }}
    }}, {options});
    observer.observe(el);
}}
"#,
            options = self.observer_options()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_then_at_rest() {
        assert_eq!(
            FADE_UP.style(false),
            "opacity: 0; transform: translateY(20px) scale(1); \
             transition: opacity 500ms ease-out, transform 500ms ease-out;"
        );
        assert_eq!(
            FADE_UP.style(true),
            "opacity: 1; transform: none; \
             transition: opacity 500ms ease-out, transform 500ms ease-out;"
        );
    }

    #[test]
    fn pop_scales_instead_of_sliding() {
        let style = POP.style(false);

        assert!(style.contains("translateY(0px) scale(0.8)"));
        assert!(style.contains("opacity 300ms"));
    }

    #[test]
    fn only_sections_use_a_root_margin() {
        assert!(
            FADE_UP
                .observer_script("abc")
                .contains(r#"{ rootMargin: "-100px" }"#)
        );
        assert!(!CARD.observer_script("abc").contains("rootMargin"));
        assert_eq!(CARD.style(false), FADE_UP.style(false));
    }

    #[test]
    fn script_targets_the_key_and_fires_once() {
        let script = POP.observer_script("k3y");

        assert!(script.contains(r#"document.querySelector('[data-reveal="k3y"]')"#));
        assert!(script.contains("observer.disconnect();"));
    }
}
