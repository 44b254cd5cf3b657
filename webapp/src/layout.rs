use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use crate::common::{style::FOLIO_STYLES, text::truncate_text};
use crate::components::ThemeProvider;
use crate::content::{PAGE_DESCRIPTION, PAGE_TITLE};

// wraps every route: document metadata, the global stylesheet, and the theme
#[component]
pub fn RootLayout() -> Element {
    rsx! {
        document::Title { "{PAGE_TITLE}" }
        document::Meta { name: "description", content: PAGE_DESCRIPTION }
        style { "{FOLIO_STYLES}" }
        ThemeProvider {
            Outlet::<Route> {}
        }
    }
}

// garbage urls can be arbitrarily long
const SHOWN_PATH_LIMIT: usize = 60;

fn shown_path(segments: &[String]) -> String {
    truncate_text(&segments.join("/"), SHOWN_PATH_LIMIT)
}

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = shown_path(&segments);

    rsx! {
        div { class: "container not-found",
            h1 { class: "text-3xl font-bold", "Page not found" }
            p { class: "text-muted-foreground", "Nothing lives at /{path}" }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back home" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_paths_are_shown_whole() {
        let segments = vec![String::from("projects"), String::from("folio")];

        assert_eq!(shown_path(&segments), "projects/folio");
    }

    #[test]
    fn long_paths_are_cut() {
        let segments = vec!["x".repeat(200)];

        assert_eq!(shown_path(&segments), format!("{}...", "x".repeat(60)));
    }
}
