use constcat::concat;

mod components;
mod home;
mod utilities;
mod variables;

pub use components::BASE_COMPONENTS;
pub use home::HOME_STYLES;
pub use utilities::UTILITIES;
pub use variables::CSS_VARIABLES;

// everything the page needs, in cascade order
pub const FOLIO_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: Inter, system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  color: var(--foreground);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: inherit;
  text-decoration: none;
}

button {
  font: inherit;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    UTILITIES,
    HOME_STYLES
);
