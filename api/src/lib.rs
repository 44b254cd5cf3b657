pub mod contact;

// url layout
//
// api calls live under /folio/api; every other path belongs to the web app
pub const HTTP_URL_ROOT: &str = "folio";

pub const API_PATH: &str = "api";

pub fn api_route(endpoint: &str) -> String {
    format!("/{HTTP_URL_ROOT}/{API_PATH}/{endpoint}")
}
