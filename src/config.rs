//! Configuration constants and utilities for popline
//!
//! The only configurable piece of the environment is the base address of the
//! remote population service; everything else is fixed behavior.

/// Default request target template. The `XX` placeholder is replaced with the
/// canonical category label ("Nation" or "State") before the request is made.
pub const DEFAULT_API_URL: &str = "https://datausa.io/api/data?drilldowns=XX&measures=Population";

/// Placeholder in the URL template substituted with the category label
pub const URL_CATEGORY_PLACEHOLDER: &str = "XX";

/// Environment variable name for overriding the API URL template
pub const API_URL_ENV_VAR: &str = "POPLINE_API_URL";

/// Quiescence window applied to search text changes before refiltering
pub const SEARCH_DEBOUNCE_MS: u64 = 700;

/// Get the API URL template, checking the environment variable first, then
/// falling back to the default
pub fn get_api_url() -> String {
    std::env::var_os(API_URL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
