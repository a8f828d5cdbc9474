//! Endpoint Configuration
//!
//! The UI ships as a static wasm bundle, so the URL is fixed at build time.

/// Build-time variable that overrides the fetch URL.
pub const ENV_TODOS_URL: &str = "TODOS_URL";

/// Endpoint used when `TODOS_URL` is not set at build time.
pub const DEFAULT_TODOS_URL: &str =
    "https://my-json-server.typicode.com/EnkiGroup/DesafioReactFrontendJunior2024/todos";

/// URL the initial list is loaded from.
pub fn todos_url() -> &'static str {
    resolve_url(option_env!("TODOS_URL"))
}

fn resolve_url(configured: Option<&'static str>) -> &'static str {
    match configured.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_TODOS_URL,
    }
}
