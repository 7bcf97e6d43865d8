use web_sys::window;

/// Backend base URL baked in at build time, if any
const API_URL_OVERRIDE: Option<&str> = option_env!("MDD_API_URL");

/// Get the base HTTP URL of the page (e.g., "http://localhost:4200")
pub fn get_base_url() -> String {
    let Some(window) = window() else {
        return "http://localhost:8080".to_string();
    };
    let location = window.location();

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .host()
        .unwrap_or_else(|_| "localhost:8080".to_string());

    format!("{}//{}", protocol, host)
}

/// Base URL of the backend: `MDD_API_URL` at build time, else the page origin
pub fn api_base_url() -> String {
    match API_URL_OVERRIDE {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
        _ => get_base_url(),
    }
}

/// Path of the page currently shown, after any redirect has completed
pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}
