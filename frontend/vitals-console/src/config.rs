//! Environment configuration helpers

/// Get API base URL (origin) for CSR
#[cfg(target_arch = "wasm32")]
pub fn get_api_base_url() -> String {
    let window = web_sys::window().expect("no global `window` exists");
    let location = window.location();
    location
        .origin()
        .unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// Get API base URL from the environment (native builds and tests)
#[cfg(not(target_arch = "wasm32"))]
pub fn get_api_base_url() -> String {
    std::env::var("VITALS_API_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:8080".to_string())
}
