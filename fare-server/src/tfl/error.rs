//! TfL client error types.

/// Errors from the TfL HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum TflError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization or field conversion failed
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Stop point or route not known to TfL
    #[error("not found: {0}")]
    NotFound(String),

    /// Rate limited by the API
    #[error("rate limited by TfL API")]
    RateLimited,

    /// Invalid app key
    #[error("unauthorized: check TFL_APP_KEY")]
    Unauthorized,
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(body) => format!(" (body: {body})"),
        None => String::new(),
    }
}
