use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum EmError {
    /// A transport-level failure (connection, DNS, TLS) during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A request URL could not be constructed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned a non-200 HTTP status code.
    #[error("unexpected response status: {status} {text} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The canonical status text (e.g. "Not Found").
        text: String,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body was not valid JSON for the expected schema.
    #[error("failed to decode response body from {url}: {source}")]
    Decode {
        /// The URL whose body failed to decode.
        url: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}
