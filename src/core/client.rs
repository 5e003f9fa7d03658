//! Public client surface + builder.

use crate::core::EmError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

const DEFAULT_BASE_URL: &str = "https://api.electricitymap.org/v3/";
const USER_AGENT: &str = concat!("electricitymap-rs/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper that holds a configured HTTP client, the API base URL, and
/// the auth token. Immutable after build; cheap to clone and safe to share
/// across tasks.
#[derive(Debug, Clone)]
pub struct EmClient {
    http: Client,
    base: Url,
    token: String,
}

impl EmClient {
    /// Creates a client for the production API with the given auth token.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(token: impl Into<String>) -> Result<Self, EmError> {
        Self::builder().token(token).build()
    }

    /// Create a new builder.
    pub fn builder() -> EmClientBuilder {
        EmClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base(&self) -> &Url {
        &self.base
    }
    pub(crate) fn token(&self) -> &str {
        &self.token
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct EmClientBuilder {
    token: Option<String>,
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl EmClientBuilder {
    /// The `auth-token` sent with every request.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// For tests or self-hosted deployments: customize the API base URL.
    /// Defaults to `https://api.electricitymap.org/v3/`.
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Total per-request timeout. Off by default; callers that need a
    /// deadline set one here.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Connect-phase timeout. Off by default.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Builds the [`EmClient`].
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL fails to parse or the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<EmClient, EmError> {
        let mut base = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        // Url::join treats a path without a trailing slash as a file and
        // would drop the `/v3` segment.
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        let mut builder =
            Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let http = builder.build()?;

        Ok(EmClient {
            http,
            base,
            token: self.token.unwrap_or_default(),
        })
    }
}
