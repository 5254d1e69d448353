/// Synchronous client for the **randomuser.me API**.
///
/// This module issues a single request to the `/api/?results={count}`
/// endpoint and returns the results as flat `models::FlatUser` rows.
///
/// ### Notes
/// - The endpoint needs no headers, auth, or parameters beyond `results`.
/// - `count` is passed through verbatim; the remote service validates it.
/// - Network timeouts use a sane default (30s) and can be adjusted by editing
///   the client builder.
///
/// Typical usage:
/// ```no_run
/// # use randomuser_rs::Client;
/// let client = Client::default();
/// let users = client.fetch(50)?;
/// # Ok::<(), randomuser_rs::api::FetchError>(())
/// ```
use crate::models::{FlatUser, UsersResponse};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;
use thiserror::Error;

/// Why a fetch failed.
///
/// The two variants keep the spec'd failure classes apart: `Http` covers
/// anything the network or the remote service did wrong (unreachable host,
/// timeout, non-2xx status), `Decode` covers a response body that does not
/// match the expected shape (missing `results` key, missing nested fields).
/// The caller decides whether either degrades to an empty record set.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("randomuser_rs/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .expect("reqwest client build");
        Self {
            base_url: "https://randomuser.me".into(),
            http,
        }
    }
}

impl Client {
    /// Client against a non-default base URL (used by tests with a local
    /// mock server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Fetch `count` random users and flatten each into a [`FlatUser`].
    ///
    /// One synchronous GET, no retries, no pagination. On success the
    /// returned vector has exactly as many rows as the API sent back
    /// (normally `count`).
    ///
    /// ### Errors
    /// - [`FetchError::Http`] on network failure or a non-success status
    /// - [`FetchError::Decode`] when the body is not the expected JSON shape
    pub fn fetch(&self, count: u32) -> Result<Vec<FlatUser>, FetchError> {
        let url = format!("{}/api/?results={}", self.base_url, count);
        let body = self.http.get(&url).send()?.error_for_status()?.text()?;
        let parsed: UsersResponse = serde_json::from_str(&body)?;
        Ok(parsed.results.into_iter().map(FlatUser::from).collect())
    }
}
