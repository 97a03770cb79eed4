//! Relist API client utilities.
//!
//! A lightweight client for the related-records lookup endpoint. It focuses on:
//!
//! - Constructing an HTTP client with sensible defaults
//! - Discovering the bearer token from `RELIST_API_TOKEN`
//! - Validating `RELIST_API_BASE` for safety
//! - Building requests with a consistent User-Agent and Accept headers
//!
//! # Example
//!
//! ```ignore
//! use relist_api::RelistClient;
//! use anyhow::Result;
//!
//! async fn probe() -> Result<()> {
//!     let client = RelistClient::new_from_env()?;
//!     let res = client
//!         .request(reqwest::Method::GET, "/health")
//!         .send()
//!         .await?;
//!     println!("status: {}", res.status());
//!     Ok(())
//! }
//! ```

use std::env;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::{Client, RequestBuilder, Url, header};
use tracing::debug;

/// Environment variable holding the lookup service base URL.
pub const API_BASE_ENV: &str = "RELIST_API_BASE";
/// Environment variable holding the bearer token.
pub const API_TOKEN_ENV: &str = "RELIST_API_TOKEN";
/// Base URL used when `RELIST_API_BASE` is unset.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Hostnames allowed to use plain HTTP.
const LOCALHOST_DOMAINS: &[&str] = &["localhost", "127.0.0.1", "[::1]"];

/// Thin wrapper around a configured `reqwest::Client` for the lookup service.
#[derive(Debug, Clone)]
pub struct RelistClient {
    pub base_url: String,
    pub http: Client,
    pub user_agent: String,
}

impl RelistClient {
    /// Construct a client from `RELIST_API_BASE` and `RELIST_API_TOKEN`.
    pub fn new_from_env() -> Result<Self> {
        let base_url = env::var(API_BASE_ENV).unwrap_or_else(|_| DEFAULT_API_BASE.into());
        let token = env::var(API_TOKEN_ENV).ok().filter(|t| !t.trim().is_empty());
        Self::new(&base_url, token.as_deref())
    }

    /// Construct a client for an explicit base URL and optional bearer token.
    ///
    /// Non-localhost hosts must use HTTPS.
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self> {
        validate_base_url(base_url)?;

        let mut default_headers = header::HeaderMap::new();
        if let Some(token) = token {
            let value = header::HeaderValue::from_str(&format!("Bearer {}", token.trim()))
                .context("bearer token contains invalid header characters")?;
            default_headers.insert(header::AUTHORIZATION, value);
        }
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(default_headers)
            .timeout(Duration::from_secs(30))
            .build()
            .context("build http client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            user_agent: format!("relist/0.1; {}", env::consts::OS),
        })
    }

    /// Build a `reqwest::RequestBuilder` for a method and API-relative path.
    pub fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "building request");

        self.http
            .request(method, url)
            .header(header::USER_AGENT, &self.user_agent)
    }
}

/// Validate that a base URL is acceptable for use by the client.
///
/// Rules:
/// - `localhost`, `127.0.0.1`, `[::1]`: any scheme is allowed
/// - otherwise: scheme must be HTTPS
fn validate_base_url(base: &str) -> Result<()> {
    let parsed_base_url = Url::parse(base).map_err(|e| anyhow!("Invalid {} URL '{}': {}", API_BASE_ENV, base, e))?;

    let host_name = parsed_base_url
        .host_str()
        .ok_or_else(|| anyhow!("{} must include a host", API_BASE_ENV))?;

    if LOCALHOST_DOMAINS
        .iter()
        .any(|&allowed| host_name.eq_ignore_ascii_case(allowed))
    {
        return Ok(());
    }

    if parsed_base_url.scheme() != "https" {
        return Err(anyhow!(
            "{} must use https for non-localhost hosts; got '{}://'",
            API_BASE_ENV,
            parsed_base_url.scheme()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localhost_allows_plain_http() {
        assert!(validate_base_url("http://localhost:8080").is_ok());
        assert!(validate_base_url("http://127.0.0.1").is_ok());
    }

    #[test]
    fn remote_hosts_require_https() {
        assert!(validate_base_url("https://example.my.site.com").is_ok());
        let error = validate_base_url("http://example.my.site.com").unwrap_err();
        assert!(error.to_string().contains("must use https"));
    }

    #[test]
    fn rejects_unparseable_urls() {
        assert!(validate_base_url("not a url").is_err());
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = RelistClient::new("http://localhost:8080/", Some("token")).expect("client");
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
