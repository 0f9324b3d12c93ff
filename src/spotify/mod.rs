//! # Spotify Integration Module
//!
//! Gateway to the Spotify Web API. A single [`SpotifyClient`] is built at
//! startup and shared by every request handler; it owns the pooled HTTP client
//! and the [`TokenManager`] holding the client-credentials token.
//!
//! ```text
//! Route handlers (api)
//!          ↓
//! SpotifyClient::request  ──→  TokenManager::ensure_valid_token
//!          ↓                               ↓
//! Spotify Web API               Spotify token endpoint
//! ```
//!
//! ## Submodules
//!
//! - [`auth`] - client-credentials token exchange
//! - [`search`] - track, artist and album search
//! - [`artists`] - artist albums and top tracks
//! - [`albums`] - album detail
//!
//! Raw bodies are decoded into the typed records from [`crate::types`]; an
//! upstream error body therefore surfaces as [`ApiError::Mapping`] or
//! [`ApiError::Decode`] rather than being inspected by status code.

pub mod albums;
pub mod artists;
pub mod auth;
pub mod search;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;

use crate::{config::SpotifySettings, error::ApiError, management::TokenManager};

pub struct SpotifyClient {
    client: Client,
    api_url: String,
    market: String,
    tokens: TokenManager,
}

impl SpotifyClient {
    /// Builds the client from settings. Every outbound request, including the
    /// token exchange, is bounded by `settings.timeout`.
    pub fn new(settings: &SpotifySettings) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(settings.timeout).build()?;
        let tokens = TokenManager::new(
            client.clone(),
            &settings.token_url,
            &settings.client_id,
            &settings.client_secret,
        );

        Ok(Self {
            client,
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            market: settings.market.clone(),
            tokens,
        })
    }

    pub fn market(&self) -> &str {
        &self.market
    }

    /// Sends an authenticated request to `{api_url}{path}` and returns the
    /// raw body, whatever the response status.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Auth`] if no valid token can be obtained
    /// - [`ApiError::Network`] on transport failure
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<String, ApiError> {
        let token = self.tokens.ensure_valid_token().await?;
        let url = format!("{}{}", self.api_url, path);

        tracing::debug!(%method, %url, "requesting upstream");
        let response = self
            .client
            .request(method, &url)
            .query(query)
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "upstream returned an error status");
        }

        Ok(response.text().await?)
    }

    /// `GET` a path and deserialize the body into `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let body = self.request(Method::GET, path, query).await?;
        Ok(serde_json::from_str(&body)?)
    }
}
