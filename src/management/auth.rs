use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{error::ApiError, spotify::auth::request_client_credentials_token, types::Token};

/// An access token together with the instant it stops being valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn from_response(token: Token, obtained_at: DateTime<Utc>) -> Self {
        let lifetime = i64::try_from(token.expires_in).unwrap_or(i64::MAX);
        let expires_at = Duration::try_seconds(lifetime)
            .and_then(|d| obtained_at.checked_add_signed(d))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_at,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Holds the client-credentials token shared by every outbound request.
///
/// The cached token sits behind an async mutex that stays locked while a
/// refresh is in flight, so concurrent callers that find it expired wait for
/// a single exchange instead of each starting their own.
pub struct TokenManager {
    client: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    token: Mutex<Option<AccessToken>>,
}

impl TokenManager {
    pub fn new(
        client: Client,
        token_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        TokenManager {
            client,
            token_url: token_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token: Mutex::new(None),
        }
    }

    /// Returns a bearer token that is valid right now, exchanging the client
    /// credentials for a new one when none is held or the held one expired.
    ///
    /// # Errors
    ///
    /// [`ApiError::Auth`] if the exchange fails. The previously held token, if
    /// any, is kept so the next call tries again.
    pub async fn ensure_valid_token(&self) -> Result<String, ApiError> {
        let mut token = self.token.lock().await;

        if let Some(current) = token.as_ref() {
            if !current.is_expired(Utc::now()) {
                return Ok(current.access_token.clone());
            }
        }

        let fresh = self.refresh_token().await?;
        let access_token = fresh.access_token.clone();
        *token = Some(fresh);

        Ok(access_token)
    }

    async fn refresh_token(&self) -> Result<AccessToken, ApiError> {
        let obtained_at = Utc::now();
        let response = request_client_credentials_token(
            &self.client,
            &self.token_url,
            &self.client_id,
            &self.client_secret,
        )
        .await?;

        let token = AccessToken::from_response(response, obtained_at);
        tracing::info!(
            token_type = %token.token_type,
            expires_at = %token.expires_at,
            "obtained new access token"
        );

        Ok(token)
    }

    pub async fn current_token(&self) -> Option<AccessToken> {
        self.token.lock().await.clone()
    }
}
