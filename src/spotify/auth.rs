use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, header};

use crate::{error::ApiError, types::Token};

/// Builds the `Basic` authorization value for the client-credentials grant.
///
/// ```
/// assert_eq!(basic_auth_header("id", "secret"), "Basic aWQ6c2VjcmV0");
/// ```
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(credentials))
}

/// Exchanges the application credentials for an access token.
///
/// Posts `grant_type=client_credentials` to the token endpoint with the
/// credentials as HTTP Basic auth. The response status is not checked: an
/// error body simply fails to decode into a [`Token`].
///
/// # Errors
///
/// [`ApiError::Auth`] on transport failure or when the body is not a token
/// response. No retry is attempted.
pub async fn request_client_credentials_token(
    client: &Client,
    token_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<Token, ApiError> {
    let res = client
        .post(token_url)
        .header(
            header::AUTHORIZATION,
            basic_auth_header(client_id, client_secret),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| ApiError::Auth(e.to_string()))?;

    let status = res.status();
    let body = res
        .bytes()
        .await
        .map_err(|e| ApiError::Auth(e.to_string()))?;

    serde_json::from_slice::<Token>(&body).map_err(|e| {
        ApiError::Auth(format!(
            "cannot decode token response (status {}): {}",
            status, e
        ))
    })
}
