//! Configuration management for the sporlapi facade.
//!
//! Configuration comes from environment variables, optionally seeded from `.env`
//! files. Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the working directory
//! 3. `.env` in the local data directory (`sporlapi/.env`)
//! 4. Application defaults for everything except the client credentials
//!
//! The values are read once at startup into a [`Settings`] value which is then
//! passed down explicitly; nothing else in the crate reads the environment.

use std::{env, net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use crate::error::ConfigError;

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MARKET: &str = "US";

/// Loads environment variables from `.env` files.
///
/// Creates the local data directory if it doesn't exist, then loads
/// `.env` from the working directory and from `sporlapi/.env` inside the
/// platform-specific local data directory:
/// - Linux: `~/.local/share/sporlapi/.env`
/// - macOS: `~/Library/Application Support/sporlapi/.env`
/// - Windows: `%LOCALAPPDATA%/sporlapi/.env`
///
/// Variables that are already set are never overwritten. Missing `.env` files
/// are not an error, the process environment alone is a valid configuration.
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sporlapi/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::dotenv().ok();
    dotenv::from_path(path).ok();
    Ok(())
}

/// Returns the address the HTTP server binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the Spotify application client ID (`SPOTIFY_API_AUTH_CLIENT_ID`).
pub fn spotify_client_id() -> Result<String, ConfigError> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Returns the Spotify application client secret (`SPOTIFY_API_AUTH_CLIENT_SECRET`).
///
/// The secret is only ever sent to the token endpoint and must not be logged.
pub fn spotify_client_secret() -> Result<String, ConfigError> {
    required("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

/// Returns the Spotify Web API base URL (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_SPOTIFY_API_URL.to_string())
}

/// Returns the token endpoint used for the client-credentials grant
/// (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_SPOTIFY_TOKEN_URL.to_string())
}

/// Returns the timeout applied to every outbound request
/// (`SPOTIFY_API_TIMEOUT_SECS`).
pub fn spotify_timeout() -> Result<Duration, ConfigError> {
    match env::var("SPOTIFY_API_TIMEOUT_SECS") {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::InvalidNumber {
                name: "SPOTIFY_API_TIMEOUT_SECS",
                value,
            }),
        Err(_) => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
    }
}

/// Returns the market used for artist top tracks (`SPOTIFY_MARKET`).
pub fn spotify_market() -> String {
    env::var("SPOTIFY_MARKET").unwrap_or_else(|_| DEFAULT_MARKET.to_string())
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

/// Everything the upstream client needs to talk to Spotify.
#[derive(Debug, Clone)]
pub struct SpotifySettings {
    pub client_id: String,
    pub client_secret: String,
    pub api_url: String,
    pub token_url: String,
    pub timeout: Duration,
    pub market: String,
}

impl SpotifySettings {
    /// Settings pointing at the public Spotify endpoints with default timeout
    /// and market.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            api_url: DEFAULT_SPOTIFY_API_URL.to_string(),
            token_url: DEFAULT_SPOTIFY_TOKEN_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            market: DEFAULT_MARKET.to_string(),
        }
    }
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server_addr: SocketAddr,
    pub spotify: SpotifySettings,
}

impl Settings {
    /// Builds the settings from the current environment.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingVar`] if a client credential is unset or empty
    /// - [`ConfigError::InvalidAddress`] if `SERVER_ADDRESS` does not parse
    /// - [`ConfigError::InvalidNumber`] if `SPOTIFY_API_TIMEOUT_SECS` does not parse
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = server_addr();
        let server_addr =
            SocketAddr::from_str(&addr).map_err(|e| ConfigError::InvalidAddress(addr, e))?;

        Ok(Self {
            server_addr,
            spotify: SpotifySettings {
                client_id: spotify_client_id()?,
                client_secret: spotify_client_secret()?,
                api_url: spotify_apiurl(),
                token_url: spotify_apitoken_url(),
                timeout: spotify_timeout()?,
                market: spotify_market(),
            },
        })
    }
}
