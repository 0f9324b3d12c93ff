//! Spotify Lookup Facade Library
//!
//! A thin HTTP service in front of the Spotify Web API. It authenticates with
//! the client-credentials grant, forwards track, artist and album lookups, and
//! reshapes the upstream JSON into a small, stable response schema.
//!
//! # Modules
//!
//! - `api` - HTTP route handlers
//! - `config` - Configuration management and environment variables
//! - `error` - Error types and their HTTP status mapping
//! - `management` - Access token lifecycle
//! - `mapping` - Upstream record to response payload conversion
//! - `server` - Router assembly and the HTTP server loop
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Upstream records and response payloads
//! - `utils` - Formatting and tallying helpers
//!
//! # Example
//!
//! ```
//! use sporlapi::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> sporlapi::Res<()> {
//!     config::load_env().await?;
//!     server::start_api_server(config::Settings::from_env()?).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod management;
pub mod mapping;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for process-level plumbing.
///
/// Used where errors of different kinds (configuration, I/O, HTTP) only need
/// to be reported, not matched on. Lookup code returns [`error::ApiError`].
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// ```
/// info!("Loading configuration...");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// ```
/// success!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program
/// with status 1. Only for fatal startup errors.
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// ```
/// warning!("No .env file found, using process environment");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
