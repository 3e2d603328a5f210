//! Spotify Recommendation Service Library
//!
//! This library provides a small HTTP service that forwards seed artists and
//! seed tracks to the Spotify recommendations endpoint and reshapes the answer
//! into a flat JSON payload of artist/track pairs plus details about the first
//! recommended track.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the recommendation and health endpoints
//! - `cli` - Command implementations used by the binary
//! - `config` - YAML configuration loading
//! - `error` - Error types and their HTTP representation
//! - `management` - Access token caching
//! - `server` - Router construction and the HTTP listener
//! - `spotify` - Spotify Web API client (client-credentials flow)
//! - `types` - Request, upstream and response data structures
//! - `utils` - Seed normalization and response shaping
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use spotrec::{config, server, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> spotrec::Res<()> {
//!     let config = config::load_config(&config::default_config_path()?).await?;
//!     let client = SpotifyClient::new(&config.spotify);
//!     server::start_api_server(&config.server.address, Arc::new(client)).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the startup glue where configuration, address parsing and
/// listener errors meet. Library operations return their own error types
/// ([`config::ConfigError`], [`error::ApiError`]).
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use spotrec::Res;
///
/// async fn bind_address() -> Res<String> {
///     Ok("127.0.0.1:5000".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for startup information and
/// per-request status lines of the server.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("Listening on http://{}", addr);
/// info!("Requesting recommendations for {} seed artists", count);
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
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations. Used to provide positive feedback
/// when operations complete successfully.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// success!("Configuration loaded from {}", path.display());
/// success!("Received {} recommendations", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// that require immediate program termination.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. It should only be used for fatal errors where
/// recovery is not possible.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// error!("Invalid server address: {}", addr);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator. The server
/// uses it for failed upstream calls, which are answered with an error
/// response instead of terminating the process.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// warning!("Spotify token request failed: {}", err);
/// warning!("Recommendation request failed: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
