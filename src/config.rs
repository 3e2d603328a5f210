//! Configuration management for the recommendation service.
//!
//! The service reads a single YAML file, `config.yaml`, which lives next to
//! the running executable unless another path is given on the command line.
//! It holds the Spotify client credentials used for the client-credentials
//! flow and, optionally, the upstream endpoints and the server bind address.
//!
//! ```yaml
//! spotify:
//!   CLIENT_ID: "abc123"
//!   CLIENT_SECRET: "def456"
//! server:
//!   ADDRESS: "127.0.0.1:5000"
//! ```
//!
//! Loading never terminates the process. A missing file is reported as
//! [`ConfigError::NotFound`] and the binary decides to exit.

use std::{
    fmt,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "config.yaml";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "The file '{file}' was not found in {}. Please check the file location.",
        .dir.display()
    )]
    NotFound { file: String, dir: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Cannot determine the location of the running executable: {0}")]
    MissingExecutablePath(std::io::Error),
}

/// Complete service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub spotify: SpotifyConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Spotify credentials and endpoints.
///
/// Keys are upper case in the file (`CLIENT_ID`, `CLIENT_SECRET`, ...). The
/// endpoint URLs default to the public Spotify Web API and only need to be
/// set when talking to a proxy or a test double.
#[derive(Clone, Deserialize)]
pub struct SpotifyConfig {
    #[serde(rename = "CLIENT_ID")]
    pub client_id: String,
    #[serde(rename = "CLIENT_SECRET")]
    pub client_secret: String,
    #[serde(rename = "API_URL", default = "default_api_url")]
    pub api_url: String,
    #[serde(rename = "TOKEN_URL", default = "default_token_url")]
    pub token_url: String,
}

impl fmt::Debug for SpotifyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("token_url", &self.token_url)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(rename = "ADDRESS", default = "default_server_address")]
    pub address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            address: default_server_address(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_SPOTIFY_API_URL.to_string()
}

fn default_token_url() -> String {
    DEFAULT_SPOTIFY_TOKEN_URL.to_string()
}

fn default_server_address() -> String {
    DEFAULT_SERVER_ADDRESS.to_string()
}

/// Returns the default configuration path: `config.yaml` in the directory
/// of the running executable.
///
/// # Errors
///
/// Returns [`ConfigError::MissingExecutablePath`] if the executable path
/// cannot be resolved by the operating system.
///
/// # Example
///
/// ```
/// let path = default_config_path()?; // e.g. "/opt/spotrec/config.yaml"
/// ```
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let exe = std::env::current_exe().map_err(ConfigError::MissingExecutablePath)?;
    let dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Loads and parses the configuration file at `path`.
///
/// The file is read once at startup; the returned [`Config`] is immutable
/// for the rest of the process lifetime.
///
/// # Arguments
///
/// * `path` - Location of the YAML configuration file
///
/// # Errors
///
/// - [`ConfigError::NotFound`] if no file exists at `path`
/// - [`ConfigError::Io`] for any other read failure
/// - [`ConfigError::Parse`] if the YAML is malformed or a required key
///   (`spotify.CLIENT_ID`, `spotify.CLIENT_SECRET`) is missing
///
/// # Example
///
/// ```
/// let config = load_config(Path::new("config.yaml")).await?;
/// println!("Serving on {}", config.server.address);
/// ```
pub async fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = match async_fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let file = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| CONFIG_FILE_NAME.to_string());
            let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
            return Err(ConfigError::NotFound { file, dir });
        }
        Err(e) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    parse_config(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from YAML text.
pub fn parse_config(content: &str) -> Result<Config, serde_yaml::Error> {
    serde_yaml::from_str(content)
}
