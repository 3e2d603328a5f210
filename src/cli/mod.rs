//! # CLI Module
//!
//! Command implementations behind the `spotrec` binary.
//!
//! ## Commands
//!
//! - [`serve`] - Loads the configuration, builds the Spotify client once and
//!   serves the HTTP API until the process is stopped
//! - [`recommend`] - Runs a single recommendation request from the terminal
//!   and prints the artist/track pairs as a table
//!
//! ## Error Handling
//!
//! Commands are the outermost layer, so this is where fatal errors end the
//! process. A missing or unreadable configuration file is reported with the
//! `error!` macro, which exits with status 1 before anything is served.
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotrec                                   # serve with config.yaml next to the binary
//! spotrec serve --config ./config.yaml --address 0.0.0.0:8080
//! spotrec recommend --seed-artist 4NHQUGzhtTLFvgF5SZesLK --seed-track 0c6xIDDpzE81m2q797ordA
//! ```

use std::path::PathBuf;

use crate::{
    config::{self, Config},
    error, success,
};

mod recommend;
mod serve;

pub use recommend::recommend;
pub use serve::serve;

async fn load_config_or_exit(config_path: Option<PathBuf>) -> Config {
    let path = match config_path {
        Some(path) => path,
        None => match config::default_config_path() {
            Ok(path) => path,
            Err(e) => error!("{}", e),
        },
    };

    match config::load_config(&path).await {
        Ok(config) => {
            success!("Configuration loaded from {}", path.display());
            config
        }
        Err(e) => error!("{}", e),
    }
}
