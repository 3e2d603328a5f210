use std::{path::PathBuf, sync::Arc};

use crate::{error, server, spotify::SpotifyClient};

pub async fn serve(config_path: Option<PathBuf>, address: Option<String>) {
    let config = super::load_config_or_exit(config_path).await;
    let address = address.unwrap_or_else(|| config.server.address.clone());

    let client = SpotifyClient::new(&config.spotify);
    if let Err(e) = server::start_api_server(&address, Arc::new(client)).await {
        error!("Server stopped. Err: {}", e);
    }
}
