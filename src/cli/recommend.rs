use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error,
    spotify::SpotifyClient,
    success,
    types::RecommendationRequest,
    utils::{self, RECOMMENDATION_LIMIT},
};

pub async fn recommend(
    config_path: Option<PathBuf>,
    seed_artists: Vec<String>,
    seed_tracks: Vec<String>,
    limit: Option<u32>,
) {
    let config = super::load_config_or_exit(config_path).await;
    let request = RecommendationRequest {
        seed_artists,
        seed_tracks,
    };
    if let Err(e) = utils::validate_request(&request) {
        error!("{}", e);
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching recommendations...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let client = SpotifyClient::new(&config.spotify);
    let result = client
        .get_recommendations(&request, limit.unwrap_or(RECOMMENDATION_LIMIT))
        .await
        .and_then(|response| utils::build_payload(&response));
    pb.finish_and_clear();

    let payload = match result {
        Ok(payload) => payload,
        Err(e) => error!("Failed to retrieve recommendations. Err: {}", e),
    };

    let table = Table::new(utils::table_rows(&payload));
    println!(
        "{table}\nAlbum: {album}\nArtist: {artist}\nCover: {cover}\n",
        table = table,
        album = payload.first_track_album_name,
        artist = payload.first_track_artist_name,
        cover = payload.first_track_album_art,
    );
    success!("Received {} recommendations", payload.artist_track_pairs.len());
}
