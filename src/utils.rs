use crate::{
    error::ApiError,
    types::{
        RecommendationPayload, RecommendationRequest, RecommendationTableRow,
        RecommendationsResponse, Track,
    },
};

pub const RECOMMENDATION_LIMIT: u32 = 10;

const OPEN_SPOTIFY_HOST: &str = "open.spotify.com/";

/// Reduces a seed to a bare Spotify id.
///
/// Accepts `spotify:<kind>:<id>` URIs and `https://open.spotify.com/<kind>/<id>`
/// links as well as plain ids. Blank input yields `None`.
pub fn normalize_spotify_id(kind: &str, value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Some(rest) = value.strip_prefix("spotify:") {
        return rest
            .rsplit(':')
            .next()
            .filter(|id| !id.is_empty())
            .map(str::to_string);
    }

    if let Some((_, path)) = value.split_once(OPEN_SPOTIFY_HOST) {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let mut segments = path.split('/');
        while let Some(segment) = segments.next() {
            if segment == kind {
                return segments
                    .next()
                    .filter(|id| !id.is_empty())
                    .map(str::to_string);
            }
        }
        return path
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .map(str::to_string);
    }

    Some(value.to_string())
}

pub fn seed_ids(kind: &str, seeds: &[String]) -> Vec<String> {
    seeds
        .iter()
        .filter_map(|seed| normalize_spotify_id(kind, seed))
        .collect()
}

/// Collects repeated `seed_artists` / `seed_tracks` query parameters in the
/// order they were given. Unknown keys are ignored.
pub fn request_from_query(params: &[(String, String)]) -> RecommendationRequest {
    let mut request = RecommendationRequest::default();
    for (key, value) in params {
        match key.as_str() {
            "seed_artists" => request.seed_artists.push(value.clone()),
            "seed_tracks" => request.seed_tracks.push(value.clone()),
            _ => {}
        }
    }
    request
}

pub fn validate_request(request: &RecommendationRequest) -> Result<(), ApiError> {
    if request.seed_artists.is_empty() {
        return Err(ApiError::no_seed_artists());
    }
    Ok(())
}

fn primary_album_artist(track: &Track) -> Result<&str, ApiError> {
    track
        .album
        .artists
        .first()
        .map(|artist| artist.name.as_str())
        .ok_or_else(|| {
            ApiError::UpstreamSchema(format!("track '{}' has no album artists", track.name))
        })
}

/// Pairs every track with the first artist of its album, in one pass so the
/// two values always come from the same track.
pub fn artist_track_pairs(tracks: &[Track]) -> Result<Vec<(String, String)>, ApiError> {
    tracks
        .iter()
        .map(|track| Ok((primary_album_artist(track)?.to_string(), track.name.clone())))
        .collect()
}

pub fn build_payload(response: &RecommendationsResponse) -> Result<RecommendationPayload, ApiError> {
    let artist_track_pairs = artist_track_pairs(&response.tracks)?;

    let first_track = response
        .tracks
        .first()
        .ok_or_else(|| ApiError::UpstreamSchema("no tracks returned".to_string()))?;
    let album_art = first_track.album.images.first().ok_or_else(|| {
        ApiError::UpstreamSchema(format!("album '{}' has no images", first_track.album.name))
    })?;

    Ok(RecommendationPayload {
        artist_track_pairs,
        first_track_album_art: album_art.url.clone(),
        first_track_album_name: first_track.album.name.clone(),
        first_track_artist_name: primary_album_artist(first_track)?.to_string(),
    })
}

pub fn table_rows(payload: &RecommendationPayload) -> Vec<RecommendationTableRow> {
    payload
        .artist_track_pairs
        .iter()
        .map(|(artist, track)| RecommendationTableRow {
            artist: artist.clone(),
            track: track.clone(),
        })
        .collect()
}
