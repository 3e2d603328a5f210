use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tokio::sync::Mutex;

use crate::{
    config::SpotifyConfig,
    error::ApiError,
    management::TokenManager,
    spotify::{RecommendationSource, auth},
    types::{RecommendationRequest, RecommendationsResponse},
    utils, warning,
};

/// Spotify Web API client authenticated with the client-credentials flow.
///
/// Built once at startup and shared by every request. The access token is
/// cached inside the client and renewed on demand; the cache is guarded by
/// an async mutex so concurrent requests never trigger parallel token
/// exchanges.
pub struct SpotifyClient {
    http: Client,
    client_id: String,
    client_secret: String,
    api_url: String,
    token_url: String,
    tokens: Mutex<TokenManager>,
}

impl SpotifyClient {
    pub fn new(config: &SpotifyConfig) -> Self {
        Self::with_http_client(Client::new(), config)
    }

    pub fn with_http_client(http: Client, config: &SpotifyConfig) -> Self {
        SpotifyClient {
            http,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token_url: config.token_url.clone(),
            tokens: Mutex::new(TokenManager::new()),
        }
    }

    /// Returns a usable access token, requesting a new one when the cache
    /// is empty or the cached token is about to expire.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UpstreamAuth`] if the token exchange fails.
    pub async fn access_token(&self) -> Result<String, ApiError> {
        let mut tokens = self.tokens.lock().await;
        if let Some(token) = tokens.valid_token() {
            return Ok(token.to_string());
        }

        let token = auth::request_token(
            &self.http,
            &self.token_url,
            &self.client_id,
            &self.client_secret,
        )
        .await?;
        let access_token = token.access_token.clone();
        tokens.store(token);

        Ok(access_token)
    }

    /// Fetches track recommendations for the given seeds.
    ///
    /// Sends `GET {API_URL}/recommendations` with the seed artists and seed
    /// tracks joined by commas. Seed genres are never supplied and, like any
    /// other empty seed list, are left out of the query.
    ///
    /// # Arguments
    ///
    /// * `request` - Seed artists and tracks; ids, URIs and open.spotify.com
    ///   URLs are accepted
    /// * `limit` - Maximum number of tracks Spotify should return
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(RecommendationsResponse)` - Tracks in the order Spotify ranked them
    /// - `Err(ApiError)` - `UpstreamAuth` when no token could be obtained,
    ///   `UpstreamRequest` for transport errors and non-success statuses,
    ///   `UpstreamSchema` when the body does not match the expected shape
    ///
    /// # Token Handling
    ///
    /// A `401 Unauthorized` answer drops the cached token so the next call
    /// starts with a fresh token exchange. The failing call is not retried.
    ///
    /// # Example
    ///
    /// ```
    /// let request = RecommendationRequest {
    ///     seed_artists: vec!["4NHQUGzhtTLFvgF5SZesLK".to_string()],
    ///     seed_tracks: vec![],
    /// };
    /// let response = client.get_recommendations(&request, 10).await?;
    /// println!("Got {} tracks", response.tracks.len());
    /// ```
    pub async fn get_recommendations(
        &self,
        request: &RecommendationRequest,
        limit: u32,
    ) -> Result<RecommendationsResponse, ApiError> {
        let token = self.access_token().await?;
        let api_url = format!("{uri}/recommendations", uri = self.api_url);

        let seed_genres: Vec<String> = Vec::new();
        let mut query = vec![("limit", limit.to_string())];
        for (key, kind, seeds) in [
            ("seed_artists", "artist", &request.seed_artists),
            ("seed_genres", "genre", &seed_genres),
            ("seed_tracks", "track", &request.seed_tracks),
        ] {
            let ids = utils::seed_ids(kind, seeds);
            if !ids.is_empty() {
                query.push((key, ids.join(",")));
            }
        }

        let response = self
            .http
            .get(&api_url)
            .bearer_auth(token)
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                warning!("Spotify rejected the cached access token, dropping it");
                self.tokens.lock().await.invalidate();
            }
            return Err(ApiError::UpstreamRequest(format!("{}: {}", status, body)));
        }

        Ok(serde_json::from_str::<RecommendationsResponse>(&body)?)
    }
}

#[async_trait]
impl RecommendationSource for SpotifyClient {
    async fn recommendations(
        &self,
        request: &RecommendationRequest,
        limit: u32,
    ) -> Result<RecommendationsResponse, ApiError> {
        self.get_recommendations(request, limit).await
    }
}
