use chrono::Utc;
use reqwest::Client;

use crate::{error::ApiError, types::Token};

/// Requests an application access token using the OAuth 2.0
/// client-credentials grant.
///
/// Authenticates the service itself, not an end user: the client id and
/// secret are sent as HTTP Basic credentials together with
/// `grant_type=client_credentials`. The returned token carries no refresh
/// token; once it expires a new one is requested the same way.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `token_url` - Spotify token endpoint, e.g. `https://accounts.spotify.com/api/token`
/// * `client_id` - Application client id
/// * `client_secret` - Application client secret
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Access token with its lifetime and the time it was obtained
/// - `Err(ApiError::UpstreamAuth)` - Network failure, rejected credentials or
///   an unreadable token response
///
/// # Example
///
/// ```
/// let client = reqwest::Client::new();
/// let token = request_token(&client, DEFAULT_SPOTIFY_TOKEN_URL, "abc", "def").await?;
/// println!("Token valid for {} seconds", token.expires_in);
/// ```
pub async fn request_token(
    client: &Client,
    token_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<Token, ApiError> {
    let res = client
        .post(token_url)
        .basic_auth(client_id, Some(client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| ApiError::UpstreamAuth(e.to_string()))?;

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| ApiError::UpstreamAuth(e.to_string()))?;

    if !status.is_success() {
        return Err(ApiError::UpstreamAuth(format!("{}: {}", status, body)));
    }

    let mut token: Token =
        serde_json::from_str(&body).map_err(|e| ApiError::UpstreamAuth(e.to_string()))?;
    token.obtained_at = Utc::now().timestamp() as u64;

    Ok(token)
}
