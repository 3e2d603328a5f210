//! # Spotify Integration Module
//!
//! This module is the only place that talks to the Spotify Web API. It
//! obtains application access tokens through the OAuth 2.0 client-credentials
//! flow and calls the recommendations endpoint on behalf of the HTTP handler
//! and the `recommend` command.
//!
//! ## Architecture
//!
//! ```text
//! HTTP handler / CLI
//!          ↓
//! RecommendationSource (trait seam)
//!          ↓
//! SpotifyClient
//!     ├── Token cache (management::TokenManager)
//!     └── Recommendations request
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Client-credentials token exchange:
//! - **Basic Authentication**: Client id and secret are sent as HTTP Basic credentials
//! - **No User Involvement**: Tokens identify the application, not a listener
//! - **Timestamps**: Every token records when it was obtained so expiry can be checked
//!
//! ### Recommendations Module
//!
//! [`recommendations`] - The [`SpotifyClient`] itself:
//! - **Token Reuse**: Cached tokens are reused until shortly before they expire
//! - **Seed Normalization**: Ids, `spotify:` URIs and open.spotify.com URLs are accepted
//! - **Error Categories**: Auth, transport and payload failures stay distinguishable
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Client-credentials token exchange
//! - `GET /recommendations` - Track recommendations for up to five seeds
//!
//! ## Error Handling
//!
//! All operations return [`ApiError`]. Nothing is retried: a failed call is
//! reported to the caller, which turns it into a `500` response. A `401`
//! from the recommendations endpoint clears the cached token so that the
//! following request authenticates again.
//!
//! ## Testing
//!
//! The endpoints come from the configuration, so tests point the client at a
//! local server. Handler tests can skip HTTP entirely by implementing
//! [`RecommendationSource`] on a stub.

use async_trait::async_trait;

use crate::{
    error::ApiError,
    types::{RecommendationRequest, RecommendationsResponse},
};

pub mod auth;
pub mod recommendations;

pub use recommendations::SpotifyClient;

/// Anything that can answer a recommendation request.
///
/// The HTTP layer only depends on this trait. [`SpotifyClient`] is the
/// production implementation.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn recommendations(
        &self,
        request: &RecommendationRequest,
        limit: u32,
    ) -> Result<RecommendationsResponse, ApiError>;
}
