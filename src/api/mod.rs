//! # API Module
//!
//! HTTP endpoints of the recommendation service.
//!
//! ## Endpoints
//!
//! ### Recommendations
//!
//! - [`get_music_recommendations`] - `GET /get_music_recommendations`. Reads the
//!   repeatable `seed_artists` and `seed_tracks` query parameters, asks the
//!   injected [`RecommendationSource`](crate::spotify::RecommendationSource) for
//!   up to ten tracks and answers with:
//!
//!   ```json
//!   {
//!     "Artist_track_pairs": [["Artist", "Track"]],
//!     "first_track_album_art": "https://i.scdn.co/image/...",
//!     "first_track_album_name": "Album",
//!     "first_track_artist_name": "Artist"
//!   }
//!   ```
//!
//!   A request without seed artists is answered with `400` and
//!   `{"error": "No seed artists provided"}`. Any upstream failure becomes
//!   `500` with `{"error": "Failed to retrieve data", "details": "..."}`.
//!
//! ### Monitoring
//!
//! - [`health`] - `GET /health`, returns status, version and the served endpoints.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use axum::{Extension, Router, routing::get};
//! use spotrec::api::{get_music_recommendations, health};
//!
//! let app = Router::new()
//!     .route("/get_music_recommendations", get(get_music_recommendations))
//!     .route("/health", get(health))
//!     .layer(Extension(source));
//! ```

mod health;
mod recommendations;

pub use health::health;
pub use recommendations::get_music_recommendations;

pub const RECOMMENDATIONS_PATH: &str = "/get_music_recommendations";
pub const HEALTH_PATH: &str = "/health";
