use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{
    Res,
    api::{self, HEALTH_PATH, RECOMMENDATIONS_PATH},
    info,
    spotify::RecommendationSource,
};

pub fn router(source: Arc<dyn RecommendationSource>) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(api::health))
        .route(RECOMMENDATIONS_PATH, get(api::get_music_recommendations))
        .layer(Extension(source))
}

pub async fn start_api_server(address: &str, source: Arc<dyn RecommendationSource>) -> Res<()> {
    let addr = SocketAddr::from_str(address)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(source)).await?;

    Ok(())
}
