use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers::{collections, config, search, Ctx};

/// Initialize HTTP routes.
pub fn init_handlers(ctx: Arc<Ctx>) -> Router {
    Router::new()
        .route("/api/config", get(config::get_config))
        .route("/api/collections", get(collections::get_collections))
        .route("/api/collections/{collection}", get(collections::get_records))
        .route(
            "/api/collections/{collection}/search/{q}",
            get(search::search),
        )
        .route("/api/search/{q}", get(search::search_all))
        .with_state(ctx)
}
