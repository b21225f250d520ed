use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use super::{json, ApiErr, ApiResp, Ctx, Result};
use crate::models::{CollectionStats, Record};

/// Record and node counts of the loaded collections.
pub async fn get_collections(State(ctx): State<Arc<Ctx>>) -> Result<ApiResp<Vec<CollectionStats>>> {
    Ok(json(ctx.index.stats()))
}

/// Full record list of a collection, for clients that build their own index.
pub async fn get_records(
    State(ctx): State<Arc<Ctx>>,
    Path(collection): Path<String>,
) -> Result<ApiResp<Vec<Record>>> {
    ctx.check_collection(&collection)?;

    let trie = ctx
        .index
        .get(&collection)
        .ok_or_else(|| ApiErr::new("collection not loaded", StatusCode::NOT_FOUND))?;

    Ok(json(trie.records().to_vec()))
}
