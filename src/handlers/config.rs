use std::sync::Arc;

use axum::extract::State;
use serde::Serialize;

use super::{json, ApiResp, Ctx, Result};
use crate::autocomplete::Options;

/// Public view of the server's search settings.
#[derive(Serialize)]
pub struct ConfigResp {
    pub version: String,
    pub collections: Vec<String>,
    #[serde(flatten)]
    pub options: Options,
}

pub async fn get_config(State(ctx): State<Arc<Ctx>>) -> Result<ApiResp<ConfigResp>> {
    Ok(json(ConfigResp {
        version: ctx.version.clone(),
        collections: ctx.collections.clone(),
        options: *ctx.index.options(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::tests::ctx;

    #[tokio::test]
    async fn test_get_config() {
        let res = get_config(State(ctx())).await.unwrap();
        let out = serde_json::to_value(res.data).unwrap();

        assert_eq!(out["version"], "test");
        assert_eq!(out["max_results"], 10);
        assert_eq!(out["min_word_len"], 2);
        assert_eq!(out["collections"][1], "players");
    }
}
