use std::{collections::BTreeMap, sync::Arc};

use axum::extract::{Path, State};

use super::{json, ApiResp, Ctx, Result};
use crate::models::Record;

/// Search one collection.
pub async fn search(
    State(ctx): State<Arc<Ctx>>,
    Path((collection, q)): Path<(String, String)>,
) -> Result<ApiResp<Vec<Record>>> {
    ctx.check_collection(&collection)?;

    let out: Vec<Record> = ctx.index.query(&collection, &q).into_iter().cloned().collect();
    Ok(json(out))
}

/// Search every configured collection. Merging the lists for display is left
/// to the client.
pub async fn search_all(
    State(ctx): State<Arc<Ctx>>,
    Path(q): Path<String>,
) -> Result<ApiResp<BTreeMap<String, Vec<Record>>>> {
    let out: BTreeMap<String, Vec<Record>> = ctx
        .collections
        .iter()
        .map(|c| {
            let res: Vec<Record> = ctx.index.query(c, &q).into_iter().cloned().collect();
            (c.clone(), res)
        })
        .collect();

    Ok(json(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::tests::ctx;
    use axum::http::StatusCode;

    fn ids(recs: &[Record]) -> Vec<i64> {
        recs.iter().filter_map(|r| r.id.as_i64()).collect()
    }

    #[tokio::test]
    async fn test_search() {
        let res = search(
            State(ctx()),
            Path(("players".to_string(), "Leo".to_string())),
        )
        .await
        .unwrap();

        assert_eq!(ids(&res.data.unwrap_or_default()), vec![3, 1]);
    }

    #[tokio::test]
    async fn test_search_unbuilt_collection_is_empty() {
        let res = search(
            State(ctx()),
            Path(("leagues".to_string(), "serie".to_string())),
        )
        .await
        .unwrap();

        assert_eq!(res.data.map(|d| d.len()), Some(0));
    }

    #[tokio::test]
    async fn test_search_unknown_collection() {
        let err = search(
            State(ctx()),
            Path(("coaches".to_string(), "pep".to_string())),
        )
        .await
        .err()
        .unwrap();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search_all() {
        let res = search_all(State(ctx()), Path("le".to_string())).await.unwrap();
        let data = res.data.unwrap_or_default();

        assert_eq!(data.len(), 3);
        assert_eq!(ids(&data["players"]), vec![3, 1]);
        assert_eq!(ids(&data["teams"]), vec![10]);
        assert!(data["leagues"].is_empty());
    }
}
