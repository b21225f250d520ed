pub mod collections;
pub mod config;
pub mod search;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::autocomplete::Autocomplete;

/// Application context passed to all handlers.
pub struct Ctx {
    pub index: Arc<Autocomplete>,
    /// Collection names from the config, loaded or not.
    pub collections: Vec<String>,
    pub version: String,
}

impl Ctx {
    /// Reject collection names that are not configured.
    pub fn check_collection(&self, name: &str) -> Result<()> {
        if !self.collections.iter().any(|c| c == name) {
            return Err(ApiErr::new("unknown collection", StatusCode::BAD_REQUEST));
        }
        Ok(())
    }
}

/// API response wrapper.
#[derive(Serialize)]
pub struct ApiResp<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T: Serialize> IntoResponse for ApiResp<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub fn json<T: Serialize>(data: T) -> ApiResp<T> {
    ApiResp {
        data: Some(data),
        message: None,
    }
}

/// API error type.
#[derive(Debug)]
pub struct ApiErr {
    pub message: String,
    pub status: StatusCode,
}

impl ApiErr {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }
}

impl IntoResponse for ApiErr {
    fn into_response(self) -> Response {
        let json = Json(ApiResp::<()> {
            data: None,
            message: Some(self.message),
        });
        (self.status, json).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiErr>;

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;
    use crate::{autocomplete::Options, models::Record};

    pub fn rec(id: i64, name: &str) -> Record {
        Record {
            id: json!(id),
            name: name.to_string(),
            fields: serde_json::Map::new(),
        }
    }

    /// Context with "players" and "teams" loaded and "leagues" configured but unbuilt.
    pub fn ctx() -> Arc<Ctx> {
        let mut c = BTreeMap::new();
        c.insert(
            "players".to_string(),
            vec![rec(1, "Leo Messi"), rec(2, "Lionel Scaloni"), rec(3, "Leo Baker")],
        );
        c.insert("teams".to_string(), vec![rec(10, "Leeds United")]);

        Arc::new(Ctx {
            index: Arc::new(Autocomplete::from_collections(c, Options::default())),
            collections: vec!["leagues".into(), "players".into(), "teams".into()],
            version: "test".to_string(),
        })
    }

    #[test]
    fn test_check_collection() {
        let ctx = ctx();
        assert!(ctx.check_collection("players").is_ok());
        assert!(ctx.check_collection("leagues").is_ok());

        let err = ctx.check_collection("coaches").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
