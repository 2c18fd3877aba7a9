//! Location sync routes.

use axum::{Json, Router, extract::State, routing::post};
use serde::Serialize;
use tracing::instrument;

use crate::error::AppError;
use crate::services::{SyncOutcome, locations};
use crate::state::AppState;

/// Build the locations router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/locations/sync", post(sync))
}

/// Response after syncing the location-name list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResponse {
    /// Whether the stored list was overwritten (false: already in sync).
    pub updated: bool,
    /// The names now stored.
    pub names: Vec<String>,
}

#[instrument(skip(state))]
async fn sync(State(state): State<AppState>) -> Result<Json<SyncResponse>, AppError> {
    let response = match locations::sync(state.shopify()).await? {
        SyncOutcome::Updated { names } => SyncResponse {
            updated: true,
            names,
        },
        SyncOutcome::Unchanged { names } => SyncResponse {
            updated: false,
            names,
        },
    };

    Ok(Json(response))
}
