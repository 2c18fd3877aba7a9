//! Status route for the embedded admin page.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use tracing::instrument;

use crate::error::AppError;
use crate::services::{LocationSyncStatus, locations, registration};
use crate::shopify::types::{FulfillmentConstraintRule, ShopifyFunction};
use crate::state::AppState;

/// Build the status router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/status", get(status))
}

/// Everything the embedded admin page renders.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    /// The store this deployment is bound to.
    pub store: String,
    /// The deployed constraint function, if any.
    pub function: Option<ShopifyFunction>,
    /// The registered constraint rule, if any.
    pub rule: Option<FulfillmentConstraintRule>,
    /// Live vs synced location names.
    pub locations: LocationSyncStatus,
}

#[instrument(skip(state))]
async fn status(State(state): State<AppState>) -> Result<Json<StatusResponse>, AppError> {
    let (function, rule) = registration::current(state.shopify()).await?;
    let locations = locations::status(state.shopify()).await?;

    Ok(Json(StatusResponse {
        store: state.config().shopify.store.clone(),
        function,
        rule,
        locations,
    }))
}
