//! Customer preferred-location routes.
//!
//! The write path behind the draft-order admin action: staff pick a location
//! for the customer attached to the draft order, and the action stores the
//! name here.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use pinpoint_core::CustomerId;

use crate::error::AppError;
use crate::services::preferences;
use crate::state::AppState;

/// Build the customers router.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/customers/{id}/preferred-location",
        get(get_preference).put(set_preference).delete(clear_preference),
    )
}

/// A customer's stored preference.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceResponse {
    /// The stored location name, if any.
    pub location_name: Option<String>,
}

/// Request to store a preference.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPreferenceRequest {
    /// The location name to store (opaque text, stored as-is).
    pub location_name: String,
}

/// Customers arrive as numeric path segments from the admin action; expand
/// them to full GIDs before hitting the API.
fn customer_gid(id: &str) -> CustomerId {
    if id.starts_with("gid://") {
        CustomerId::new(id)
    } else {
        CustomerId::new(format!("gid://shopify/Customer/{id}"))
    }
}

#[instrument(skip(state))]
async fn get_preference(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PreferenceResponse>, AppError> {
    let location_name = preferences::get(state.shopify(), &customer_gid(&id)).await?;

    Ok(Json(PreferenceResponse { location_name }))
}

#[instrument(skip(state, request))]
async fn set_preference(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SetPreferenceRequest>,
) -> Result<StatusCode, AppError> {
    preferences::set(state.shopify(), &customer_gid(&id), &request.location_name).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
async fn clear_preference(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    preferences::clear(state.shopify(), &customer_gid(&id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
