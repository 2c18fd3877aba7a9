//! Constraint rule registration routes.

use axum::{Json, Router, extract::State, routing::post};
use serde::Serialize;
use tracing::instrument;

use pinpoint_core::ConstraintRuleId;

use crate::error::AppError;
use crate::services::{Unregistration, registration};
use crate::state::AppState;

/// Build the rule router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/rule/register", post(register))
        .route("/api/rule/unregister", post(unregister))
}

/// Response after registering the rule.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    /// The registered rule's GID.
    pub rule_id: ConstraintRuleId,
    /// Whether this request created the rule (false: already registered).
    pub created: bool,
}

/// Response after unregistering the rule.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnregisterResponse {
    /// Whether a rule was deleted (false: nothing was registered).
    pub deleted: bool,
    /// The removed rule's GID, when one was deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<ConstraintRuleId>,
}

#[instrument(skip(state))]
async fn register(State(state): State<AppState>) -> Result<Json<RegisterResponse>, AppError> {
    let registration = registration::register(state.shopify()).await?;

    Ok(Json(RegisterResponse {
        rule_id: registration.rule.id,
        created: registration.created,
    }))
}

#[instrument(skip(state))]
async fn unregister(State(state): State<AppState>) -> Result<Json<UnregisterResponse>, AppError> {
    let response = match registration::unregister(state.shopify()).await? {
        Unregistration::Deleted { rule_id } => UnregisterResponse {
            deleted: true,
            rule_id: Some(rule_id),
        },
        Unregistration::NothingToDelete => UnregisterResponse {
            deleted: false,
            rule_id: None,
        },
    };

    Ok(Json(response))
}
