//! Constraint rule registration service.
//!
//! Registration binds the deployed fulfillment constraints function into the
//! checkout pipeline for shipping, local delivery, and pickup. Both
//! directions are idempotent: registering an already-registered rule returns
//! the existing rule, and unregistering when nothing is registered reports
//! that there was nothing to delete.

use tracing::instrument;

use pinpoint_core::ConstraintRuleId;

use crate::error::AppError;
use crate::shopify::{
    AdminClient,
    types::{
        CONSTRAINT_DELIVERY_METHOD_TYPES, FULFILLMENT_CONSTRAINTS_API_TYPE,
        FulfillmentConstraintRule, ShopifyFunction,
    },
};

/// Result of a registration request.
#[derive(Debug, Clone)]
pub struct Registration {
    /// The registered rule (existing or newly created).
    pub rule: FulfillmentConstraintRule,
    /// Whether this request created the rule.
    pub created: bool,
}

/// Result of an unregistration request.
#[derive(Debug, Clone)]
pub enum Unregistration {
    /// The rule was deleted and verified gone.
    Deleted {
        /// The removed rule's GID.
        rule_id: ConstraintRuleId,
    },
    /// No rule was registered for the constraint function.
    NothingToDelete,
}

/// The deployed constraint function and its registered rule, if any.
///
/// Rules are matched to the function by API type rather than function ID:
/// IDs change on redeployment, and a rule left over from a previous deploy
/// still belongs to this app.
///
/// # Errors
///
/// Returns an error if the API requests fail.
#[instrument(skip(client))]
pub async fn current(
    client: &AdminClient,
) -> Result<(Option<ShopifyFunction>, Option<FulfillmentConstraintRule>), AppError> {
    let function = client.find_function(FULFILLMENT_CONSTRAINTS_API_TYPE).await?;
    let rule = find_registered_rule(client).await?;
    Ok((function, rule))
}

/// Register the constraint rule for the deployed function.
///
/// # Errors
///
/// Returns `AppError::NotFound` when no fulfillment constraints function is
/// deployed, or a Shopify error if the API requests fail.
#[instrument(skip(client))]
pub async fn register(client: &AdminClient) -> Result<Registration, AppError> {
    let function = client
        .find_function(FULFILLMENT_CONSTRAINTS_API_TYPE)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(
                "Fulfillment constraints function not found - ensure the function is deployed"
                    .to_string(),
            )
        })?;

    // Find-before-create keeps registration idempotent.
    if let Some(rule) = find_registered_rule(client).await? {
        tracing::info!(rule_id = %rule.id, "Constraint rule already registered");
        return Ok(Registration {
            rule,
            created: false,
        });
    }

    let rule = client
        .create_constraint_rule(&function.id, CONSTRAINT_DELIVERY_METHOD_TYPES)
        .await?;
    tracing::info!(rule_id = %rule.id, function_id = %function.id, "Constraint rule registered");

    Ok(Registration {
        rule,
        created: true,
    })
}

/// Unregister the constraint rule for the deployed function.
///
/// # Errors
///
/// Returns a Shopify error if the API requests fail, or `AppError::Internal`
/// if the rule is still listed after a delete that reported success.
#[instrument(skip(client))]
pub async fn unregister(client: &AdminClient) -> Result<Unregistration, AppError> {
    // Find-before-delete: nothing registered is a no-op, not an error.
    let Some(rule) = find_registered_rule(client).await? else {
        tracing::info!("No constraint rule registered, nothing to delete");
        return Ok(Unregistration::NothingToDelete);
    };

    client.delete_constraint_rule(&rule.id).await?;

    // The registry is authoritative; confirm the rule is actually gone.
    let remaining = client.get_constraint_rules().await?;
    if remaining.iter().any(|r| r.id == rule.id) {
        return Err(AppError::Internal(format!(
            "Constraint rule {} still registered after delete",
            rule.id
        )));
    }

    tracing::info!(rule_id = %rule.id, "Constraint rule unregistered");
    Ok(Unregistration::Deleted { rule_id: rule.id })
}

async fn find_registered_rule(
    client: &AdminClient,
) -> Result<Option<FulfillmentConstraintRule>, AppError> {
    let rules = client.get_constraint_rules().await?;
    Ok(rules
        .into_iter()
        .find(|rule| rule.function.api_type == FULFILLMENT_CONSTRAINTS_API_TYPE))
}
