//! Fulfillment constraint rule operations for the Admin API.
//!
//! These are the raw create/list/delete calls; find-before-create and
//! find-before-delete idempotence lives in `services::registration`.

use serde::Deserialize;
use tracing::instrument;

use pinpoint_core::{ConstraintRuleId, FunctionId};

use super::{AdminClient, UserError, check_user_errors, queries};
use crate::shopify::{
    AdminShopifyError, GraphQLError,
    types::{DeliveryMethodType, FulfillmentConstraintRule},
};

impl AdminClient {
    /// Get all registered fulfillment constraint rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_constraint_rules(
        &self,
    ) -> Result<Vec<FulfillmentConstraintRule>, AdminShopifyError> {
        #[derive(Deserialize)]
        struct Data {
            #[serde(rename = "fulfillmentConstraintRules")]
            fulfillment_constraint_rules: Vec<FulfillmentConstraintRule>,
        }

        let data: Data = self
            .execute(queries::GET_CONSTRAINT_RULES, serde_json::json!({}))
            .await?;

        Ok(data.fulfillment_constraint_rules)
    }

    /// Register a constraint rule binding a deployed function to delivery
    /// method types.
    ///
    /// # Arguments
    ///
    /// * `function_id` - The deployed function to bind
    /// * `delivery_method_types` - Delivery methods the rule applies to
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns user errors.
    #[instrument(skip(self), fields(function_id = %function_id))]
    pub async fn create_constraint_rule(
        &self,
        function_id: &FunctionId,
        delivery_method_types: &[DeliveryMethodType],
    ) -> Result<FulfillmentConstraintRule, AdminShopifyError> {
        #[derive(Deserialize)]
        struct Data {
            #[serde(rename = "fulfillmentConstraintRuleCreate")]
            payload: Option<Payload>,
        }

        #[derive(Deserialize)]
        struct Payload {
            #[serde(rename = "fulfillmentConstraintRule")]
            fulfillment_constraint_rule: Option<FulfillmentConstraintRule>,
            #[serde(rename = "userErrors")]
            user_errors: Vec<UserError>,
        }

        let data: Data = self
            .execute(
                queries::CONSTRAINT_RULE_CREATE,
                serde_json::json!({
                    "functionId": function_id,
                    "deliveryMethodTypes": delivery_method_types,
                }),
            )
            .await?;

        if let Some(payload) = data.payload {
            check_user_errors(payload.user_errors)?;

            if let Some(rule) = payload.fulfillment_constraint_rule {
                return Ok(rule);
            }
        }

        Err(AdminShopifyError::GraphQL(vec![GraphQLError {
            message: "No constraint rule returned from create".to_string(),
            locations: vec![],
            path: vec![],
        }]))
    }

    /// Remove a registered constraint rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns user errors.
    #[instrument(skip(self), fields(rule_id = %rule_id))]
    pub async fn delete_constraint_rule(
        &self,
        rule_id: &ConstraintRuleId,
    ) -> Result<(), AdminShopifyError> {
        #[derive(Deserialize)]
        struct Data {
            #[serde(rename = "fulfillmentConstraintRuleDelete")]
            payload: Option<Payload>,
        }

        #[derive(Deserialize)]
        struct Payload {
            #[serde(default)]
            success: Option<bool>,
            #[serde(rename = "userErrors")]
            user_errors: Vec<UserError>,
        }

        let data: Data = self
            .execute(
                queries::CONSTRAINT_RULE_DELETE,
                serde_json::json!({ "id": rule_id }),
            )
            .await?;

        if let Some(payload) = data.payload {
            check_user_errors(payload.user_errors)?;

            if payload.success.unwrap_or(false) {
                return Ok(());
            }
        }

        Err(AdminShopifyError::GraphQL(vec![GraphQLError {
            message: "Constraint rule delete did not report success".to_string(),
            locations: vec![],
            path: vec![],
        }]))
    }
}
