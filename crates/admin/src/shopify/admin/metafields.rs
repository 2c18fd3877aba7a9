//! Metafield operations for the Admin API.
//!
//! Two owners are involved: the app installation (holds the synced
//! location-name list) and customers (hold their preferred-location name).

use serde::Deserialize;
use tracing::instrument;

use pinpoint_core::CustomerId;

use super::{AdminClient, UserError, check_user_errors, queries};
use crate::shopify::{
    AdminShopifyError,
    types::{METAFIELD_NAMESPACE, Metafield},
};

#[derive(Debug, Deserialize)]
struct MetafieldOwner {
    id: String,
    metafield: Option<Metafield>,
}

#[derive(Debug, Deserialize)]
struct MetafieldsSetData {
    #[serde(rename = "metafieldsSet")]
    payload: Option<MetafieldsSetPayload>,
}

#[derive(Debug, Deserialize)]
struct MetafieldsSetPayload {
    #[serde(rename = "userErrors")]
    user_errors: Vec<UserError>,
}

impl AdminClient {
    /// Read the app installation's metafield under the app namespace.
    ///
    /// Returns the owning installation GID and the metafield, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(key = %key))]
    pub async fn get_app_metafield(
        &self,
        key: &str,
    ) -> Result<(String, Option<Metafield>), AdminShopifyError> {
        #[derive(Deserialize)]
        struct Data {
            #[serde(rename = "currentAppInstallation")]
            current_app_installation: MetafieldOwner,
        }

        let data: Data = self
            .execute(
                queries::GET_APP_METAFIELD,
                serde_json::json!({
                    "namespace": METAFIELD_NAMESPACE,
                    "key": key,
                }),
            )
            .await?;

        let owner = data.current_app_installation;
        Ok((owner.id, owner.metafield))
    }

    /// Write a `json`-typed metafield on the app installation.
    ///
    /// # Arguments
    ///
    /// * `owner_id` - App installation GID (from `get_app_metafield`)
    /// * `key` - Metafield key under the app namespace
    /// * `value` - JSON value to store
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns user errors.
    #[instrument(skip(self, value), fields(key = %key))]
    pub async fn set_app_metafield(
        &self,
        owner_id: &str,
        key: &str,
        value: &serde_json::Value,
    ) -> Result<(), AdminShopifyError> {
        self.set_metafield(owner_id, key, "json", &value.to_string())
            .await
    }

    /// Read a customer's metafield under the app namespace.
    ///
    /// Returns `NotFound` when the customer does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(customer_id = %customer_id, key = %key))]
    pub async fn get_customer_metafield(
        &self,
        customer_id: &CustomerId,
        key: &str,
    ) -> Result<Option<Metafield>, AdminShopifyError> {
        #[derive(Deserialize)]
        struct Data {
            customer: Option<MetafieldOwner>,
        }

        let data: Data = self
            .execute(
                queries::GET_CUSTOMER_METAFIELD,
                serde_json::json!({
                    "id": customer_id,
                    "namespace": METAFIELD_NAMESPACE,
                    "key": key,
                }),
            )
            .await?;

        let customer = data
            .customer
            .ok_or_else(|| AdminShopifyError::NotFound(format!("Customer {customer_id}")))?;

        Ok(customer.metafield)
    }

    /// Write a plain-text metafield on a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns user errors.
    #[instrument(skip(self, value), fields(customer_id = %customer_id, key = %key))]
    pub async fn set_customer_metafield(
        &self,
        customer_id: &CustomerId,
        key: &str,
        value: &str,
    ) -> Result<(), AdminShopifyError> {
        self.set_metafield(customer_id.as_str(), key, "single_line_text_field", value)
            .await
    }

    /// Delete a metafield by owner/namespace/key.
    ///
    /// Deleting a metafield that does not exist is a no-op on the API side,
    /// which keeps the clear-preference operation idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns user errors.
    #[instrument(skip(self), fields(owner_id = %owner_id, key = %key))]
    pub async fn delete_metafield(
        &self,
        owner_id: &str,
        key: &str,
    ) -> Result<(), AdminShopifyError> {
        #[derive(Deserialize)]
        struct Data {
            #[serde(rename = "metafieldsDelete")]
            payload: Option<Payload>,
        }

        #[derive(Deserialize)]
        struct Payload {
            #[serde(rename = "userErrors")]
            user_errors: Vec<UserError>,
        }

        let data: Data = self
            .execute(
                queries::METAFIELDS_DELETE,
                serde_json::json!({
                    "metafields": [{
                        "ownerId": owner_id,
                        "namespace": METAFIELD_NAMESPACE,
                        "key": key,
                    }],
                }),
            )
            .await?;

        if let Some(payload) = data.payload {
            check_user_errors(payload.user_errors)?;
        }

        Ok(())
    }

    async fn set_metafield(
        &self,
        owner_id: &str,
        key: &str,
        value_type: &str,
        value: &str,
    ) -> Result<(), AdminShopifyError> {
        let data: MetafieldsSetData = self
            .execute(
                queries::METAFIELDS_SET,
                serde_json::json!({
                    "metafields": [{
                        "ownerId": owner_id,
                        "namespace": METAFIELD_NAMESPACE,
                        "key": key,
                        "type": value_type,
                        "value": value,
                    }],
                }),
            )
            .await?;

        if let Some(payload) = data.payload {
            check_user_errors(payload.user_errors)?;
        }

        Ok(())
    }
}
