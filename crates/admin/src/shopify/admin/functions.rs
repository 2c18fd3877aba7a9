//! Deployed function discovery for the Admin API.
//!
//! Function IDs change on redeployment, so the rule registration flow always
//! discovers the function dynamically by its API type instead of pinning an
//! ID anywhere in configuration.

use serde::Deserialize;
use tracing::instrument;

use super::{AdminClient, Connection, queries};
use crate::shopify::{AdminShopifyError, types::ShopifyFunction};

impl AdminClient {
    /// Get the functions deployed with this app.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_shopify_functions(
        &self,
        first: i64,
    ) -> Result<Vec<ShopifyFunction>, AdminShopifyError> {
        #[derive(Deserialize)]
        struct Data {
            #[serde(rename = "shopifyFunctions")]
            shopify_functions: Connection<ShopifyFunction>,
        }

        let data: Data = self
            .execute(
                queries::GET_SHOPIFY_FUNCTIONS,
                serde_json::json!({ "first": first }),
            )
            .await?;

        Ok(data.shopify_functions.into_nodes())
    }

    /// Find the first deployed function with the given API type.
    ///
    /// Returns `None` when no function of that type is deployed.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(api_type = %api_type))]
    pub async fn find_function(
        &self,
        api_type: &str,
    ) -> Result<Option<ShopifyFunction>, AdminShopifyError> {
        let functions = self.get_shopify_functions(25).await?;
        Ok(functions.into_iter().find(|f| f.api_type == api_type))
    }
}
