//! Location queries for the Admin API.

use serde::Deserialize;
use tracing::instrument;

use super::{AdminClient, Connection, queries};
use crate::shopify::{AdminShopifyError, types::Location};

impl AdminClient {
    /// Get the store's active locations.
    ///
    /// This is the complete location directory the fulfillment pipeline
    /// knows about, not just the subset synced into the app setting.
    ///
    /// # Arguments
    ///
    /// * `first` - Maximum number of locations to fetch (Shopify caps at 250)
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_locations(&self, first: i64) -> Result<Vec<Location>, AdminShopifyError> {
        #[derive(Deserialize)]
        struct Data {
            locations: Connection<Location>,
        }

        let data: Data = self
            .execute(
                queries::GET_LOCATIONS,
                serde_json::json!({ "first": first }),
            )
            .await?;

        Ok(data.locations.into_nodes())
    }
}
