//! Customer preferred-location service.
//!
//! The preference is opaque text equal to some location's name. It is stored
//! exactly as given: no trimming, no case-folding. The constraint function
//! fails open on a name that no longer matches a location, so a stale
//! preference degrades to normal routing instead of blocking checkout.

use tracing::instrument;

use pinpoint_core::CustomerId;

use crate::error::AppError;
use crate::shopify::{AdminClient, types::CUSTOMER_PREFERRED_LOCATION_KEY};

/// Read a customer's preferred-location name.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown customer, or a Shopify error
/// if the API request fails.
#[instrument(skip(client), fields(customer_id = %customer_id))]
pub async fn get(
    client: &AdminClient,
    customer_id: &CustomerId,
) -> Result<Option<String>, AppError> {
    let metafield = client
        .get_customer_metafield(customer_id, CUSTOMER_PREFERRED_LOCATION_KEY)
        .await?;
    Ok(metafield.map(|m| m.value))
}

/// Store a customer's preferred-location name.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for an empty name (use [`clear`] to remove
/// a preference), or a Shopify error if the API request fails.
#[instrument(skip(client, location_name), fields(customer_id = %customer_id))]
pub async fn set(
    client: &AdminClient,
    customer_id: &CustomerId,
    location_name: &str,
) -> Result<(), AppError> {
    if location_name.is_empty() {
        return Err(AppError::BadRequest(
            "Location name must not be empty".to_string(),
        ));
    }

    client
        .set_customer_metafield(customer_id, CUSTOMER_PREFERRED_LOCATION_KEY, location_name)
        .await?;
    tracing::info!("Customer preferred location stored");

    Ok(())
}

/// Remove a customer's preferred-location name.
///
/// Clearing an absent preference is a no-op.
///
/// # Errors
///
/// Returns a Shopify error if the API request fails.
#[instrument(skip(client), fields(customer_id = %customer_id))]
pub async fn clear(client: &AdminClient, customer_id: &CustomerId) -> Result<(), AppError> {
    client
        .delete_metafield(customer_id.as_str(), CUSTOMER_PREFERRED_LOCATION_KEY)
        .await?;
    tracing::info!("Customer preferred location cleared");

    Ok(())
}
