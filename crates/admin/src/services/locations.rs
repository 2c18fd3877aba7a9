//! Location-name list sync service.
//!
//! The app keeps a copy of the store's location names in a single app-owned
//! metafield so the draft-order admin action can offer a picker without
//! querying the location directory itself. The stored format is a JSON array
//! of strings; anything else found under the key is treated as absent and
//! overwritten on the next sync.

use std::collections::HashSet;

use serde::Serialize;
use tracing::instrument;

use crate::error::AppError;
use crate::shopify::{AdminClient, types::APP_LOCATION_NAMES_KEY};

/// Shopify caps `locations(first:)` at 250.
const MAX_LOCATIONS: i64 = 250;

/// Result of a sync request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase", tag = "outcome")]
pub enum SyncOutcome {
    /// The stored list differed and was overwritten.
    Updated {
        /// The names now stored.
        names: Vec<String>,
    },
    /// The stored list already matched the live location set.
    Unchanged {
        /// The names already stored.
        names: Vec<String>,
    },
}

/// Live vs stored location names, for the status endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSyncStatus {
    /// Names of the store's active locations.
    pub live: Vec<String>,
    /// Names currently stored in the app metafield.
    pub synced: Vec<String>,
    /// Whether the two agree as sets.
    pub in_sync: bool,
}

/// Compare live and stored names without writing.
///
/// # Errors
///
/// Returns an error if the API requests fail.
#[instrument(skip(client))]
pub async fn status(client: &AdminClient) -> Result<LocationSyncStatus, AppError> {
    let live = live_location_names(client).await?;
    let (_, stored) = client.get_app_metafield(APP_LOCATION_NAMES_KEY).await?;
    let synced = stored
        .as_ref()
        .and_then(|m| parse_name_list(&m.value))
        .unwrap_or_default();
    let in_sync = same_name_set(&live, &synced);

    Ok(LocationSyncStatus {
        live,
        synced,
        in_sync,
    })
}

/// Sync the live location names into the app metafield.
///
/// The comparison is set equality: reordering locations does not trigger a
/// write, only adding, removing, or renaming one does.
///
/// # Errors
///
/// Returns an error if the API requests fail.
#[instrument(skip(client))]
pub async fn sync(client: &AdminClient) -> Result<SyncOutcome, AppError> {
    let live = live_location_names(client).await?;
    let (owner_id, stored) = client.get_app_metafield(APP_LOCATION_NAMES_KEY).await?;

    if let Some(stored_names) = stored.as_ref().and_then(|m| parse_name_list(&m.value))
        && same_name_set(&live, &stored_names)
    {
        tracing::debug!(count = live.len(), "Location names already in sync");
        return Ok(SyncOutcome::Unchanged { names: live });
    }

    client
        .set_app_metafield(&owner_id, APP_LOCATION_NAMES_KEY, &serde_json::json!(live))
        .await?;
    tracing::info!(count = live.len(), "Location names synced");

    Ok(SyncOutcome::Updated { names: live })
}

async fn live_location_names(client: &AdminClient) -> Result<Vec<String>, AppError> {
    let locations = client.get_locations(MAX_LOCATIONS).await?;
    Ok(locations.into_iter().map(|l| l.name).collect())
}

/// Parse the stored metafield value as a JSON array of strings.
///
/// Returns `None` for any other shape.
fn parse_name_list(raw: &str) -> Option<Vec<String>> {
    serde_json::from_str(raw).ok()
}

/// Set equality over names; ordering and duplicates do not matter.
fn same_name_set(a: &[String], b: &[String]) -> bool {
    let a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let b: HashSet<&str> = b.iter().map(String::as_str).collect();
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_list_accepts_json_array() {
        assert_eq!(
            parse_name_list(r#"["Downtown Store","Warehouse"]"#),
            Some(vec!["Downtown Store".to_string(), "Warehouse".to_string()])
        );
    }

    #[test]
    fn test_parse_name_list_rejects_other_shapes() {
        assert_eq!(parse_name_list("Downtown Store"), None);
        assert_eq!(parse_name_list(r#""Downtown Store""#), None);
        assert_eq!(parse_name_list(r#"{"names":[]}"#), None);
        assert_eq!(parse_name_list("[1, 2]"), None);
    }

    #[test]
    fn test_same_name_set_ignores_order() {
        let a = vec!["A".to_string(), "B".to_string()];
        let b = vec!["B".to_string(), "A".to_string()];
        assert!(same_name_set(&a, &b));
    }

    #[test]
    fn test_same_name_set_detects_membership_changes() {
        let a = vec!["A".to_string(), "B".to_string()];
        let b = vec!["A".to_string()];
        assert!(!same_name_set(&a, &b));
        assert!(!same_name_set(&b, &a));
    }

    #[test]
    fn test_same_name_set_is_case_sensitive() {
        let a = vec!["Main Warehouse".to_string()];
        let b = vec!["main warehouse".to_string()];
        assert!(!same_name_set(&a, &b));
    }
}
