//! Shared helpers for Admin API integration tests.

use httpmock::MockServer;
use secrecy::SecretString;

use pinpoint_admin::config::ShopifyAdminConfig;
use pinpoint_admin::shopify::AdminClient;

/// An `AdminClient` pointed at a mock GraphQL endpoint.
pub fn mock_client(server: &MockServer) -> AdminClient {
    let config = ShopifyAdminConfig {
        store: "pinpoint-dev.myshopify.com".to_string(),
        api_version: "2026-01".to_string(),
        access_token: SecretString::from("shpat_1f7c02e94ab85d3c6e01"),
        api_url: Some(server.url("/graphql")),
    };
    AdminClient::new(&config)
}

/// Wrap a payload the way GraphQL responses arrive.
#[must_use]
pub fn graphql_data(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "data": data })
}

/// A deployed fulfillment constraints function node.
#[must_use]
pub fn constraint_function(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "apiType": "fulfillment_constraints",
        "title": "pinpoint-function",
    })
}

/// A registered constraint rule node bound to the given function.
#[must_use]
pub fn constraint_rule(rule_id: &str, function_id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": rule_id,
        "deliveryMethodTypes": ["SHIPPING", "LOCAL", "PICK_UP"],
        "function": constraint_function(function_id),
    })
}

/// A locations connection with the given names.
#[must_use]
pub fn locations_connection(names: &[(&str, &str)]) -> serde_json::Value {
    let edges: Vec<serde_json::Value> = names
        .iter()
        .map(|(id, name)| serde_json::json!({ "node": { "id": id, "name": name } }))
        .collect();
    serde_json::json!({ "locations": { "edges": edges } })
}
