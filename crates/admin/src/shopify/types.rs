//! Domain types for the Shopify Admin API surface Pinpoint touches.

use serde::{Deserialize, Serialize};

use pinpoint_core::{ConstraintRuleId, FunctionId, LocationId, MetafieldId};

/// The `apiType` of a deployed cart fulfillment constraints function.
pub const FULFILLMENT_CONSTRAINTS_API_TYPE: &str = "fulfillment_constraints";

/// Namespace for all metafields this app owns.
pub const METAFIELD_NAMESPACE: &str = "fulfillment_routing";

/// App-installation key holding the synced location-name list
/// (a JSON array of strings).
pub const APP_LOCATION_NAMES_KEY: &str = "location_names";

/// Customer key holding the preferred-location name (plain text).
pub const CUSTOMER_PREFERRED_LOCATION_KEY: &str = "preferred_location";

/// A physical store location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Shopify location GID.
    pub id: LocationId,
    /// Merchant-chosen location name.
    pub name: String,
}

/// A Shopify Function deployed with the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopifyFunction {
    /// Function ID (stable per deployment, changes on redeploy).
    pub id: FunctionId,
    /// Function API type (e.g., `fulfillment_constraints`).
    pub api_type: String,
    /// Human-readable function title.
    pub title: String,
}

/// Delivery method types a constraint rule can apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryMethodType {
    /// Carrier shipping.
    Shipping,
    /// Local delivery.
    Local,
    /// In-store pickup.
    PickUp,
}

/// The delivery method types the constraint rule is registered for.
pub const CONSTRAINT_DELIVERY_METHOD_TYPES: &[DeliveryMethodType] = &[
    DeliveryMethodType::Shipping,
    DeliveryMethodType::Local,
    DeliveryMethodType::PickUp,
];

/// A registered fulfillment constraint rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentConstraintRule {
    /// Rule GID.
    pub id: ConstraintRuleId,
    /// The function the rule binds into the fulfillment pipeline.
    pub function: ShopifyFunction,
    /// Delivery method types the rule applies to.
    pub delivery_method_types: Vec<DeliveryMethodType>,
}

/// A metafield value read from Shopify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metafield {
    /// Metafield GID.
    pub id: MetafieldId,
    /// Stored value (raw string; JSON for `json`-typed metafields).
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_method_type_wire_names() {
        let json = serde_json::to_value(CONSTRAINT_DELIVERY_METHOD_TYPES).expect("serialize");
        assert_eq!(json, serde_json::json!(["SHIPPING", "LOCAL", "PICK_UP"]));
    }

    #[test]
    fn test_function_wire_format() {
        let json = serde_json::json!({
            "id": "f-1",
            "apiType": "fulfillment_constraints",
            "title": "pinpoint-function"
        });
        let function: ShopifyFunction = serde_json::from_value(json).expect("deserialize");
        assert_eq!(function.api_type, FULFILLMENT_CONSTRAINTS_API_TYPE);
    }
}
