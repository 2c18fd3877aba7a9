//! GraphQL documents for the Shopify Admin API.
//!
//! Raw documents posted as `{ query, variables }`; each operation's response
//! shape is deserialized next to the method that executes it.

/// Shop name (readiness probe).
pub const GET_SHOP: &str = r"
query ShopName {
  shop {
    name
  }
}
";

/// Active store locations.
pub const GET_LOCATIONS: &str = r"
query LocationList($first: Int!) {
  locations(first: $first, includeInactive: false) {
    edges {
      node {
        id
        name
      }
    }
  }
}
";

/// Functions deployed with the app.
pub const GET_SHOPIFY_FUNCTIONS: &str = r"
query DeployedFunctions($first: Int!) {
  shopifyFunctions(first: $first) {
    edges {
      node {
        id
        apiType
        title
      }
    }
  }
}
";

/// Registered fulfillment constraint rules.
pub const GET_CONSTRAINT_RULES: &str = r"
query ConstraintRules {
  fulfillmentConstraintRules {
    id
    deliveryMethodTypes
    function {
      id
      apiType
      title
    }
  }
}
";

/// Register a constraint rule for a deployed function.
pub const CONSTRAINT_RULE_CREATE: &str = r"
mutation ConstraintRuleCreate($functionId: String!, $deliveryMethodTypes: [DeliveryMethodType!]!) {
  fulfillmentConstraintRuleCreate(functionId: $functionId, deliveryMethodTypes: $deliveryMethodTypes) {
    fulfillmentConstraintRule {
      id
      deliveryMethodTypes
      function {
        id
        apiType
        title
      }
    }
    userErrors {
      field
      message
    }
  }
}
";

/// Remove a registered constraint rule.
pub const CONSTRAINT_RULE_DELETE: &str = r"
mutation ConstraintRuleDelete($id: ID!) {
  fulfillmentConstraintRuleDelete(id: $id) {
    success
    userErrors {
      field
      message
    }
  }
}
";

/// The app installation's own metafield.
pub const GET_APP_METAFIELD: &str = r"
query AppMetafield($namespace: String!, $key: String!) {
  currentAppInstallation {
    id
    metafield(namespace: $namespace, key: $key) {
      id
      value
    }
  }
}
";

/// A customer's metafield.
pub const GET_CUSTOMER_METAFIELD: &str = r"
query CustomerMetafield($id: ID!, $namespace: String!, $key: String!) {
  customer(id: $id) {
    id
    metafield(namespace: $namespace, key: $key) {
      id
      value
    }
  }
}
";

/// Write one or more metafields.
pub const METAFIELDS_SET: &str = r"
mutation MetafieldsSet($metafields: [MetafieldsSetInput!]!) {
  metafieldsSet(metafields: $metafields) {
    metafields {
      id
      value
    }
    userErrors {
      field
      message
    }
  }
}
";

/// Delete metafields by owner/namespace/key.
pub const METAFIELDS_DELETE: &str = r"
mutation MetafieldsDelete($metafields: [MetafieldIdentifierInput!]!) {
  metafieldsDelete(metafields: $metafields) {
    deletedMetafields {
      ownerId
      namespace
      key
    }
    userErrors {
      field
      message
    }
  }
}
";
