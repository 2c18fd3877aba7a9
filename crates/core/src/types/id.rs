//! Newtype IDs for type-safe entity references.
//!
//! Shopify identifies every resource by a global ID string
//! (e.g. `gid://shopify/Location/123`). Use the `define_gid!` macro to create
//! type-safe wrappers that prevent accidentally mixing IDs from different
//! resource types.

use serde::{Deserialize, Serialize};

/// Macro to define a type-safe Shopify GID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>` and `From<&str>` implementations
///
/// # Example
///
/// ```rust
/// # use pinpoint_core::define_gid;
/// define_gid!(LocationId);
/// define_gid!(CustomerId);
///
/// let location_id = LocationId::new("gid://shopify/Location/1");
///
/// // These are different types, so this won't compile:
/// // let _: CustomerId = location_id;
/// ```
#[macro_export]
macro_rules! define_gid {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a GID string.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying GID string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the GID string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard resource IDs
define_gid!(LocationId);
define_gid!(DeliveryLineId);
define_gid!(CustomerId);
define_gid!(FunctionId);
define_gid!(ConstraintRuleId);
define_gid!(MetafieldId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gid_roundtrip() {
        let id = LocationId::new("gid://shopify/Location/42");
        assert_eq!(id.as_str(), "gid://shopify/Location/42");
        assert_eq!(id.to_string(), "gid://shopify/Location/42");
        assert_eq!(String::from(id), "gid://shopify/Location/42");
    }

    #[test]
    fn test_gid_serde_transparent() {
        let id = CustomerId::new("gid://shopify/Customer/7");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"gid://shopify/Customer/7\"");

        let back: CustomerId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn test_gid_equality_is_exact() {
        assert_ne!(
            LocationId::new("gid://shopify/Location/1"),
            LocationId::new("gid://shopify/Location/2")
        );
    }
}
