//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! # Status (drives the embedded admin page)
//! GET  /api/status                                  - Function, rule, and sync state
//!
//! # Constraint rule
//! POST /api/rule/register                           - Register the constraint rule (idempotent)
//! POST /api/rule/unregister                         - Remove the constraint rule (idempotent)
//!
//! # Locations
//! POST /api/locations/sync                          - Sync location names into the app metafield
//!
//! # Customer preference (draft-order admin action)
//! GET    /api/customers/{id}/preferred-location     - Read the stored preference
//! PUT    /api/customers/{id}/preferred-location     - Store a preference
//! DELETE /api/customers/{id}/preferred-location     - Clear the preference
//! ```

use axum::Router;

use crate::state::AppState;

pub mod customers;
pub mod locations;
pub mod rule;
pub mod status;

/// Build the full admin route tree.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(status::router())
        .merge(rule::router())
        .merge(locations::router())
        .merge(customers::router())
}
