//! Business logic services for admin.
//!
//! # Services
//!
//! - `registration` - Idempotent constraint rule registration/removal
//! - `locations` - Location-name list sync into the app metafield
//! - `preferences` - Customer preferred-location reads and writes

pub mod locations;
pub mod preferences;
pub mod registration;

pub use locations::{LocationSyncStatus, SyncOutcome};
pub use registration::{Registration, Unregistration};
