//! Application state shared across handlers.

use std::sync::Arc;

use crate::{config::AdminConfig, shopify::AdminClient};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    shopify_client: AdminClient,
}

impl AppState {
    /// Build state from loaded configuration.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        let shopify_client = AdminClient::new(&config.shopify);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                shopify_client,
            }),
        }
    }

    /// The loaded configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// The Shopify Admin API client.
    #[must_use]
    pub fn shopify(&self) -> &AdminClient {
        &self.inner.shopify_client
    }
}
