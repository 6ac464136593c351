//! Choose the feed service for a resolved config.

use std::sync::Arc;

use super::config::StrideConfig;
use crate::adapters::{HttpFeedService, MemoryFeedService};
use crate::traits::FeedService;

/// The seeded in-memory service in demo mode, the REST API otherwise.
pub fn build_service(config: &StrideConfig) -> Arc<dyn FeedService> {
    if config.demo {
        tracing::info!("Using in-memory demo feed");
        return Arc::new(MemoryFeedService::demo());
    }

    tracing::info!("Using feed API at {}", config.api_url);
    let service = HttpFeedService::new(config.api_url.clone());
    match &config.auth_token {
        Some(token) => Arc::new(service.with_auth(token.clone())),
        None => {
            tracing::warn!("No auth token configured; requests will be anonymous");
            Arc::new(service)
        }
    }
}
