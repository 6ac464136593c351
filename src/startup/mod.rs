//! Startup: resolve configuration and pick the feed service.
//!
//! - [`config`] - layered `StrideConfig`
//! - [`service`] - HTTP or in-memory `FeedService` for a config
//!
//! ```ignore
//! use stride::startup::{build_service, StrideConfig};
//!
//! let config = StrideConfig::load(&options)?;
//! let service = build_service(&config);
//! ```

pub mod config;
pub mod service;

pub use config::{StrideConfig, MAX_PAGE_SIZE};
pub use service::build_service;
