//! Runtime configuration.
//!
//! Values are layered, later layers winning:
//!
//! 1. built-in defaults
//! 2. `<config_dir>/stride/config.json` (optional)
//! 3. environment: `STRIDE_API_URL`, `STRIDE_TOKEN`, `STRIDE_PAGE_SIZE`, `STRIDE_DEMO`
//! 4. command-line flags

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::adapters::DEFAULT_API_URL;
use crate::app::DEFAULT_PAGE_SIZE;
use crate::cli::CliOptions;
use crate::error::{classify_io_error, StrideResult, SystemError};

/// Largest page the client will ask for.
pub const MAX_PAGE_SIZE: usize = 100;

pub const ENV_API_URL: &str = "STRIDE_API_URL";
pub const ENV_TOKEN: &str = "STRIDE_TOKEN";
pub const ENV_PAGE_SIZE: &str = "STRIDE_PAGE_SIZE";
pub const ENV_DEMO: &str = "STRIDE_DEMO";

/// Resolved configuration for one run of the client.
///
/// # Example
///
/// ```
/// use stride::startup::StrideConfig;
///
/// let config = StrideConfig::default()
///     .with_api_url("http://localhost:8080")
///     .with_page_size(500);
/// assert_eq!(config.page_size, 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrideConfig {
    /// Base URL of the feed API
    pub api_url: String,
    /// Bearer token sent with every request
    pub auth_token: Option<String>,
    /// Posts requested per page, always within 1..=MAX_PAGE_SIZE
    pub page_size: usize,
    /// Run against the seeded in-memory service instead of the API
    pub demo: bool,
}

impl Default for StrideConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            auth_token: None,
            page_size: DEFAULT_PAGE_SIZE,
            demo: false,
        }
    }
}

/// On-disk shape of `config.json`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    api_url: Option<String>,
    token: Option<String>,
    page_size: Option<usize>,
    demo: Option<bool>,
}

impl StrideConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Set the page size, clamped to 1..=MAX_PAGE_SIZE.
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    pub fn with_demo(mut self, demo: bool) -> Self {
        self.demo = demo;
        self
    }

    /// `<config_dir>/stride/config.json`
    pub fn default_path() -> StrideResult<PathBuf> {
        let dir = dirs::config_dir().ok_or(SystemError::NoConfigDirectory)?;
        Ok(dir.join("stride").join("config.json"))
    }

    /// Layer a JSON config file over `self`. A missing file is not an error.
    pub fn merge_file(self, path: &Path) -> StrideResult<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config file at {}", path.display());
                return Ok(self);
            }
            Err(e) => {
                return Err(classify_io_error(e, Some(path.to_path_buf()), "read config").into())
            }
        };

        let file: FileConfig =
            serde_json::from_str(&raw).map_err(|e| SystemError::ConfigParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        tracing::info!("Loaded config from {}", path.display());

        let mut config = self;
        if let Some(url) = file.api_url {
            config = config.with_api_url(url);
        }
        if let Some(token) = file.token {
            config = config.with_auth_token(token);
        }
        if let Some(size) = file.page_size {
            config = config.with_page_size(size);
        }
        if let Some(demo) = file.demo {
            config = config.with_demo(demo);
        }
        Ok(config)
    }

    /// Layer environment overrides read through `lookup`.
    pub fn merge_env_with<F>(self, lookup: F) -> StrideResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = self;
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            config = config.with_api_url(url.trim());
        }
        if let Some(token) = lookup(ENV_TOKEN).filter(|v| !v.trim().is_empty()) {
            config = config.with_auth_token(token.trim());
        }
        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            let size = raw
                .trim()
                .parse::<usize>()
                .map_err(|_| SystemError::EnvironmentError {
                    variable: ENV_PAGE_SIZE.to_string(),
                    message: format!("expected a number, got '{}'", raw),
                })?;
            config = config.with_page_size(size);
        }
        if let Some(raw) = lookup(ENV_DEMO) {
            config = config.with_demo(parse_flag(ENV_DEMO, &raw)?);
        }
        Ok(config)
    }

    /// Layer overrides from the process environment.
    pub fn merge_env(self) -> StrideResult<Self> {
        self.merge_env_with(|key| std::env::var(key).ok())
    }

    /// Layer command-line flags. Only flags that were given override.
    pub fn merge_cli(self, options: &CliOptions) -> Self {
        let mut config = self;
        if let Some(url) = &options.api_url {
            config = config.with_api_url(url.clone());
        }
        if let Some(size) = options.page_size {
            config = config.with_page_size(size);
        }
        if options.demo {
            config = config.with_demo(true);
        }
        config
    }

    /// Defaults, then `path`, then the environment, then `options`.
    pub fn load_from(path: &Path, options: &CliOptions) -> StrideResult<Self> {
        Ok(Self::default()
            .merge_file(path)?
            .merge_env()?
            .merge_cli(options))
    }

    /// [`load_from`](Self::load_from) using the default config path.
    pub fn load(options: &CliOptions) -> StrideResult<Self> {
        Self::load_from(&Self::default_path()?, options)
    }
}

fn parse_flag(variable: &str, raw: &str) -> StrideResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(SystemError::EnvironmentError {
            variable: variable.to_string(),
            message: format!("expected true/false, got '{}'", other),
        }
        .into()),
    }
}
