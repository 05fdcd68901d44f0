//! Client configuration using Figment
//!
//! Sources, highest precedence first:
//! 1. Environment variables (prefix: `HERO_CLIENT_`, e.g. `HERO_CLIENT_BASE_URL`)
//! 2. A TOML file (`hero-client.toml` in the working directory, or the path
//!    given to `load_from`)
//! 3. Default values
//!
//! Only the transport reads this. The resource path is not configurable.

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const ENV_PREFIX: &str = "HERO_CLIENT_";
pub const DEFAULT_CONFIG_FILE: &str = "hero-client.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Origin of the heroes backend, e.g. `http://localhost:3000`.
    pub base_url: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            user_agent: concat!("hero-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// A missing file is not an error; defaults and env still apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            tracing::debug!("Loading client configuration from: {}", path.display());
        }
        let config = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;
        Ok(config)
    }
}
