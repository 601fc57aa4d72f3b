//! Configuration for the CLI.

use anyhow::Result;
use bridge::{Endpoints, NetworkEndpoints};
use primitives::Token;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    /// The network to connect to
    pub network: String,
    /// The token symbol amounts and balances refer to
    pub token: String,
    /// Decimals of the token
    pub decimals: u32,
    /// Timeout for a single request, in seconds
    pub request_timeout_secs: u64,
    /// Endpoints overriding or extending the built-in table
    pub endpoints: BTreeMap<String, NetworkEndpoints>,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            network: "localhost".to_string(),
            token: "ETH".to_string(),
            decimals: 18,
            request_timeout_secs: 30,
            endpoints: BTreeMap::new(),
        }
    }
}

impl HelperConfig {
    /// Loads configuration from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Saves configuration to a file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Default location of the configuration file.
    pub fn default_path() -> PathBuf {
        let mut dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        dir.push("l2-helper");
        dir.push("config.json");
        dir
    }

    /// The built-in endpoint table with this configuration's overrides applied.
    pub fn endpoint_table(&self) -> Endpoints {
        let mut endpoints = Endpoints {
            request_timeout_secs: self.request_timeout_secs,
            ..Endpoints::default()
        };
        endpoints.merge(&self.endpoints);
        endpoints
    }

    /// The configured token.
    pub fn token(&self) -> Token {
        Token::new(self.token.clone(), self.decimals)
    }
}
