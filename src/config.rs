use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// The external catalog API this crate proxies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub domain:   String,
    /// Static API key, appended as a query parameter to every upstream
    /// request. Never taken from user input.
    pub api_key:  String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api-test.penguinrandomhouse.com/resources/v2/title".into(),
            domain:   "PRH.UK".into(),
            api_key:  "".into(),
        }
    }
}

/// Host prefixes used when projecting a book into display markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Prefixed to a work's relative `seoFriendlyUrl`.
    pub catalog_site: String,
    /// Prefixed to the raw 13-digit ISBN to form the cover image URL.
    pub cover_host:   String,
    /// Prefixed to the derived ISBN-10 to form the purchase link.
    pub marketplace:  String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            catalog_site: "https://www.penguin.co.uk".into(),
            cover_host:   "https://images.penguinrandomhouse.com/cover/".into(),
            marketplace:  "https://www.amazon.co.uk/gp/product/".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1:3000".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub upstream: UpstreamConfig,
    pub display:  DisplayConfig,
    pub server:   ServerConfig,
}

impl Config {
    pub fn default_as_string() -> Result<String> {
        Ok(toml::to_string(&Self::default())?)
    }

    pub fn read_config() -> Result<Self> {
        Ok(Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("BIBLIO_").split("__"))
            .extract()?)
    }
}
