//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::listing::ListSettings;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Listing engine policies; every key is optional.
    #[serde(default)]
    pub listing: ListSettings,
}
