//! Zone.ee DNS provider

mod http;
mod records;
mod types;
mod zones;

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use reqwest::Client;

use crate::credentials::Credentials;

/// Production API endpoint.
pub(crate) const ZONEEU_API_BASE: &str = "https://api.zone.eu/v2";

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Zone.ee DNS provider.
///
/// Owns the HTTP client, the account credentials and the zone cache.
/// The cache is scoped to this instance: two providers built from
/// different credentials never share resolved zones.
pub struct ZoneeuProvider {
    pub(crate) client: Client,
    pub(crate) credentials: Credentials,
    pub(crate) api_base: String,
    /// record name → hosted zone, filled by the suffix probe.
    ///
    /// Entries live as long as the provider and are never evicted; zone
    /// assignment is assumed stable for the lifetime of a session.
    pub(crate) zone_cache: Mutex<HashMap<String, String>>,
}

impl ZoneeuProvider {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: create_http_client(),
            credentials,
            api_base: ZONEEU_API_BASE.to_string(),
            zone_cache: Mutex::new(HashMap::new()),
        }
    }

    /// Override the API base URL, e.g. to point at a local mock server.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

/// Create the HTTP client with timeout configuration.
fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}
