//! Provider factory functions.

use std::sync::Arc;

use crate::credentials::Credentials;
use crate::traits::Dns01Provider;
use crate::zoneeu::ZoneeuProvider;

/// Creates a [`Dns01Provider`] backed by the Zone.ee API.
///
/// The returned provider is wrapped in `Arc<dyn Dns01Provider>` for easy
/// sharing with the orchestrator that drives it.
///
/// # Examples
///
/// ```rust,no_run
/// use zoneeu_dns01::{Credentials, create_provider};
///
/// let provider = create_provider(Credentials::plain("username", "api-key"));
/// ```
pub fn create_provider(credentials: Credentials) -> Arc<dyn Dns01Provider> {
    Arc::new(ZoneeuProvider::new(credentials))
}
