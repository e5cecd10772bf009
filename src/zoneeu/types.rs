//! Zone.ee API wire types

use serde::{Deserialize, Serialize};

/// TXT record as returned by `GET /dns/{zone}/txt`.
///
/// The id is assigned by Zone.ee and opaque to this client; it is only
/// ever echoed back into update/delete paths.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ZoneeuTxtRecord {
    pub id: String,
    /// Fully qualified record name.
    pub name: String,
    /// The TXT value.
    pub destination: String,
}

/// A record as returned by `GET /dns/{zone}/a`.
///
/// Listing A records is the only way the API exposes zone existence, so
/// this type is read purely as a probe and everything but the name is
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ZoneeuARecord {
    pub name: String,
}

/// Request body for TXT create and update calls.
#[derive(Debug, Serialize)]
pub(crate) struct TxtRecordPayload<'a> {
    pub name: &'a str,
    pub destination: &'a str,
}
