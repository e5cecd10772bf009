use async_trait::async_trait;

use crate::error::Result;

/// DNS-01 challenge record operations.
///
/// This is the seam an ACME orchestrator drives: publish a TXT record
/// before asking the CA to validate the challenge, remove it afterwards.
/// Both mutations are idempotent — adding a value that is already present
/// and removing a value that is already absent are no-ops.
#[async_trait]
pub trait Dns01Provider: Send + Sync {
    /// Provider identifier.
    fn id(&self) -> &'static str;

    /// Create or update the TXT record `record_name` so that it carries
    /// `value`.
    ///
    /// If a record with the same name already holds a different value it
    /// is overwritten in place rather than duplicated.
    async fn add_txt_record(&self, record_name: &str, value: &str) -> Result<()>;

    /// Delete the TXT record `record_name` if its value matches `value`
    /// exactly.
    ///
    /// A record holding some other value is left alone, and an absent
    /// record is not an error.
    async fn remove_txt_record(&self, record_name: &str, value: &str) -> Result<()>;

    /// Publish pending changes.
    ///
    /// Zone.ee applies every mutation immediately, so the default
    /// implementation has nothing to do. The method exists because ACME
    /// tooling calls it unconditionally after a batch of record edits.
    async fn commit(&self) -> Result<()> {
        log::debug!("[{}] commit: nothing to publish", self.id());
        Ok(())
    }
}
