//! TXT record operations — the Dns01Provider implementation

use async_trait::async_trait;
use urlencoding::encode;

use crate::error::Result;
use crate::traits::Dns01Provider;

use super::ZoneeuProvider;
use super::types::{TxtRecordPayload, ZoneeuTxtRecord};

impl ZoneeuProvider {
    /// All TXT records in `zone`. A 404 from the API ("no records yet")
    /// is an empty list.
    async fn txt_records(&self, zone: &str) -> Result<Vec<ZoneeuTxtRecord>> {
        Ok(self
            .get(&format!("/dns/{}/txt", encode(zone)))
            .await?
            .unwrap_or_default())
    }
}

#[async_trait]
impl Dns01Provider for ZoneeuProvider {
    fn id(&self) -> &'static str {
        "zoneeu"
    }

    async fn add_txt_record(&self, record_name: &str, value: &str) -> Result<()> {
        let record_name = record_name.trim_end_matches('.');
        let zone = self.resolve_zone(record_name).await?;
        let records = self.txt_records(&zone).await?;

        let existing: Vec<&ZoneeuTxtRecord> = records
            .iter()
            .filter(|r| r.name.eq_ignore_ascii_case(record_name))
            .collect();

        if existing.iter().any(|r| r.destination == value) {
            log::debug!("TXT record {record_name} already carries the requested value");
            return Ok(());
        }

        let payload = TxtRecordPayload {
            name: record_name,
            destination: value,
        };

        if let Some(record) = existing.first() {
            // Same name, different value: overwrite in place instead of
            // stacking a second record under the name.
            log::debug!("updating TXT record {record_name} (id {})", record.id);
            self.put(
                &format!("/dns/{}/txt/{}", encode(&zone), encode(&record.id)),
                &payload,
            )
            .await
        } else {
            log::debug!("creating TXT record {record_name} in zone {zone}");
            self.post(&format!("/dns/{}/txt", encode(&zone)), &payload)
                .await
        }
    }

    async fn remove_txt_record(&self, record_name: &str, value: &str) -> Result<()> {
        let record_name = record_name.trim_end_matches('.');
        let zone = self.resolve_zone(record_name).await?;
        let records = self.txt_records(&zone).await?;

        // Only an exact name+value match is deleted. A record holding
        // some other value is left alone, and an absent record is fine.
        let Some(record) = records.iter().find(|r| {
            r.name.eq_ignore_ascii_case(record_name) && r.destination == value
        }) else {
            log::debug!("no TXT record {record_name} with matching value, nothing to remove");
            return Ok(());
        };

        log::debug!("deleting TXT record {record_name} (id {})", record.id);
        self.delete(&format!(
            "/dns/{}/txt/{}",
            encode(&zone),
            encode(&record.id)
        ))
        .await
    }
}
