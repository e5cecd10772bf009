//! Zone discovery
//!
//! The API has no "which zone contains this name" endpoint, so the zone
//! is found by probing candidate suffixes of the record name with
//! `GET /dns/{candidate}/a`, most specific first. Longest-first matters:
//! an account may host both `example.com` and `sub.example.com` as
//! separate zones, and the record must land in the more specific one.

use std::sync::PoisonError;

use urlencoding::encode;

use crate::error::{Result, ZoneError};

use super::ZoneeuProvider;
use super::types::ZoneeuARecord;

impl ZoneeuProvider {
    /// Resolve the hosted zone containing `record_name`.
    ///
    /// Results are cached on the provider for its lifetime; a repeated
    /// resolve for the same name issues no network calls.
    pub(crate) async fn resolve_zone(&self, record_name: &str) -> Result<String> {
        let record_name = record_name.trim_end_matches('.');

        if let Some(zone) = self.cached_zone(record_name) {
            log::debug!("zone cache hit: {record_name} -> {zone}");
            return Ok(zone);
        }

        for candidate in zone_candidates(record_name) {
            log::debug!("probing zone candidate: {candidate}");
            let records: Option<Vec<ZoneeuARecord>> =
                self.get(&format!("/dns/{}/a", encode(&candidate))).await?;

            let Some(records) = records else {
                continue;
            };

            // The candidate is only confirmed when the listing carries an
            // entry named like the zone apex; an unrelated response body
            // does not prove the zone exists.
            if records
                .iter()
                .any(|r| r.name.eq_ignore_ascii_case(&candidate))
            {
                log::debug!("resolved zone for {record_name}: {candidate}");
                self.cache_zone(record_name, &candidate);
                return Ok(candidate);
            }
        }

        Err(ZoneError::ZoneNotFound {
            record_name: record_name.to_string(),
        })
    }

    fn cached_zone(&self, record_name: &str) -> Option<String> {
        self.zone_cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(record_name)
            .cloned()
    }

    fn cache_zone(&self, record_name: &str, zone: &str) {
        self.zone_cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(record_name.to_string(), zone.to_string());
    }
}

/// Candidate zones for a record name: every suffix with at least two
/// labels, longest first.
///
/// The record name itself is a candidate (a challenge name can sit at the
/// apex of its own delegated zone); the bare TLD is not probed.
fn zone_candidates(record_name: &str) -> Vec<String> {
    let name = record_name.trim_end_matches('.');
    let labels: Vec<&str> = name.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Vec::new();
    }

    (0..=labels.len() - 2)
        .map(|i| labels[i..].join("."))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_longest_first() {
        assert_eq!(
            zone_candidates("_acme-challenge.sub.example.com"),
            vec![
                "_acme-challenge.sub.example.com",
                "sub.example.com",
                "example.com",
            ]
        );
    }

    #[test]
    fn bare_tld_never_a_candidate() {
        let candidates = zone_candidates("_acme-challenge.example.com");
        assert!(!candidates.iter().any(|c| c == "com"));
        assert_eq!(candidates.last().map(String::as_str), Some("example.com"));
    }

    #[test]
    fn two_label_name_is_its_own_only_candidate() {
        assert_eq!(zone_candidates("example.com"), vec!["example.com"]);
    }

    #[test]
    fn single_label_has_no_candidates() {
        assert!(zone_candidates("localhost").is_empty());
    }

    #[test]
    fn empty_name_has_no_candidates() {
        assert!(zone_candidates("").is_empty());
    }

    #[test]
    fn consecutive_dots_yield_no_candidates() {
        assert!(zone_candidates("a..example.com").is_empty());
    }

    #[test]
    fn trailing_dot_is_ignored() {
        assert_eq!(
            zone_candidates("www.example.com."),
            vec!["www.example.com", "example.com"]
        );
    }
}
