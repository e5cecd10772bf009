//! Shared helpers for the live API tests.

#![allow(dead_code)]

use std::env;

use zoneeu_dns01::{Credentials, ZoneeuProvider};

/// Skip the test when required environment variables are missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Provider built from `ZONEEU_USERNAME` / `ZONEEU_API_KEY`.
pub fn provider_from_env() -> Option<ZoneeuProvider> {
    let username = env::var("ZONEEU_USERNAME").ok()?;
    let api_key = env::var("ZONEEU_API_KEY").ok()?;
    Some(ZoneeuProvider::new(Credentials::plain(username, api_key)))
}

/// The domain under test, from `TEST_DOMAIN`.
pub fn test_domain() -> Option<String> {
    env::var("TEST_DOMAIN").ok()
}

/// Unique record name under `domain`, so parallel runs cannot collide.
pub fn generate_test_record_name(domain: &str) -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_libtest-{}.{domain}", &uuid.to_string()[..8])
}
