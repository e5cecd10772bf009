//! Live integration tests against the real Zone.ee API.
//!
//! Run with:
//! ```bash
//! ZONEEU_USERNAME=xxx ZONEEU_API_KEY=xxx TEST_DOMAIN=example.com \
//!     cargo test --test zoneeu_live -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::{generate_test_record_name, provider_from_env, test_domain};
use zoneeu_dns01::Dns01Provider;

#[tokio::test]
#[ignore]
async fn live_zone_resolution() {
    skip_if_no_credentials!("ZONEEU_USERNAME", "ZONEEU_API_KEY", "TEST_DOMAIN");

    let provider = provider_from_env().expect("failed to build provider from env");
    let domain = test_domain().expect("TEST_DOMAIN not set");
    let record_name = generate_test_record_name(&domain);

    // Removing a record that was never created exercises zone resolution
    // plus the listing without mutating anything.
    let result = provider.remove_txt_record(&record_name, "no-such-value").await;
    assert!(result.is_ok(), "remove on absent record failed: {result:?}");

    println!("✓ resolved zone for {record_name}");
}

#[tokio::test]
#[ignore]
async fn live_txt_record_lifecycle() {
    skip_if_no_credentials!("ZONEEU_USERNAME", "ZONEEU_API_KEY", "TEST_DOMAIN");

    let provider = provider_from_env().expect("failed to build provider from env");
    let domain = test_domain().expect("TEST_DOMAIN not set");
    let record_name = generate_test_record_name(&domain);

    // 1. Create.
    let result = provider.add_txt_record(&record_name, "lifecycle-value-1").await;
    assert!(result.is_ok(), "create failed: {result:?}");
    println!("  ✓ created {record_name}");

    // 2. Same value again: must be a no-op, not an error.
    let result = provider.add_txt_record(&record_name, "lifecycle-value-1").await;
    assert!(result.is_ok(), "idempotent re-add failed: {result:?}");
    println!("  ✓ re-add is a no-op");

    // 3. New value: update in place.
    let result = provider.add_txt_record(&record_name, "lifecycle-value-2").await;
    assert!(result.is_ok(), "update failed: {result:?}");
    println!("  ✓ updated value");

    // 4. Remove with the stale value: must leave the record alone.
    let result = provider.remove_txt_record(&record_name, "lifecycle-value-1").await;
    assert!(result.is_ok(), "remove with stale value failed: {result:?}");

    // 5. Remove with the current value.
    let result = provider.remove_txt_record(&record_name, "lifecycle-value-2").await;
    assert!(result.is_ok(), "remove failed: {result:?}");
    println!("  ✓ removed {record_name}");

    // 6. Publish step is a no-op but must succeed.
    let result = provider.commit().await;
    assert!(result.is_ok(), "commit failed: {result:?}");

    println!("✓ TXT record lifecycle passed");
}
