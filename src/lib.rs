//! # zoneeu-dns01
//!
//! A [Zone.ee](https://www.zone.ee/) DNS API client for automating
//! [ACME DNS-01](https://letsencrypt.org/docs/challenge-types/#dns-01-challenge)
//! challenges: publish the `_acme-challenge` TXT record before the CA
//! validates the challenge, remove it afterwards.
//!
//! ## API Surface
//!
//! | Operation | Behavior |
//! |-----------|----------|
//! | [`Dns01Provider::add_txt_record`] | Idempotent upsert — no-op if the value is already published, in-place update if the name holds another value, create otherwise |
//! | [`Dns01Provider::remove_txt_record`] | Delete only on an exact name+value match; already-absent records are not an error |
//! | [`Dns01Provider::commit`] | No-op — Zone.ee applies changes immediately |
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use zoneeu_dns01::{Credentials, create_provider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(Credentials::plain("username", "api-key"));
//!
//!     // Publish the challenge response, let the CA validate, clean up.
//!     provider
//!         .add_txt_record("_acme-challenge.example.com", "dW1Gb2...token")
//!         .await?;
//!     provider.commit().await?;
//!     // ... CA validation happens here ...
//!     provider
//!         .remove_txt_record("_acme-challenge.example.com", "dW1Gb2...token")
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Where the secret should not live in ordinary memory, wrap it in a
//! [`secrecy::SecretString`] and use [`Credentials::protected`]; the
//! plaintext is only read while the `Authorization` header is built.
//!
//! ## Zone Discovery
//!
//! The API has no endpoint mapping an arbitrary name to its zone, so the
//! client probes suffixes of the record name from most to least specific
//! (never the bare TLD) until one answers as a hosted zone. Resolved
//! zones are cached per provider instance for its lifetime.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ZoneError>`](ZoneError). HTTP 404
//! is deliberately **not** an error anywhere: a missing zone or an empty
//! record collection is a normal state during challenge setup and
//! cleanup. Everything else — transport failures, rejected credentials,
//! unexpected statuses, unparseable bodies — is fatal for the operation
//! and surfaces unchanged; there are no retries.

mod credentials;
mod error;
mod factory;
mod traits;
mod utils;
mod zoneeu;

// Re-export error types
pub use error::{Result, ZoneError};

// Re-export factory functions
pub use factory::create_provider;

// Re-export core trait
pub use traits::Dns01Provider;

// Re-export credential types
pub use credentials::{ApiSecret, Credentials};

// Re-export the concrete provider
pub use zoneeu::ZoneeuProvider;
