//! Account credentials and HTTP Basic token construction.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use secrecy::{ExposeSecret, SecretString};

/// The API secret in one of its two delivery forms.
///
/// Callers hand the secret over either as plain text or wrapped in a
/// [`SecretString`], which is zeroized on drop and redacted in debug
/// output. Exactly one form exists by construction; the plaintext of the
/// protected form is read only while the Basic token is being assembled
/// and is never stored anywhere else.
pub enum ApiSecret {
    /// Plain-text secret. Prefer [`ApiSecret::Protected`] where the caller
    /// can produce one.
    Plain(String),
    /// Secret held in zeroizing memory.
    Protected(SecretString),
}

impl ApiSecret {
    fn expose(&self) -> &str {
        match self {
            Self::Plain(secret) => secret,
            Self::Protected(secret) => secret.expose_secret(),
        }
    }
}

impl std::fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain(_) => write!(f, "ApiSecret::Plain(REDACTED)"),
            Self::Protected(_) => write!(f, "ApiSecret::Protected(REDACTED)"),
        }
    }
}

/// Zone.ee account credentials.
///
/// Constructed per session from caller-supplied parameters. The derived
/// Basic token is recomputed for every request and never cached.
#[derive(Debug)]
pub struct Credentials {
    /// Zone.ee account username.
    pub username: String,
    secret: ApiSecret,
}

impl Credentials {
    pub fn new(username: impl Into<String>, secret: ApiSecret) -> Self {
        Self {
            username: username.into(),
            secret,
        }
    }

    /// Credentials with a plain-text secret.
    pub fn plain(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::new(username, ApiSecret::Plain(secret.into()))
    }

    /// Credentials with a secret held in zeroizing memory.
    pub fn protected(username: impl Into<String>, secret: SecretString) -> Self {
        Self::new(username, ApiSecret::Protected(secret))
    }

    /// Value for the `Authorization: Basic` header:
    /// base64 of `username:secret`.
    pub(crate) fn basic_token(&self) -> String {
        BASE64.encode(format!("{}:{}", self.username, self.secret.expose()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_token_encodes_username_and_secret() {
        let creds = Credentials::plain("user", "pass");
        assert_eq!(creds.basic_token(), "dXNlcjpwYXNz");
    }

    #[test]
    fn protected_secret_produces_same_token_as_plain() {
        let plain = Credentials::plain("user", "hunter2");
        let protected = Credentials::protected("user", SecretString::from("hunter2"));
        assert_eq!(plain.basic_token(), protected.basic_token());
    }

    #[test]
    fn debug_output_redacts_the_secret() {
        let creds = Credentials::plain("user", "top-secret-key");
        let debug = format!("{creds:?}");
        assert!(!debug.contains("top-secret-key"), "leaked secret: {debug}");
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn debug_output_redacts_protected_secret() {
        let creds = Credentials::protected("user", SecretString::from("top-secret-key"));
        let debug = format!("{creds:?}");
        assert!(!debug.contains("top-secret-key"), "leaked secret: {debug}");
    }
}
