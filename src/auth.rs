//! API key credentials and HTTP Basic authorization.
//!
//! Trading 212 authenticates every request with HTTP Basic auth built from the
//! API key and secret. There is no token exchange or refresh: the header is a
//! pure function of the two strings and is derived again for each request.

use std::fmt::Debug;

use base64::prelude::*;
use zeroize::ZeroizeOnDrop;

/// API key/secret pair. The secret is zeroized on drop.
#[derive(Clone, ZeroizeOnDrop)]
pub struct Credentials {
    #[zeroize(skip)]
    api_key: String,
    api_secret: String,
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(Credentials))
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// `Authorization` header value: `Basic base64(key:secret)`.
    pub fn authorization_header(&self) -> String {
        let mut raw = String::with_capacity(self.api_key.len() + self.api_secret.len() + 1);
        raw.push_str(&self.api_key);
        raw.push(':');
        raw.push_str(&self.api_secret);
        format!("Basic {}", BASE64_STANDARD.encode(raw.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_header_key_and_secret() {
        let credentials = Credentials::new("k", "s");
        assert_eq!(credentials.authorization_header(), "Basic azpz");
    }

    #[test]
    fn test_authorization_header_uses_padding() {
        let credentials = Credentials::new("test-key", "test-secret");
        let expected = format!("Basic {}", BASE64_STANDARD.encode("test-key:test-secret"));
        assert_eq!(credentials.authorization_header(), expected);
        assert_eq!(expected, "Basic dGVzdC1rZXk6dGVzdC1zZWNyZXQ=");
    }

    #[test]
    fn test_authorization_header_is_stable() {
        let credentials = Credentials::new("key", "secret");
        assert_eq!(
            credentials.authorization_header(),
            credentials.authorization_header()
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let credentials = Credentials::new("my-key", "super-secret-value");
        let dbg_out = format!("{credentials:?}");
        assert!(dbg_out.contains("my-key"));
        assert!(dbg_out.contains("api_secret: \"<redacted>\""));
        assert!(!dbg_out.contains("super-secret-value"));
    }
}
