//! bunny.net access key.

use std::fmt;

use zeroize::Zeroizing;

/// An account or API access key, sent in the `AccessKey` header.
///
/// The key material is wiped from memory when the last copy is dropped and
/// never appears in `Debug` output.
///
/// ## Example
///
/// ```rust
/// use bunnynet::AccessKey;
///
/// let key = AccessKey::new("00000000-0000-0000-0000-000000000000");
/// assert!(!format!("{:?}", key).contains("0000"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessKey {
    key: Zeroizing<String>,
}

impl AccessKey {
    /// Wraps a key.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: Zeroizing::new(key.into()) }
    }

    /// Returns the key for placing it on the wire.
    pub fn expose(&self) -> &str {
        &self.key
    }

    /// Returns `true` if the key is empty.
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessKey").field(&"[REDACTED]").finish()
    }
}

impl From<String> for AccessKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl From<&str> for AccessKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}
