use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Number of hex characters in a rendered fingerprint (SHA-256, 32 bytes).
pub const FINGERPRINT_LEN: usize = 64;

/// Stable identifier of a process instance, derived from its identity
/// attributes. Doubles as the document id in the store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FingerprintError {
    #[error("fingerprint must be {FINGERPRINT_LEN} hex characters, got {0}")]
    Length(usize),
    #[error("fingerprint contains a non-hex character {0:?}")]
    NonHex(char),
}

impl Fingerprint {
    /// Derives a fingerprint from an ordered list of attributes.
    ///
    /// Every attribute is hashed on its own and the fingerprint is the digest
    /// of the concatenated per-attribute digests, so the result depends on
    /// attribute boundaries: `["ab", "c"]` and `["a", "bc"]` never collide,
    /// and neither do `["a"]` and `["a", ""]`.
    pub fn derive<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut outer = Sha256::new();
        for attribute in attributes {
            outer.update(Sha256::digest(attribute.as_ref().as_bytes()));
        }
        Fingerprint(format!("{:x}", outer.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for Fingerprint {
    type Err = FingerprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != FINGERPRINT_LEN {
            return Err(FingerprintError::Length(s.len()));
        }
        if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(FingerprintError::NonHex(c));
        }
        Ok(Fingerprint(s.to_ascii_lowercase()))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
