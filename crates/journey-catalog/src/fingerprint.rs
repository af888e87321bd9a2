//! # Catalog Fingerprint
//!
//! A content digest of a catalog document. Two documents with the same
//! logical content produce the same fingerprint regardless of key order or
//! formatting, because the digest is taken over the RFC 8785 (JCS)
//! canonical JSON form.
//!
//! Callers use it to key caches of progress reports and recommendations by
//! catalog version.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::document::CatalogDocument;
use crate::error::CatalogError;

/// SHA-256 over the canonical JSON of a catalog document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogFingerprint([u8; 32]);

impl CatalogFingerprint {
    /// Compute the fingerprint of a document.
    pub fn of(doc: &CatalogDocument) -> Result<Self, CatalogError> {
        let canonical = serde_jcs::to_vec(doc)?;
        let hash = Sha256::digest(&canonical);
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&hash);
        Ok(Self(bytes))
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl fmt::Display for CatalogFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sha256:{}", self.to_hex())
    }
}
