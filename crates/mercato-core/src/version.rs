//! Opaque row version tokens for optimistic concurrency.

use crate::CatalogError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display};
use uuid::Uuid;

/// An opaque version token attached to a record.
///
/// The store mints a fresh token on insert and on every successful update.
/// Tokens are compared only for equality; their internal structure is never
/// interpreted. On the wire they are hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowVersion([u8; 16]);

impl RowVersion {
    /// The token length in bytes.
    pub const LEN: usize = 16;

    /// Mints a new, distinct token.
    #[must_use]
    pub fn mint() -> Self {
        Self(Uuid::now_v7().into_bytes())
    }

    /// Creates a token from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Parses a token from its hex representation.
    pub fn parse_hex(s: &str) -> Result<Self, CatalogError> {
        // The ASCII check keeps the 2-byte slices below on char boundaries.
        if s.len() != Self::LEN * 2 || !s.is_ascii() {
            return Err(CatalogError::validation("invalid version token"));
        }
        let mut bytes = [0u8; Self::LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let pair = &s[i * 2..i * 2 + 2];
            *byte = u8::from_str_radix(pair, 16)
                .map_err(|_| CatalogError::validation("invalid version token"))?;
        }
        Ok(Self(bytes))
    }
}

impl Display for RowVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl TryFrom<&[u8]> for RowVersion {
    type Error = CatalogError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 16] = bytes
            .try_into()
            .map_err(|_| CatalogError::internal("invalid version token length in store"))?;
        Ok(Self(bytes))
    }
}

impl Serialize for RowVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RowVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s).map_err(|e| D::Error::custom(e.to_string()))
    }
}
