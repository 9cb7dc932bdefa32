//! Record identifiers and sharded-path derivation.
//!
//! Matsya stores farmer-generated records (market price reports, ledger
//! entries, stock entries, profiles) as JSON documents under directories
//! derived from the record's identifier. To keep path derivation
//! deterministic, identifiers use a *canonical* form: **32 lowercase
//! hexadecimal characters**, no hyphens — the same value produced by
//! `Uuid::new_v4().simple()`.
//!
//! For a canonical identifier `r`, a record lives under
//! `parent_dir/<r[0..2]>/<r[2..4]>/<r>/`, which bounds directory fan-out as
//! the number of records grows.
//!
//! Externally supplied identifiers (API headers, CLI arguments) must already
//! be canonical; [`RecordId::parse`] rejects hyphenated, uppercase, or
//! otherwise non-canonical input rather than normalising it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use uuid::Uuid;

/// Errors produced when validating record identifiers.
#[derive(Debug, thiserror::Error)]
pub enum IdError {
    #[error("record id must be 32 lowercase hex characters without hyphens, got: '{0}'")]
    NotCanonical(String),
}

/// A record identifier guaranteed to be in canonical form.
///
/// # Construction
/// - [`RecordId::generate`] allocates a fresh identifier for a new record.
/// - [`RecordId::parse`] validates an externally supplied identifier.
///
/// Once constructed, [`RecordId::sharded_dir`] derives the storage directory
/// for the record and `Display` renders the canonical string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generates a new random identifier in canonical form.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validates and parses an identifier that must already be canonical.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::NotCanonical`] if `input` is not exactly 32
    /// lowercase hex characters.
    pub fn parse(input: &str) -> Result<Self, IdError> {
        if input.len() != 32
            || !input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        {
            return Err(IdError::NotCanonical(input.to_owned()));
        }
        // The character check above guarantees parse_str succeeds.
        Uuid::parse_str(input)
            .map(Self)
            .map_err(|_| IdError::NotCanonical(input.to_owned()))
    }

    /// Returns the canonical string form of the identifier.
    pub fn canonical(&self) -> String {
        self.0.simple().to_string()
    }

    /// Derives the sharded storage directory for this record.
    ///
    /// The layout is `parent_dir/<id[0..2]>/<id[2..4]>/<id>/`.
    pub fn sharded_dir(&self, parent_dir: &Path) -> PathBuf {
        let canonical = self.canonical();
        parent_dir
            .join(&canonical[0..2])
            .join(&canonical[2..4])
            .join(&canonical)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for RecordId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RecordId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_canonical() {
        let id = RecordId::generate();
        let canonical = id.canonical();
        assert_eq!(canonical.len(), 32);
        assert!(canonical
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
        assert_eq!(RecordId::parse(&canonical).unwrap(), id);
    }

    #[test]
    fn parse_rejects_non_canonical_forms() {
        // Hyphenated
        assert!(RecordId::parse("550e8400-e29b-41d4-a716-446655440000").is_err());
        // Uppercase
        assert!(RecordId::parse("550E8400E29B41D4A716446655440000").is_err());
        // Wrong length
        assert!(RecordId::parse("550e8400").is_err());
        // Non-hex
        assert!(RecordId::parse("zzze8400e29b41d4a716446655440000").is_err());
    }

    #[test]
    fn sharded_dir_uses_two_level_prefix() {
        let id = RecordId::parse("550e8400e29b41d4a716446655440000").unwrap();
        let dir = id.sharded_dir(Path::new("farm_data/market_prices"));
        assert_eq!(
            dir,
            Path::new("farm_data/market_prices/55/0e/550e8400e29b41d4a716446655440000")
        );
    }

    #[test]
    fn serde_roundtrip_is_canonical_string() {
        let id = RecordId::parse("550e8400e29b41d4a716446655440000").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"550e8400e29b41d4a716446655440000\"");
        let back: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<RecordId>("\"not-an-id\"").is_err());
    }
}
