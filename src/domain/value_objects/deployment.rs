//! Deployment Identity Value Object
//!
//! A deployment is identified by the second it was created and the commit it
//! was built from. Its canonical form `mfd_<unixSeconds>_<commitHash>` is both
//! the on-disk directory name and the target of the `active` symlink.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::{MfdError, MfdResult};

/// Deployment identity
///
/// Two deployments are equal when both the timestamp and the commit hash
/// match. A parsed deployment keeps the exact name it was parsed from, which
/// may spell the timestamp differently (`mfd_0100_...`) from the canonical
/// form; that name is what lives on disk.
#[derive(Debug, Clone)]
pub struct Deployment {
    created_at: i64,
    commit_hash: String,
    name: String,
}

impl Deployment {
    /// Literal first segment of every deployment name
    pub const PREFIX: &'static str = "mfd";

    /// Length of a full SHA-1 commit hash
    pub const HASH_LEN: usize = 40;

    /// Create a deployment at `created_at`, truncated to whole seconds.
    ///
    /// The hash is not validated here; only `parse` enforces structure.
    pub fn new(created_at: DateTime<Utc>, commit_hash: impl Into<String>) -> Self {
        Self::from_unix(created_at.timestamp(), commit_hash)
    }

    /// Create a deployment from a raw unix timestamp
    pub fn from_unix(created_at: i64, commit_hash: impl Into<String>) -> Self {
        let commit_hash = commit_hash.into();
        Self {
            name: Self::format(created_at, &commit_hash),
            created_at,
            commit_hash,
        }
    }

    /// Canonical name for a timestamp and commit hash
    pub fn format(created_at: i64, commit_hash: &str) -> String {
        format!("{}_{}_{}", Self::PREFIX, created_at, commit_hash)
    }

    /// Parse a canonical deployment name.
    ///
    /// Accepts exactly three `_`-separated segments: the `mfd` prefix, an
    /// integer timestamp, and a 40-character hash. The hash characters
    /// themselves are not checked.
    pub fn parse(name: &str) -> MfdResult<Self> {
        let invalid = || MfdError::InvalidIdentity {
            name: name.to_string(),
        };

        let parts: Vec<&str> = name.split('_').collect();
        let [prefix, timestamp, hash] = parts.as_slice() else {
            return Err(invalid());
        };

        if *prefix != Self::PREFIX {
            return Err(invalid());
        }

        let created_at: i64 = timestamp.parse().map_err(|_| invalid())?;

        if hash.len() != Self::HASH_LEN {
            return Err(invalid());
        }

        Ok(Self {
            created_at,
            commit_hash: hash.to_string(),
            name: name.to_string(),
        })
    }

    /// Creation time as unix seconds
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Creation time as a UTC timestamp, if representable
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created_at, 0)
    }

    pub fn commit_hash(&self) -> &str {
        &self.commit_hash
    }

    /// Directory name and symlink target.
    ///
    /// The parsed name for a scanned deployment, the canonical form otherwise.
    pub fn name(&self) -> String {
        self.name.clone()
    }
}

impl PartialEq for Deployment {
    fn eq(&self, other: &Self) -> bool {
        self.created_at == other.created_at && self.commit_hash == other.commit_hash
    }
}

impl Eq for Deployment {}

impl Hash for Deployment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.created_at.hash(state);
        self.commit_hash.hash(state);
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for Deployment {
    type Err = MfdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "a94a8fe5ccb19ba61c4c0873d391e987982fbbd3";

    #[test]
    fn format_produces_canonical_name() {
        let dep = Deployment::from_unix(1625079600, HASH);
        assert_eq!(
            dep.to_string(),
            "mfd_1625079600_a94a8fe5ccb19ba61c4c0873d391e987982fbbd3"
        );
        assert_eq!(dep.name(), dep.to_string());
    }

    #[test]
    fn new_truncates_to_seconds() {
        let at = DateTime::from_timestamp(1625079600, 999_000_000).unwrap();
        let dep = Deployment::new(at, HASH);
        assert_eq!(dep.created_at(), 1625079600);
    }

    #[test]
    fn parse_valid_name() {
        let dep = Deployment::parse("mfd_1625079600_a94a8fe5ccb19ba61c4c0873d391e987982fbbd3")
            .unwrap();
        assert_eq!(dep.created_at(), 1625079600);
        assert_eq!(dep.commit_hash(), HASH);
    }

    #[test]
    fn parse_rejects_malformed_names() {
        let invalid = [
            // Missing commit hash
            "mfd_1625079600",
            // Too many segments
            "mfd_1625079600_a94a8fe5ccb19ba61c4c0873d391e987982fbbd3_extra",
            // Invalid timestamp
            "mfd_invalidtimestamp_a94a8fe5ccb19ba61c4c0873d391e987982fbbd3",
            // Short hash
            "mfd_1625079600_invalidhash",
            // Long hash
            "mfd_1625079600_a94a8fe5ccb19ba61c4c0873d391e987982fbbd3ff",
            // Invalid prefix
            "invalidprefix_1625079600_a94a8fe5ccb19ba61c4c0873d391e987982fbbd3",
            "",
            "active",
        ];

        for name in invalid {
            let err = Deployment::parse(name).unwrap_err();
            assert!(
                matches!(err, MfdError::InvalidIdentity { .. }),
                "expected InvalidIdentity for {:?}, got {:?}",
                name,
                err
            );
        }
    }

    #[test]
    fn parse_does_not_check_hash_characters() {
        let loose = format!("mfd_100_{}", "z".repeat(40));
        let dep = Deployment::parse(&loose).unwrap();
        assert_eq!(dep.commit_hash(), "z".repeat(40));
    }

    #[test]
    fn parse_accepts_signed_timestamp() {
        let dep = Deployment::parse(&format!("mfd_-5_{}", HASH)).unwrap();
        assert_eq!(dep.created_at(), -5);
    }

    #[test]
    fn parse_keeps_non_canonical_spelling() {
        let raw = format!("mfd_0100_{}", HASH);
        let dep = Deployment::parse(&raw).unwrap();

        assert_eq!(dep.name(), raw);
        assert_eq!(dep.to_string(), raw);
        // Same identity as the canonical spelling
        assert_eq!(dep, Deployment::from_unix(100, HASH));
        assert_eq!(Deployment::from_unix(100, HASH).name(), format!("mfd_100_{}", HASH));
    }

    #[test]
    fn from_str_delegates_to_parse() {
        let dep: Deployment = format!("mfd_200_{}", HASH).parse().unwrap();
        assert_eq!(dep, Deployment::from_unix(200, HASH));
    }

    #[test]
    fn created_at_utc_round_trips() {
        let dep = Deployment::from_unix(1625079600, HASH);
        assert_eq!(dep.created_at_utc().unwrap().timestamp(), 1625079600);
    }
}
