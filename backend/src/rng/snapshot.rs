//! Snapshot - Save/Restore Generator State
//!
//! A [`GeneratorSnapshot`] carries a family tag, the raw state words and a
//! SHA-256 checksum over both. Restoring validates all three before touching
//! the generator, then applies the usual degenerate-state repair.
//!
//! # Critical Invariants
//!
//! - **Determinism**: restoring a snapshot reproduces the exact stream the
//!   generator would have produced had it never been saved
//! - **Family Matching**: a snapshot only restores into the family that made it
//! - **Integrity**: words edited by hand without updating the checksum are
//!   rejected
//!
//! # Example
//! ```
//! use subcycle_rng::{Generator, GeneratorSnapshot, Mover32};
//!
//! let mut rng = Generator::<Mover32>::new(99);
//! rng.next_u32();
//! let json = rng.snapshot().to_json().unwrap();
//!
//! let snapshot = GeneratorSnapshot::from_json(&json).unwrap();
//! let mut restored = Generator::<Mover32>::restore(&snapshot).unwrap();
//! assert_eq!(restored.next_u32(), rng.next_u32());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::rng::family::{word_count, Family, Word};
use crate::rng::generator::Generator;

// ============================================================================
// Errors
// ============================================================================

/// Reasons a snapshot cannot be restored
#[derive(Debug, Error, PartialEq)]
pub enum SnapshotError {
    #[error("Snapshot family mismatch: expected {expected}, found {found}")]
    FamilyMismatch { expected: String, found: String },

    #[error("Snapshot for {family} has {found} words, expected {expected}")]
    WordCount {
        family: String,
        expected: usize,
        found: usize,
    },

    #[error("Snapshot word {index} ({value:#x}) does not fit a {bits}-bit word")]
    WordOverflow { index: usize, value: u64, bits: u32 },

    #[error("Snapshot checksum mismatch: expected {expected}, computed {computed}")]
    ChecksumMismatch { expected: String, computed: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ============================================================================
// Snapshot Structure
// ============================================================================

/// Serializable generator state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSnapshot {
    /// Family name, e.g. `"Mover32"`
    pub family: String,

    /// State words widened to u64, in `[A, B, ...]` order
    pub words: Vec<u64>,

    /// SHA-256 of `"<family>:<w0>,<w1>,..."`, lowercase hex
    pub checksum: String,
}

impl GeneratorSnapshot {
    /// Build a snapshot and compute its checksum
    pub fn new(family: impl Into<String>, words: Vec<u64>) -> Self {
        let family = family.into();
        let checksum = compute_checksum(&family, &words);
        Self {
            family,
            words,
            checksum,
        }
    }

    /// Recompute the checksum from `family` and `words`
    pub fn expected_checksum(&self) -> String {
        compute_checksum(&self.family, &self.words)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| {
            SnapshotError::Serialization(format!("Snapshot serialization failed: {}", e))
        })
    }

    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(|e| {
            SnapshotError::Serialization(format!("Snapshot serialization failed: {}", e))
        })
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| {
            SnapshotError::Serialization(format!("Snapshot deserialization failed: {}", e))
        })
    }
}

/// SHA-256 over the canonical text form
pub fn compute_checksum(family: &str, words: &[u64]) -> String {
    let joined = words
        .iter()
        .map(|w| w.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let canonical = format!("{}:{}", family, joined);

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    format!("{:x}", hasher.finalize())
}

// ============================================================================
// Generator integration
// ============================================================================

impl<F: Family> Generator<F> {
    /// Capture the current state
    pub fn snapshot(&self) -> GeneratorSnapshot {
        let words = self
            .get_state_words()
            .as_ref()
            .iter()
            .map(|&w| w.into())
            .collect();
        GeneratorSnapshot::new(F::NAME, words)
    }

    /// Rebuild a generator from a validated snapshot
    ///
    /// Checks, in order: family, word count, word width, checksum.
    pub fn restore(snapshot: &GeneratorSnapshot) -> Result<Self, SnapshotError> {
        let state = validate::<F>(snapshot).map_err(|e| {
            log::warn!("Rejected {} snapshot: {}", F::NAME, e);
            e
        })?;
        Ok(Self::from_raw(state))
    }
}

fn validate<F: Family>(snapshot: &GeneratorSnapshot) -> Result<F::State, SnapshotError> {
    if snapshot.family != F::NAME {
        return Err(SnapshotError::FamilyMismatch {
            expected: F::NAME.to_string(),
            found: snapshot.family.clone(),
        });
    }

    let expected = word_count::<F>();
    if snapshot.words.len() != expected {
        return Err(SnapshotError::WordCount {
            family: F::NAME.to_string(),
            expected,
            found: snapshot.words.len(),
        });
    }

    let mut state = F::State::default();
    for (index, (slot, &value)) in state
        .as_mut()
        .iter_mut()
        .zip(snapshot.words.iter())
        .enumerate()
    {
        *slot = <F::Word as Word>::try_from_u64(value).ok_or(SnapshotError::WordOverflow {
            index,
            value,
            bits: <F::Word as Word>::BITS,
        })?;
    }

    let computed = snapshot.expected_checksum();
    if computed != snapshot.checksum {
        return Err(SnapshotError::ChecksumMismatch {
            expected: snapshot.checksum.clone(),
            computed,
        });
    }

    Ok(state)
}

impl<F: Family> Serialize for Generator<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.snapshot().serialize(serializer)
    }
}

impl<'de, F: Family> Deserialize<'de> for Generator<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let snapshot = GeneratorSnapshot::deserialize(deserializer)?;
        Generator::restore(&snapshot).map_err(serde::de::Error::custom)
    }
}
