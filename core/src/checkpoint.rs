//! Checkpoint - Save/Load Generator State
//!
//! Serializes a [`SeededRng`] so a long-running simulation can pause and
//! later continue the exact same random sequence.
//!
//! # Critical Invariants
//!
//! - **Determinism**: a restored generator emits the same values the
//!   original would have emitted next
//! - **Integrity**: the SHA256 digest must match the snapshot body
//! - **Non-degeneracy**: the all-zero state is never restored

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::rng::{RngError, SeededRng};

/// Current checkpoint format version
pub const CHECKPOINT_VERSION: u32 = 1;

// ============================================================================
// Snapshot Structures
// ============================================================================

/// Complete generator state snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSnapshot {
    /// Format version (see [`CHECKPOINT_VERSION`])
    pub version: u32,

    pub s0: u64,
    pub s1: u64,

    /// Outputs drawn since seeding at the time of capture
    pub draws: u64,

    /// SHA256 hex digest of the fields above
    pub digest: String,
}

/// Hashed portion of a snapshot, in canonical field order
#[derive(Serialize)]
struct SnapshotBody {
    version: u32,
    s0: u64,
    s1: u64,
    draws: u64,
}

impl SnapshotBody {
    fn digest(&self) -> Result<String, RngError> {
        let json = serde_json::to_string(self)?;

        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        Ok(format!("{:x}", hasher.finalize()))
    }
}

impl GeneratorSnapshot {
    /// Capture the current state of `rng`
    pub fn capture(rng: &SeededRng) -> Result<Self, RngError> {
        let (s0, s1) = rng.state();
        let body = SnapshotBody {
            version: CHECKPOINT_VERSION,
            s0,
            s1,
            draws: rng.draws(),
        };
        let digest = body.digest()?;

        Ok(GeneratorSnapshot {
            version: body.version,
            s0,
            s1,
            draws: body.draws,
            digest,
        })
    }

    /// Check version and digest without building a generator
    pub fn verify(&self) -> Result<(), RngError> {
        if self.version != CHECKPOINT_VERSION {
            warn!(found = self.version, "rejecting checkpoint with unknown version");
            return Err(RngError::UnsupportedVersion {
                found: self.version,
                expected: CHECKPOINT_VERSION,
            });
        }

        let actual = SnapshotBody {
            version: self.version,
            s0: self.s0,
            s1: self.s1,
            draws: self.draws,
        }
        .digest()?;

        if actual != self.digest {
            warn!(expected = %self.digest, actual = %actual, "rejecting tampered checkpoint");
            return Err(RngError::DigestMismatch {
                expected: self.digest.clone(),
                actual,
            });
        }

        Ok(())
    }

    /// Validate and rebuild the generator
    pub fn into_rng(self) -> Result<SeededRng, RngError> {
        self.verify()?;
        SeededRng::from_parts(self.s0, self.s1, self.draws)
    }
}

// ============================================================================
// JSON Checkpoints
// ============================================================================

impl SeededRng {
    /// Serialize the generator to a JSON checkpoint string
    ///
    /// # Example
    /// ```
    /// use seedrand_core_rs::SeededRng;
    ///
    /// let mut rng = SeededRng::new(42);
    /// rng.next();
    /// let saved = rng.checkpoint().unwrap();
    ///
    /// let mut resumed = SeededRng::restore(&saved).unwrap();
    /// assert_eq!(rng.next(), resumed.next());
    /// ```
    pub fn checkpoint(&self) -> Result<String, RngError> {
        let snapshot = GeneratorSnapshot::capture(self)?;
        Ok(serde_json::to_string(&snapshot)?)
    }

    /// Rebuild a generator from a JSON checkpoint string
    ///
    /// # Errors
    /// - [`RngError::Serialization`] if the JSON is malformed
    /// - [`RngError::UnsupportedVersion`] for a different format version
    /// - [`RngError::DigestMismatch`] if any field was altered
    /// - [`RngError::DegenerateState`] for an all-zero state
    pub fn restore(json: &str) -> Result<Self, RngError> {
        let snapshot: GeneratorSnapshot = serde_json::from_str(json)?;
        snapshot.into_rng()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_is_stable() {
        let rng = SeededRng::new(9);
        let a = GeneratorSnapshot::capture(&rng).unwrap();
        let b = GeneratorSnapshot::capture(&rng).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.digest.len(), 64);
    }

    #[test]
    fn test_digest_depends_on_draws() {
        let mut rng = SeededRng::new(9);
        let before = GeneratorSnapshot::capture(&rng).unwrap();
        rng.next();
        let after = GeneratorSnapshot::capture(&rng).unwrap();
        assert_ne!(before.digest, after.digest);
    }

    #[test]
    fn test_forged_zero_state_rejected() {
        let body = SnapshotBody {
            version: CHECKPOINT_VERSION,
            s0: 0,
            s1: 0,
            draws: 0,
        };
        let snapshot = GeneratorSnapshot {
            version: CHECKPOINT_VERSION,
            s0: 0,
            s1: 0,
            draws: 0,
            digest: body.digest().unwrap(),
        };
        assert!(snapshot.verify().is_ok());
        assert_eq!(snapshot.into_rng(), Err(RngError::DegenerateState));
    }
}
