//! Checkpoint Tests - Save/Load Generator State
//!
//! Critical invariants tested:
//! - Determinism: Restored generator continues the identical sequence
//! - Integrity: Tampered checkpoints are rejected
//! - Non-degeneracy: All-zero state never restored

use seedrand_core_rs::{GeneratorSnapshot, RngError, SeededRng, CHECKPOINT_VERSION};

// ============================================================================
// Test Helpers
// ============================================================================

/// Generator seeded with 42 that has already produced `n` values
fn advanced_rng(n: usize) -> SeededRng {
    let mut rng = SeededRng::new(42);
    for _ in 0..n {
        rng.next();
    }
    rng
}

// ============================================================================
// Round-trip
// ============================================================================

#[test]
fn test_restore_continues_sequence() {
    let mut original = advanced_rng(100);
    let saved = original.checkpoint().unwrap();

    let mut restored = SeededRng::restore(&saved).unwrap();
    assert_eq!(restored, original);

    for i in 0..500 {
        assert_eq!(original.next(), restored.next(), "Diverged at draw {}", i);
    }
}

#[test]
fn test_restore_preserves_draw_count() {
    let rng = advanced_rng(7);
    let restored = SeededRng::restore(&rng.checkpoint().unwrap()).unwrap();
    assert_eq!(restored.draws(), 7);
}

#[test]
fn test_checkpoint_json_shape() {
    let rng = SeededRng::new(42);
    let value: serde_json::Value = serde_json::from_str(&rng.checkpoint().unwrap()).unwrap();

    assert_eq!(value["version"], CHECKPOINT_VERSION);
    assert_eq!(value["s0"], 0xBDD7_3226_2FEB_6E95u64);
    assert_eq!(value["s1"], 0x28EF_E333_B266_F103u64);
    assert_eq!(value["draws"], 0);
    assert!(value["digest"].is_string());
}

// ============================================================================
// Rejection
// ============================================================================

#[test]
fn test_tampered_state_rejected() {
    let rng = advanced_rng(3);
    let mut snapshot = GeneratorSnapshot::capture(&rng).unwrap();
    snapshot.s0 ^= 1;

    let json = serde_json::to_string(&snapshot).unwrap();
    match SeededRng::restore(&json) {
        Err(RngError::DigestMismatch { expected, actual }) => {
            assert_eq!(expected, snapshot.digest);
            assert_ne!(expected, actual);
        }
        other => panic!("Expected DigestMismatch, got {:?}", other),
    }
}

#[test]
fn test_tampered_draws_rejected() {
    let rng = advanced_rng(3);
    let mut snapshot = GeneratorSnapshot::capture(&rng).unwrap();
    snapshot.draws = 0;

    assert!(matches!(
        snapshot.into_rng(),
        Err(RngError::DigestMismatch { .. })
    ));
}

#[test]
fn test_unknown_version_rejected() {
    let rng = advanced_rng(0);
    let mut snapshot = GeneratorSnapshot::capture(&rng).unwrap();
    snapshot.version = CHECKPOINT_VERSION + 1;

    assert_eq!(
        snapshot.verify(),
        Err(RngError::UnsupportedVersion {
            found: CHECKPOINT_VERSION + 1,
            expected: CHECKPOINT_VERSION,
        })
    );
}

#[test]
fn test_malformed_json_rejected() {
    let result = SeededRng::restore("{ \"version\": 1, \"s0\": ");
    assert!(matches!(result, Err(RngError::Serialization(_))));
}

#[test]
fn test_serde_embedding_roundtrip() {
    // SeededRng can be embedded directly in a larger serde structure
    let mut rng = advanced_rng(12);
    let json = serde_json::to_string(&rng).unwrap();
    let mut back: SeededRng = serde_json::from_str(&json).unwrap();

    assert_eq!(rng.next(), back.next());
}

#[test]
fn test_serde_rejects_zero_state() {
    let result: Result<SeededRng, _> =
        serde_json::from_str(r#"{ "s0": 0, "s1": 0, "draws": 0 }"#);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("degenerate"), "unexpected error: {}", err);
}
