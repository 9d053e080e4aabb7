//! Snapshot and configuration tests
//!
//! Save/restore through JSON must reproduce the exact stream; anything that
//! does not validate is rejected with a typed error.

use subcycle_rng::{
    AnyGenerator, ConfigError, FamilyKind, Generator, GeneratorConfig, GeneratorSnapshot, Jsf32,
    Mover32, SnapshotError, Trim64, XoRo32,
};

#[test]
fn test_snapshot_json_round_trip_resumes_stream() {
    let mut rng = Generator::<Mover32>::new(0xDEAD_BEEF);
    for _ in 0..10 {
        rng.next_u32();
    }

    let json = rng.snapshot().to_json().unwrap();
    let snapshot = GeneratorSnapshot::from_json(&json).unwrap();
    let mut restored = Generator::<Mover32>::restore(&snapshot).unwrap();

    for _ in 0..100 {
        assert_eq!(restored.next_u64(), rng.next_u64());
    }
}

#[test]
fn test_snapshot_contents() {
    let rng = Generator::<XoRo32>::from_raw([3, 4]);
    let snapshot = rng.snapshot();
    assert_eq!(snapshot.family, "XoRo32");
    assert_eq!(snapshot.words, vec![3, 4]);
    assert_eq!(snapshot.checksum, snapshot.expected_checksum());
}

#[test]
fn test_snapshot_keeps_full_64_bit_words() {
    let rng = Generator::<Trim64>::from_raw([u64::MAX, 1, 2, 3]);
    let snapshot = rng.snapshot();
    assert_eq!(snapshot.words[0], u64::MAX);
    let restored = Generator::<Trim64>::restore(&snapshot).unwrap();
    assert_eq!(restored, rng);
}

#[test]
fn test_tampered_json_rejected() {
    let rng = Generator::<Jsf32>::new(1);
    let mut snapshot = rng.snapshot();
    snapshot.words[2] = snapshot.words[2].wrapping_add(1);
    let json = snapshot.to_json().unwrap();

    let reloaded = GeneratorSnapshot::from_json(&json).unwrap();
    match Generator::<Jsf32>::restore(&reloaded) {
        Err(SnapshotError::ChecksumMismatch { expected, computed }) => {
            assert_eq!(expected, snapshot.checksum);
            assert_ne!(expected, computed);
        }
        other => panic!("expected checksum mismatch, got {:?}", other),
    }
}

#[test]
fn test_malformed_json_is_serialization_error() {
    let err = GeneratorSnapshot::from_json("{not json").unwrap_err();
    assert!(matches!(err, SnapshotError::Serialization(_)));
}

#[test]
fn test_generator_deserialize_validates() {
    let bogus = r#"{"family":"Mover32","words":[1,2],"checksum":"00"}"#;
    let result: Result<Generator<Mover32>, _> = serde_json::from_str(bogus);
    assert!(result.is_err());
}

#[test]
fn test_error_messages() {
    let err = SnapshotError::FamilyMismatch {
        expected: "Mover32".to_string(),
        found: "Cake32".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Snapshot family mismatch: expected Mover32, found Cake32"
    );
    assert_eq!(
        ConfigError::UnknownFamily("pcg".to_string()).to_string(),
        "Unknown generator family: pcg"
    );
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_from_json_builds_family() {
    let config = GeneratorConfig::from_json(r#"{"family":"mover32","seed":305419896}"#).unwrap();
    assert_eq!(config, GeneratorConfig::new(FamilyKind::Mover32, 0x1234_5678));

    let mut rng = config.build();
    assert_eq!(rng.family(), FamilyKind::Mover32);
    assert_eq!(rng.next_u32(), 0x077F_2E57);
}

#[test]
fn test_every_family_kind_builds_and_snapshots() {
    for kind in FamilyKind::ALL {
        let mut rng = AnyGenerator::new(kind, 5);
        rng.skip(3);
        let snapshot = rng.snapshot();
        assert_eq!(snapshot.family, kind.name());

        let mut restored = AnyGenerator::restore(&snapshot).unwrap();
        assert_eq!(restored, rng);
        assert_eq!(restored.next_u64(), rng.next_u64(), "{}", kind);
    }
}

#[test]
fn test_any_generator_rejects_unknown_family() {
    let snapshot = GeneratorSnapshot::new("Pcg32", vec![1, 2]);
    let err = AnyGenerator::restore(&snapshot).unwrap_err();
    assert!(matches!(err, SnapshotError::FamilyMismatch { .. }));
}

#[test]
fn test_display_includes_family_and_hex_state() {
    let rng = AnyGenerator::new(FamilyKind::Zig32, 7);
    assert_eq!(rng.to_string(), "Zig32 { a: 0xf809c070, b: 0x00000007 }");
}
