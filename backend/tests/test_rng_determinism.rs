//! Determinism and state-handling tests
//!
//! Same seed → same stream, copies are independent, and raw state
//! round-trips, for every family.

use subcycle_rng::{
    Cake32, Family, Generator, Jsf32, Lathe32, Mover32, Trim64, Tyche32, XoRo32,
    XoshiroPlusPlus32, Zag32, Zig32, Zog32,
};

const SEEDS: [u64; 5] = [0, 1, 42, 0x1234_5678, u64::MAX];

fn check_same_seed_same_stream<F: Family>() {
    for &seed in SEEDS.iter() {
        let mut rng1 = Generator::<F>::new(seed);
        let mut rng2 = Generator::<F>::new(seed);
        for i in 0..10_000 {
            assert_eq!(
                rng1.next_u64(),
                rng2.next_u64(),
                "{} seed {} diverged at draw {}",
                F::NAME,
                seed,
                i
            );
        }
    }
}

fn check_copy_independence<F: Family>() {
    let mut original = Generator::<F>::new(777);
    original.next_u32();
    let mut fork = original.copy();

    let from_original: Vec<u32> = (0..50).map(|_| original.next_u32()).collect();
    // advancing the original must not have moved the fork
    let from_fork: Vec<u32> = (0..50).map(|_| fork.next_u32()).collect();
    assert_eq!(from_original, from_fork, "{} copy shares state", F::NAME);
}

fn check_raw_state_round_trip<F: Family>() {
    let mut rng = Generator::<F>::new(31337);
    for _ in 0..3 {
        rng.next_u64();
    }
    let mut restored = Generator::<F>::new(0);
    restored.set_state_words(rng.get_state_words());
    assert_eq!(restored, rng);
    for _ in 0..100 {
        assert_eq!(restored.next_u64(), rng.next_u64(), "{}", F::NAME);
    }
}

fn check_all<F: Family>() {
    check_same_seed_same_stream::<F>();
    check_copy_independence::<F>();
    check_raw_state_round_trip::<F>();
}

#[test]
fn test_xoro32_determinism() {
    check_all::<XoRo32>();
}

#[test]
fn test_lathe32_determinism() {
    check_all::<Lathe32>();
}

#[test]
fn test_xoshiro_plus_plus32_determinism() {
    check_all::<XoshiroPlusPlus32>();
}

#[test]
fn test_mover32_determinism() {
    check_all::<Mover32>();
}

#[test]
fn test_cake32_determinism() {
    check_all::<Cake32>();
}

#[test]
fn test_jsf32_determinism() {
    check_all::<Jsf32>();
}

#[test]
fn test_tyche32_determinism() {
    check_all::<Tyche32>();
}

#[test]
fn test_hybrid_determinism() {
    check_all::<Zig32>();
    check_all::<Zag32>();
    check_all::<Zog32>();
}

#[test]
fn test_trim64_determinism() {
    check_all::<Trim64>();
}

#[test]
fn test_different_seeds_different_streams() {
    let mut a = Generator::<Mover32>::new(1);
    let mut b = Generator::<Mover32>::new(2);
    let sa: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
    let sb: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
    assert_ne!(sa, sb);
}

// ============================================================================
// Degenerate state
// ============================================================================

#[test]
fn test_no_zero_collapse_within_2_pow_20_steps() {
    for &seed in SEEDS.iter() {
        let mut xoro = Generator::<XoRo32>::new(seed);
        let mut mover = Generator::<Mover32>::new(seed);
        let mut lathe = Generator::<Lathe32>::new(seed);
        let mut xoshiro = Generator::<XoshiroPlusPlus32>::new(seed);
        let mut zig = Generator::<Zig32>::new(seed);
        for step in 0..(1u32 << 20) {
            xoro.next_u32();
            mover.next_u32();
            lathe.next_u32();
            xoshiro.next_u32();
            zig.next_u32();
            assert_ne!(xoro.get_state_words(), [0, 0], "XoRo32 seed {} step {}", seed, step);
            assert_ne!(lathe.get_state_words(), [0, 0], "Lathe32 seed {} step {}", seed, step);
            assert_ne!(
                xoshiro.get_state_words(),
                [0, 0, 0, 0],
                "XoshiroPlusPlus32 seed {} step {}",
                seed,
                step
            );
            let [a, b] = mover.get_state_words();
            assert!(a != 0 && b != 0, "Mover32 seed {} step {}", seed, step);
            assert_ne!(zig.state_word(0), Some(0), "Zig32 seed {} step {}", seed, step);
        }
    }
}

#[test]
fn test_raw_zero_state_repaired_per_family() {
    assert_eq!(Generator::<XoRo32>::from_raw([0, 0]).get_state_words(), [1, 0]);
    assert_eq!(Generator::<Lathe32>::from_raw([0, 0]).get_state_words(), [1, 0]);
    assert_eq!(
        Generator::<XoshiroPlusPlus32>::from_raw([0; 4]).get_state_words(),
        [0, 0, 0, 1]
    );
    assert_eq!(Generator::<Mover32>::from_raw([0, 5]).get_state_words(), [1, 5]);
    assert_eq!(Generator::<Zog32>::from_raw([0, 0]).get_state_words(), [1, 0]);

    // no forbidden state: kept verbatim
    assert_eq!(Generator::<Cake32>::from_raw([0; 3]).get_state_words(), [0; 3]);
    assert_eq!(Generator::<Jsf32>::from_raw([0; 4]).get_state_words(), [0; 4]);
}

#[test]
fn test_repaired_stream_is_not_stuck() {
    let mut rng = Generator::<XoRo32>::from_raw([0, 0]);
    let outputs: Vec<u32> = (0..4).map(|_| rng.next_u32()).collect();
    assert!(outputs.iter().any(|&x| x != outputs[0]));
}

// ============================================================================
// Floats
// ============================================================================

#[test]
fn test_floats_in_unit_interval() {
    let mut rng = Generator::<Tyche32>::new(12345);
    for _ in 0..1000 {
        let d = rng.next_f64();
        let f = rng.next_f32();
        assert!((0.0..1.0).contains(&d), "next_f64() produced {}", d);
        assert!((0.0..1.0).contains(&f), "next_f32() produced {}", f);
    }
}

#[test]
fn test_next_f64_deterministic() {
    let mut rng1 = Generator::<Jsf32>::new(99999);
    let mut rng2 = Generator::<Jsf32>::new(99999);
    for _ in 0..100 {
        assert_eq!(rng1.next_f64(), rng2.next_f64(), "next_f64() not deterministic");
    }
}

#[test]
fn test_next_f64_uses_low_53_bits() {
    let mut a = Generator::<Trim64>::new(3);
    let mut b = a.copy();
    let raw = b.next_u64();
    let expected = (raw & ((1 << 53) - 1)) as f64 / (1u64 << 53) as f64;
    assert_eq!(a.next_f64(), expected);
}

#[test]
fn test_next_bool_is_top_bit() {
    let mut a = Generator::<Cake32>::new(8);
    let mut b = a.copy();
    for _ in 0..32 {
        assert_eq!(a.next_bool(), b.next_u32() >> 31 == 1);
    }
}
