//! Bounded output tests
//!
//! Range checks for each reduction, plus the inherited 15-bit restriction of
//! the hybrid families.

use subcycle_rng::{
    Family, Generator, Jsf32, Mover32, Reduction, Trim64, XoRo32, Zag32, Zig32, Zog32,
};

const DRAWS: usize = 100_000;

fn check_bounded_range<F: Family>(bound: i32) {
    let mut rng = Generator::<F>::new(2024);
    for _ in 0..DRAWS {
        let v = rng.next_bounded(bound);
        assert!(
            (0..bound).contains(&v),
            "{} next_bounded({}) produced {}",
            F::NAME,
            bound,
            v
        );
    }
}

#[test]
fn test_reduction_per_family() {
    assert_eq!(XoRo32::REDUCTION, Reduction::MultiplyHigh);
    assert_eq!(Mover32::REDUCTION, Reduction::MultiplyHigh);
    assert_eq!(Trim64::REDUCTION, Reduction::MultiplyHigh);
    assert_eq!(Zig32::REDUCTION, Reduction::FifteenBit);
    assert_eq!(Zag32::REDUCTION, Reduction::FifteenBit);
    assert_eq!(Zog32::REDUCTION, Reduction::FifteenBit);
}

#[test]
fn test_multiply_high_bounds_stay_in_range() {
    for bound in [1, 2, 3, 7, 100, 1 << 20, i32::MAX] {
        check_bounded_range::<Mover32>(bound);
        check_bounded_range::<Jsf32>(bound);
    }
}

#[test]
fn test_fifteen_bit_bounds_stay_in_range() {
    for bound in [1, 2, 6, 100, 32767] {
        check_bounded_range::<Zig32>(bound);
        check_bounded_range::<Zog32>(bound);
    }
}

#[test]
fn test_bound_one_always_zero() {
    let mut rng = Generator::<XoRo32>::new(5);
    for _ in 0..1000 {
        assert_eq!(rng.next_bounded(1), 0);
    }
}

#[test]
fn test_multiply_high_negative_bound_yields_zero() {
    let mut rng = Generator::<Mover32>::new(5);
    for _ in 0..1000 {
        assert_eq!(rng.next_bounded(-50), 0);
    }
}

#[test]
fn test_fifteen_bit_negative_bound_is_mirrored() {
    let mut rng = Generator::<Zag32>::new(5);
    for _ in 0..10_000 {
        let v = rng.next_bounded(-500);
        assert!((-500..=0).contains(&v), "{}", v);
    }
}

#[test]
fn test_fifteen_bit_restriction_is_inherited() {
    // a bound outside -32768..=32767 wraps in 32-bit arithmetic
    let mut rng = Generator::<Zig32>::from_raw([1, 0]);
    let out_of_range = (0..10_000)
        .map(|_| rng.next_bounded(1 << 20))
        .any(|v| !(0..(1 << 20)).contains(&v));
    assert!(out_of_range);
}

#[test]
fn test_signed_bounded_both_signs() {
    let mut rng = Generator::<Trim64>::new(11);
    for _ in 0..DRAWS {
        let pos = rng.next_signed_bounded(10);
        let neg = rng.next_signed_bounded(-10);
        assert!((0..10).contains(&pos), "{}", pos);
        assert!(neg > -10 && neg <= 0, "{}", neg);
    }
}

#[test]
fn test_range_covers_interval() {
    let mut rng = Generator::<Mover32>::new(77);
    let mut seen = [false; 10];
    for _ in 0..10_000 {
        let v = rng.range(-5, 5);
        assert!((-5..5).contains(&v), "{}", v);
        seen[(v + 5) as usize] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_range_empty_still_consumes_a_draw() {
    let mut a = Generator::<Jsf32>::new(1);
    let mut b = a.copy();
    assert_eq!(a.range(10, 10), 10);
    b.next_u64();
    assert_eq!(a, b);
}

#[test]
fn test_range_full_i64_span() {
    let mut rng = Generator::<Trim64>::new(9);
    for _ in 0..1000 {
        let v = rng.range(i64::MIN, i64::MAX);
        assert!(v < i64::MAX);
    }
}

#[test]
fn test_signed_range_swapped_bounds() {
    let mut rng = Generator::<XoRo32>::new(4);
    for _ in 0..10_000 {
        let v = rng.signed_range(5, -5);
        assert!(v > -5 && v <= 5, "{}", v);
    }
}
