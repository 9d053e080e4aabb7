//! Subcycle families: Mover32 and Cake32.
//!
//! Both halves evolve independently and are seeded through
//! [`crate::rng::jump_table`], so every seed lands on the long cycle of each
//! half. Seeding walks at most 511 steps per half.

use super::nonzero;
use crate::rng::family::{join, join_sign_extended, Family};
use crate::rng::jump_table::{
    CakeHalfA, CakeHalfB, JumpTable, MoverHalfA, MoverHalfB, SubcycleFamily, CAKE32_A, CAKE32_B,
    MOVER32_A, MOVER32_B,
};
use crate::rng::scrambler::{Post, XorHalves};
use crate::rng::transition::{Subcycle, SubcycleOuter};

/// Two multiply-rotate recurrences; output `A ^ B`.
///
/// Neither half may be 0: `0 * m` stays 0 forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mover32;

impl Family for Mover32 {
    type Word = u32;
    type State = [u32; 2];
    type Transition = Subcycle<MoverHalfA, MoverHalfB>;
    type Scrambler = XorHalves;

    const NAME: &'static str = "Mover32";

    fn seed(seed: u64) -> [u32; 2] {
        <Self as SubcycleFamily>::locate(seed as u32)
    }

    fn repair(state: &mut [u32; 2]) -> bool {
        let [a, b] = state;
        // both checks must run
        nonzero(a) | nonzero(b)
    }

    fn next_u32(state: &mut [u32; 2]) -> u32 {
        Self::step(state)
    }

    fn next_u64(state: &mut [u32; 2]) -> u64 {
        let high = Self::step(state);
        let low = Self::step(state);
        join_sign_extended(high, low)
    }
}

impl SubcycleFamily for Mover32 {
    type HalfA = MoverHalfA;
    type HalfB = MoverHalfB;

    const TABLE_A: &'static JumpTable = &MOVER32_A;
    const TABLE_B: &'static JumpTable = &MOVER32_B;
}

/// Two add-rotate recurrences feeding a xorshift word `C`; output `C`.
///
/// `C` absorbs `A + B` every step, so the state has no forbidden value and
/// raw state is used as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cake32;

impl Family for Cake32 {
    type Word = u32;
    type State = [u32; 3];
    type Transition = SubcycleOuter<CakeHalfA, CakeHalfB>;
    type Scrambler = Post<2>;

    const NAME: &'static str = "Cake32";

    fn seed(seed: u64) -> [u32; 3] {
        let seed = seed as u32;
        let [a, b] = <Self as SubcycleFamily>::locate(seed);
        [a, b, !seed.wrapping_add(a).wrapping_add(b)]
    }

    fn next_u32(state: &mut [u32; 3]) -> u32 {
        Self::step(state)
    }

    fn next_u64(state: &mut [u32; 3]) -> u64 {
        let high = Self::step(state);
        let low = Self::step(state);
        join(high, low)
    }
}

impl SubcycleFamily for Cake32 {
    type HalfA = CakeHalfA;
    type HalfB = CakeHalfB;

    const TABLE_A: &'static JumpTable = &CAKE32_A;
    const TABLE_B: &'static JumpTable = &CAKE32_B;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mover_seed_zero_is_table_start() {
        assert_eq!(Mover32::seed(0), [1, 1]);
    }

    #[test]
    fn test_mover_known_seed() {
        assert_eq!(Mover32::seed(0x1234_5678), [0x136E_9CDE, 0x89E5_70AA]);
    }

    #[test]
    fn test_mover_repair_each_word() {
        let mut state = [0u32, 0];
        assert!(Mover32::repair(&mut state));
        assert_eq!(state, [1, 1]);

        let mut state = [7u32, 0];
        assert!(Mover32::repair(&mut state));
        assert_eq!(state, [7, 1]);
    }

    #[test]
    fn test_cake_seed_third_word() {
        assert_eq!(Cake32::seed(0), [0x3F1B_4D6F, 0x7034_B30E, 0x50AF_FF82]);
        assert_eq!(Cake32::seed(0x1234_5678), [0xE1A0_E7F6, 0x1EF3_E5F0, 0xED36_DBA1]);
    }

    #[test]
    fn test_cake_has_no_repair() {
        let mut state = [0u32; 3];
        assert!(!Cake32::repair(&mut state));
        assert_eq!(state, [0, 0, 0]);
    }
}
