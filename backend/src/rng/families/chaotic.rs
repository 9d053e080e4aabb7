//! Four-word chaotic mixers: Jsf32 and Tyche32.
//!
//! Neither transition is a bijection with a known single cycle, so there is
//! no forbidden state to repair; quality comes from warm-up and dispersal.

use crate::rng::dispersal::disperse;
use crate::rng::family::{join, join_sign_extended, Family};
use crate::rng::scrambler::Post;
use crate::rng::transition::{Jsf32Step, StateTransition, TycheStep};

/// Jenkins Small Fast (32-bit); output `D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jsf32;

/// Warm-up steps after seeding.
const JSF_WARM_UP: usize = 20;

impl Family for Jsf32 {
    type Word = u32;
    type State = [u32; 4];
    type Transition = Jsf32Step;
    type Scrambler = Post<3>;

    const NAME: &'static str = "Jsf32";

    fn seed(seed: u64) -> [u32; 4] {
        let seed = seed as u32;
        let mut state = [0xF1EA_5EED, seed, seed, seed];
        for _ in 0..JSF_WARM_UP {
            Jsf32Step::advance(&mut state);
        }
        state
    }

    fn next_u32(state: &mut [u32; 4]) -> u32 {
        Self::step(state)
    }

    fn next_u64(state: &mut [u32; 4]) -> u64 {
        let high = Self::step(state);
        let low = Self::step(state);
        join(high, low)
    }
}

/// Tyche-style double round; output `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tyche32;

impl Family for Tyche32 {
    type Word = u32;
    type State = [u32; 4];
    type Transition = TycheStep;
    type Scrambler = Post<0>;

    const NAME: &'static str = "Tyche32";

    /// Low halves of four dispersed 64-bit words.
    fn seed(seed: u64) -> [u32; 4] {
        disperse::<4>(seed).map(|w| w as u32)
    }

    fn next_u32(state: &mut [u32; 4]) -> u32 {
        Self::step(state)
    }

    /// One step, `A` on top of `B`.
    fn next_u64(state: &mut [u32; 4]) -> u64 {
        TycheStep::advance(state);
        join_sign_extended(state[0], state[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jsf_seed_zero_known_state() {
        assert_eq!(
            Jsf32::seed(0),
            [0x1B51_7AA6, 0x0D3D_55A3, 0x44D6_8D47, 0x7A48_4BC9]
        );
    }

    #[test]
    fn test_jsf_adjacent_seeds_decorrelated() {
        let a = Jsf32::seed(1);
        let b = Jsf32::seed(2);
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x ^ y).count_ones() > 4);
        }
    }

    #[test]
    fn test_tyche_seed_known_state() {
        assert_eq!(
            Tyche32::seed(99),
            [0xD497_E009, 0xE0A4_386E, 0x1C2F_05F1, 0x353D_9424]
        );
    }
}
