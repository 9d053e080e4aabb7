//! `rand_core` integration
//!
//! Lets any [`Generator`] drive code written against `rand_core::RngCore`.
//! `SeedableRng` uses an 8-byte little-endian seed routed through
//! [`Generator::new`], so `seed_from_u64(s)` and `Generator::new(s)` yield
//! the same stream. `fill_bytes` keeps the inherent four-bytes-per-`next_u32`
//! layout.

use rand_core::{Error, RngCore, SeedableRng};

use crate::rng::family::Family;
use crate::rng::generator::Generator;

impl<F: Family> RngCore for Generator<F> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Generator::<F>::next_u32(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        Generator::<F>::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        Generator::<F>::fill_bytes(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        Generator::<F>::fill_bytes(self, dest);
        Ok(())
    }
}

impl<F: Family> SeedableRng for Generator<F> {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Generator::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Generator::new(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::families::{Jsf32, Zig32};

    #[test]
    fn test_seed_from_u64_matches_new() {
        let mut a = <Generator<Zig32> as SeedableRng>::seed_from_u64(7);
        let mut b = Generator::<Zig32>::new(7);
        assert_eq!(RngCore::next_u32(&mut a), b.next_u32());
    }

    #[test]
    fn test_from_seed_little_endian() {
        let a = <Generator<Jsf32> as SeedableRng>::from_seed(5u64.to_le_bytes());
        assert_eq!(a, Generator::<Jsf32>::new(5));
    }

    #[test]
    fn test_rng_core_is_object_safe() {
        let mut rng = Generator::<Jsf32>::new(1);
        let dyn_rng: &mut dyn RngCore = &mut rng;
        let mut buf = [0u8; 3];
        dyn_rng.fill_bytes(&mut buf);
        assert!(dyn_rng.try_fill_bytes(&mut buf).is_ok());
    }
}
