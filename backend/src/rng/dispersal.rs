//! Seed dispersal
//!
//! Turns one seed value into well-distributed state words. Three mixers are
//! in use, each tied to the families that were seeded with it:
//!
//! - [`mix64`] / [`disperse`]: 64-bit golden-ratio mixer; word `k` is
//!   `mix64(seed + k * GOLDEN)` for `k = 1..=N`.
//! - [`disperse_pair32`]: two 32-bit words from a 32-bit seed using only
//!   32-bit arithmetic (XoRo32, Lathe32).
//! - [`xorshift_fill`]: derives the xorshift word of the additive hybrids
//!   from the same 32 bits that become the counter.
//!
//! All functions are pure and total.

/// 2^64 / phi, rounded to odd.
pub const GOLDEN: u64 = 0x9E37_79B9_7F4A_7C15;

/// Avalanche mixer: xorshift, multiply, xorshift, multiply, xorshift.
#[inline]
pub const fn mix64(mut x: u64) -> u64 {
    x ^= x >> 27;
    x = x.wrapping_mul(0x3C79_AC49_2BA7_B653);
    x ^= x >> 33;
    x = x.wrapping_mul(0x1C69_B3F7_4AC4_AE35);
    x ^ (x >> 27)
}

/// `N` decorrelated words: `mix64(seed + k * GOLDEN)` for `k = 1..=N`.
pub fn disperse<const N: usize>(seed: u64) -> [u64; N] {
    let mut words = [0u64; N];
    let mut x = seed;
    for word in words.iter_mut() {
        x = x.wrapping_add(GOLDEN);
        *word = mix64(x);
    }
    words
}

/// Low and high halves of a 64-bit word, in that order.
#[inline]
pub const fn split_words(x: u64) -> [u32; 2] {
    [x as u32, (x >> 32) as u32]
}

/// Two 32-bit state words from a 32-bit seed.
///
/// Runs a Weyl-plus-xorshift construction twice, sharing the xorshift word
/// between the two outputs.
pub fn disperse_pair32(seed: u32) -> [u32; 2] {
    let mut z = seed.wrapping_add(0xC74E_AD55);
    let mut a = seed ^ z;
    a ^= a >> 14;
    z = (z ^ (z >> 10)).wrapping_mul(0xA5CB3);
    a ^= a >> 15;
    a ^= a << 13;
    let first = (z ^ (z >> 20)).wrapping_add(a);

    z = seed.wrapping_add(0x8E9D_5AAA);
    a ^= a >> 14;
    z = (z ^ (z >> 10)).wrapping_mul(0xA5CB3);
    a ^= a >> 15;
    let second = (z ^ (z >> 20)).wrapping_add(a ^ (a << 13));
    [first, second]
}

/// Xorshift word for the additive hybrids, never 0.
///
/// `a = !seed`, xorshift 5/17/13, then xor the seed back in.
pub fn xorshift_fill(seed: u32) -> u32 {
    let mut a = !seed;
    a ^= a >> 5;
    a ^= a << 17;
    a ^= a >> 13;
    a ^= seed;
    if a == 0 {
        1
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disperse_words_differ() {
        let words: [u64; 4] = disperse(0);
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_ne!(words[i], words[j]);
            }
        }
    }

    #[test]
    fn test_disperse_is_prefix_stable() {
        let two: [u64; 2] = disperse(12345);
        let four: [u64; 4] = disperse(12345);
        assert_eq!(two[..], four[..2]);
    }

    #[test]
    fn test_mix64_avalanche_on_adjacent_seeds() {
        let diff = (mix64(1000) ^ mix64(1001)).count_ones();
        assert!(diff > 16, "only {} bits changed", diff);
    }

    #[test]
    fn test_disperse_pair32_known_values() {
        assert_eq!(disperse_pair32(42), [0x8494_9970, 0x80DA_1A16]);
        assert_eq!(disperse_pair32(0), [0x8647_D6B5, 0x85CA_4077]);
    }

    #[test]
    fn test_xorshift_fill_known_values() {
        assert_eq!(xorshift_fill(7), 0xF809_C070);
        assert_eq!(xorshift_fill(0), 0xF807_C000);
    }

    #[test]
    fn test_split_words_order() {
        assert_eq!(split_words(0x1122_3344_5566_7788), [0x5566_7788, 0x1122_3344]);
    }
}
