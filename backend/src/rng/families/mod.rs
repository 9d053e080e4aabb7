//! Concrete generator families
//!
//! Each family is a zero-sized marker implementing [`Family`]; pair it with
//! [`crate::rng::Generator`] (or use the aliases re-exported from
//! [`crate::rng`]) to get a usable generator.
//!
//! | Family | State | Seeding |
//! |---|---|---|
//! | [`XoRo32`], [`Lathe32`] | 2 × u32 | 32-bit pair dispersal |
//! | [`XoshiroPlusPlus32`] | 4 × u32 | 64-bit dispersal, split |
//! | [`Mover32`], [`Cake32`] | 2 or 3 × u32 | jump tables |
//! | [`Jsf32`] | 4 × u32 | constant + 20 warm-up steps |
//! | [`Tyche32`] | 4 × u32 | 64-bit dispersal, low halves |
//! | [`Zig32`], [`Zag32`], [`Zog32`] | 2 × u32 | xorshift fill + counter |
//! | [`Trim64`] | 4 × u64 | 64-bit dispersal |
//!
//! [`Family`]: crate::rng::family::Family

mod chaotic;
mod hybrid;
mod subcycle;
mod trim;
mod xoro;

pub use chaotic::{Jsf32, Tyche32};
pub use hybrid::{
    zag_determine, zag_determine_bounded, zig_determine, zig_determine_bounded, zog_determine,
    zog_determine_bounded, Zag32, Zig32, Zog32,
};
pub use subcycle::{Cake32, Mover32};
pub use trim::Trim64;
pub use xoro::{Lathe32, XoRo32, XoshiroPlusPlus32};

/// Substitute 1 for 0 in `word`, reporting whether it changed.
#[inline]
fn nonzero(word: &mut u32) -> bool {
    if *word == 0 {
        *word = 1;
        true
    } else {
        false
    }
}
