//! Subcycle RNG Core
//!
//! Small, fast, deterministic 32/64-bit pseudo-random number generators with
//! bit-exact, recorded output streams.
//!
//! # Architecture
//!
//! - **dispersal**: Seed mixing into well-distributed state words
//! - **transition**: State update rules, one per family
//! - **scrambler**: Output functions, decoupled from transitions
//! - **jump_table**: Precomputed tables for seeding subcycle families
//! - **generator**: The uniform `Generator<F>` facade
//! - **snapshot / config**: Checksummed state snapshots and runtime selection
//!
//! # Critical Invariants
//!
//! 1. Same family + same seed → same stream, bit for bit
//! 2. Generators never reach a forbidden (fixed-point) state
//! 3. Generator operations never fail; raw-state repair is silent
//!
//! Not cryptographically secure, and not synchronized: give each thread its
//! own generator (see [`Generator::copy`]).

// Module declarations
pub mod rng;

// Re-exports for convenience
pub use rng::{
    AnyGenerator, Cake32, Cake32Rng, ConfigError, Family, FamilyKind, Generator,
    GeneratorConfig, GeneratorSnapshot, Jsf32, Jsf32Rng, JumpTable, Lathe32, Lathe32Rng,
    Mover32, Mover32Rng, Reduction, SnapshotError, SubcycleFamily, Trim64, Trim64Rng, Tyche32,
    Tyche32Rng, XoRo32, XoRo32Rng, XoshiroPlusPlus32, XoshiroPlusPlus32Rng, Zag32, Zag32Rng,
    Zig32, Zig32Rng, Zog32, Zog32Rng,
};
