//! Deterministic random number generation
//!
//! Layered bottom-up:
//!
//! - [`dispersal`]: seed mixing
//! - [`transition`]: per-family state updates
//! - [`scrambler`]: per-family output functions
//! - [`jump_table`]: precomputed seeding tables for subcycle families
//! - [`family`] / [`families`]: the pairing of the above per algorithm
//! - [`generator`]: the public [`Generator`] facade
//! - [`snapshot`], [`config`]: serialization and runtime selection
//!
//! CRITICAL: outputs are compared bit-for-bit against recorded streams.
//! Every arithmetic step wraps; never widen or check it.

pub mod bounded;
pub mod config;
pub mod dispersal;
pub mod families;
pub mod family;
pub mod generator;
pub mod jump_table;
mod rand_compat;
pub mod scrambler;
pub mod snapshot;
pub mod transition;

pub use bounded::Reduction;
pub use config::{AnyGenerator, ConfigError, FamilyKind, GeneratorConfig};
pub use families::{
    Cake32, Jsf32, Lathe32, Mover32, Trim64, Tyche32, XoRo32, XoshiroPlusPlus32, Zag32, Zig32,
    Zog32,
};
pub use family::Family;
pub use generator::Generator;
pub use jump_table::{JumpTable, SubcycleFamily};
pub use snapshot::{GeneratorSnapshot, SnapshotError};

pub type XoRo32Rng = Generator<XoRo32>;
pub type Lathe32Rng = Generator<Lathe32>;
pub type XoshiroPlusPlus32Rng = Generator<XoshiroPlusPlus32>;
pub type Mover32Rng = Generator<Mover32>;
pub type Cake32Rng = Generator<Cake32>;
pub type Jsf32Rng = Generator<Jsf32>;
pub type Tyche32Rng = Generator<Tyche32>;
pub type Zig32Rng = Generator<Zig32>;
pub type Zag32Rng = Generator<Zag32>;
pub type Zog32Rng = Generator<Zog32>;
pub type Trim64Rng = Generator<Trim64>;
