//! Runtime family selection
//!
//! Generators are normally monomorphized (`Generator<Mover32>`); tools and
//! configuration files instead name the family as a string. [`FamilyKind`]
//! parses that name and [`AnyGenerator`] wraps whichever generator it
//! selects behind one enum.
//!
//! # Example
//! ```
//! use subcycle_rng::{FamilyKind, GeneratorConfig};
//!
//! let config = GeneratorConfig::from_json(r#"{"family": "zog32", "seed": 7}"#).unwrap();
//! assert_eq!(config.family, FamilyKind::Zog32);
//!
//! let mut rng = config.build();
//! assert_eq!(rng.next_u32(), 0xC770_3F26);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::families::{
    Cake32, Jsf32, Lathe32, Mover32, Trim64, Tyche32, XoRo32, XoshiroPlusPlus32, Zag32, Zig32,
    Zog32,
};
use crate::rng::family::Family;
use crate::rng::generator::Generator;
use crate::rng::snapshot::{GeneratorSnapshot, SnapshotError};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Unknown generator family: {0}")]
    UnknownFamily(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Every family this crate implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyKind {
    XoRo32,
    Lathe32,
    XoshiroPlusPlus32,
    Mover32,
    Cake32,
    Jsf32,
    Tyche32,
    Zig32,
    Zag32,
    Zog32,
    Trim64,
}

impl FamilyKind {
    pub const ALL: [FamilyKind; 11] = [
        FamilyKind::XoRo32,
        FamilyKind::Lathe32,
        FamilyKind::XoshiroPlusPlus32,
        FamilyKind::Mover32,
        FamilyKind::Cake32,
        FamilyKind::Jsf32,
        FamilyKind::Tyche32,
        FamilyKind::Zig32,
        FamilyKind::Zag32,
        FamilyKind::Zog32,
        FamilyKind::Trim64,
    ];

    /// Display name, identical to the snapshot family tag
    pub fn name(self) -> &'static str {
        match self {
            FamilyKind::XoRo32 => XoRo32::NAME,
            FamilyKind::Lathe32 => Lathe32::NAME,
            FamilyKind::XoshiroPlusPlus32 => XoshiroPlusPlus32::NAME,
            FamilyKind::Mover32 => Mover32::NAME,
            FamilyKind::Cake32 => Cake32::NAME,
            FamilyKind::Jsf32 => Jsf32::NAME,
            FamilyKind::Tyche32 => Tyche32::NAME,
            FamilyKind::Zig32 => Zig32::NAME,
            FamilyKind::Zag32 => Zag32::NAME,
            FamilyKind::Zog32 => Zog32::NAME,
            FamilyKind::Trim64 => Trim64::NAME,
        }
    }

    /// Whether seeding goes through jump tables
    pub fn is_subcycle(self) -> bool {
        matches!(self, FamilyKind::Mover32 | FamilyKind::Cake32)
    }
}

impl fmt::Display for FamilyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FamilyKind {
    type Err = ConfigError;

    /// Case-insensitive; accepts `"mover32"`, `"Mover32"`, `"MOVER32"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FamilyKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownFamily(s.to_string()))
    }
}

/// Family plus seed, loadable from JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub family: FamilyKind,
    pub seed: u64,
}

impl GeneratorConfig {
    pub fn new(family: FamilyKind, seed: u64) -> Self {
        Self { family, seed }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json)
            .map_err(|e| ConfigError::Serialization(format!("Config parse failed: {}", e)))
    }

    /// Construct the configured generator
    pub fn build(&self) -> AnyGenerator {
        AnyGenerator::new(self.family, self.seed)
    }
}

// ============================================================================
// Runtime-dispatched generator
// ============================================================================

macro_rules! any_generator {
    ($($kind:ident),* $(,)?) => {
        /// A generator whose family is chosen at runtime
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum AnyGenerator {
            $($kind(Generator<$kind>),)*
        }

        impl AnyGenerator {
            pub fn new(family: FamilyKind, seed: u64) -> Self {
                match family {
                    $(FamilyKind::$kind => AnyGenerator::$kind(Generator::new(seed)),)*
                }
            }

            /// Restore whichever family the snapshot names
            pub fn restore(snapshot: &GeneratorSnapshot) -> Result<Self, SnapshotError> {
                let family = snapshot.family.parse::<FamilyKind>().map_err(|_| {
                    SnapshotError::FamilyMismatch {
                        expected: "a known family".to_string(),
                        found: snapshot.family.clone(),
                    }
                })?;
                Ok(match family {
                    $(FamilyKind::$kind => AnyGenerator::$kind(Generator::restore(snapshot)?),)*
                })
            }

            pub fn family(&self) -> FamilyKind {
                match self {
                    $(AnyGenerator::$kind(_) => FamilyKind::$kind,)*
                }
            }

            pub fn next_u32(&mut self) -> u32 {
                match self {
                    $(AnyGenerator::$kind(g) => g.next_u32(),)*
                }
            }

            pub fn next_u64(&mut self) -> u64 {
                match self {
                    $(AnyGenerator::$kind(g) => g.next_u64(),)*
                }
            }

            pub fn next_f32(&mut self) -> f32 {
                match self {
                    $(AnyGenerator::$kind(g) => g.next_f32(),)*
                }
            }

            pub fn next_f64(&mut self) -> f64 {
                match self {
                    $(AnyGenerator::$kind(g) => g.next_f64(),)*
                }
            }

            pub fn next_bool(&mut self) -> bool {
                match self {
                    $(AnyGenerator::$kind(g) => g.next_bool(),)*
                }
            }

            pub fn next_bounded(&mut self, bound: i32) -> i32 {
                match self {
                    $(AnyGenerator::$kind(g) => g.next_bounded(bound),)*
                }
            }

            pub fn skip(&mut self, steps: u64) {
                match self {
                    $(AnyGenerator::$kind(g) => g.skip(steps),)*
                }
            }

            pub fn snapshot(&self) -> GeneratorSnapshot {
                match self {
                    $(AnyGenerator::$kind(g) => g.snapshot(),)*
                }
            }
        }

        impl fmt::Display for AnyGenerator {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(AnyGenerator::$kind(g) => fmt::Display::fmt(g, f),)*
                }
            }
        }
    };
}

any_generator!(
    XoRo32,
    Lathe32,
    XoshiroPlusPlus32,
    Mover32,
    Cake32,
    Jsf32,
    Tyche32,
    Zig32,
    Zag32,
    Zog32,
    Trim64,
);
