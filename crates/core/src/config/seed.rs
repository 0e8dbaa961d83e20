use derive_more::Display;
use fnv::FnvHasher;
use serde::{de::Visitor, Deserialize, Deserializer, Serialize, Serializer};
use std::{
    convert::Infallible,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

/// Seed for the RNG that assigns tile costs. Two grids built from the same
/// config (seed included) are identical.
///
/// A seed can be given as an integer or as any string. Strings that parse as
/// a `u64` are treated as that integer, anything else is kept as text and
/// hashed (FNV) when the seed is actually used. This makes seeds like
/// `"my grid"` work in config files and on the command line.
///
/// Seeds always **serialize as a string**. JSON and TOML can't hold the full
/// range of `u64`, so a large integer seed would otherwise get mangled on the
/// way back in.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Seed {
    /// Used as-is
    Int(u64),
    /// Hashed into a `u64` before use
    Text(String),
}

impl Seed {
    /// Pick a random integer seed. Grids built from this will be different
    /// on every run, so log the seed if you want to reproduce one.
    pub fn random() -> Self {
        Self::Int(rand::random())
    }

    /// The numeric value to seed an RNG with
    pub fn to_u64(&self) -> u64 {
        match self {
            Self::Int(seed) => *seed,
            Self::Text(text) => {
                let mut hasher = FnvHasher::default();
                text.hash(&mut hasher);
                hasher.finish()
            }
        }
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self::random()
    }
}

impl From<u64> for Seed {
    fn from(seed: u64) -> Self {
        Self::Int(seed)
    }
}

impl From<&str> for Seed {
    fn from(seed: &str) -> Self {
        seed.parse::<u64>()
            .map(Self::Int)
            .unwrap_or_else(|_| Self::Text(seed.into()))
    }
}

// Lets the CLI take a seed directly as an argument. Never fails, because any
// text is a valid seed
impl FromStr for Seed {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl Serialize for Seed {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Seed {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        // Ints and strings are both allowed, so no type hint
        deserializer.deserialize_any(SeedVisitor)
    }
}

/// Every integer type funnels through u64, so negative or oversized values
/// are rejected
macro_rules! visit_int {
    ($fname:ident, $type:ty) => {
        fn $fname<E: serde::de::Error>(
            self,
            value: $type,
        ) -> Result<Self::Value, E> {
            let seed: u64 = value.try_into().map_err(|_| {
                E::custom(format!("seed out of range for u64: {}", value))
            })?;
            Ok(Seed::Int(seed))
        }
    };
}

struct SeedVisitor;

impl<'de> Visitor<'de> for SeedVisitor {
    type Value = Seed;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a non-negative integer or a string")
    }

    visit_int!(visit_u8, u8);
    visit_int!(visit_u16, u16);
    visit_int!(visit_u32, u32);
    visit_int!(visit_u64, u64);
    visit_int!(visit_u128, u128);
    visit_int!(visit_i8, i8);
    visit_int!(visit_i16, i16);
    visit_int!(visit_i32, i32);
    visit_int!(visit_i64, i64);
    visit_int!(visit_i128, i128);

    fn visit_str<E: serde::de::Error>(
        self,
        value: &str,
    ) -> Result<Self::Value, E> {
        Ok(value.into())
    }
}
