//! Numeric primitives shared by the asset types.

use std::{
    fmt,
    str::FromStr,
};

use crate::{
    generated::num::v1alpha1 as raw,
    Protobuf,
};

/// An unsigned 128 bit quantity of some asset, measured in its base denomination.
///
/// On the wire an amount is split into its lower and upper 64 bits because
/// protobuf has no native 128 bit integers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u128);

impl Amount {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u128::MAX);

    #[must_use]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u128 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    #[must_use]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value.into())
    }
}

impl From<Amount> for u128 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("failed to parse input as an unsigned 128 bit decimal integer")]
pub struct ParseAmountError {
    #[source]
    source: std::num::ParseIntError,
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u128>().map(Self).map_err(|source| ParseAmountError {
            source,
        })
    }
}

impl Protobuf for Amount {
    type Error = std::convert::Infallible;
    type Raw = raw::Amount;

    fn try_from_raw_ref(raw: &Self::Raw) -> Result<Self, Self::Error> {
        Ok(Self::from_raw(*raw))
    }

    fn to_raw(&self) -> Self::Raw {
        let lo = u64::try_from(self.0 & u128::from(u64::MAX))
            .expect("the lower 64 bits of a u128 always fit into a u64");
        let hi = u64::try_from(self.0 >> 64).expect("the upper 64 bits of a u128 always fit a u64");
        raw::Amount {
            lo,
            hi,
        }
    }
}

impl Amount {
    /// Converts the infallible raw form without going through [`Protobuf::try_from_raw`].
    #[must_use]
    pub fn from_raw(raw: raw::Amount) -> Self {
        let raw::Amount {
            lo,
            hi,
        } = raw;
        Self((u128::from(hi) << 64) + u128::from(lo))
    }
}

impl From<raw::Amount> for Amount {
    fn from(value: raw::Amount) -> Self {
        Self::from_raw(value)
    }
}

impl From<Amount> for raw::Amount {
    fn from(value: Amount) -> Self {
        value.into_raw()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{
        Deserialize,
        Deserializer,
        Serialize,
        Serializer,
    };

    use super::Amount;

    impl<'de> Deserialize<'de> for Amount {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            use serde::de::Error as _;
            let s = std::borrow::Cow::<'_, str>::deserialize(deserializer)?;
            s.trim().parse().map_err(D::Error::custom)
        }
    }

    impl Serialize for Amount {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }
}
