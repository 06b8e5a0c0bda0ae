use std::fmt::{
    self,
    Debug,
    Display,
    Formatter,
};

use super::raw;
use crate::Protobuf;

/// An opaque commitment to a balance.
///
/// Only the 32 byte encoding is modelled; no commitment arithmetic is provided.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BalanceCommitment([u8; 32]);

impl BalanceCommitment {
    pub const LENGTH: usize = 32;

    #[must_use]
    pub const fn new(bytes: [u8; Self::LENGTH]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn get(self) -> [u8; Self::LENGTH] {
        self.0
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.0
    }
}

impl Display for BalanceCommitment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&crate::display::base64(&self.0), f)
    }
}

impl Debug for BalanceCommitment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BalanceCommitment({self})")
    }
}

impl TryFrom<&[u8]> for BalanceCommitment {
    type Error = BalanceCommitmentError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let inner = <[u8; Self::LENGTH]>::try_from(bytes).map_err(|_| {
            BalanceCommitmentError(BalanceCommitmentErrorKind::IncorrectLength {
                expected: Self::LENGTH,
                actual: bytes.len(),
            })
        })?;
        Ok(Self(inner))
    }
}

impl Protobuf for BalanceCommitment {
    type Error = BalanceCommitmentError;
    type Raw = raw::BalanceCommitment;

    fn try_from_raw_ref(raw: &Self::Raw) -> Result<Self, Self::Error> {
        Self::try_from(&*raw.inner)
    }

    fn to_raw(&self) -> Self::Raw {
        raw::BalanceCommitment {
            inner: self.0.to_vec().into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct BalanceCommitmentError(BalanceCommitmentErrorKind);

#[derive(Debug, thiserror::Error, PartialEq)]
enum BalanceCommitmentErrorKind {
    #[error("expected {expected} bytes, got {actual}")]
    IncorrectLength { expected: usize, actual: usize },
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{
        Deserialize,
        Deserializer,
        Serialize,
        Serializer,
    };

    use super::BalanceCommitment;

    impl<'de> Deserialize<'de> for BalanceCommitment {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            crate::serde::base64_deserialize_array(deserializer).map(Self)
        }
    }

    impl Serialize for BalanceCommitment {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            crate::serde::base64_serialize(&self.0, serializer)
        }
    }
}
