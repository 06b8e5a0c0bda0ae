use std::{
    fmt,
    str::FromStr,
};

use sha2::{
    Digest as _,
    Sha256,
};

use super::raw;
use crate::Protobuf;

pub const ID_LEN: usize = 32;
/// The human readable prefix of bech32m encoded asset IDs (also known as bech32 HRP).
pub const HUMAN_READABLE_ID_PREFIX: &str = "passet";
// The compile-time generated bech32::Hrp to avoid redoing it on every encode.
// Intentionally kept crate-private to not make bech32 part of the crate API.
const BECH32_HRP: bech32::Hrp = bech32::Hrp::parse_unchecked(HUMAN_READABLE_ID_PREFIX);

/// The canonical identifier of an asset.
///
/// An ID is derived by hashing the full denomination string of an asset,
/// see [`Id::from_base_denom`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id([u8; ID_LEN]);

impl Id {
    #[must_use]
    pub const fn new(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn get(self) -> [u8; ID_LEN] {
        self.0
    }

    #[must_use]
    pub fn to_vec(self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Derives the asset ID of the denomination `base_denom`.
    ///
    /// # Examples
    /// ```
    /// use assetkit_core::asset::Id;
    /// use sha2::{
    ///     Digest as _,
    ///     Sha256,
    /// };
    /// let id = Id::from_base_denom("upenumbra");
    /// assert_eq!(id, Id::new(Sha256::digest("upenumbra").into()));
    /// ```
    #[must_use]
    pub fn from_base_denom(base_denom: &str) -> Self {
        Self(Sha256::digest(base_denom.as_bytes()).into())
    }

    /// Returns an ID given a 32-byte slice.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice is not 32 bytes long.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, IdError> {
        let inner = <[u8; ID_LEN]>::try_from(slice)
            .map_err(|_| IdError::incorrect_length(slice.len()))?;
        Ok(Self(inner))
    }

    /// Converts a bech32m string to an asset ID.
    ///
    /// # Errors
    /// Returns an error if:
    /// + `input` is not bech32m encoded (this includes a bech32 checksum).
    /// + the human readable prefix (bech32 HRP) is not `"passet"`.
    /// + the decoded data contained in `input` is not 32 bytes long.
    pub fn try_from_bech32m(input: &str) -> Result<Self, IdError> {
        let checked = bech32::primitives::decode::CheckedHrpstring::new::<bech32::Bech32m>(input)
            .map_err(IdError::bech32m_decode)?;
        let hrp = checked.hrp();
        if hrp != BECH32_HRP {
            return Err(IdError::unknown_bech32_hrp(hrp));
        }
        Self::try_from_slice(&checked.byte_iter().collect::<Vec<_>>())
    }
}

impl AsRef<[u8]> for Id {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ID_LEN]> for Id {
    fn from(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use bech32::EncodeError;
        match bech32::encode_lower_to_fmt::<bech32::Bech32m, _>(f, BECH32_HRP, &self.0) {
            Ok(()) => Ok(()),
            Err(EncodeError::Fmt(err)) => Err(err),
            Err(err) => panic!(
                "only formatting errors are valid when encoding asset IDs; all other error \
                 variants (only TooLong at of bech32-0.11.0) are guaranteed to not \
                 happen:\n{err:?}",
            ),
        }
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Id").field(&format_args!("{self}")).finish()
    }
}

impl FromStr for Id {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_bech32m(s)
    }
}

impl Protobuf for Id {
    type Error = IdError;
    type Raw = raw::AssetId;

    /// Converts from the protobuf asset ID.
    ///
    /// Exactly one of `inner`, `alt_bech32m`, and `alt_base_denom` must be set.
    fn try_from_raw_ref(raw: &Self::Raw) -> Result<Self, Self::Error> {
        let raw::AssetId {
            inner,
            alt_bech32m,
            alt_base_denom,
        } = raw;
        match (
            inner.is_empty(),
            alt_bech32m.is_empty(),
            alt_base_denom.is_empty(),
        ) {
            (false, true, true) => Self::try_from_slice(inner),
            (true, false, true) => Self::try_from_bech32m(alt_bech32m),
            (true, true, false) => Ok(Self::from_base_denom(alt_base_denom)),
            (true, true, true) => Err(IdError::no_field_set()),
            (false, ..) => Err(IdError::inner_and_alternate()),
            (true, false, false) => Err(IdError::both_alternates()),
        }
    }

    /// Converts to the protobuf asset ID, only ever setting the `inner` bytes.
    fn to_raw(&self) -> Self::Raw {
        raw::AssetId {
            inner: self.to_vec().into(),
            alt_bech32m: String::new(),
            alt_base_denom: String::new(),
        }
    }
}

impl From<Id> for raw::AssetId {
    fn from(value: Id) -> Self {
        value.into_raw()
    }
}

impl TryFrom<raw::AssetId> for Id {
    type Error = IdError;

    fn try_from(value: raw::AssetId) -> Result<Self, Self::Error> {
        Self::try_from_raw(value)
    }
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct IdError(IdErrorKind);

impl IdError {
    fn bech32m_decode(source: bech32::primitives::decode::CheckedHrpstringError) -> Self {
        Self(IdErrorKind::Bech32mDecode {
            source,
        })
    }

    fn both_alternates() -> Self {
        Self(IdErrorKind::BothAlternates)
    }

    fn incorrect_length(received: usize) -> Self {
        Self(IdErrorKind::IncorrectLength {
            received,
        })
    }

    fn inner_and_alternate() -> Self {
        Self(IdErrorKind::InnerAndAlternate)
    }

    fn no_field_set() -> Self {
        Self(IdErrorKind::NoFieldSet)
    }

    fn unknown_bech32_hrp(received: bech32::Hrp) -> Self {
        Self(IdErrorKind::UnknownBech32Hrp {
            received,
        })
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum IdErrorKind {
    #[error("failed decoding provided bech32m string")]
    Bech32mDecode {
        source: bech32::primitives::decode::CheckedHrpstringError,
    },
    #[error("expected an asset ID of 32 bytes, got `{received}`")]
    IncorrectLength { received: usize },
    #[error("expected `\"passet\"` as the bech32 human readable prefix, got `\"{received}\"`")]
    UnknownBech32Hrp { received: bech32::Hrp },
    #[error(
        "asset ID protobuf set its `inner` field together with `alt_bech32m` or `alt_base_denom`"
    )]
    InnerAndAlternate,
    #[error("asset ID protobuf set both `alt_bech32m` and `alt_base_denom`")]
    BothAlternates,
    #[error("asset ID protobuf had none of `inner`, `alt_bech32m`, or `alt_base_denom` set")]
    NoFieldSet,
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{
        Deserialize,
        Deserializer,
        Serialize,
        Serializer,
    };

    use super::Id;

    impl<'de> Deserialize<'de> for Id {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            use serde::de::Error as _;
            let s = std::borrow::Cow::<'_, str>::deserialize(deserializer)?;
            s.trim().parse().map_err(D::Error::custom)
        }
    }

    impl Serialize for Id {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::{
        raw,
        Id,
        IdErrorKind,
        BECH32_HRP,
        ID_LEN,
    };
    use crate::Protobuf as _;

    const UPENUMBRA_BECH32M: &str =
        "passet1n3wtmycv7yyjeenwzz4sn9cyuck3evjysqfnhd7nwfs9akw7v7gs2smltn";

    fn raw_id(inner: &[u8], alt_bech32m: &str, alt_base_denom: &str) -> raw::AssetId {
        raw::AssetId {
            inner: Bytes::copy_from_slice(inner),
            alt_bech32m: alt_bech32m.to_string(),
            alt_base_denom: alt_base_denom.to_string(),
        }
    }

    #[track_caller]
    fn assert_raw_error(raw: &raw::AssetId, kind: IdErrorKind) {
        let error = Id::try_from_raw_ref(raw)
            .expect_err("returned a valid asset ID where it should have errored");
        assert_eq!(kind, error.0);
    }

    #[test]
    fn const_passet_hrp_is_valid() {
        let hrp = bech32::Hrp::parse(super::HUMAN_READABLE_ID_PREFIX).unwrap();
        assert_eq!(hrp, BECH32_HRP);
    }

    #[test]
    fn id_is_displayed_as_bech32m() {
        let id = Id::from_base_denom("upenumbra");
        assert_eq!(UPENUMBRA_BECH32M, id.to_string());
        assert_eq!(id, UPENUMBRA_BECH32M.parse::<Id>().unwrap());
    }

    #[test]
    fn id_of_incorrect_length_gives_error() {
        for len in [0, 31, 33, 100] {
            let error = Id::try_from_slice(&vec![42; len]).unwrap_err();
            assert_eq!(
                IdErrorKind::IncorrectLength {
                    received: len
                },
                error.0
            );
        }
    }

    #[test]
    fn non_passet_hrp_is_caught() {
        let hrp = bech32::Hrp::parse("other").unwrap();
        let input = bech32::encode_lower::<bech32::Bech32m>(hrp, &[42u8; ID_LEN]).unwrap();
        let error = Id::try_from_bech32m(&input)
            .expect_err("returned a valid asset ID where it should have errored");
        assert_eq!(
            IdErrorKind::UnknownBech32Hrp {
                received: hrp
            },
            error.0
        );
    }

    #[test]
    fn bech32_checksum_is_rejected() {
        let input = bech32::encode_lower::<bech32::Bech32>(BECH32_HRP, &[42u8; ID_LEN]).unwrap();
        let error = Id::try_from_bech32m(&input)
            .expect_err("a bech32 checksum must not be accepted where bech32m is expected");
        assert!(matches!(error.0, IdErrorKind::Bech32mDecode { .. }));

        let input = bech32::encode_lower::<bech32::Bech32m>(BECH32_HRP, &[42u8; ID_LEN]).unwrap();
        assert_eq!(Id::new([42; ID_LEN]), Id::try_from_bech32m(&input).unwrap());
    }

    #[test]
    fn corrupted_checksum_is_rejected() {
        let mut input = UPENUMBRA_BECH32M.to_string();
        input.pop();
        input.push('q');
        let error = input
            .parse::<Id>()
            .expect_err("a corrupted checksum must not be accepted");
        assert!(matches!(error.0, IdErrorKind::Bech32mDecode { .. }));
    }

    #[test]
    fn raw_with_only_inner_is_accepted() {
        let id = Id::try_from_raw(raw_id(&[42; ID_LEN], "", "")).unwrap();
        assert_eq!(Id::new([42; ID_LEN]), id);
    }

    #[test]
    fn raw_with_only_alternates_is_accepted() {
        let expected = Id::from_base_denom("upenumbra");
        assert_eq!(
            expected,
            Id::try_from_raw(raw_id(&[], UPENUMBRA_BECH32M, "")).unwrap()
        );
        assert_eq!(
            expected,
            Id::try_from_raw(raw_id(&[], "", "upenumbra")).unwrap()
        );
    }

    #[test]
    fn raw_with_conflicting_fields_is_rejected() {
        assert_raw_error(
            &raw_id(&[42; ID_LEN], UPENUMBRA_BECH32M, ""),
            IdErrorKind::InnerAndAlternate,
        );
        assert_raw_error(
            &raw_id(&[42; ID_LEN], "", "upenumbra"),
            IdErrorKind::InnerAndAlternate,
        );
        assert_raw_error(
            &raw_id(&[42; ID_LEN], UPENUMBRA_BECH32M, "upenumbra"),
            IdErrorKind::InnerAndAlternate,
        );
        assert_raw_error(
            &raw_id(&[], UPENUMBRA_BECH32M, "upenumbra"),
            IdErrorKind::BothAlternates,
        );
        assert_raw_error(&raw_id(&[], "", ""), IdErrorKind::NoFieldSet);
    }

    #[test]
    fn to_raw_only_sets_inner() {
        let raw = Id::from_base_denom("upenumbra").into_raw();
        assert_eq!(ID_LEN, raw.inner.len());
        assert!(raw.alt_bech32m.is_empty());
        assert!(raw.alt_base_denom.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn snapshots() {
        insta::assert_json_snapshot!("upenumbra_id", Id::from_base_denom("upenumbra"));
    }
}
