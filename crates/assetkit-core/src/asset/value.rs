use std::fmt;

use super::{
    raw,
    Cache,
    Id,
    IdError,
    Metadata,
    MetadataError,
};
use crate::{
    num::Amount,
    Protobuf,
};

/// An amount of a specific asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "raw::Value", into = "raw::Value")
)]
pub struct Value {
    amount: Amount,
    asset_id: Id,
}

impl Value {
    #[must_use]
    pub const fn new(amount: Amount, asset_id: Id) -> Self {
        Self {
            amount,
            asset_id,
        }
    }

    #[must_use]
    pub const fn amount(&self) -> Amount {
        self.amount
    }

    #[must_use]
    pub const fn asset_id(&self) -> Id {
        self.asset_id
    }

    /// Attaches the metadata of the asset from `cache`, if it is known.
    #[must_use]
    pub fn view_with_cache(&self, cache: &Cache) -> ValueView {
        match cache.get(&self.asset_id) {
            Some(metadata) => ValueView::KnownDenom {
                amount: self.amount,
                metadata: metadata.clone(),
            },
            None => ValueView::UnknownDenom {
                amount: self.amount,
                asset_id: self.asset_id,
            },
        }
    }

    /// Formats the value for humans.
    ///
    /// Known assets are written in their display unit, like `1.5penumbra`. Unknown
    /// assets are written as the raw amount followed by the asset ID.
    #[must_use]
    pub fn format(&self, cache: &Cache) -> String {
        self.view_with_cache(cache).to_string()
    }
}

impl Protobuf for Value {
    type Error = ValueError;
    type Raw = raw::Value;

    fn try_from_raw_ref(raw: &Self::Raw) -> Result<Self, Self::Error> {
        let raw::Value {
            amount,
            asset_id,
        } = raw;
        let amount = amount
            .map(Amount::from_raw)
            .ok_or_else(|| ValueError::field_not_set("amount"))?;
        let asset_id = asset_id
            .as_ref()
            .ok_or_else(|| ValueError::field_not_set("asset_id"))
            .and_then(|id| Id::try_from_raw_ref(id).map_err(ValueError::asset_id))?;
        Ok(Self {
            amount,
            asset_id,
        })
    }

    fn to_raw(&self) -> Self::Raw {
        raw::Value {
            amount: Some(self.amount.into_raw()),
            asset_id: Some(self.asset_id.into_raw()),
        }
    }
}

impl TryFrom<raw::Value> for Value {
    type Error = <Self as Protobuf>::Error;

    fn try_from(value: raw::Value) -> Result<Self, Self::Error> {
        Self::try_from_raw(value)
    }
}

impl From<Value> for raw::Value {
    fn from(value: Value) -> Self {
        value.into_raw()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("failed ensuring invariants of {}", Value::full_name())]
pub struct ValueError(#[source] ValueErrorKind);

impl ValueError {
    fn asset_id(source: IdError) -> Self {
        Self(ValueErrorKind::AssetId {
            source,
        })
    }

    fn field_not_set(name: &'static str) -> Self {
        Self(ValueErrorKind::FieldNotSet {
            name,
        })
    }
}

#[derive(Debug, thiserror::Error)]
enum ValueErrorKind {
    #[error("`asset_id` field was invalid")]
    AssetId { source: IdError },
    #[error("field `{name}` was not set")]
    FieldNotSet { name: &'static str },
}

/// A [`Value`] together with what is known about its asset.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "raw::ValueView", into = "raw::ValueView")
)]
pub enum ValueView {
    KnownDenom { amount: Amount, metadata: Metadata },
    UnknownDenom { amount: Amount, asset_id: Id },
}

impl ValueView {
    /// Returns the underlying value.
    ///
    /// The asset ID of a known denomination is always derived from its metadata.
    #[must_use]
    pub fn value(&self) -> Value {
        Value::new(self.amount(), self.asset_id())
    }

    #[must_use]
    pub fn amount(&self) -> Amount {
        match self {
            Self::KnownDenom {
                amount,
                ..
            }
            | Self::UnknownDenom {
                amount,
                ..
            } => *amount,
        }
    }

    #[must_use]
    pub fn asset_id(&self) -> Id {
        match self {
            Self::KnownDenom {
                metadata,
                ..
            } => metadata.id(),
            Self::UnknownDenom {
                asset_id,
                ..
            } => *asset_id,
        }
    }

    #[must_use]
    pub fn metadata(&self) -> Option<&Metadata> {
        match self {
            Self::KnownDenom {
                metadata,
                ..
            } => Some(metadata),
            Self::UnknownDenom { .. } => None,
        }
    }
}

impl fmt::Display for ValueView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KnownDenom {
                amount,
                metadata,
            } => {
                let unit = metadata.display_unit();
                write!(f, "{}{}", unit.format_value(*amount), unit.denom())
            }
            Self::UnknownDenom {
                amount,
                asset_id,
            } => write!(f, "{amount}{asset_id}"),
        }
    }
}

impl Protobuf for ValueView {
    type Error = ValueViewError;
    type Raw = raw::ValueView;

    fn try_from_raw_ref(raw: &Self::Raw) -> Result<Self, Self::Error> {
        use raw::value_view::{
            KnownDenom,
            UnknownDenom,
            ValueView as RawValueView,
        };
        match &raw.value_view {
            None => Err(ValueViewError::field_not_set("value_view")),
            Some(RawValueView::KnownDenom(KnownDenom {
                amount,
                denom,
            })) => {
                let amount = amount
                    .map(Amount::from_raw)
                    .ok_or_else(|| ValueViewError::field_not_set("known_denom.amount"))?;
                let metadata = denom
                    .as_ref()
                    .ok_or_else(|| ValueViewError::field_not_set("known_denom.denom"))
                    .and_then(|denom| {
                        Metadata::try_from_raw_ref(denom).map_err(ValueViewError::metadata)
                    })?;
                Ok(Self::KnownDenom {
                    amount,
                    metadata,
                })
            }
            Some(RawValueView::UnknownDenom(UnknownDenom {
                amount,
                asset_id,
            })) => {
                let amount = amount
                    .map(Amount::from_raw)
                    .ok_or_else(|| ValueViewError::field_not_set("unknown_denom.amount"))?;
                let asset_id = asset_id
                    .as_ref()
                    .ok_or_else(|| ValueViewError::field_not_set("unknown_denom.asset_id"))
                    .and_then(|id| Id::try_from_raw_ref(id).map_err(ValueViewError::asset_id))?;
                Ok(Self::UnknownDenom {
                    amount,
                    asset_id,
                })
            }
        }
    }

    fn to_raw(&self) -> Self::Raw {
        use raw::value_view::{
            KnownDenom,
            UnknownDenom,
            ValueView as RawValueView,
        };
        let value_view = match self {
            Self::KnownDenom {
                amount,
                metadata,
            } => RawValueView::KnownDenom(KnownDenom {
                amount: Some(amount.into_raw()),
                denom: Some(metadata.to_raw()),
            }),
            Self::UnknownDenom {
                amount,
                asset_id,
            } => RawValueView::UnknownDenom(UnknownDenom {
                amount: Some(amount.into_raw()),
                asset_id: Some(asset_id.into_raw()),
            }),
        };
        raw::ValueView {
            value_view: Some(value_view),
        }
    }
}

impl TryFrom<raw::ValueView> for ValueView {
    type Error = <Self as Protobuf>::Error;

    fn try_from(value: raw::ValueView) -> Result<Self, Self::Error> {
        Self::try_from_raw(value)
    }
}

impl From<ValueView> for raw::ValueView {
    fn from(value: ValueView) -> Self {
        value.into_raw()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("failed ensuring invariants of {}", ValueView::full_name())]
pub struct ValueViewError(#[source] ValueViewErrorKind);

impl ValueViewError {
    fn asset_id(source: IdError) -> Self {
        Self(ValueViewErrorKind::AssetId {
            source,
        })
    }

    fn field_not_set(name: &'static str) -> Self {
        Self(ValueViewErrorKind::FieldNotSet {
            name,
        })
    }

    fn metadata(source: MetadataError) -> Self {
        Self(ValueViewErrorKind::Metadata {
            source,
        })
    }
}

#[derive(Debug, thiserror::Error)]
enum ValueViewErrorKind {
    #[error("`unknown_denom.asset_id` field was invalid")]
    AssetId { source: IdError },
    #[error("field `{name}` was not set")]
    FieldNotSet { name: &'static str },
    #[error("`known_denom.denom` field was invalid")]
    Metadata { source: MetadataError },
}

#[cfg(test)]
mod tests {
    use super::{
        raw,
        Value,
        ValueErrorKind,
        ValueView,
        ValueViewErrorKind,
    };
    use crate::{
        asset::{
            Cache,
            Id,
        },
        generated::num::v1alpha1 as raw_num,
        num::Amount,
        Protobuf as _,
    };

    fn penumbra_id() -> Id {
        Id::from_base_denom("upenumbra")
    }

    fn unknown_id() -> Id {
        Id::new([42; 32])
    }

    #[test]
    fn missing_value_fields_are_rejected() {
        let error = Value::try_from_raw(raw::Value {
            amount: None,
            asset_id: Some(penumbra_id().into_raw()),
        })
        .expect_err("a value without amount must be rejected");
        assert!(matches!(
            error.0,
            ValueErrorKind::FieldNotSet { name: "amount" }
        ));

        let error = Value::try_from_raw(raw::Value {
            amount: Some(raw_num::Amount::default()),
            asset_id: None,
        })
        .expect_err("a value without asset id must be rejected");
        assert!(matches!(
            error.0,
            ValueErrorKind::FieldNotSet { name: "asset_id" }
        ));

        let error = Value::try_from_raw(raw::Value {
            amount: Some(raw_num::Amount::default()),
            asset_id: Some(raw::AssetId::default()),
        })
        .expect_err("a value with an empty asset id must be rejected");
        assert!(matches!(error.0, ValueErrorKind::AssetId { .. }));
    }

    #[test]
    fn value_converts_to_and_from_raw() {
        let value = Value::new(Amount::new((1 << 64) + 5), penumbra_id());
        let raw = value.to_raw();
        assert_eq!(
            Some(raw_num::Amount {
                lo: 5,
                hi: 1,
            }),
            raw.amount,
        );
        assert_eq!(value, Value::try_from_raw(raw).unwrap());
    }

    #[test]
    fn view_with_cache_distinguishes_known_assets() {
        let cache = Cache::with_known_assets();

        let known = Value::new(Amount::new(1_500_000), penumbra_id()).view_with_cache(&cache);
        assert_eq!(
            Some(penumbra_id()),
            known.metadata().map(crate::asset::Metadata::id)
        );
        assert_eq!(penumbra_id(), known.asset_id());

        let unknown = Value::new(Amount::new(7), unknown_id()).view_with_cache(&cache);
        assert_eq!(
            ValueView::UnknownDenom {
                amount: Amount::new(7),
                asset_id: unknown_id(),
            },
            unknown,
        );
        assert!(unknown.metadata().is_none());
    }

    #[test]
    fn format_uses_display_unit_or_asset_id() {
        let cache = Cache::with_known_assets();
        assert_eq!(
            "1.5penumbra",
            Value::new(Amount::new(1_500_000), penumbra_id()).format(&cache),
        );
        assert_eq!(
            "7passet19g4z52329g4z52329g4z52329g4z52329g4z52329g4z52329g4q89q4m4",
            Value::new(Amount::new(7), unknown_id()).format(&cache),
        );
        let view = Value::new(Amount::new(2_000_000), penumbra_id()).view_with_cache(&cache);
        assert_eq!("2penumbra", view.to_string());
    }

    #[test]
    fn value_of_known_denom_derives_asset_id_from_metadata() {
        let cache = Cache::with_known_assets();
        let view = Value::new(Amount::new(10), penumbra_id()).view_with_cache(&cache);
        let mut raw = view.to_raw();
        let Some(raw::value_view::ValueView::KnownDenom(known)) = raw.value_view.as_mut() else {
            panic!("a value view of a cached asset must be a known denom");
        };
        known
            .denom
            .as_mut()
            .expect("known denom must carry metadata")
            .penumbra_asset_id = None;
        let view = ValueView::try_from_raw(raw).unwrap();
        assert_eq!(Value::new(Amount::new(10), penumbra_id()), view.value());
    }

    #[test]
    fn raw_value_view_without_variant_is_rejected() {
        let error = ValueView::try_from_raw(raw::ValueView {
            value_view: None,
        })
        .expect_err("a value view without a variant must be rejected");
        assert!(matches!(
            error.0,
            ValueViewErrorKind::FieldNotSet { name: "value_view" }
        ));
    }

    #[test]
    fn raw_value_view_with_missing_fields_is_rejected() {
        use raw::value_view::{
            KnownDenom,
            UnknownDenom,
            ValueView as RawValueView,
        };
        #[track_caller]
        fn assert_field_not_set(value_view: RawValueView, field: &'static str) {
            let error = ValueView::try_from_raw(raw::ValueView {
                value_view: Some(value_view),
            })
            .expect_err("a value view with missing fields must be rejected");
            assert!(matches!(
                error.0,
                ValueViewErrorKind::FieldNotSet { name } if name == field
            ));
        }
        assert_field_not_set(
            RawValueView::KnownDenom(KnownDenom {
                amount: None,
                denom: None,
            }),
            "known_denom.amount",
        );
        assert_field_not_set(
            RawValueView::KnownDenom(KnownDenom {
                amount: Some(raw_num::Amount::default()),
                denom: None,
            }),
            "known_denom.denom",
        );
        assert_field_not_set(
            RawValueView::UnknownDenom(UnknownDenom {
                amount: None,
                asset_id: None,
            }),
            "unknown_denom.amount",
        );
        assert_field_not_set(
            RawValueView::UnknownDenom(UnknownDenom {
                amount: Some(raw_num::Amount::default()),
                asset_id: None,
            }),
            "unknown_denom.asset_id",
        );
    }

    #[test]
    fn errors_name_the_message_and_keep_the_cause_chain() {
        #[track_caller]
        fn assert_chain(error: &dyn std::error::Error, expected: &[&str]) {
            let chain: Vec<String> = std::iter::successors(Some(error), |error| error.source())
                .map(ToString::to_string)
                .collect();
            assert_eq!(expected, chain);
        }

        let error = ValueView::try_from_raw(raw::ValueView {
            value_view: Some(raw::value_view::ValueView::KnownDenom(
                raw::value_view::KnownDenom {
                    amount: Some(raw_num::Amount::default()),
                    denom: Some(raw::DenomMetadata::default()),
                },
            )),
        })
        .expect_err("metadata with an empty base must be rejected");
        assert_chain(
            &error,
            &[
                "failed ensuring invariants of penumbra.core.asset.v1alpha1.ValueView",
                "`known_denom.denom` field was invalid",
                "failed ensuring invariants of penumbra.core.asset.v1alpha1.DenomMetadata",
                "`base` field was not a valid denomination",
                "the input itself or its base denom segment is empty",
            ],
        );

        let error = Value::try_from_raw(raw::Value::default())
            .expect_err("a value without fields must be rejected");
        assert_chain(
            &error,
            &[
                "failed ensuring invariants of penumbra.core.asset.v1alpha1.Value",
                "field `amount` was not set",
            ],
        );
    }

    #[test]
    fn value_view_converts_to_and_from_raw() {
        let cache = Cache::with_known_assets();
        for view in [
            Value::new(Amount::new(3), penumbra_id()).view_with_cache(&cache),
            Value::new(Amount::new(3), unknown_id()).view_with_cache(&cache),
        ] {
            assert_eq!(view, ValueView::try_from_raw(view.to_raw()).unwrap());
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn snapshots() {
        let cache = Cache::with_known_assets();
        insta::assert_json_snapshot!(
            "penumbra_value",
            Value::new(Amount::new(1_500_000), penumbra_id())
        );
        insta::assert_json_snapshot!(
            "unknown_value_view",
            Value::new(Amount::new(7), unknown_id()).view_with_cache(&cache)
        );
    }
}
