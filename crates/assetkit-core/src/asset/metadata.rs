use std::collections::HashSet;

use super::{
    raw,
    Denom,
    Id,
    IdError,
    ParseDenomError,
};
use crate::{
    num::Amount,
    Protobuf,
};

/// The largest exponent a unit may have.
///
/// `10^38` is the largest power of ten that fits into a `u128`.
pub const MAX_EXPONENT: u8 = 38;

/// A named power-of-ten multiple of an asset's base denomination.
///
/// One unit of `denom` equals `10^exponent` of the base denomination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unit {
    denom: Denom,
    exponent: u8,
    aliases: Vec<String>,
}

impl Unit {
    /// Constructs a new unit.
    ///
    /// # Errors
    /// Returns an error if `exponent` exceeds [`MAX_EXPONENT`].
    pub fn new(denom: Denom, exponent: u32) -> Result<Self, UnitError> {
        let exponent = u8::try_from(exponent)
            .ok()
            .filter(|exponent| *exponent <= MAX_EXPONENT)
            .ok_or_else(|| UnitError::exponent_too_large(exponent))?;
        Ok(Self {
            denom,
            exponent,
            aliases: Vec::new(),
        })
    }

    fn base(denom: Denom) -> Self {
        Self {
            denom,
            exponent: 0,
            aliases: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn denom(&self) -> &Denom {
        &self.denom
    }

    #[must_use]
    pub fn exponent(&self) -> u8 {
        self.exponent
    }

    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Returns if `name` is the denomination of this unit or one of its aliases.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.has_denom(name) || self.aliases.iter().any(|alias| alias == name)
    }

    fn has_denom(&self, name: &str) -> bool {
        self.denom.display_len() == name.len() && self.denom.to_string() == name
    }

    fn names(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(self.denom.to_string()).chain(self.aliases.iter().cloned())
    }

    fn power(&self) -> u128 {
        10u128.pow(u32::from(self.exponent))
    }

    /// Formats `amount`, given in the base denomination, as a decimal number of this unit.
    ///
    /// Trailing zeros of the fractional part are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetkit_core::{
    ///     asset::Unit,
    ///     num::Amount,
    /// };
    /// let unit = Unit::new("penumbra".parse().unwrap(), 6).unwrap();
    /// assert_eq!("1.5", unit.format_value(Amount::new(1_500_000)));
    /// assert_eq!("2", unit.format_value(Amount::new(2_000_000)));
    /// assert_eq!("0.000001", unit.format_value(Amount::new(1)));
    /// ```
    #[must_use]
    pub fn format_value(&self, amount: Amount) -> String {
        let power = self.power();
        let whole = amount.value() / power;
        let fractional = amount.value() % power;
        if fractional == 0 {
            return whole.to_string();
        }
        let fractional = format!(
            "{fractional:0width$}",
            width = usize::from(self.exponent)
        );
        format!("{whole}.{}", fractional.trim_end_matches('0'))
    }

    /// Parses a decimal number of this unit into an amount of the base denomination.
    ///
    /// # Errors
    /// Returns an error if `input` is not a plain decimal number, if it has more
    /// fractional digits than the unit's exponent, or if the result does not fit
    /// into an [`Amount`].
    pub fn parse_value(&self, input: &str) -> Result<Amount, ParseUnitAmountError> {
        let (whole, fractional) = match input.split_once('.') {
            Some((whole, fractional)) => (whole, Some(fractional)),
            None => (input, None),
        };
        if !is_digits(whole) || fractional.is_some_and(|fractional| !is_digits(fractional)) {
            return Err(ParseUnitAmountError::invalid_number(input));
        }
        let fractional = fractional.unwrap_or_default();
        if fractional.len() > usize::from(self.exponent) {
            return Err(ParseUnitAmountError::too_many_fractional_digits(
                self.exponent,
                fractional.len(),
            ));
        }

        let whole = whole
            .parse::<u128>()
            .map_err(|_| ParseUnitAmountError::overflow(input))?;
        let fractional = if self.exponent == 0 {
            0
        } else {
            // right-padded to at most 38 digits, so always fits
            format!("{fractional:0<width$}", width = usize::from(self.exponent))
                .parse::<u128>()
                .map_err(|_| ParseUnitAmountError::overflow(input))?
        };
        whole
            .checked_mul(self.power())
            .and_then(|whole| whole.checked_add(fractional))
            .map(Amount::new)
            .ok_or_else(|| ParseUnitAmountError::overflow(input))
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl Protobuf for Unit {
    type Error = UnitError;
    type Raw = raw::DenomUnit;

    fn try_from_raw_ref(raw: &Self::Raw) -> Result<Self, Self::Error> {
        let raw::DenomUnit {
            denom,
            exponent,
            aliases,
        } = raw;
        let denom = denom.parse().map_err(UnitError::denom)?;
        Ok(Self::new(denom, *exponent)?.with_aliases(aliases.iter().cloned()))
    }

    fn to_raw(&self) -> Self::Raw {
        raw::DenomUnit {
            denom: self.denom.to_string(),
            exponent: u32::from(self.exponent),
            aliases: self.aliases.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct UnitError(UnitErrorKind);

impl UnitError {
    fn denom(source: ParseDenomError) -> Self {
        Self(UnitErrorKind::Denom {
            source,
        })
    }

    fn exponent_too_large(exponent: u32) -> Self {
        Self(UnitErrorKind::ExponentTooLarge {
            exponent,
        })
    }
}

#[derive(Debug, thiserror::Error)]
enum UnitErrorKind {
    #[error("`denom` field was not a valid denomination")]
    Denom { source: ParseDenomError },
    #[error("exponent `{exponent}` exceeds the maximum of {MAX_EXPONENT}")]
    ExponentTooLarge { exponent: u32 },
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ParseUnitAmountError(ParseUnitAmountErrorKind);

impl ParseUnitAmountError {
    fn invalid_number(input: &str) -> Self {
        Self(ParseUnitAmountErrorKind::InvalidNumber {
            input: input.to_string(),
        })
    }

    fn overflow(input: &str) -> Self {
        Self(ParseUnitAmountErrorKind::Overflow {
            input: input.to_string(),
        })
    }

    fn too_many_fractional_digits(exponent: u8, actual: usize) -> Self {
        Self(ParseUnitAmountErrorKind::TooManyFractionalDigits {
            exponent,
            actual,
        })
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum ParseUnitAmountErrorKind {
    #[error("`{input}` is not a decimal number of the form `<digits>[.<digits>]`")]
    InvalidNumber { input: String },
    #[error("`{input}` does not fit into a 128 bit amount")]
    Overflow { input: String },
    #[error("unit allows at most {exponent} fractional digits, but got {actual}")]
    TooManyFractionalDigits { exponent: u8, actual: usize },
}

/// Metadata describing a denomination and the units it can be displayed in.
///
/// A `Metadata` always contains a unit for its base denomination with exponent 0,
/// and its display unit is always one of its units.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "raw::DenomMetadata", into = "raw::DenomMetadata")
)]
pub struct Metadata {
    id: Id,
    description: String,
    units: Vec<Unit>,
    base_index: usize,
    display_index: usize,
    name: String,
    symbol: String,
    uri: String,
    uri_hash: String,
}

impl Metadata {
    /// Starts building metadata for the `base` denomination.
    ///
    /// The unit of `base` with exponent 0 is added automatically.
    #[must_use]
    pub fn builder(base: Denom) -> MetadataBuilder {
        MetadataBuilder::new(base)
    }

    /// Returns the asset ID, derived from the base denomination.
    #[must_use]
    pub fn id(&self) -> Id {
        self.id
    }

    #[must_use]
    pub fn base_denom(&self) -> &Denom {
        &self.base_unit().denom
    }

    #[must_use]
    pub fn base_unit(&self) -> &Unit {
        &self.units[self.base_index]
    }

    /// Returns the unit amounts of this asset should be displayed in.
    #[must_use]
    pub fn display_unit(&self) -> &Unit {
        &self.units[self.display_index]
    }

    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Returns the unit whose denomination or alias is `name`.
    #[must_use]
    pub fn unit(&self, name: &str) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.matches(name))
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    #[must_use]
    pub fn uri_hash(&self) -> &str {
        &self.uri_hash
    }
}

impl Protobuf for Metadata {
    type Error = MetadataError;
    type Raw = raw::DenomMetadata;

    fn try_from_raw_ref(raw: &Self::Raw) -> Result<Self, Self::Error> {
        let raw::DenomMetadata {
            description,
            denom_units,
            base,
            display,
            name,
            symbol,
            uri,
            uri_hash,
            penumbra_asset_id,
        } = raw;

        let base = base.parse::<Denom>().map_err(MetadataError::base)?;
        let id = base.id();
        if let Some(provided) = penumbra_asset_id {
            let provided = Id::try_from_raw_ref(provided).map_err(MetadataError::asset_id)?;
            if provided != id {
                return Err(MetadataError::asset_id_mismatch(id, provided));
            }
        }

        let mut units = denom_units
            .iter()
            .enumerate()
            .map(|(index, unit)| {
                Unit::try_from_raw_ref(unit).map_err(|source| MetadataError::unit(index, source))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if units.is_empty() {
            units.push(Unit::base(base.clone()));
        }

        let mut seen = HashSet::new();
        for name in units.iter().flat_map(Unit::names) {
            if !seen.insert(name.clone()) {
                return Err(MetadataError::duplicate_unit(name));
            }
        }

        let base_index = units
            .iter()
            .position(|unit| unit.denom == base && unit.exponent == 0)
            .ok_or_else(|| MetadataError::missing_base_unit(&base))?;
        let display_index = if display.is_empty() {
            base_index
        } else {
            units
                .iter()
                .position(|unit| unit.has_denom(display))
                .ok_or_else(|| MetadataError::unknown_display_unit(display))?
        };

        Ok(Self {
            id,
            description: description.clone(),
            units,
            base_index,
            display_index,
            name: name.clone(),
            symbol: symbol.clone(),
            uri: uri.clone(),
            uri_hash: uri_hash.clone(),
        })
    }

    fn to_raw(&self) -> Self::Raw {
        raw::DenomMetadata {
            description: self.description.clone(),
            denom_units: self.units.iter().map(Unit::to_raw).collect(),
            base: self.base_denom().to_string(),
            display: self.display_unit().denom.to_string(),
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            uri: self.uri.clone(),
            uri_hash: self.uri_hash.clone(),
            penumbra_asset_id: Some(self.id.to_raw()),
        }
    }
}

impl TryFrom<raw::DenomMetadata> for Metadata {
    type Error = <Self as Protobuf>::Error;

    fn try_from(value: raw::DenomMetadata) -> Result<Self, Self::Error> {
        Self::try_from_raw(value)
    }
}

impl From<Metadata> for raw::DenomMetadata {
    fn from(value: Metadata) -> Self {
        value.into_raw()
    }
}

/// Builds [`Metadata`] by filling in its raw protobuf form and validating it.
#[derive(Clone, Debug)]
pub struct MetadataBuilder {
    inner: raw::DenomMetadata,
}

impl MetadataBuilder {
    fn new(base: Denom) -> Self {
        let base = base.to_string();
        Self {
            inner: raw::DenomMetadata {
                denom_units: vec![raw::DenomUnit {
                    denom: base.clone(),
                    exponent: 0,
                    aliases: Vec::new(),
                }],
                base,
                ..raw::DenomMetadata::default()
            },
        }
    }

    #[must_use]
    pub fn unit<T: Into<String>>(self, denom: T, exponent: u32) -> Self {
        self.unit_with_aliases(denom, exponent, std::iter::empty::<String>())
    }

    #[must_use]
    pub fn unit_with_aliases<T, I, S>(mut self, denom: T, exponent: u32, aliases: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.denom_units.push(raw::DenomUnit {
            denom: denom.into(),
            exponent,
            aliases: aliases.into_iter().map(Into::into).collect(),
        });
        self
    }

    #[must_use]
    pub fn display<T: Into<String>>(mut self, display: T) -> Self {
        self.inner.display = display.into();
        self
    }

    #[must_use]
    pub fn description<T: Into<String>>(mut self, description: T) -> Self {
        self.inner.description = description.into();
        self
    }

    #[must_use]
    pub fn name<T: Into<String>>(mut self, name: T) -> Self {
        self.inner.name = name.into();
        self
    }

    #[must_use]
    pub fn symbol<T: Into<String>>(mut self, symbol: T) -> Self {
        self.inner.symbol = symbol.into();
        self
    }

    #[must_use]
    pub fn uri<T: Into<String>>(mut self, uri: T) -> Self {
        self.inner.uri = uri.into();
        self
    }

    #[must_use]
    pub fn uri_hash<T: Into<String>>(mut self, uri_hash: T) -> Self {
        self.inner.uri_hash = uri_hash.into();
        self
    }

    /// Validates the collected fields and returns the [`Metadata`].
    ///
    /// # Errors
    /// Returns the same errors as converting a raw `DenomMetadata`.
    pub fn try_build(self) -> Result<Metadata, MetadataError> {
        Metadata::try_from_raw(self.inner)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("failed ensuring invariants of {}", Metadata::full_name())]
pub struct MetadataError(#[source] MetadataErrorKind);

impl MetadataError {
    fn asset_id(source: IdError) -> Self {
        Self(MetadataErrorKind::AssetId {
            source,
        })
    }

    fn asset_id_mismatch(expected: Id, actual: Id) -> Self {
        Self(MetadataErrorKind::AssetIdMismatch {
            expected,
            actual,
        })
    }

    fn base(source: ParseDenomError) -> Self {
        Self(MetadataErrorKind::Base {
            source,
        })
    }

    fn duplicate_unit(name: String) -> Self {
        Self(MetadataErrorKind::DuplicateUnit {
            name,
        })
    }

    fn missing_base_unit(base: &Denom) -> Self {
        Self(MetadataErrorKind::MissingBaseUnit {
            base: base.to_string(),
        })
    }

    fn unit(index: usize, source: UnitError) -> Self {
        Self(MetadataErrorKind::Unit {
            index,
            source,
        })
    }

    fn unknown_display_unit(display: &str) -> Self {
        Self(MetadataErrorKind::UnknownDisplayUnit {
            display: display.to_string(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
enum MetadataErrorKind {
    #[error("`penumbra_asset_id` field was invalid")]
    AssetId { source: IdError },
    #[error(
        "`penumbra_asset_id` field was `{actual}`, but the id derived from `base` is `{expected}`"
    )]
    AssetIdMismatch { expected: Id, actual: Id },
    #[error("`base` field was not a valid denomination")]
    Base { source: ParseDenomError },
    #[error("`{name}` is used by more than one unit or alias")]
    DuplicateUnit { name: String },
    #[error("`denom_units` field has no unit for base denomination `{base}` with exponent 0")]
    MissingBaseUnit { base: String },
    #[error("entry at index `{index}` of `denom_units` field was invalid")]
    Unit { index: usize, source: UnitError },
    #[error("`display` field `{display}` does not name any unit in `denom_units`")]
    UnknownDisplayUnit { display: String },
}
