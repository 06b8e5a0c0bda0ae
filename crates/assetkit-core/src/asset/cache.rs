use std::{
    cmp::Reverse,
    collections::{
        btree_map,
        BTreeMap,
    },
};

use tracing::debug;

use super::{
    Id,
    Metadata,
    ParseUnitAmountError,
    Unit,
    Value,
};

/// The base denomination of the staking token.
pub const STAKING_TOKEN_BASE_DENOM: &str = "upenumbra";

/// A registry of known denomination metadata, keyed by asset ID.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cache {
    inner: BTreeMap<Id, Metadata>,
}

impl Cache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a cache pre-populated with the metadata of well-known assets.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetkit_core::asset::{
    ///     Cache,
    ///     Id,
    /// };
    /// let cache = Cache::with_known_assets();
    /// let penumbra = cache.get(&Id::from_base_denom("upenumbra")).unwrap();
    /// assert_eq!("penumbra", penumbra.display_unit().denom().to_string());
    /// ```
    #[must_use]
    pub fn with_known_assets() -> Self {
        std::iter::once(staking_token()).collect()
    }

    /// Inserts `metadata` under its asset ID, returning the metadata it replaced.
    pub fn insert(&mut self, metadata: Metadata) -> Option<Metadata> {
        let replaced = self.inner.insert(metadata.id(), metadata);
        if let Some(replaced) = &replaced {
            debug!(
                asset_id = %replaced.id(),
                base_denom = %replaced.base_denom(),
                "replaced cached denomination metadata",
            );
        }
        replaced
    }

    #[must_use]
    pub fn get(&self, id: &Id) -> Option<&Metadata> {
        self.inner.get(id)
    }

    /// Returns the metadata of the asset that has a unit named `name`.
    ///
    /// Units are matched by denomination and alias. If several assets share a
    /// unit name, the one with the lowest asset ID is returned.
    #[must_use]
    pub fn get_by_unit(&self, name: &str) -> Option<&Metadata> {
        self.inner
            .values()
            .find(|metadata| metadata.unit(name).is_some())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Metadata> {
        self.inner.values()
    }

    /// Parses a human readable value like `1.5penumbra` or `10 mpenumbra`.
    ///
    /// The unit is the longest unit name (denomination or alias) known to the
    /// cache that is a suffix of `input`; among assets sharing that name the one
    /// with the lowest asset ID wins. Whitespace between the number and the unit
    /// is ignored.
    ///
    /// # Errors
    /// Returns an error if no known unit ends `input`, or if the number in front of
    /// it cannot be parsed as an amount of that unit.
    pub fn parse_value(&self, input: &str) -> Result<Value, ParseValueError> {
        let input = input.trim();
        let (metadata, unit, name_len) = self
            .units_with_names()
            .filter(|(_, _, name)| input.len() > name.len() && input.ends_with(name))
            .max_by_key(|(metadata, _, name)| (name.len(), Reverse(metadata.id())))
            .map(|(metadata, unit, name)| (metadata, unit, name.len()))
            .ok_or_else(|| ParseValueError::unknown_unit(input))?;
        let number = input[..input.len() - name_len].trim_end();
        let amount = unit
            .parse_value(number)
            .map_err(|source| ParseValueError::amount(unit, source))?;
        Ok(Value::new(amount, metadata.id()))
    }

    fn units_with_names(&self) -> impl Iterator<Item = (&Metadata, &Unit, String)> {
        self.inner.values().flat_map(|metadata| {
            metadata.units().iter().flat_map(move |unit| {
                std::iter::once(unit.denom().to_string())
                    .chain(unit.aliases().iter().cloned())
                    .map(move |name| (metadata, unit, name))
            })
        })
    }
}

fn staking_token() -> Metadata {
    Metadata::builder(
        STAKING_TOKEN_BASE_DENOM
            .parse()
            .expect("the staking token base denomination is a valid denom"),
    )
    .unit("penumbra", 6)
    .unit("mpenumbra", 3)
    .display("penumbra")
    .description("The native token of Penumbra")
    .name("Penumbra")
    .symbol("UM")
    .try_build()
    .expect("the staking token metadata is valid")
}

impl FromIterator<Metadata> for Cache {
    fn from_iter<T: IntoIterator<Item = Metadata>>(iter: T) -> Self {
        let mut cache = Self::new();
        cache.extend(iter);
        cache
    }
}

impl Extend<Metadata> for Cache {
    fn extend<T: IntoIterator<Item = Metadata>>(&mut self, iter: T) {
        for metadata in iter {
            self.insert(metadata);
        }
    }
}

impl IntoIterator for Cache {
    type IntoIter = btree_map::IntoValues<Id, Metadata>;
    type Item = Metadata;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_values()
    }
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ParseValueError(ParseValueErrorKind);

impl ParseValueError {
    fn amount(unit: &Unit, source: ParseUnitAmountError) -> Self {
        Self(ParseValueErrorKind::Amount {
            unit: unit.denom().to_string(),
            source,
        })
    }

    fn unknown_unit(input: &str) -> Self {
        Self(ParseValueErrorKind::UnknownUnit {
            input: input.to_string(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
enum ParseValueErrorKind {
    #[error("failed parsing the amount in front of unit `{unit}`")]
    Amount {
        unit: String,
        source: ParseUnitAmountError,
    },
    #[error("`{input}` does not end in a known unit, or has no amount in front of it")]
    UnknownUnit { input: String },
}

#[cfg(test)]
mod tests {
    use super::{
        Cache,
        ParseValueErrorKind,
        STAKING_TOKEN_BASE_DENOM,
    };
    use crate::{
        asset::{
            Id,
            Metadata,
            Value,
        },
        num::Amount,
    };

    fn atom() -> Metadata {
        Metadata::builder("transfer/channel-0/uatom".parse().unwrap())
            .unit_with_aliases("transfer/channel-0/atom", 6, ["atom"])
            .display("transfer/channel-0/atom")
            .name("Cosmos Hub Atom")
            .symbol("ATOM")
            .try_build()
            .unwrap()
    }

    fn penumbra_id() -> Id {
        Id::from_base_denom(STAKING_TOKEN_BASE_DENOM)
    }

    #[test]
    fn known_assets_contain_staking_token() {
        let cache = Cache::with_known_assets();
        assert_eq!(1, cache.len());
        let penumbra = cache.get(&penumbra_id()).unwrap();
        assert_eq!(STAKING_TOKEN_BASE_DENOM, penumbra.base_denom().to_string());
        assert_eq!(6, penumbra.unit("penumbra").unwrap().exponent());
        assert_eq!(3, penumbra.unit("mpenumbra").unwrap().exponent());
        assert_eq!(
            Some(penumbra),
            cache.get_by_unit("mpenumbra"),
        );
    }

    #[test]
    fn insert_returns_replaced_metadata() {
        let mut cache = Cache::new();
        assert!(cache.is_empty());
        assert_eq!(None, cache.insert(atom()));

        let renamed = Metadata::builder("transfer/channel-0/uatom".parse().unwrap())
            .name("Atom")
            .try_build()
            .unwrap();
        assert_eq!(Some(atom()), cache.insert(renamed.clone()));
        assert_eq!(1, cache.len());
        assert_eq!(Some(&renamed), cache.get(&renamed.id()));
    }

    #[test]
    fn collecting_and_extending_insert_every_entry() {
        let mut cache: Cache = std::iter::once(atom()).collect();
        cache.extend(Cache::with_known_assets());
        assert_eq!(2, cache.len());
        let mut expected = vec![atom().id(), penumbra_id()];
        expected.sort_unstable();
        assert_eq!(expected, cache.iter().map(Metadata::id).collect::<Vec<_>>());
    }

    #[test]
    fn parse_value_picks_longest_matching_unit() {
        let mut cache = Cache::with_known_assets();
        cache.insert(atom());

        assert_eq!(
            Value::new(Amount::new(1_500_000), penumbra_id()),
            cache.parse_value("1.5penumbra").unwrap(),
        );
        assert_eq!(
            Value::new(Amount::new(1_500), penumbra_id()),
            cache.parse_value("1.5mpenumbra").unwrap(),
        );
        assert_eq!(
            Value::new(Amount::new(42), penumbra_id()),
            cache.parse_value(" 42 upenumbra ").unwrap(),
        );
        assert_eq!(
            Value::new(Amount::new(2_000_000), atom().id()),
            cache.parse_value("2atom").unwrap(),
        );
        assert_eq!(
            Value::new(Amount::new(2_000_000), atom().id()),
            cache.parse_value("2transfer/channel-0/atom").unwrap(),
        );
    }

    #[test]
    fn parse_value_errors() {
        let cache = Cache::with_known_assets();
        for input in ["1.5", "penumbra", "1.5gm", ""] {
            let error = cache
                .parse_value(input)
                .expect_err("the input should not have parsed as a value");
            assert!(matches!(error.0, ParseValueErrorKind::UnknownUnit { .. }));
        }
        let error = cache
            .parse_value("1.0000001penumbra")
            .expect_err("too many fractional digits should have been rejected");
        assert!(matches!(
            error.0,
            ParseValueErrorKind::Amount { unit, .. } if unit == "penumbra"
        ));
    }
}
