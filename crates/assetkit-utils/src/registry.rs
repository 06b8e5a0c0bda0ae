//! Loading of the asset registry: the known assets plus a user supplied JSON file.

use std::{
    fs,
    path::Path,
};

use assetkit_core::{
    asset::{
        Cache,
        Metadata,
    },
    generated::asset::v1alpha1::DenomMetadata as RawMetadata,
    Protobuf as _,
};
use assetkit_eyre::eyre::{
    Result,
    WrapErr as _,
};
use tracing::{
    debug,
    warn,
};

/// Returns [`Cache::with_known_assets`] extended by the entries of the registry at `path`.
///
/// Entries that are not valid denomination metadata are logged and skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of
/// `DenomMetadata` objects.
pub fn load(path: Option<&Path>) -> Result<Cache> {
    let mut cache = Cache::with_known_assets();
    let Some(path) = path else {
        return Ok(cache);
    };
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed reading asset registry at `{}`", path.display()))?;
    let entries: Vec<RawMetadata> = serde_json::from_str(&contents).wrap_err_with(|| {
        format!(
            "failed parsing asset registry at `{}` as a JSON array of denomination metadata",
            path.display()
        )
    })?;
    let total = entries.len();
    cache.extend(
        entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, raw)| match Metadata::try_from_raw(raw) {
                Ok(metadata) => Some(metadata),
                Err(error) => {
                    warn!(
                        index,
                        error = &error as &dyn std::error::Error,
                        "skipping invalid asset registry entry",
                    );
                    None
                }
            }),
    );
    debug!(
        path = %path.display(),
        entries = total,
        known_assets = cache.len(),
        "loaded asset registry",
    );
    Ok(cache)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use assetkit_core::asset::Id;

    use super::load;

    #[test]
    fn without_path_only_known_assets_are_loaded() {
        assert_eq!(1, load(None).unwrap().len());
    }

    #[test]
    fn valid_entries_are_added_and_invalid_ones_skipped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{
                    "base": "transfer/channel-0/uatom",
                    "display": "atom",
                    "denomUnits": [
                        {{"denom": "transfer/channel-0/uatom"}},
                        {{"denom": "atom", "exponent": 6}}
                    ]
                }},
                {{"base": "uosmo", "display": "osmo"}}
            ]"#
        )
        .unwrap();
        let cache = load(Some(file.path())).unwrap();
        assert_eq!(2, cache.len());
        assert!(cache
            .get(&Id::from_base_denom("transfer/channel-0/uatom"))
            .is_some());
        assert!(cache.get(&Id::from_base_denom("uosmo")).is_none());
    }

    #[test]
    fn malformed_registry_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"base": "uatom"}}"#).unwrap();
        load(Some(file.path())).expect_err("a registry must be a JSON array");
    }
}
