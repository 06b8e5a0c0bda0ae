use assetkit_core::asset::{
    Cache,
    Id,
};
use assetkit_eyre::eyre::{
    eyre,
    Result,
};

use crate::Output;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// The base denomination of a known asset, or the name of one of its units
    #[arg(value_name = "DENOM")]
    denom: String,
}

/// Prints the metadata of a known asset as a JSON `DenomMetadata` object.
///
/// # Errors
///
/// Returns an error if `denom` is neither the base denomination nor a unit of a
/// known asset.
pub fn run(
    Args {
        denom,
    }: Args,
    cache: &Cache,
    output: &Output,
) -> Result<()> {
    let metadata = cache
        .get(&Id::from_base_denom(&denom))
        .or_else(|| cache.get_by_unit(&denom))
        .ok_or_else(|| eyre!("`{denom}` is not a known denomination or unit"))?;
    println!("{}", output.json(metadata)?);
    Ok(())
}
