use assetkit_core::{
    asset::{
        Cache,
        Id,
    },
    generated::asset::v1alpha1::AssetId as RawId,
    Protobuf as _,
};
use assetkit_eyre::eyre::{
    Result,
    WrapErr as _,
};

use crate::{
    input::read_message,
    Output,
};

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Base64-encoded `AssetId` message, or a file containing this, or stdin if `-`
    #[arg(value_name = "ID|PATH")]
    input: String,
}

/// Parses a base64 encoded `AssetId` message and prints it as JSON and as bech32m.
///
/// If the ID belongs to a known asset its base denomination is printed as well.
///
/// # Errors
///
/// Returns an error if `input` cannot be read, decoded, or is not a valid asset ID.
pub fn run(
    Args {
        input,
    }: Args,
    cache: &Cache,
    output: &Output,
) -> Result<()> {
    let raw: RawId = read_message(&input)?;
    println!("AssetId:");
    println!("{}", output.json(&raw)?);
    let id = Id::try_from_raw(raw).wrap_err("failed to convert to asset ID")?;
    println!("Asset ID: {id}");
    if let Some(metadata) = cache.get(&id) {
        println!("Denom: {}", metadata.base_denom());
    }
    Ok(())
}
