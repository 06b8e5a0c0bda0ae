use assetkit_core::{
    asset::Denom,
    Protobuf as _,
};
use assetkit_eyre::eyre::{
    Result,
    WrapErr as _,
};

use crate::input::encode_base64;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// The full denomination, including its trace, e.g. `transfer/channel-0/uatom`
    #[arg(value_name = "DENOM")]
    denom: String,
}

/// Prints the bech32m asset ID of a denomination and its base64 encoded `AssetId` message.
///
/// # Errors
///
/// Returns an error if `denom` is not a valid denomination.
pub fn run(
    Args {
        denom,
    }: Args,
) -> Result<()> {
    let denom: Denom = denom
        .parse()
        .wrap_err_with(|| format!("`{denom}` is not a valid denomination"))?;
    let id = denom.id();
    println!("Denom: {denom}");
    println!("Asset ID: {id}");
    println!("Encoded AssetId: {}", encode_base64(&id.to_raw()));
    Ok(())
}
