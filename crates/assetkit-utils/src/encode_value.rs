use assetkit_core::{
    asset::Cache,
    Protobuf as _,
};
use assetkit_eyre::eyre::{
    Result,
    WrapErr as _,
};

use crate::input::encode_base64;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// A decimal amount followed by a known unit, e.g. `1.5penumbra`
    #[arg(value_name = "AMOUNT_WITH_UNIT")]
    value: String,
}

/// Parses a human readable value and prints its base64 encoded `Value` message.
///
/// # Errors
///
/// Returns an error if `value` does not end in a unit known to `cache`, or if its
/// amount is not valid for that unit.
pub fn run(
    Args {
        value,
    }: Args,
    cache: &Cache,
) -> Result<()> {
    let parsed = cache
        .parse_value(&value)
        .wrap_err_with(|| format!("failed to parse `{value}` as a value"))?;
    println!("{}", encode_base64(&parsed.to_raw()));
    Ok(())
}
