use assetkit_core::{
    asset::{
        Cache,
        Value,
        ValueView,
    },
    generated::asset::v1alpha1::{
        Value as RawValue,
        ValueView as RawValueView,
    },
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
    /// Base64-encoded `Value` message, or a file containing this, or stdin if `-`
    #[arg(value_name = "VALUE|PATH")]
    input: String,

    /// Parse the input as a `ValueView` message instead of a `Value`
    #[arg(long)]
    view: bool,
}

/// Parses a base64 encoded `Value` or `ValueView` message, printing it as JSON and
/// formatted for humans.
///
/// # Errors
///
/// Returns an error if `input` cannot be read, decoded, or converted.
pub fn run(
    Args {
        input,
        view,
    }: Args,
    cache: &Cache,
    output: &Output,
) -> Result<()> {
    if view {
        let raw: RawValueView = read_message(&input)?;
        println!("ValueView:");
        println!("{}", output.json(&raw)?);
        let view = ValueView::try_from_raw(raw).wrap_err("failed to convert to value view")?;
        let formatted = match view.metadata() {
            Some(_) => view.to_string(),
            None => view.value().format(cache),
        };
        println!("Value: {formatted}");
        println!("Asset ID: {}", view.asset_id());
    } else {
        let raw: RawValue = read_message(&input)?;
        println!("Value:");
        println!("{}", output.json(&raw)?);
        let value = Value::try_from_raw(raw).wrap_err("failed to convert to value")?;
        println!("Value: {}", value.format(cache));
        println!("Asset ID: {}", value.asset_id());
    }
    Ok(())
}
