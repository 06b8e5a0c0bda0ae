use std::path::PathBuf;

use clap::{
    Parser,
    Subcommand,
};

use super::{
    asset_id,
    encode_value,
    metadata,
    parse_asset_id,
    parse_value,
};

/// Utilities for working with Penumbra asset IDs, denominations and values
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// A JSON file with an array of denomination metadata to add to the known assets
    #[arg(long, global = true, value_name = "PATH")]
    pub registry: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Derive the asset ID of a denomination
    #[command(arg_required_else_help = true)]
    AssetId(asset_id::Args),

    /// Encode a human readable value like `1.5penumbra` as a base64 `Value` message
    #[command(arg_required_else_help = true)]
    EncodeValue(encode_value::Args),

    /// Print the metadata of a known denomination
    #[command(arg_required_else_help = true)]
    Metadata(metadata::Args),

    /// Parse a base64 `AssetId` message from an arg, a file, or stdin
    #[command(arg_required_else_help = true)]
    ParseAssetId(parse_asset_id::Args),

    /// Parse a base64 `Value` or `ValueView` message from an arg, a file, or stdin
    #[command(arg_required_else_help = true)]
    ParseValue(parse_value::Args),
}

#[must_use]
pub fn get() -> Cli {
    Cli::parse()
}
