pub mod asset_id;
pub mod cli;
pub mod config;
pub mod encode_value;
mod input;
pub mod metadata;
mod output;
pub mod parse_asset_id;
pub mod parse_value;
pub mod registry;
pub mod telemetry;

pub use output::Output;
