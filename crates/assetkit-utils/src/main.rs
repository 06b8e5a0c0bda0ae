use assetkit_eyre::eyre::{
    Result,
    WrapErr as _,
};
use assetkit_utils::{
    asset_id,
    cli::{
        self,
        Command,
    },
    config::Config,
    encode_value,
    metadata,
    parse_asset_id,
    parse_value,
    registry,
    telemetry,
    Output,
};

fn main() -> Result<()> {
    assetkit_eyre::install()
        .expect("the assetkit eyre install hook must be called before eyre reports are constructed");
    let cli = cli::get();
    let config: Config =
        assetkit_config::get().wrap_err("failed reading config from environment")?;
    telemetry::init(std::io::stderr, &config.log).wrap_err("failed initializing logging")?;

    let registry_path = cli.registry.or(config.asset_registry);
    let cache = registry::load(registry_path.as_deref())?;
    let output = Output::new(config.pretty_json);

    match cli.command {
        Command::AssetId(args) => asset_id::run(args),
        Command::EncodeValue(args) => encode_value::run(args, &cache),
        Command::Metadata(args) => metadata::run(args, &cache, &output),
        Command::ParseAssetId(args) => parse_asset_id::run(args, &cache, &output),
        Command::ParseValue(args) => parse_value::run(args, &cache, &output),
    }
}
