use assetkit_eyre::eyre::{
    self,
    WrapErr as _,
};
use tracing_subscriber::{
    filter::{
        EnvFilter,
        LevelFilter,
    },
    fmt::MakeWriter,
};

/// Registers a global tracing subscriber writing human readable events to `sink`.
///
/// # Errors
///
/// Returns an error if `filter_directives` cannot be parsed or if a global
/// subscriber was already set.
pub fn init<S>(sink: S, filter_directives: &str) -> eyre::Result<()>
where
    S: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        init_env_filter(filter_directives).wrap_err("failed initializing log env filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(sink)
        .try_init()
        .map_err(|error| eyre::eyre!(error))
        .wrap_err("failed initializing the global tracing subscriber")
}

fn init_env_filter(dirs: &str) -> eyre::Result<EnvFilter> {
    let builder = EnvFilter::builder().with_default_directive(LevelFilter::INFO.into());
    builder
        .parse(dirs)
        .wrap_err("failed parsing configured filter directives")
}

#[cfg(test)]
mod tests {
    #[test]
    fn invalid_directives_are_rejected() {
        super::init_env_filter("assetkit_utils=loud")
            .expect_err("`loud` is not a log level");
    }

    #[test]
    fn configured_directives_are_accepted() {
        for directives in ["", "info", "assetkit_utils=debug,assetkit_core=warn"] {
            super::init_env_filter(directives).unwrap();
        }
    }
}
