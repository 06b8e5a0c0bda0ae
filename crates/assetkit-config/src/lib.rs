//! A trait to read a config from the environment.
//!
//! Every field of a config is read from an environment variable named after the
//! field, upper-cased and prefixed with [`Config::PREFIX`]. `RUST_LOG` is read into
//! a field called `log`, and is overridden by the prefixed variable if both are set.
//!
//! # Example
//! ```no_run
//! use assetkit_config as config;
//! use serde::{
//!     Deserialize,
//!     Serialize,
//! };
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! #[serde(deny_unknown_fields)]
//! pub struct MyConfig {
//!     pub log: String,
//!     pub asset_registry: Option<std::path::PathBuf>,
//! }
//!
//! impl config::Config for MyConfig {
//!     const PREFIX: &'static str = "MY_TOOL_";
//! }
//!
//! let config: MyConfig = config::get().unwrap();
//! ```
use serde::{
    de::DeserializeOwned,
    Serialize,
};


#[cfg(feature = "tests")]
pub use tests::{
    config_should_reject_unknown_var,
    example_env_config_is_up_to_date,
};

/// Utility function to get a config without having to import the `Config` trait.
///
/// # Errors
/// Returns an error if the environment does not hold a valid config.
pub fn get<T: Config>() -> Result<T, figment::Error> {
    T::get()
}

pub trait Config: Serialize + DeserializeOwned {
    const PREFIX: &'static str;

    /// Reads the config from the environment.
    ///
    /// # Errors
    /// Returns an error if a required variable is missing, if a variable cannot be
    /// parsed into its field, or if an unknown variable carries the prefix and the
    /// config denies unknown fields.
    fn get() -> Result<Self, figment::Error> {
        Self::get_with_prefix(Self::PREFIX, _internal::Internal)
    }

    #[doc(hidden)]
    fn get_with_prefix(
        prefix: &str,
        _internal: _internal::Internal,
    ) -> Result<Self, figment::Error> {
        use figment::{
            providers::Env as FigmentEnv,
            Figment,
        };
        Figment::new()
            .merge(FigmentEnv::prefixed("RUST_").split("_").only(&["log"]))
            .merge(FigmentEnv::prefixed(prefix))
            .extract()
    }
}

mod _internal {
    pub struct Internal;
}

#[cfg(test)]
mod unit_tests {
    use figment::Jail;
    use serde::{
        Deserialize,
        Serialize,
    };

    use super::Config;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    #[serde(deny_unknown_fields)]
    struct TestConfig {
        log: String,
        pretty_json: bool,
        asset_registry: Option<String>,
    }

    impl Config for TestConfig {
        const PREFIX: &'static str = "ASSETKIT_CONFIG_TEST_";
    }

    #[test]
    fn fields_are_read_from_prefixed_variables() {
        Jail::expect_with(|jail| {
            jail.set_env("ASSETKIT_CONFIG_TEST_LOG", "debug");
            jail.set_env("ASSETKIT_CONFIG_TEST_PRETTY_JSON", "true");
            jail.set_env("ASSETKIT_CONFIG_TEST_ASSET_REGISTRY", "registry.json");
            let config = TestConfig::get()?;
            assert_eq!(
                TestConfig {
                    log: "debug".to_string(),
                    pretty_json: true,
                    asset_registry: Some("registry.json".to_string()),
                },
                config,
            );
            Ok(())
        });
    }

    #[test]
    fn rust_log_is_used_when_log_is_not_set() {
        Jail::expect_with(|jail| {
            jail.set_env("RUST_LOG", "warn");
            jail.set_env("ASSETKIT_CONFIG_TEST_PRETTY_JSON", "false");
            let config = TestConfig::get()?;
            assert_eq!("warn", config.log);
            assert_eq!(None, config.asset_registry);
            Ok(())
        });
    }

    #[test]
    fn prefixed_log_overrides_rust_log() {
        Jail::expect_with(|jail| {
            jail.set_env("RUST_LOG", "warn");
            jail.set_env("ASSETKIT_CONFIG_TEST_LOG", "info");
            jail.set_env("ASSETKIT_CONFIG_TEST_PRETTY_JSON", "false");
            assert_eq!("info", TestConfig::get()?.log);
            Ok(())
        });
    }

    #[test]
    fn unknown_prefixed_variables_are_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("ASSETKIT_CONFIG_TEST_LOG", "info");
            jail.set_env("ASSETKIT_CONFIG_TEST_PRETTY_JSON", "false");
            jail.set_env("ASSETKIT_CONFIG_TEST_FOOBAR", "baz");
            assert!(TestConfig::get().is_err());
            Ok(())
        });
    }
}
