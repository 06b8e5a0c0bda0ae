use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Log filter directives.
    #[serde(default = "default_log")]
    pub log: String,
    /// Whether JSON output is pretty-printed.
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
    /// The default asset registry, used if `--registry` is not given.
    #[serde(default)]
    pub asset_registry: Option<PathBuf>,
}

fn default_log() -> String {
    "info".to_string()
}

fn default_pretty_json() -> bool {
    true
}

impl assetkit_config::Config for Config {
    const PREFIX: &'static str = "ASSETKIT_UTILS_";
}

#[cfg(test)]
mod tests {
    use super::Config;

    const EXAMPLE_ENV: &str = include_str!("../local.env.example");

    #[test]
    fn example_env_config_is_up_to_date() {
        assetkit_config::example_env_config_is_up_to_date::<Config>(EXAMPLE_ENV);
    }

    #[test]
    #[should_panic]
    fn config_should_reject_unknown_var() {
        assetkit_config::config_should_reject_unknown_var::<Config>(EXAMPLE_ENV);
    }
}
