use assetkit_eyre::eyre::{
    Result,
    WrapErr as _,
};
use serde::Serialize;

/// Controls how JSON documents are written to stdout.
#[derive(Clone, Copy, Debug)]
pub struct Output {
    pretty_json: bool,
}

impl Output {
    #[must_use]
    pub fn new(pretty_json: bool) -> Self {
        Self {
            pretty_json,
        }
    }

    pub(crate) fn json<T: Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty_json {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
        .wrap_err("failed to json-encode")
    }
}
