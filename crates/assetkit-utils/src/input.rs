use std::{
    fs,
    io,
    path::Path,
};

use assetkit_eyre::eyre::{
    Result,
    WrapErr as _,
};
use base64::{
    prelude::BASE64_STANDARD,
    Engine as _,
};

/// Reads base64 encoded bytes from `input` itself, the file it names, or stdin if it is `-`.
pub(crate) fn read_base64(input: &str) -> Result<Vec<u8>> {
    if input == "-" {
        let encoded = io::read_to_string(io::stdin().lock()).wrap_err("failed to read stdin")?;
        return BASE64_STANDARD
            .decode(encoded.trim())
            .wrap_err("failed to decode stdin data as base64");
    }

    if Path::new(input).is_file() {
        let encoded =
            fs::read_to_string(input).wrap_err_with(|| format!("failed to read file `{input}`"))?;
        return BASE64_STANDARD
            .decode(encoded.trim())
            .wrap_err_with(|| format!("failed to decode contents of `{input}` as base64"));
    }

    BASE64_STANDARD
        .decode(input.trim())
        .wrap_err("failed to decode provided data as base64")
}

/// Decodes a protobuf message of type `T` from base64 `input`, see [`read_base64`].
pub(crate) fn read_message<T: prost::Message + prost::Name + Default>(input: &str) -> Result<T> {
    let data = read_base64(input)?;
    T::decode(&*data).wrap_err_with(|| format!("failed to decode `{}`", T::full_name()))
}

pub(crate) fn encode_base64<T: prost::Message>(message: &T) -> String {
    BASE64_STANDARD.encode(message.encode_to_vec())
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use assetkit_core::generated::asset::v1alpha1::Denom;

    use super::{
        encode_base64,
        read_base64,
        read_message,
    };

    #[test]
    fn base64_is_read_from_argument_or_file() {
        assert_eq!(b"denom".to_vec(), read_base64("ZGVub20=").unwrap());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ZGVub20=").unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(b"denom".to_vec(), read_base64(path).unwrap());
    }

    #[test]
    fn encoded_messages_are_decoded() {
        let denom = Denom {
            denom: "upenumbra".to_string(),
        };
        let encoded = encode_base64(&denom);
        assert_eq!(denom, read_message::<Denom>(&encoded).unwrap());
    }

    #[test]
    fn invalid_base64_is_rejected() {
        read_base64("not base64!").expect_err("input is not base64");
    }
}
