use base64_serde::base64_serde_type;
use serde::Serializer;

base64_serde_type!(pub(crate) Base64Standard, base64::engine::general_purpose::STANDARD);

pub(crate) fn base64_serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<[u8]>,
    S: Serializer,
{
    Base64Standard::serialize(value, serializer)
}

pub(crate) fn base64_deserialize_array<'de, D, const N: usize>(
    deserializer: D,
) -> Result<[u8; N], D::Error>
where
    D: serde::Deserializer<'de>,
{
    let bytes: Vec<u8> = Base64Standard::deserialize(deserializer)?;
    let actual = bytes.len();
    bytes.try_into().map_err(|_| {
        serde::de::Error::custom(format_args!(
            "expected {N} bytes after base64 decoding, got {actual}"
        ))
    })
}
