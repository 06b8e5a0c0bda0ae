use std::fmt::{
    Display,
    Formatter,
    Result,
};

/// Format `bytes` using standard base64 formatting.
///
/// See the [`base64::engine::general_purpose::STANDARD`] for the formatting definition.
///
/// # Example
/// ```
/// use assetkit_core::display;
/// let commitment = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
/// println!("received commitment: {}", display::base64(&commitment));
/// ```
pub fn base64<T: AsRef<[u8]> + ?Sized>(bytes: &T) -> Base64<'_> {
    Base64(bytes.as_ref())
}

pub struct Base64<'a>(&'a [u8]);

impl Display for Base64<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        use base64::{
            display::Base64Display,
            engine::general_purpose::STANDARD,
        };
        Base64Display::new(self.0, &STANDARD).fmt(f)
    }
}
