//! An [`eyre`] report handler that renders the cause chain of an error on a single line.
//!
//! Each layer of the chain is written as an entry of a JSON-like map keyed by its
//! depth, the outermost context first:
//!
//! ```text
//! {"0": "failed reading asset registry", "1": "No such file or directory (os error 2)"}
//! ```

use std::{
    error::Error,
    fmt::{
        self,
        Write as _,
    },
};

pub use eyre;
#[doc(hidden)]
pub use eyre::Result;

/// Installs the `assetkit-eyre` hook as the global error report hook.
///
/// # Details
///
/// This function must be called to enable the customization of `eyre::Report`
/// provided by `assetkit-eyre`.
///
/// **NOTE**: It must be called before any `eyre::Report`s are constructed
/// to prevent the default handler from being installed.
///
/// # Errors
///
/// Calling this function after another handler has been installed will cause
/// an error.
pub fn install() -> Result<()> {
    eyre::set_hook(Box::new(|_| Box::new(ErrorHandler)))?;
    Ok(())
}

struct ErrorHandler;

impl eyre::EyreHandler for ErrorHandler {
    fn debug(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display(error, f)
    }

    fn display(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display(error, f)
    }
}

fn display(mut error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_char('{')?;
    let mut level = 0;
    write_layer(level, error, f)?;
    while let Some(cause) = error.source() {
        level = level.saturating_add(1);
        f.write_str(", ")?;
        write_layer(level, cause, f)?;
        error = cause;
    }
    f.write_char('}')?;
    Ok(())
}

fn write_layer(key: u32, err: &dyn Error, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write_key(key, f)?;
    write_value(err, f)?;
    Ok(())
}

fn write_key(key: u32, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_char('"')?;
    let mut buf = itoa::Buffer::new();
    f.write_str(buf.format(key))?;
    f.write_str("\": ")?;
    Ok(())
}

fn write_value(err: &dyn Error, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_char('"')?;
    write!(
        Escaped {
            inner: &mut *f,
        },
        "{err}"
    )?;
    f.write_char('"')?;
    Ok(())
}

/// Escapes quotes and backslashes so that every layer stays a single string value.
struct Escaped<'a, 'b> {
    inner: &'a mut fmt::Formatter<'b>,
}

impl fmt::Write for Escaped<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for chunk in s.split_inclusive(['"', '\\']) {
            match chunk.strip_suffix(['"', '\\']) {
                Some(head) => {
                    self.inner.write_str(head)?;
                    self.inner.write_char('\\')?;
                    self.inner.write_str(&chunk[head.len()..])?;
                }
                None => self.inner.write_str(chunk)?,
            }
        }
        Ok(())
    }
}
