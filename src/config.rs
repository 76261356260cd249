//! Resolved command-line configuration and mode selection.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Flags written Go-style with a single dash that clap only knows as long flags.
const SINGLE_DASH_LONG_FLAGS: [&str; 2] = ["i1", "i2"];

/// Options resolved once from process arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// First image for XOR mode. Empty when unset.
    pub first: PathBuf,

    /// Second image for XOR mode. Empty when unset.
    pub second: PathBuf,

    /// Side length of generated noise images. Zero disables generate mode.
    pub size: u32,

    /// Number of noise images to generate.
    pub count: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first: PathBuf::new(),
            second: PathBuf::new(),
            size: 0,
            count: 1,
        }
    }
}

/// The single operation a run performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Write `count` noise images of `size` x `size`.
    Generate { size: u32, count: u32 },
    /// XOR two images to standard output.
    Xor { first: PathBuf, second: PathBuf },
}

impl Config {
    /// Pick the mode this configuration requests.
    ///
    /// A positive `size` always selects [`Mode::Generate`] and the image
    /// paths are ignored. Otherwise both paths must be set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Usage`] when neither mode is fully specified.
    pub fn mode(&self) -> Result<Mode> {
        if self.size > 0 {
            return Ok(Mode::Generate {
                size: self.size,
                count: self.count,
            });
        }

        if self.first.as_os_str().is_empty() || self.second.as_os_str().is_empty() {
            return Err(Error::Usage);
        }

        Ok(Mode::Xor {
            first: self.first.clone(),
            second: self.second.clone(),
        })
    }
}

/// Rewrite `-i1`/`-i2` (and their `=value` forms) to `--i1`/`--i2`.
///
/// Everything after a bare `--` is left untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            match arg.to_str() {
                Some(text) if is_single_dash_long_flag(text) => format!("-{text}").into(),
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_long_flag(arg: &str) -> bool {
    let Some(flag) = arg.strip_prefix('-') else {
        return false;
    };
    let name = flag.split_once('=').map_or(flag, |(name, _)| name);
    SINGLE_DASH_LONG_FLAGS.contains(&name)
}
