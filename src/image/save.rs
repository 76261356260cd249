//! PNG saving utilities.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::error::{Error, Result};

use super::PixelBuffer;

/// Encode a pixel buffer as PNG into any byte sink.
///
/// # Errors
///
/// Returns [`Error::Encode`] if encoding or writing fails.
pub fn write_png<W: Write>(image: &PixelBuffer, writer: W) -> Result<()> {
    encode(image, writer).map_err(|source| Error::Encode {
        target: "output stream".to_string(),
        source,
    })
}

/// Save a pixel buffer as a PNG file, creating or truncating `path`.
///
/// # Errors
///
/// Returns [`Error::FileCreate`] if the file cannot be created and
/// [`Error::Encode`] if encoding fails.
pub fn save_image<P: AsRef<Path>>(image: &PixelBuffer, path: P) -> Result<()> {
    let path = path.as_ref();

    let file = File::create(path).map_err(|source| Error::FileCreate {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    encode(image, &mut writer).map_err(|source| Error::Encode {
        target: path.display().to_string(),
        source,
    })?;
    writer.flush()?;

    tracing::debug!("Saved {}", path.display());

    Ok(())
}

/// Refuse to emit binary PNG data onto an interactive terminal.
///
/// # Errors
///
/// Returns [`Error::TerminalOutput`] when `is_terminal` is true.
pub fn ensure_not_terminal(is_terminal: bool) -> Result<()> {
    if is_terminal {
        return Err(Error::TerminalOutput);
    }
    Ok(())
}

fn encode<W: Write>(image: &PixelBuffer, writer: W) -> image::ImageResult<()> {
    PngEncoder::new(writer).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )
}
