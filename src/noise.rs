//! Cryptographically random noise images.

use std::path::{Path, PathBuf};

use ::image::Rgba;
use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::{Error, Result};
use crate::image::{self, PixelBuffer, OPAQUE};

/// Bytes of entropy consumed per pixel (red, green, blue).
const RGB_BYTES: usize = 3;

/// Generate a `size` x `size` image of secure random RGB noise.
///
/// Every call reads fresh bytes from the operating system's entropy source,
/// so no two images share state. Alpha is always fully opaque.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `size` is zero or too large to
/// allocate, and [`Error::RandomSource`] if the entropy source fails.
pub fn generate_noise(size: u32) -> Result<PixelBuffer> {
    if size == 0 {
        return Err(Error::InvalidParameter {
            name: "size".to_string(),
            reason: "must be greater than 0".to_string(),
        });
    }

    let side = size as usize;
    let len = side
        .checked_mul(side)
        .and_then(|pixels| pixels.checked_mul(RGB_BYTES))
        .ok_or_else(|| Error::InvalidParameter {
            name: "size".to_string(),
            reason: format!("{size}x{size} image is too large"),
        })?;

    let mut entropy = vec![0u8; len];
    OsRng
        .try_fill_bytes(&mut entropy)
        .map_err(|err| Error::RandomSource {
            reason: err.to_string(),
        })?;

    let mut noise = PixelBuffer::new(size, size);
    for (pixel, rgb) in noise.pixels_mut().zip(entropy.chunks_exact(RGB_BYTES)) {
        *pixel = Rgba([rgb[0], rgb[1], rgb[2], OPAQUE]);
    }

    Ok(noise)
}

/// File name of the `index`-th image in a batch (1-based).
#[must_use]
pub fn noise_file_name(index: u32) -> String {
    format!("k-{index}.png")
}

/// Generate `count` noise images into `dir` as `k-1.png` .. `k-<count>.png`.
///
/// Images are produced and written in order. `on_saved` receives the
/// absolute path of each file once it has been fully written.
///
/// # Errors
///
/// Stops at the first generation, file, or encode error.
pub fn save_noise_batch<F>(
    size: u32,
    count: u32,
    dir: &Path,
    mut on_saved: F,
) -> Result<Vec<PathBuf>>
where
    F: FnMut(&Path),
{
    tracing::info!("Generating {count} noise image(s) of {size}x{size}");

    let mut saved = Vec::with_capacity(count as usize);
    for index in 1..=count {
        let path = std::path::absolute(dir.join(noise_file_name(index)))?;
        let noise = generate_noise(size)?;
        image::save_image(&noise, &path)?;

        on_saved(&path);
        saved.push(path);
    }

    Ok(saved)
}
