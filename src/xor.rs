//! Pixel-wise exclusive-or of two images.

use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::image::{self, PixelBuffer, OPAQUE, RGBA_CHANNELS};

/// XOR the red, green and blue channels of two equally sized images.
///
/// Alpha is forced to fully opaque in the result; input alpha is ignored.
/// The operation is commutative and self-inverse on RGB: XOR-ing the result
/// with either input gives back the other input's colors.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if width or height differ.
pub fn xor_images(first: &PixelBuffer, second: &PixelBuffer) -> Result<PixelBuffer> {
    let (first_dims, second_dims) = (image::dimensions(first), image::dimensions(second));
    if first_dims != second_dims {
        return Err(Error::DimensionMismatch {
            first: first_dims,
            second: second_dims,
        });
    }

    let mut result = PixelBuffer::new(first_dims.width, first_dims.height);

    for ((out, a), b) in result
        .chunks_exact_mut(RGBA_CHANNELS)
        .zip(first.chunks_exact(RGBA_CHANNELS))
        .zip(second.chunks_exact(RGBA_CHANNELS))
    {
        out[0] = a[0] ^ b[0];
        out[1] = a[1] ^ b[1];
        out[2] = a[2] ^ b[2];
        out[3] = OPAQUE;
    }

    Ok(result)
}

/// Load two PNG files, XOR them, and write the PNG result to `writer`.
///
/// Nothing is written unless both inputs load and their sizes match.
///
/// # Errors
///
/// Returns the first load, dimension, or encode error encountered.
pub fn xor_files<P, Q, W>(first: P, second: Q, writer: W) -> Result<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    W: Write,
{
    let first = first.as_ref();
    let second = second.as_ref();

    tracing::info!("Combining {} with {}", first.display(), second.display());

    let first_image = image::load_image(first)?;
    let second_image = image::load_image(second)?;
    let combined = xor_images(&first_image, &second_image)?;

    tracing::debug!("Writing {} combined image", image::dimensions(&combined));
    image::write_png(&combined, writer)
}

#[cfg(test)]
mod tests {
    use ::image::Rgba;

    use super::*;
    use crate::error::Dimensions;
    use crate::image;
    use crate::testutil::scratch_dir;

    #[allow(clippy::cast_possible_truncation)]
    fn pattern(width: u32, height: u32, seed: u8) -> PixelBuffer {
        PixelBuffer::from_fn(width, height, |x, y| {
            let v = (x * 31 + y * 17) as u8;
            Rgba([v ^ seed, v.wrapping_add(seed), v.rotate_left(3), 255])
        })
    }

    fn rgb(image: &PixelBuffer) -> Vec<[u8; 3]> {
        image.pixels().map(|p| [p[0], p[1], p[2]]).collect()
    }

    #[test]
    fn test_self_inverse() {
        let a = pattern(16, 9, 0x5A);
        let b = pattern(16, 9, 0xC3);

        let combined = xor_images(&a, &b).unwrap();
        let recovered = xor_images(&combined, &b).unwrap();

        assert_eq!(rgb(&recovered), rgb(&a));
    }

    #[test]
    fn test_commutative() {
        let a = pattern(7, 5, 0x11);
        let b = pattern(7, 5, 0xEE);

        assert_eq!(xor_images(&a, &b).unwrap(), xor_images(&b, &a).unwrap());
    }

    #[test]
    fn test_xor_with_itself_is_black() {
        let a = pattern(8, 8, 0x42);
        let result = xor_images(&a, &a).unwrap();

        assert_eq!(result.dimensions(), (8, 8));
        assert!(result.pixels().all(|p| p.0 == [0, 0, 0, 255]));
    }

    #[test]
    fn test_alpha_forced_opaque() {
        let a = PixelBuffer::from_pixel(3, 3, Rgba([10, 20, 30, 0]));
        let b = PixelBuffer::from_pixel(3, 3, Rgba([1, 2, 3, 7]));
        let result = xor_images(&a, &b).unwrap();

        assert!(result.pixels().all(|p| p.0 == [11, 22, 29, 255]));
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = PixelBuffer::new(10, 20);
        let b = PixelBuffer::new(20, 10);

        let err = xor_images(&a, &b).unwrap_err();
        match &err {
            Error::DimensionMismatch { first, second } => {
                assert_eq!(*first, Dimensions::new(10, 20));
                assert_eq!(*second, Dimensions::new(20, 10));
            }
            other => panic!("unexpected error: {other}"),
        }
        let message = err.to_string();
        assert!(message.contains("10x20") && message.contains("20x10"));
    }

    #[test]
    fn test_xor_files_writes_png() {
        let dir = scratch_dir("xor-files");
        let (first, second) = (dir.join("a.png"), dir.join("b.png"));
        let a = pattern(6, 4, 0x0F);
        let b = pattern(6, 4, 0xF0);
        image::save_image(&a, &first).unwrap();
        image::save_image(&b, &second).unwrap();

        let mut bytes = Vec::new();
        xor_files(&first, &second, &mut bytes).unwrap();

        let decoded = image::decode_png(std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(decoded, xor_images(&a, &b).unwrap());
    }

    #[test]
    fn test_xor_files_premultiplies_translucent_input() {
        let dir = scratch_dir("xor-translucent");
        let (first, second) = (dir.join("a.png"), dir.join("b.png"));
        let mut translucent = PixelBuffer::new(2, 1);
        translucent.put_pixel(0, 0, Rgba([200, 100, 50, 0]));
        translucent.put_pixel(1, 0, Rgba([200, 100, 50, 128]));
        image::save_image(&translucent, &first).unwrap();
        let black = PixelBuffer::from_pixel(2, 1, Rgba([0, 0, 0, 255]));
        image::save_image(&black, &second).unwrap();

        let mut bytes = Vec::new();
        xor_files(&first, &second, &mut bytes).unwrap();

        let decoded = image::decode_png(std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(1, 0).0, [100, 50, 25, 255]);
    }

    #[test]
    fn test_xor_files_mismatch_writes_nothing() {
        let dir = scratch_dir("xor-mismatch");
        let (first, second) = (dir.join("a.png"), dir.join("b.png"));
        image::save_image(&pattern(10, 20, 1), &first).unwrap();
        image::save_image(&pattern(20, 10, 2), &second).unwrap();

        let mut bytes = Vec::new();
        let err = xor_files(&first, &second, &mut bytes).unwrap_err();

        assert!(matches!(err, Error::DimensionMismatch { .. }));
        assert!(bytes.is_empty());
    }
}
