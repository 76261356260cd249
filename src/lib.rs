//! # xorpng
//!
//! XOR two PNG images pixel by pixel, or generate PNG noise images from the
//! operating system's secure random source.
//!
//! XOR-ing an image with a noise image of the same size hides it; XOR-ing
//! the result with the same noise image brings it back.
//!
//! ## Example
//!
//! ```no_run
//! use xorpng::{image, noise, xor};
//!
//! # fn main() -> xorpng::Result<()> {
//! let key = noise::generate_noise(480)?;
//! image::save_image(&key, "key.png")?;
//!
//! let secret = image::load_image("secret.png")?;
//! let hidden = xor::xor_images(&secret, &key)?;
//! image::save_image(&hidden, "hidden.png")?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod image;
pub mod noise;
pub mod xor;

pub use config::{Config, Mode};
pub use error::{Dimensions, Error, Result};
