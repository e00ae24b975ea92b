//! CPU image resampling with fixed-point separable filters, plus an HQ2x
//! pixel-art magnifier.
//!
//! The resampler precomputes integer weight tables per output row, then
//! runs two horizontal convolution passes (the second over the transposed
//! intermediate) with a type-specialised inner loop per pixel format,
//! parallelised over row bands. Supported encodings round-trip to
//! themselves; anything else resolves through a generic widened-sample
//! path and comes back as 16-bit RGBA.
//!
//! ```
//! use pixscale::{FilterType, Image, Raster, Rect, Rgba8, resize};
//!
//! let img = Raster::<Rgba8>::new(Rect::new(0, 0, 64, 48));
//! let out = resize(&Image::Rgba8(img), 32, 0, FilterType::default()).unwrap();
//! assert_eq!(out.bounds(), Rect::new(0, 0, 32, 24));
//! ```

#[macro_use]
extern crate log;

use thiserror::Error as ThisError;

mod color;
mod filters;
mod hq2x;
mod ops;
mod raster;
mod scale;

pub use self::color::{parse_hex_color, rgb_to_ycbcr, ycbcr_to_rgb};
pub use self::filters::FilterType;
pub use self::hq2x::hq2x;
pub use self::ops::{enlarge, thumbnail};
pub use self::raster::{
    CustomImage, Gray16, Gray8, Image, Layout, PixelSource, Point, Raster, RasterView, Rect, Res,
    Rgba16, Rgba8, SubsampleRatio, YCbCrImage,
};
pub use self::scale::resize;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("source image has zero area ({0:?})")]
    ZeroArea(Res),

    #[error("invalid magnification factor {0}")]
    InvalidFactor(f64),
}
