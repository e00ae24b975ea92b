// Convenience drivers built on the resizer and the magnifier.

use crate::Error;
use crate::filters::FilterType;
use crate::hq2x::hq2x;
use crate::raster::{Image, Res};
use crate::scale::resize;

/// Downscale `img` to fit within `max_w` x `max_h`, preserving its aspect
/// ratio. An image that already fits is handed back unchanged.
pub fn thumbnail(max_w: u32, max_h: u32, img: Image, interp: FilterType) -> Result<Image, Error> {
    let Res { w, h } = img.res();
    if max_w >= w && max_h >= h {
        return Ok(img);
    }

    let (mut new_w, mut new_h) = (w, h);
    if w > max_w {
        new_h = ((u64::from(h) * u64::from(max_w)) / u64::from(w)).max(1) as u32;
        new_w = max_w;
    }
    if new_h > max_h {
        new_w = ((u64::from(new_w) * u64::from(max_h)) / u64::from(new_h)).max(1) as u32;
        new_h = max_h;
    }

    resize(&img, new_w, new_h, interp)
}

/// Enlarge `img` by an arbitrary factor: repeated HQ2x doublings act as an
/// edge-preserving prefilter, then a final resample lands on the exact
/// target size. Non-RGBA inputs are collapsed to 8-bit RGBA first.
pub fn enlarge(img: &Image, factor: f64) -> Result<Image, Error> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(Error::InvalidFactor(factor));
    }
    let res = img.res();
    if res.is_zero_area() {
        return Err(Error::ZeroArea(res));
    }

    let tw = ((f64::from(res.w) * factor) as u32).max(1);
    let th = ((f64::from(res.h) * factor) as u32).max(1);

    let mut big = img.to_rgba8();
    let passes = (factor.sqrt() as u32).max(1);
    debug!("Enlarging {res:?} by {factor}: {passes} hq2x passes, then {tw}x{th}");
    for _ in 0..passes {
        big = hq2x(&big);
    }

    resize(&Image::Rgba8(big), tw, th, FilterType::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{Raster, Rect, Rgba8};

    fn rgba(w: i32, h: i32) -> Image {
        let mut img = Raster::<Rgba8>::new(Rect::new(0, 0, w, h));
        for (i, b) in img.as_bytes_mut().iter_mut().enumerate() {
            *b = (i * 13) as u8;
        }
        Image::Rgba8(img)
    }

    #[test]
    fn fits_are_returned_unchanged() {
        let img = rgba(40, 30);
        let bytes: Vec<u8> = match &img {
            Image::Rgba8(r) => r.as_bytes().to_vec(),
            _ => unreachable!(),
        };

        let out = thumbnail(40, 30, img, FilterType::MitchellNetravali).unwrap();
        let Image::Rgba8(out) = out else { panic!() };
        assert_eq!(out.as_bytes(), &bytes[..]);
    }

    #[test]
    fn thumbnail_preserves_aspect() {
        // Width-bound: 100x200 into 50x50 lands at 25x50.
        let out = thumbnail(50, 50, rgba(100, 200), FilterType::MitchellNetravali).unwrap();
        assert_eq!(out.res(), Res { w: 25, h: 50 });

        // Height already fits.
        let out = thumbnail(10, 600, rgba(100, 200), FilterType::MitchellNetravali).unwrap();
        assert_eq!(out.res(), Res { w: 10, h: 20 });

        // Degenerate aspect still produces at least one pixel.
        let out = thumbnail(1, 1, rgba(1000, 2), FilterType::MitchellNetravali).unwrap();
        assert_eq!(out.res(), Res { w: 1, h: 1 });
    }

    #[test]
    fn thumbnail_caps_both_dimensions() {
        for (mw, mh) in [(64, 64), (17, 120), (300, 9)] {
            let out = thumbnail(mw, mh, rgba(257, 131), FilterType::MitchellNetravali).unwrap();
            let r = out.res();
            assert!(r.w <= mw && r.h <= mh, "{r:?} exceeds {mw}x{mh}");
            assert!(r.w >= 1 && r.h >= 1);
        }
    }

    #[test]
    fn enlarge_is_one_doubling_then_resample() {
        let out = enlarge(&rgba(32, 32), 1.5).unwrap();
        assert_eq!(out.res(), Res { w: 48, h: 48 });
        assert_eq!(out.encoding(), "rgba8");
    }

    #[test]
    fn enlarge_large_factors_stack_doublings() {
        let out = enlarge(&rgba(8, 6), 4.0).unwrap();
        assert_eq!(out.res(), Res { w: 32, h: 24 });
    }

    #[test]
    fn enlarge_rejects_bad_factors() {
        assert!(matches!(enlarge(&rgba(4, 4), 0.0), Err(Error::InvalidFactor(_))));
        assert!(matches!(enlarge(&rgba(4, 4), f64::NAN), Err(Error::InvalidFactor(_))));
        assert!(matches!(enlarge(&rgba(4, 4), -2.0), Err(Error::InvalidFactor(_))));
    }
}
