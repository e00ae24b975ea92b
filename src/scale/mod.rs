// The two-pass separable resampler: scale factors, per-encoding dispatch,
// and the row-band work partitioner.

use std::num::NonZeroUsize;
use std::thread;

use once_cell::sync::Lazy;
use rayon::{ThreadPool, ThreadPoolBuilder};

use self::convolve::{
    Band, Rows, convolve16, convolve8, convolve_generic, nearest16, nearest8, nearest_generic,
};
use self::weights::{Coeff, Weights};
use crate::Error;
use crate::filters::FilterType;
use crate::raster::ycbcr::{deinterleave, interleave};
use crate::raster::{Image, Layout, PixelSource, Point, Raster, Rect, Rgba16, Ycc};

mod convolve;
mod weights;

// Process-wide blur factor for the weight tables. Left at 1.0; kernels keep
// their natural support.
const BLUR: f64 = 1.0;

pub(crate) static POOL: Lazy<ThreadPool> = Lazy::new(|| {
    let threads = thread::available_parallelism().map_or(1, NonZeroUsize::get);
    ThreadPoolBuilder::new()
        .thread_name(|u| format!("resample-{u}"))
        .num_threads(threads)
        .build()
        .expect("Error creating resample threadpool")
});

/// Resize `img` to `width` x `height` with the given filter.
///
/// A zero target dimension is derived from the other one so that the source
/// aspect ratio is preserved; if both are zero the source dimensions are
/// kept. The output encoding matches the input, except for
/// [`Image::Custom`] sources which resolve through the generic path and
/// come back as [`Image::Rgba16`]. Output bounds are always anchored at
/// (0, 0).
pub fn resize(img: &Image, width: u32, height: u32, interp: FilterType) -> Result<Image, Error> {
    let res = img.res();
    if res.is_zero_area() {
        return Err(Error::ZeroArea(res));
    }

    let (sx, sy) = calc_factors(width, height, f64::from(res.w), f64::from(res.h));
    let tw = if width == 0 { (0.7 + f64::from(res.w) / sx) as u32 } else { width };
    let th = if height == 0 { (0.7 + f64::from(res.h) / sy) as u32 } else { height };

    debug!("Resampling {} {res:?} -> {tw}x{th} with {interp}", img.encoding());

    // Nothing to do. Custom sources still run the pipeline so they resolve
    // to rgba16 as documented.
    let anchored = img.bounds().min == Point::default();
    if tw == res.w && th == res.h && anchored && !matches!(img, Image::Custom(_)) {
        return Ok(img.clone());
    }

    let params = Params {
        tw: tw as usize,
        th: th as usize,
        taps: interp.taps(),
        kernel: interp.kernel(),
        sx,
        sy,
        nearest: interp == FilterType::NearestNeighbor,
    };
    let out_rect = Rect::new(0, 0, tw as i32, th as i32);

    Ok(match img {
        Image::Gray8(src) => {
            Image::Gray8(Raster::from_vec(out_rect, scale8::<1>(rows(src), &params)))
        }
        Image::Gray16(src) => {
            Image::Gray16(Raster::from_vec(out_rect, scale16::<1>(rows(src), &params)))
        }
        Image::Rgba8(src) => {
            Image::Rgba8(Raster::from_vec(out_rect, scale8::<4>(rows(src), &params)))
        }
        Image::Rgba16(src) => {
            Image::Rgba16(Raster::from_vec(out_rect, scale16::<4>(rows(src), &params)))
        }
        Image::YCbCr(src) => {
            let flat = interleave(src);
            let scaled: Raster<Ycc> =
                Raster::from_vec(out_rect, scale8::<3>(rows(&flat), &params));
            Image::YCbCr(deinterleave(&scaled, src.ratio()))
        }
        Image::Custom(src) => Image::Rgba16(scale_custom(src.source(), &params)),
    })
}

struct Params {
    tw: usize,
    th: usize,
    taps: usize,
    kernel: fn(f64) -> f64,
    sx: f64,
    sy: f64,
    nearest: bool,
}

fn calc_factors(width: u32, height: u32, old_w: f64, old_h: f64) -> (f64, f64) {
    if width == 0 {
        if height == 0 {
            (1.0, 1.0)
        } else {
            let sy = old_h / f64::from(height);
            (sy, sy)
        }
    } else {
        let sx = old_w / f64::from(width);
        if height == 0 { (sx, sx) } else { (sx, old_h / f64::from(height)) }
    }
}

fn rows<F: Layout>(r: &Raster<F>) -> Rows<'_> {
    Rows {
        pix: r.as_bytes(),
        stride: r.stride(),
        width: r.res().w as usize,
        height: r.res().h as usize,
    }
}

fn scale8<const CH: usize>(src: Rows<'_>, p: &Params) -> Vec<u8> {
    if p.nearest {
        two_pass(src, CH, p, nearest8::<CH>)
    } else {
        two_pass(src, CH, p, convolve8::<CH>)
    }
}

fn scale16<const CH: usize>(src: Rows<'_>, p: &Params) -> Vec<u8> {
    if p.nearest {
        two_pass(src, CH * 2, p, nearest16::<CH>)
    } else {
        two_pass(src, CH * 2, p, convolve16::<CH>)
    }
}

// Both passes convolve horizontally and transpose, so pass one leaves the
// scratch with the source height across and the target width down, and pass
// two undoes the transpose while resampling the other axis.
fn two_pass<C: Coeff>(
    src: Rows<'_>,
    bpp: usize,
    p: &Params,
    conv: fn(&Rows<'_>, &mut Band<'_>, &Weights<C>),
) -> Vec<u8> {
    let temp_stride = src.height * bpp;
    let mut temp = vec![0; temp_stride * p.tw];
    let table = Weights::<C>::build(p.tw, p.taps, BLUR, p.sx, p.kernel);
    run_bands(&mut temp, temp_stride, p.tw, |mut band| conv(&src, &mut band, &table));

    let transposed = Rows { pix: &temp, stride: temp_stride, width: src.height, height: p.tw };
    let out_stride = p.tw * bpp;
    let mut out = vec![0; out_stride * p.th];
    let table = Weights::<C>::build(p.th, p.taps, BLUR, p.sy, p.kernel);
    run_bands(&mut out, out_stride, p.th, |mut band| conv(&transposed, &mut band, &table));
    out
}

fn scale_custom(src: &dyn PixelSource, p: &Params) -> Raster<Rgba16> {
    if p.nearest {
        two_pass_generic(src, p, nearest_generic)
    } else {
        two_pass_generic(src, p, convolve_generic)
    }
}

fn two_pass_generic<C: Coeff>(
    src: &dyn PixelSource,
    p: &Params,
    conv: fn(&dyn PixelSource, &mut Band<'_>, &Weights<C>),
) -> Raster<Rgba16> {
    let src_h = src.bounds().height();

    let mut temp = Raster::<Rgba16>::new(Rect::new(0, 0, src_h as i32, p.tw as i32));
    let temp_stride = temp.stride();
    let table = Weights::<C>::build(p.tw, p.taps, BLUR, p.sx, p.kernel);
    run_bands(temp.as_bytes_mut(), temp_stride, p.tw, |mut band| {
        conv(src, &mut band, &table)
    });

    let mut out = Raster::<Rgba16>::new(Rect::new(0, 0, p.tw as i32, p.th as i32));
    let out_stride = out.stride();
    let table = Weights::<C>::build(p.th, p.taps, BLUR, p.sy, p.kernel);
    run_bands(out.as_bytes_mut(), out_stride, p.th, |mut band| {
        conv(&temp, &mut band, &table)
    });
    out
}

// Split the destination into contiguous row bands, one per pool thread, and
// block until every band worker has finished. Band i covers rows
// [i*rows/n, (i+1)*rows/n); workers share no writable memory, so the
// partitioning never shows up in the output.
fn run_bands<F: Fn(Band<'_>) + Sync>(pix: &mut [u8], stride: usize, rows: usize, run: F) {
    let n = POOL.current_num_threads().clamp(1, rows.max(1));

    POOL.scope(|s| {
        let mut rest = pix;
        let mut prev = 0;
        for i in 1..=n {
            let end = i * rows / n;
            let (slab, tail) = std::mem::take(&mut rest).split_at_mut((end - prev) * stride);
            rest = tail;
            let range = prev..end;
            prev = end;
            if range.is_empty() {
                continue;
            }

            let run = &run;
            s.spawn(move |_| run(Band { pix: slab, stride, rows: range }));
        }
    });
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::raster::{CustomImage, Gray16, Gray8, Res, Rgba8, SubsampleRatio, YCbCrImage};

    fn logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn gray_gradient(w: u32, h: u32) -> Image {
        let mut img = Raster::<Gray8>::new(Rect::new(0, 0, w as i32, h as i32));
        let stride = img.stride();
        let pix = img.as_bytes_mut();
        for y in 0..h as usize {
            for x in 0..w as usize {
                pix[y * stride + x] = (x + y) as u8;
            }
        }
        Image::Gray8(img)
    }

    fn checkerboard(w: u32, h: u32) -> Image {
        let mut img = Raster::<Rgba8>::new(Rect::new(0, 0, w as i32, h as i32));
        let stride = img.stride();
        let pix = img.as_bytes_mut();
        for y in 0..h as usize {
            for x in 0..w as usize {
                let v = if (x + y) % 2 == 0 { 0xff } else { 0 };
                let off = y * stride + x * 4;
                pix[off..off + 3].fill(v);
                pix[off + 3] = 0xff;
            }
        }
        Image::Rgba8(img)
    }

    fn bytes(img: &Image) -> &[u8] {
        match img {
            Image::Gray8(r) => r.as_bytes(),
            Image::Rgba8(r) => r.as_bytes(),
            Image::Rgba16(r) => r.as_bytes(),
            _ => panic!("unexpected encoding {}", img.encoding()),
        }
    }

    #[test]
    fn rejects_zero_area() {
        let img = Image::Gray8(Raster::new(Rect::new(0, 0, 0, 10)));
        assert!(matches!(
            resize(&img, 5, 5, FilterType::default()),
            Err(Error::ZeroArea(Res { w: 0, h: 10 }))
        ));
    }

    #[test]
    fn dimension_contract() {
        logging();
        let img = checkerboard(12, 7);
        for (w, h) in [(3, 3), (24, 14), (1, 1), (40, 2)] {
            let out = resize(&img, w, h, FilterType::default()).unwrap();
            assert_eq!(out.bounds(), Rect::new(0, 0, w as i32, h as i32));
            assert_eq!(out.encoding(), "rgba8");
        }
    }

    #[test]
    fn derives_zero_targets() {
        let img = gray_gradient(10, 20);
        let out = resize(&img, 0, 10, FilterType::Bilinear).unwrap();
        assert_eq!(out.res(), Res { w: 5, h: 10 });

        let out = resize(&img, 5, 0, FilterType::Bilinear).unwrap();
        assert_eq!(out.res(), Res { w: 5, h: 10 });

        let out = resize(&img, 0, 0, FilterType::Bilinear).unwrap();
        assert_eq!(out.res(), Res { w: 10, h: 20 });
    }

    #[test]
    fn identity_matches_nearest() {
        let img = checkerboard(9, 5);
        let nn = resize(&img, 9, 5, FilterType::NearestNeighbor).unwrap();
        assert_eq!(bytes(&nn), bytes(&img));

        // At scale one every weight table collapses to a delta, so all
        // kernels converge on the same bytes.
        for interp in [
            FilterType::Bilinear,
            FilterType::Bicubic,
            FilterType::MitchellNetravali,
            FilterType::Lanczos2,
            FilterType::Lanczos3,
        ] {
            let out = resize(&img, 9, 5, interp).unwrap();
            assert_eq!(bytes(&out), bytes(&img), "{interp}");
        }
    }

    #[test]
    fn deterministic_across_calls() {
        logging();
        let img = gray_gradient(100, 100);
        let a = resize(&img, 37, 61, FilterType::Lanczos3).unwrap();
        let b = resize(&img, 37, 61, FilterType::Lanczos3).unwrap();
        assert_eq!(bytes(&a), bytes(&b));
    }

    #[test]
    fn checkerboard_halved_bilinear() {
        // The four taps of the widened bilinear kernel reach past the edges
        // of the 4x4 board and replicate them, pulling the mix away from the
        // interior 127/128 average.
        let img = checkerboard(4, 4);
        let out = resize(&img, 2, 2, FilterType::Bilinear).unwrap();
        #[rustfmt::skip]
        let expected = [
            135, 135, 135, 255,  119, 119, 119, 255,
            119, 119, 119, 255,  135, 135, 135, 255,
        ];
        assert_eq!(bytes(&out), &expected);
    }

    #[test]
    fn saturated_input_stays_saturated() {
        let mut img = Raster::<Rgba8>::new(Rect::new(0, 0, 8, 8));
        img.as_bytes_mut().fill(0xff);
        let img = Image::Rgba8(img);

        for interp in [
            FilterType::Bilinear,
            FilterType::Bicubic,
            FilterType::MitchellNetravali,
            FilterType::Lanczos2,
            FilterType::Lanczos3,
        ] {
            let out = resize(&img, 16, 16, interp).unwrap();
            assert!(bytes(&out).iter().all(|&b| b == 0xff), "{interp}");
        }
    }

    #[test]
    fn gradient_downscale_tracks_ramp() {
        let img = gray_gradient(100, 100);
        let out = resize(&img, 50, 50, FilterType::Lanczos3).unwrap();
        let Image::Gray8(out) = out else { panic!() };
        for y in 0..50usize {
            let row = out.row(y);
            for (x, &v) in row.iter().enumerate() {
                let want = 2 * (x + y) as i32;
                assert!(
                    (i32::from(v) - want).abs() <= 1,
                    "({x},{y}): got {v}, want ~{want}"
                );
            }
        }
    }

    #[test]
    fn gray16_nearest_replicates_samples() {
        let img = Raster::<Gray16>::from_vec(
            Rect::new(0, 0, 2, 2),
            vec![0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0],
        );
        let out = resize(&Image::Gray16(img), 4, 4, FilterType::NearestNeighbor).unwrap();
        let Image::Gray16(out) = out else { panic!() };

        // Doubling with nearest maps output pairs onto one source sample.
        assert_eq!(out.rgba64(0, 0)[0], 0x1234);
        assert_eq!(out.rgba64(1, 1)[0], 0x1234);
        assert_eq!(out.rgba64(2, 0)[0], 0x5678);
        assert_eq!(out.rgba64(1, 2)[0], 0x9abc);
        assert_eq!(out.rgba64(3, 3)[0], 0xdef0);
    }

    #[test]
    fn ycbcr_keeps_ratio_and_bounds() {
        let rect = Rect::new(0, 0, 8, 4);
        let y: Vec<u8> = (0..32).map(|i| (i * 8) as u8).collect();
        let cb = vec![90; 8];
        let cr = vec![190; 8];
        let img =
            Image::YCbCr(YCbCrImage::from_planes(rect, SubsampleRatio::Ratio420, y, cb, cr));

        let out = resize(&img, 16, 8, FilterType::MitchellNetravali).unwrap();
        let Image::YCbCr(out) = out else { panic!() };
        assert_eq!(out.bounds(), Rect::new(0, 0, 16, 8));
        assert_eq!(out.ratio(), SubsampleRatio::Ratio420);
        assert_eq!(out.y_plane().len(), 16 * 8);
        assert_eq!(out.cb_plane().len(), 8 * 4);
    }

    struct Bgr {
        pix: Vec<u8>,
        width: i32,
        height: i32,
    }

    impl PixelSource for Bgr {
        fn bounds(&self) -> Rect {
            Rect::new(0, 0, self.width, self.height)
        }

        fn rgba64(&self, x: i32, y: i32) -> [u16; 4] {
            let off = (y * self.width + x) as usize * 3;
            let w = |v: u8| u16::from(v) << 8 | u16::from(v);
            [w(self.pix[off + 2]), w(self.pix[off + 1]), w(self.pix[off]), 0xffff]
        }
    }

    #[test]
    fn custom_sources_come_back_as_rgba16() {
        let src = Bgr { pix: vec![10, 20, 30, 10, 20, 30], width: 2, height: 1 };
        let img = Image::Custom(CustomImage::new(Arc::new(src)));

        let out = resize(&img, 2, 1, FilterType::NearestNeighbor).unwrap();
        assert_eq!(out.encoding(), "rgba16");
        let Image::Rgba16(out) = out else { panic!() };
        assert_eq!(out.rgba64(0, 0), [0x1e1e, 0x1414, 0x0a0a, 0xffff]);

        let out = resize(&img, 4, 4, FilterType::Bilinear).unwrap();
        assert_eq!(out.res(), Res { w: 4, h: 4 });
    }
}
