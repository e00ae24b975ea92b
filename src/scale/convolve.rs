// Per-format inner loops. Each kernel convolves horizontally and writes the
// transpose of its input, so the driver can run the same routine for both
// passes: pass two undoes the transpose.
//
// The outer loop walks output columns (one per source row) and the inner
// loop walks the rows of the band owned by the calling worker. Out-of-range
// taps clamp the pixel index to the last column, replicating the edge.

use std::ops::Range;

use super::weights::Weights;
use crate::raster::PixelSource;

/// A contiguous run of output rows owned by a single worker.
pub(crate) struct Band<'a> {
    pub pix: &'a mut [u8],
    pub stride: usize,
    pub rows: Range<usize>,
}

/// Borrowed view of a packed source: flat bytes plus row geometry.
#[derive(Clone, Copy)]
pub(crate) struct Rows<'a> {
    pub pix: &'a [u8],
    pub stride: usize,
    /// Pixels per row.
    pub width: usize,
    /// Row count.
    pub height: usize,
}

pub(crate) fn convolve8<const CH: usize>(src: &Rows<'_>, band: &mut Band<'_>, weights: &Weights<i16>) {
    let max_x = src.width as isize - 1;

    for x in 0..src.height {
        let row = &src.pix[x * src.stride..];
        for y in band.rows.clone() {
            let mut acc = [0i32; CH];
            let mut sum = 0i32;
            let start = weights.starts[y];

            for (i, &coeff) in weights.row(y).iter().enumerate() {
                if coeff != 0 {
                    let xi = (start + i as isize).clamp(0, max_x) as usize;
                    let px = &row[xi * CH..xi * CH + CH];
                    for (a, &s) in acc.iter_mut().zip(px) {
                        *a += i32::from(coeff) * i32::from(s);
                    }
                    sum += i32::from(coeff);
                }
            }

            let off = (y - band.rows.start) * band.stride + x * CH;
            for (o, a) in band.pix[off..off + CH].iter_mut().zip(acc) {
                *o = (a / sum).clamp(0, 0xff) as u8;
            }
        }
    }
}

pub(crate) fn convolve16<const CH: usize>(src: &Rows<'_>, band: &mut Band<'_>, weights: &Weights<i32>) {
    let max_x = src.width as isize - 1;

    for x in 0..src.height {
        let row = &src.pix[x * src.stride..];
        for y in band.rows.clone() {
            let mut acc = [0i64; CH];
            let mut sum = 0i64;
            let start = weights.starts[y];

            for (i, &coeff) in weights.row(y).iter().enumerate() {
                if coeff != 0 {
                    let xi = (start + i as isize).clamp(0, max_x) as usize;
                    let px = &row[xi * CH * 2..(xi + 1) * CH * 2];
                    for (c, a) in acc.iter_mut().enumerate() {
                        let s = u16::from_be_bytes([px[c * 2], px[c * 2 + 1]]);
                        *a += i64::from(coeff) * i64::from(s);
                    }
                    sum += i64::from(coeff);
                }
            }

            let off = (y - band.rows.start) * band.stride + x * CH * 2;
            let out = &mut band.pix[off..off + CH * 2];
            for (c, a) in acc.into_iter().enumerate() {
                let v = (a / sum).clamp(0, 0xffff) as u16;
                out[c * 2..c * 2 + 2].copy_from_slice(&v.to_be_bytes());
            }
        }
    }
}

// Fallback for sources with no specialised loop. Reads through the widened
// sample interface and writes big-endian 16-bit RGBA.
pub(crate) fn convolve_generic(src: &dyn PixelSource, band: &mut Band<'_>, weights: &Weights<i32>) {
    let bounds = src.bounds();
    let res = bounds.res();
    let max_x = res.w as isize - 1;

    for x in 0..res.h as usize {
        for y in band.rows.clone() {
            let mut acc = [0i64; 4];
            let mut sum = 0i64;
            let start = weights.starts[y];

            for (i, &coeff) in weights.row(y).iter().enumerate() {
                if coeff != 0 {
                    let xi = (start + i as isize).clamp(0, max_x) as i32;
                    let px = src.rgba64(bounds.min.x + xi, bounds.min.y + x as i32);
                    for (a, s) in acc.iter_mut().zip(px) {
                        *a += i64::from(coeff) * i64::from(s);
                    }
                    sum += i64::from(coeff);
                }
            }

            let off = (y - band.rows.start) * band.stride + x * 8;
            let out = &mut band.pix[off..off + 8];
            for (c, a) in acc.into_iter().enumerate() {
                let v = (a / sum).clamp(0, 0xffff) as u16;
                out[c * 2..c * 2 + 2].copy_from_slice(&v.to_be_bytes());
            }
        }
    }
}

pub(crate) fn nearest8<const CH: usize>(src: &Rows<'_>, band: &mut Band<'_>, weights: &Weights<bool>) {
    let max_x = src.width as isize - 1;

    for x in 0..src.height {
        let row = &src.pix[x * src.stride..];
        for y in band.rows.clone() {
            let mut acc = [0i32; CH];
            let mut count = 0i32;
            let start = weights.starts[y];

            for (i, &coeff) in weights.row(y).iter().enumerate() {
                if coeff {
                    let xi = (start + i as isize).clamp(0, max_x) as usize;
                    let px = &row[xi * CH..xi * CH + CH];
                    for (a, &s) in acc.iter_mut().zip(px) {
                        *a += i32::from(s);
                    }
                    count += 1;
                }
            }

            let off = (y - band.rows.start) * band.stride + x * CH;
            for (o, a) in band.pix[off..off + CH].iter_mut().zip(acc) {
                let v = a / count;
                *o = if v > 0xfe { 0xff } else { v as u8 };
            }
        }
    }
}

pub(crate) fn nearest16<const CH: usize>(src: &Rows<'_>, band: &mut Band<'_>, weights: &Weights<bool>) {
    let max_x = src.width as isize - 1;

    for x in 0..src.height {
        let row = &src.pix[x * src.stride..];
        for y in band.rows.clone() {
            let mut acc = [0i64; CH];
            let mut count = 0i64;
            let start = weights.starts[y];

            for (i, &coeff) in weights.row(y).iter().enumerate() {
                if coeff {
                    let xi = (start + i as isize).clamp(0, max_x) as usize;
                    let px = &row[xi * CH * 2..(xi + 1) * CH * 2];
                    for (c, a) in acc.iter_mut().enumerate() {
                        *a += i64::from(u16::from_be_bytes([px[c * 2], px[c * 2 + 1]]));
                    }
                    count += 1;
                }
            }

            let off = (y - band.rows.start) * band.stride + x * CH * 2;
            let out = &mut band.pix[off..off + CH * 2];
            for (c, a) in acc.into_iter().enumerate() {
                let v = a / count;
                let v = if v > 0xfffe { 0xffff } else { v as u16 };
                out[c * 2..c * 2 + 2].copy_from_slice(&v.to_be_bytes());
            }
        }
    }
}

pub(crate) fn nearest_generic(src: &dyn PixelSource, band: &mut Band<'_>, weights: &Weights<bool>) {
    let bounds = src.bounds();
    let res = bounds.res();
    let max_x = res.w as isize - 1;

    for x in 0..res.h as usize {
        for y in band.rows.clone() {
            let mut acc = [0i64; 4];
            let mut count = 0i64;
            let start = weights.starts[y];

            for (i, &coeff) in weights.row(y).iter().enumerate() {
                if coeff {
                    let xi = (start + i as isize).clamp(0, max_x) as i32;
                    let px = src.rgba64(bounds.min.x + xi, bounds.min.y + x as i32);
                    for (a, s) in acc.iter_mut().zip(px) {
                        *a += i64::from(s);
                    }
                    count += 1;
                }
            }

            let off = (y - band.rows.start) * band.stride + x * 8;
            let out = &mut band.pix[off..off + 8];
            for (c, a) in acc.into_iter().enumerate() {
                let v = a / count;
                let v = if v > 0xfffe { 0xffff } else { v as u16 };
                out[c * 2..c * 2 + 2].copy_from_slice(&v.to_be_bytes());
            }
        }
    }
}
