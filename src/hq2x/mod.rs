// HQ2x pixel-art magnifier. Every source pixel expands to a 2x2 block
// chosen by a 256-entry rule table indexed with a pattern byte describing
// which of the eight neighbours differ perceptually from the centre.

use rayon::iter::{IndexedParallelIterator, ParallelIterator};
use rayon::slice::ParallelSliceMut;

use self::table::expand;
use crate::color::rgb_to_ycbcr;
use crate::raster::{Raster, Rect, Res, Rgba8};
use crate::scale::POOL;

mod table;

// Perceptual similarity thresholds in YCbCr space.
const TR_Y: i32 = 48;
const TR_CB: i32 = 7;
const TR_CR: i32 = 6;

type Px = [u8; 4];
type Ycbcr = (u8, u8, u8);

fn diff(a: Ycbcr, b: Ycbcr) -> bool {
    (i32::from(a.0) - i32::from(b.0)).abs() > TR_Y
        || (i32::from(a.1) - i32::from(b.1)).abs() > TR_CB
        || (i32::from(a.2) - i32::from(b.2)).abs() > TR_CR
}

// Blending primitives of the published rule set. Integer division
// truncates; alpha is forced opaque on output.

fn mix(f: impl Fn(u32, u32, u32) -> u32, a: Px, b: Px, c: Px) -> Px {
    let ch = |k: usize| f(u32::from(a[k]), u32::from(b[k]), u32::from(c[k])) as u8;
    [ch(0), ch(1), ch(2), 0xff]
}

fn i1(a: Px, b: Px) -> Px {
    mix(|a, b, _| (3 * a + b) / 4, a, b, b)
}

fn i2(a: Px, b: Px, c: Px) -> Px {
    mix(|a, b, c| (2 * a + b + c) / 4, a, b, c)
}

fn i6(a: Px, b: Px, c: Px) -> Px {
    mix(|a, b, c| (5 * a + 2 * b + c) / 8, a, b, c)
}

fn i7(a: Px, b: Px, c: Px) -> Px {
    mix(|a, b, c| (6 * a + b + c) / 8, a, b, c)
}

fn i9(a: Px, b: Px, c: Px) -> Px {
    mix(|a, b, c| (2 * a + 3 * b + 3 * c) / 8, a, b, c)
}

fn i10(a: Px, b: Px, c: Px) -> Px {
    mix(|a, b, c| (14 * a + b + c) / 16, a, b, c)
}

/// Magnify an RGBA image to exactly twice its dimensions. Input alpha is
/// ignored; every output pixel is opaque.
pub fn hq2x(img: &Raster<Rgba8>) -> Raster<Rgba8> {
    let Res { w, h } = img.res();
    let mut out = Raster::new(Rect::new(0, 0, 2 * w as i32, 2 * h as i32));
    if w == 0 || h == 0 {
        return out;
    }

    let out_stride = out.stride();
    POOL.install(|| {
        // Each input row owns its two output rows, so workers never share
        // writable memory.
        out.as_bytes_mut()
            .par_chunks_exact_mut(out_stride * 2)
            .enumerate()
            .for_each(|(y, rows)| magnify_row(img, y, rows, out_stride));
    });
    out
}

fn magnify_row(src: &Raster<Rgba8>, y: usize, out_rows: &mut [u8], out_stride: usize) {
    let Res { w, h } = src.res();
    let (w, h) = (w as usize, h as usize);

    let px = |row: &[u8], x: usize| -> Px {
        [row[x * 4], row[x * 4 + 1], row[x * 4 + 2], row[x * 4 + 3]]
    };
    let to_yuv = |row: &[u8]| -> Vec<Ycbcr> {
        row.chunks_exact(4).map(|p| rgb_to_ycbcr(p[0], p[1], p[2])).collect()
    };

    // Out-of-range neighbours clamp to the nearest row and column,
    // replicating the edges.
    let rows3 = [src.row(y.saturating_sub(1)), src.row(y), src.row((y + 1).min(h - 1))];
    let yuv3 = rows3.map(to_yuv);

    let (top_out, bottom_out) = out_rows.split_at_mut(out_stride);

    for x in 0..w {
        let (xm, xp) = (x.saturating_sub(1), (x + 1).min(w - 1));
        let idx =
            [(0, xm), (0, x), (0, xp), (1, xm), (1, x), (1, xp), (2, xm), (2, x), (2, xp)];
        let w9 = idx.map(|(r, c)| px(rows3[r], c));
        let d9 = idx.map(|(r, c)| yuv3[r][c]);

        let mut pattern = 0u32;
        let mut flag = 1u32;
        for k in [0usize, 1, 2, 3, 5, 6, 7, 8] {
            if diff(d9[k], d9[4]) {
                pattern |= flag;
            }
            flag <<= 1;
        }

        let [tl, tr, bl, br] = expand(pattern as u8, &w9, &d9);
        store(&mut top_out[x * 8..x * 8 + 4], tl);
        store(&mut top_out[x * 8 + 4..x * 8 + 8], tr);
        store(&mut bottom_out[x * 8..x * 8 + 4], bl);
        store(&mut bottom_out[x * 8 + 4..x * 8 + 8], br);
    }
}

fn store(dst: &mut [u8], p: Px) {
    dst[0] = p[0];
    dst[1] = p[1];
    dst[2] = p[2];
    dst[3] = 0xff;
}
