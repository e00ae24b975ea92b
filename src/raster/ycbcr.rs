use std::fmt;

use derive_more::Display;

use super::{Raster, Rect, Res, Ycc, widen};
use crate::color;

/// Chroma subsampling of a planar [`YCbCrImage`].
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum SubsampleRatio {
    #[display(fmt = "4:4:4")]
    Ratio444,
    #[display(fmt = "4:4:0")]
    Ratio440,
    #[display(fmt = "4:2:2")]
    Ratio422,
    #[display(fmt = "4:2:0")]
    Ratio420,
}

impl SubsampleRatio {
    // Chroma plane resolution for the given bounds. Chroma samples are
    // co-sited with the top-left pixel of each cell.
    fn chroma_res(self, rect: Rect) -> Res {
        let half_w = ((rect.max.x + 1) / 2 - rect.min.x / 2).max(0) as u32;
        let half_h = ((rect.max.y + 1) / 2 - rect.min.y / 2).max(0) as u32;
        let full = rect.res();

        match self {
            Self::Ratio444 => full,
            Self::Ratio440 => Res { w: full.w, h: half_h },
            Self::Ratio422 => Res { w: half_w, h: full.h },
            Self::Ratio420 => Res { w: half_w, h: half_h },
        }
    }
}

/// Planar YCbCr: full-resolution luma plus chroma planes subsampled per the
/// ratio.
#[derive(Clone, PartialEq, Eq)]
pub struct YCbCrImage {
    y: Vec<u8>,
    cb: Vec<u8>,
    cr: Vec<u8>,
    y_stride: usize,
    c_stride: usize,
    rect: Rect,
    ratio: SubsampleRatio,
}

impl YCbCrImage {
    /// A zero-filled image covering `rect`.
    pub fn new(rect: Rect, ratio: SubsampleRatio) -> Self {
        let res = rect.res();
        let chroma = ratio.chroma_res(rect);
        let y_stride = res.w as usize;
        let c_stride = chroma.w as usize;
        Self {
            y: vec![0; y_stride * res.h as usize],
            cb: vec![0; c_stride * chroma.h as usize],
            cr: vec![0; c_stride * chroma.h as usize],
            y_stride,
            c_stride,
            rect,
            ratio,
        }
    }

    /// Wrap existing planes. Plane lengths must match `rect` and `ratio`.
    pub fn from_planes(rect: Rect, ratio: SubsampleRatio, y: Vec<u8>, cb: Vec<u8>, cr: Vec<u8>) -> Self {
        let mut img = Self::new(rect, ratio);
        assert_eq!(y.len(), img.y.len(), "luma plane does not cover {rect:?}");
        assert_eq!(cb.len(), img.cb.len(), "cb plane does not match {ratio}");
        assert_eq!(cr.len(), img.cr.len(), "cr plane does not match {ratio}");
        img.y = y;
        img.cb = cb;
        img.cr = cr;
        img
    }

    pub const fn bounds(&self) -> Rect {
        self.rect
    }

    pub const fn res(&self) -> Res {
        self.rect.res()
    }

    pub const fn ratio(&self) -> SubsampleRatio {
        self.ratio
    }

    pub fn y_plane(&self) -> &[u8] {
        &self.y
    }

    pub fn cb_plane(&self) -> &[u8] {
        &self.cb
    }

    pub fn cr_plane(&self) -> &[u8] {
        &self.cr
    }

    pub const fn y_stride(&self) -> usize {
        self.y_stride
    }

    pub const fn c_stride(&self) -> usize {
        self.c_stride
    }

    /// Index of the luma sample for (x, y) in bounds coordinates.
    pub const fn y_offset(&self, x: i32, y: i32) -> usize {
        (y - self.rect.min.y) as usize * self.y_stride + (x - self.rect.min.x) as usize
    }

    /// Index of the chroma sample covering (x, y) in bounds coordinates.
    pub const fn c_offset(&self, x: i32, y: i32) -> usize {
        let r = self.rect;
        match self.ratio {
            SubsampleRatio::Ratio444 => {
                (y - r.min.y) as usize * self.c_stride + (x - r.min.x) as usize
            }
            SubsampleRatio::Ratio440 => {
                (y / 2 - r.min.y / 2) as usize * self.c_stride + (x - r.min.x) as usize
            }
            SubsampleRatio::Ratio422 => {
                (y - r.min.y) as usize * self.c_stride + (x / 2 - r.min.x / 2) as usize
            }
            SubsampleRatio::Ratio420 => {
                (y / 2 - r.min.y / 2) as usize * self.c_stride + (x / 2 - r.min.x / 2) as usize
            }
        }
    }

    /// The (Y, Cb, Cr) triple at (x, y) in bounds coordinates.
    pub fn sample(&self, x: i32, y: i32) -> (u8, u8, u8) {
        let ci = self.c_offset(x, y);
        (self.y[self.y_offset(x, y)], self.cb[ci], self.cr[ci])
    }

    pub(crate) fn rgba64(&self, x: i32, y: i32) -> [u16; 4] {
        let (yy, cb, cr) = self.sample(x, y);
        let (r, g, b) = color::ycbcr_to_rgb(yy, cb, cr);
        [widen(r), widen(g), widen(b), 0xffff]
    }
}

impl fmt::Debug for YCbCrImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ycbcr {} {:?}]", self.ratio, self.rect)
    }
}

// Flatten planar YCbCr into the interleaved scratch layout, nearest-neighbour
// upsampling the chroma planes.
pub(crate) fn interleave(src: &YCbCrImage) -> Raster<Ycc> {
    let b = src.bounds();
    let res = b.res();
    let mut out = Raster::new(Rect::from(res));
    let stride = out.stride();
    let pix = out.as_bytes_mut();

    for y in 0..res.h as i32 {
        for x in 0..res.w as i32 {
            let (yy, cb, cr) = src.sample(b.min.x + x, b.min.y + y);
            let off = y as usize * stride + x as usize * 3;
            pix[off] = yy;
            pix[off + 1] = cb;
            pix[off + 2] = cr;
        }
    }
    out
}

// Split the interleaved scratch back into planes, taking each chroma cell
// from its co-sited top-left sample.
pub(crate) fn deinterleave(src: &Raster<Ycc>, ratio: SubsampleRatio) -> YCbCrImage {
    let res = src.res();
    let mut out = YCbCrImage::new(src.bounds(), ratio);

    for y in 0..res.h as usize {
        let row = src.row(y);
        let luma = &mut out.y[y * out.y_stride..(y + 1) * out.y_stride];
        for (l, px) in luma.iter_mut().zip(row.chunks_exact(3)) {
            *l = px[0];
        }
    }

    let chroma = ratio.chroma_res(src.bounds());
    for cy in 0..chroma.h as usize {
        let sy = match ratio {
            SubsampleRatio::Ratio444 | SubsampleRatio::Ratio422 => cy,
            SubsampleRatio::Ratio440 | SubsampleRatio::Ratio420 => cy * 2,
        };
        let row = src.row(sy);
        for cx in 0..chroma.w as usize {
            let sx = match ratio {
                SubsampleRatio::Ratio444 | SubsampleRatio::Ratio440 => cx,
                SubsampleRatio::Ratio422 | SubsampleRatio::Ratio420 => cx * 2,
            };
            let ci = cy * out.c_stride + cx;
            out.cb[ci] = row[sx * 3 + 1];
            out.cr[ci] = row[sx * 3 + 2];
        }
    }
    out
}
