// Analytic 1D reconstruction kernels.
//
// See http://cs.brown.edu/courses/cs123/lectures/08_Image_Processing_IV.pdf
// for some of the theory behind image scaling and convolution.

use derive_more::Display;

/// Available sampling filters.
#[derive(Debug, Display, Default, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    /// Nearest neighbour, no blending.
    NearestNeighbor,

    /// Linear (triangle) filter.
    Bilinear,

    /// Catmull-Rom style cubic hermite.
    Bicubic,

    /// Mitchell-Netravali cubic, B = C = 1/3.
    MitchellNetravali,

    /// Sinc-windowed sinc with a radius of 2.
    Lanczos2,

    /// Sinc-windowed sinc with a radius of 3.
    #[default]
    Lanczos3,
}

impl FilterType {
    /// Support width of the kernel in taps.
    pub(crate) const fn taps(self) -> usize {
        match self {
            Self::NearestNeighbor | Self::Bilinear => 2,
            Self::Bicubic | Self::MitchellNetravali | Self::Lanczos2 => 4,
            Self::Lanczos3 => 6,
        }
    }

    pub(crate) fn kernel(self) -> fn(f64) -> f64 {
        match self {
            Self::NearestNeighbor => nearest,
            Self::Bilinear => linear,
            Self::Bicubic => bicubic,
            Self::MitchellNetravali => mitchell,
            Self::Lanczos2 => lanczos2,
            Self::Lanczos3 => lanczos3,
        }
    }
}

// sinc function: the ideal sampling filter.
fn sinc(x: f64) -> f64 {
    let a = x.abs() * std::f64::consts::PI;

    if a >= 1.220703e-4 { a.sin() / a } else { 1.0 }
}

// lanczos kernel function. A windowed sinc function.
fn lanczos(x: f64, t: f64) -> f64 {
    if x.abs() < t { sinc(x) * sinc(x / t) } else { 0.0 }
}

// Calculate a splice based on the b and c parameters,
// from authors Mitchell and Netravali.
fn cubic_bc(b: f64, c: f64, x: f64) -> f64 {
    let a = x.abs();

    let k = if a < 1.0 {
        (12.0 - 9.0 * b - 6.0 * c) * a.powi(3)
            + (-18.0 + 12.0 * b + 6.0 * c) * a.powi(2)
            + (6.0 - 2.0 * b)
    } else if a < 2.0 {
        (-b - 6.0 * c) * a.powi(3)
            + (6.0 * b + 30.0 * c) * a.powi(2)
            + (-12.0 * b - 48.0 * c) * a
            + (8.0 * b + 24.0 * c)
    } else {
        0.0
    };

    k / 6.0
}

fn nearest(x: f64) -> f64 {
    if (-0.5..0.5).contains(&x) { 1.0 } else { 0.0 }
}

/// Calculate the triangle function.
/// Also known as `Bilinear` sampling in two dimensions.
fn linear(x: f64) -> f64 {
    let a = x.abs();
    if a < 1.0 { 1.0 - a } else { 0.0 }
}

/// Calculate the Catmull-Rom cubic spline.
/// Also known as a form of `Bicubic` sampling in two dimensions.
fn bicubic(x: f64) -> f64 {
    cubic_bc(0.0, 0.5, x)
}

fn mitchell(x: f64) -> f64 {
    cubic_bc(1.0 / 3.0, 1.0 / 3.0, x)
}

/// Calculate the lanczos kernel with a window of 2.
fn lanczos2(x: f64) -> f64 {
    lanczos(x, 2.0)
}

/// Calculate the lanczos kernel with a window of 3.
fn lanczos3(x: f64) -> f64 {
    lanczos(x, 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn unit_at_zero() {
        for f in [nearest, linear, bicubic, lanczos2, lanczos3] {
            close(f(0.0), 1.0);
        }
        // Mitchell trades ringing for blur and does not interpolate exactly.
        close(mitchell(0.0), 8.0 / 9.0);
    }

    #[test]
    fn zero_at_integers() {
        for f in [linear, bicubic, lanczos2, lanczos3] {
            for t in [1.0f64, 2.0, -1.0, -2.0] {
                close(f(t), 0.0);
            }
        }
        close(lanczos3(-3.0), 0.0);
    }

    #[test]
    fn support_edges() {
        close(nearest(-0.5), 1.0);
        close(nearest(0.5), 0.0);
        close(linear(0.25), 0.75);
        close(lanczos2(2.5), 0.0);
        close(lanczos3(3.5), 0.0);
    }

    #[test]
    fn mitchell_is_continuous_at_one() {
        let inner = mitchell(1.0 - 1e-9);
        let outer = mitchell(1.0 + 1e-9);
        assert!((inner - outer).abs() < 1e-6);
    }

    #[test]
    fn taps_match_support() {
        assert_eq!(FilterType::NearestNeighbor.taps(), 2);
        assert_eq!(FilterType::Bilinear.taps(), 2);
        assert_eq!(FilterType::Bicubic.taps(), 4);
        assert_eq!(FilterType::MitchellNetravali.taps(), 4);
        assert_eq!(FilterType::Lanczos2.taps(), 4);
        assert_eq!(FilterType::Lanczos3.taps(), 6);
    }

    #[test]
    fn default_is_lanczos3() {
        assert_eq!(FilterType::default(), FilterType::Lanczos3);
    }
}
