//! 3-dimensional lookup table.
//!
//! A 3D LUT maps RGB input to RGB output through a cube of color values.
//! Common uses include color grading, look development, and display
//! calibration.

use crate::{LutError, LutResult};

/// A 3-dimensional lookup table.
///
/// Stores a cube of RGB samples indexed by input RGB. Standard sizes are
/// 17, 33, or 65 per axis.
///
/// # Structure
///
/// - `size^3` samples, each an RGB triple
/// - Stored in file order: red varies fastest, then green, then blue,
///   so grid position `(r, g, b)` lives at `r + g*size + b*size^2`
/// - Samples are unclamped; HDR and log-encoded LUTs may exceed [0, 1]
///
/// A `Lut3D` is immutable once constructed. Construction validates the
/// sample count against the edge length; mismatched inputs are rejected,
/// never truncated or padded.
///
/// # Example
///
/// ```rust
/// use gradelut::Lut3D;
///
/// let lut = Lut3D::identity(33);
/// let rgb = lut.apply([0.5, 0.3, 0.2]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lut3D {
    size: usize,
    samples: Vec<[f32; 3]>,
}

impl Lut3D {
    /// Creates a LUT from raw samples in red-fastest order.
    ///
    /// Fails with [`LutError::SampleCountMismatch`] unless
    /// `samples.len() == size^3`.
    pub fn from_samples(size: usize, samples: Vec<[f32; 3]>) -> LutResult<Self> {
        if size == 0 {
            return Err(LutError::MalformedHeader(
                "edge length must be positive".into(),
            ));
        }
        let expected = size * size * size;
        if samples.len() != expected {
            return Err(LutError::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self { size, samples })
    }

    /// Creates an identity (pass-through) LUT of the given edge length.
    ///
    /// Edge lengths below 2 cannot express a gradient and are clamped
    /// to 2, so the result always satisfies the size invariant.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gradelut::Lut3D;
    ///
    /// let lut = Lut3D::identity(17);
    /// let out = lut.apply([0.5, 0.3, 0.8]);
    /// assert!((out[0] - 0.5).abs() < 1e-4);
    /// ```
    pub fn identity(size: usize) -> Self {
        let size = size.max(2);
        let step = 1.0 / (size - 1) as f32;
        let mut samples = Vec::with_capacity(size * size * size);
        for b in 0..size {
            for g in 0..size {
                for r in 0..size {
                    samples.push([r as f32 * step, g as f32 * step, b as f32 * step]);
                }
            }
        }
        Self { size, samples }
    }

    /// Edge length of the cube (resolution per axis).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// All samples in file order (red-fastest).
    #[inline]
    pub fn samples(&self) -> &[[f32; 3]] {
        &self.samples
    }

    /// Total number of samples (`size^3`).
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Sample at grid position `(r, g, b)`.
    #[inline]
    fn get(&self, r: usize, g: usize, b: usize) -> [f32; 3] {
        self.samples[r + g * self.size + b * self.size * self.size]
    }

    /// Evaluates the LUT at an RGB value using trilinear interpolation.
    ///
    /// Input is clamped to the unit cube before lookup; output is
    /// whatever the surrounding samples interpolate to, unclamped.
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        if self.size == 1 {
            return self.samples[0];
        }
        let n = (self.size - 1) as f32;

        let r = rgb[0].clamp(0.0, 1.0) * n;
        let g = rgb[1].clamp(0.0, 1.0) * n;
        let b = rgb[2].clamp(0.0, 1.0) * n;

        let ri = (r.floor() as usize).min(self.size - 2);
        let gi = (g.floor() as usize).min(self.size - 2);
        let bi = (b.floor() as usize).min(self.size - 2);

        let rf = r - ri as f32;
        let gf = g - gi as f32;
        let bf = b - bi as f32;

        let c000 = self.get(ri, gi, bi);
        let c100 = self.get(ri + 1, gi, bi);
        let c010 = self.get(ri, gi + 1, bi);
        let c110 = self.get(ri + 1, gi + 1, bi);
        let c001 = self.get(ri, gi, bi + 1);
        let c101 = self.get(ri + 1, gi, bi + 1);
        let c011 = self.get(ri, gi + 1, bi + 1);
        let c111 = self.get(ri + 1, gi + 1, bi + 1);

        let mut out = [0.0f32; 3];
        for i in 0..3 {
            let c00 = c000[i] * (1.0 - rf) + c100[i] * rf;
            let c10 = c010[i] * (1.0 - rf) + c110[i] * rf;
            let c01 = c001[i] * (1.0 - rf) + c101[i] * rf;
            let c11 = c011[i] * (1.0 - rf) + c111[i] * rf;

            let c0 = c00 * (1.0 - gf) + c10 * gf;
            let c1 = c01 * (1.0 - gf) + c11 * gf;

            out[i] = c0 * (1.0 - bf) + c1 * bf;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_passes_through() {
        let lut = Lut3D::identity(17);
        let out = lut.apply([0.5, 0.3, 0.8]);
        assert!((out[0] - 0.5).abs() < 1e-4);
        assert!((out[1] - 0.3).abs() < 1e-4);
        assert!((out[2] - 0.8).abs() < 1e-4);
    }

    #[test]
    fn identity_corners() {
        let lut = Lut3D::identity(33);

        let black = lut.apply([0.0, 0.0, 0.0]);
        assert_eq!(black, [0.0, 0.0, 0.0]);

        let white = lut.apply([1.0, 1.0, 1.0]);
        assert!((white[0] - 1.0).abs() < 1e-5);

        let red = lut.apply([1.0, 0.0, 0.0]);
        assert!((red[0] - 1.0).abs() < 1e-5);
        assert!(red[1].abs() < 1e-5);
    }

    #[test]
    fn identity_clamps_degenerate_sizes() {
        for degenerate in [0, 1] {
            let lut = Lut3D::identity(degenerate);
            assert_eq!(lut.size(), 2);
            assert_eq!(lut.sample_count(), 8);
            let out = lut.apply([0.5, 0.5, 0.5]);
            assert!((out[0] - 0.5).abs() < 1e-5);
        }
    }

    #[test]
    fn input_clamps_to_unit_cube() {
        let lut = Lut3D::identity(9);
        let out = lut.apply([2.0, -1.0, 0.5]);
        assert!((out[0] - 1.0).abs() < 1e-5);
        assert!(out[1].abs() < 1e-5);
    }

    #[test]
    fn from_samples_rejects_bad_count() {
        let samples = vec![[0.0; 3]; 7];
        let err = Lut3D::from_samples(2, samples).unwrap_err();
        match err {
            crate::LutError::SampleCountMismatch { expected, actual } => {
                assert_eq!(expected, 8);
                assert_eq!(actual, 7);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn from_samples_keeps_order() {
        let samples: Vec<[f32; 3]> = (0..8).map(|i| [i as f32, 0.0, 0.0]).collect();
        let lut = Lut3D::from_samples(2, samples.clone()).unwrap();
        assert_eq!(lut.samples(), samples.as_slice());
    }
}
