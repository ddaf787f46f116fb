//! CIE 1960 UCS colourspace.
//!
//! ```text
//! U = 2X / 3
//! V = Y
//! W = (−X + 3Y + Z) / 2
//! u = U / (U + V + W),  v = V / (U + V + W)
//! ```
//!
//! The chromaticity divisions follow IEEE-754 semantics: a black stimulus
//! (`X = Y = Z = 0`) yields NaN coordinates.

/// Converts CIE XYZ tristimulus values to CIE 1960 UCS `UVW`.
///
/// # Example
///
/// ```rust
/// use cct_spectral::xyz_to_ucs;
///
/// let uvw = xyz_to_ucs([30.0, 40.0, 50.0]);
/// assert_eq!(uvw, [20.0, 40.0, 70.0]);
/// ```
#[inline]
pub fn xyz_to_ucs(xyz: [f64; 3]) -> [f64; 3] {
    let [x, y, z] = xyz;
    [2.0 * x / 3.0, y, 0.5 * (-x + 3.0 * y + z)]
}

/// Converts CIE 1960 UCS `UVW` to `uv` chromaticity coordinates.
#[inline]
pub fn ucs_to_uv(uvw: [f64; 3]) -> [f64; 2] {
    let [u, v, w] = uvw;
    let sum = u + v + w;
    [u / sum, v / sum]
}

/// Converts CIE XYZ tristimulus values to CIE 1960 UCS `uv` chromaticity.
///
/// # Example
///
/// ```rust
/// use cct_spectral::xyz_to_uv;
///
/// // D65 white
/// let [u, v] = xyz_to_uv([95.047, 100.0, 108.883]);
/// assert!((u - 0.197840).abs() < 1e-6);
/// assert!((v - 0.312224).abs() < 1e-6);
/// ```
#[inline]
pub fn xyz_to_uv(xyz: [f64; 3]) -> [f64; 2] {
    ucs_to_uv(xyz_to_ucs(xyz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_xyz_to_ucs() {
        let [u, v, w] = xyz_to_ucs([95.047, 100.0, 108.883]);
        assert_relative_eq!(u, 63.364666666666665, max_relative = 1e-12);
        assert_eq!(v, 100.0);
        assert_relative_eq!(w, 156.918, max_relative = 1e-12);
    }

    #[test]
    fn test_xyz_to_uv_matches_direct_form() {
        // u = 4X / (X + 15Y + 3Z), v = 6Y / (X + 15Y + 3Z)
        for xyz in [[20.0, 10.0, 5.0], [95.047, 100.0, 108.883], [0.1, 0.9, 0.3]] {
            let [x, y, z] = xyz;
            let d = x + 15.0 * y + 3.0 * z;
            let [u, v] = xyz_to_uv(xyz);
            assert_relative_eq!(u, 4.0 * x / d, max_relative = 1e-12);
            assert_relative_eq!(v, 6.0 * y / d, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_equal_energy_white() {
        let [u, v] = xyz_to_uv([1.0, 1.0, 1.0]);
        assert_relative_eq!(u, 4.0 / 19.0, max_relative = 1e-12);
        assert_relative_eq!(v, 6.0 / 19.0, max_relative = 1e-12);
    }

    #[test]
    fn test_black_is_nan() {
        let [u, v] = xyz_to_uv([0.0, 0.0, 0.0]);
        assert!(u.is_nan());
        assert!(v.is_nan());
    }
}
