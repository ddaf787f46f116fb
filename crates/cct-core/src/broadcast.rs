//! Elementwise dispatch of scalar kernels over n-dimensional arrays.
//!
//! Colour temperature conversions are defined on single values: one
//! temperature in, one `(u, v)` pair out, or the reverse. This module lifts
//! such scalar kernels to arrays of any rank while preserving the batch shape:
//!
//! - [`map_scalars_to_pairs`] - shape `S` becomes `S + [2]`
//! - [`map_pairs_to_scalars`] - shape `S + [2]` becomes `S`
//!
//! Elements are visited in logical (row-major) order regardless of the memory
//! layout of the input, so transposed or sliced views give the same answer as
//! their contiguous copies.
//!
//! # NaN handling
//!
//! Floating point never traps in Rust. A kernel that divides by zero or
//! overflows produces NaN/Inf for that element only; the remaining elements
//! of the batch are unaffected and nothing here inspects the values.
//!
//! # Parallelism
//!
//! With the `parallel` feature (on by default) elements are evaluated on the
//! rayon thread pool. Elements are independent, so output is identical to the
//! serial path.

use ndarray::{ArrayBase, ArrayD, Data, Dimension, IxDyn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{Error, Result};

/// Length of the trailing axis holding a chromaticity pair.
pub const PAIR_AXIS_LEN: usize = 2;

/// Evaluates `kernel` over a flat list of inputs.
#[cfg(feature = "parallel")]
fn map_values<T, R, F>(values: &[T], kernel: F) -> Vec<R>
where
    T: Copy + Sync,
    R: Send,
    F: Fn(T) -> R + Sync + Send,
{
    values.par_iter().map(|&value| kernel(value)).collect()
}

/// Evaluates `kernel` over a flat list of inputs (single-threaded fallback).
#[cfg(not(feature = "parallel"))]
fn map_values<T, R, F>(values: &[T], kernel: F) -> Vec<R>
where
    T: Copy + Sync,
    R: Send,
    F: Fn(T) -> R + Sync + Send,
{
    values.iter().map(|&value| kernel(value)).collect()
}

/// Applies a scalar-to-pair kernel to every element of `input`.
///
/// The output has the shape of `input` with a trailing axis of length 2
/// appended. A rank-0 input yields an output of shape `[2]`.
///
/// # Errors
///
/// Returns [`Error::Shape`] if the output shape overflows `usize`.
///
/// # Example
///
/// ```rust
/// use cct_core::broadcast::map_scalars_to_pairs;
/// use ndarray::array;
///
/// let input = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
/// let out = map_scalars_to_pairs(&input, |x| [x, -x]).unwrap();
///
/// assert_eq!(out.shape(), &[2, 3, 2]);
/// assert_eq!(out[[1, 2, 1]], -6.0);
/// ```
pub fn map_scalars_to_pairs<S, D, F>(input: &ArrayBase<S, D>, kernel: F) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
    F: Fn(f64) -> [f64; 2] + Sync + Send,
{
    let values: Vec<f64> = input.iter().copied().collect();
    let pairs: Vec<f64> = map_values(&values, kernel).into_iter().flatten().collect();

    let mut shape = input.shape().to_vec();
    shape.push(PAIR_AXIS_LEN);

    Ok(ArrayD::from_shape_vec(IxDyn(&shape), pairs)?)
}

/// Applies a pair-to-scalar kernel to every trailing pair of `input`.
///
/// The trailing axis of `input` must have length 2; all leading axes are
/// batch axes and are preserved. A rank-1 input of shape `[2]` yields a
/// rank-0 output.
///
/// # Errors
///
/// Returns [`Error::TrailingAxis`] when `input` is rank-0 or its trailing
/// axis is not of length 2.
///
/// # Example
///
/// ```rust
/// use cct_core::broadcast::map_pairs_to_scalars;
/// use ndarray::array;
///
/// let input = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
/// let out = map_pairs_to_scalars(&input, |[a, b]| a + b).unwrap();
///
/// assert_eq!(out.shape(), &[3]);
/// assert_eq!(out[[2]], 11.0);
/// ```
pub fn map_pairs_to_scalars<S, D, F>(input: &ArrayBase<S, D>, kernel: F) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
    F: Fn([f64; 2]) -> f64 + Sync + Send,
{
    let shape = input.shape();
    let batch_shape = match shape.split_last() {
        Some((&PAIR_AXIS_LEN, batch)) => batch.to_vec(),
        Some((&got, _)) => return Err(Error::trailing_axis(PAIR_AXIS_LEN, Some(got), shape)),
        None => return Err(Error::trailing_axis(PAIR_AXIS_LEN, None, shape)),
    };

    let pairs: Vec<[f64; 2]> = input
        .iter()
        .copied()
        .collect::<Vec<f64>>()
        .chunks_exact(PAIR_AXIS_LEN)
        .map(|pair| [pair[0], pair[1]])
        .collect();
    let values = map_values(&pairs, kernel);

    Ok(ArrayD::from_shape_vec(IxDyn(&batch_shape), values)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr0, array, Array1, Axis};

    #[test]
    fn test_scalars_to_pairs_rank0() {
        let out = map_scalars_to_pairs(&arr0(3.0), |x| [x, 2.0 * x]).unwrap();
        assert_eq!(out.shape(), &[2]);
        assert_eq!(out[[0]], 3.0);
        assert_eq!(out[[1]], 6.0);
    }

    #[test]
    fn test_scalars_to_pairs_logical_order() {
        let input = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let transposed = input.t();
        let out = map_scalars_to_pairs(&transposed, |x| [x, x + 0.5]).unwrap();

        assert_eq!(out.shape(), &[3, 2, 2]);
        // Transposed view: element [2, 0] is 3.0
        assert_eq!(out[[2, 0, 0]], 3.0);
        assert_eq!(out[[2, 0, 1]], 3.5);
        assert_eq!(out[[0, 1, 0]], 4.0);
    }

    #[test]
    fn test_scalars_to_pairs_contiguous() {
        let input = array![[1.0, 2.0], [3.0, 4.0]];
        let out = map_scalars_to_pairs(&input.t(), |x| [x, -x]).unwrap();

        assert!(out.is_standard_layout());
        assert_eq!(
            out.as_slice(),
            Some(&[1.0, -1.0, 3.0, -3.0, 2.0, -2.0, 4.0, -4.0][..])
        );
    }

    #[test]
    fn test_scalars_to_pairs_empty() {
        let input = Array1::<f64>::zeros(0);
        let out = map_scalars_to_pairs(&input, |x| [x, x]).unwrap();
        assert_eq!(out.shape(), &[0, 2]);
    }

    #[test]
    fn test_scalars_to_pairs_nan_isolated() {
        let input = array![1.0, 0.0, 4.0];
        let out = map_scalars_to_pairs(&input, |x| [1.0 / x, x.sqrt()]).unwrap();

        assert!(out[[1, 0]].is_infinite());
        assert_eq!(out[[0, 0]], 1.0);
        assert_eq!(out[[2, 1]], 2.0);
    }

    #[test]
    fn test_pairs_to_scalars_shapes() {
        let input = array![[[1.0, 2.0], [3.0, 4.0]], [[5.0, 6.0], [7.0, 8.0]]];
        let out = map_pairs_to_scalars(&input, |[a, b]| a * b).unwrap();

        assert_eq!(out.shape(), &[2, 2]);
        assert_eq!(out[[0, 1]], 12.0);
        assert_eq!(out[[1, 1]], 56.0);
    }

    #[test]
    fn test_pairs_to_scalars_rank1() {
        let out = map_pairs_to_scalars(&array![0.25, 0.75], |[a, b]| b - a).unwrap();
        assert_eq!(out.ndim(), 0);
        assert_eq!(out.sum(), 0.5);
    }

    #[test]
    fn test_pairs_to_scalars_trailing_axis() {
        let input = array![[1.0, 2.0, 3.0]];
        let err = map_pairs_to_scalars(&input, |[a, _]| a).unwrap_err();
        assert!(matches!(
            err,
            Error::TrailingAxis { expected: 2, got: Some(3), .. }
        ));

        let err = map_pairs_to_scalars(&arr0(1.0), |[a, _]| a).unwrap_err();
        assert!(matches!(err, Error::TrailingAxis { got: None, .. }));
    }

    #[test]
    fn test_round_trip_shape() {
        let input = Array1::linspace(1.0, 6.0, 6).into_shape_with_order((2, 3)).unwrap();
        let pairs = map_scalars_to_pairs(&input, |x| [x, 10.0 * x]).unwrap();
        let back = map_pairs_to_scalars(&pairs, |[_, b]| b / 10.0).unwrap();

        assert_eq!(back.shape(), input.shape());
        for (a, b) in back.iter().zip(input.iter()) {
            approx::assert_relative_eq!(*a, *b, max_relative = 1e-12);
        }
        assert_eq!(pairs.len_of(Axis(2)), 2);
    }
}
