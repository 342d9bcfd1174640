//! Reductions of interaction tensors and extraction of orbital sub-blocks.

use ndarray::{Array, Array2, Array4, ArrayBase, Axis, Data, Dimension, RemoveAxis, Zip};
use num_complex::ComplexFloat;

use crate::angmom::cubic_harmonics::CubicConvention;
use crate::interaction::InteractionError;

#[cfg(test)]
#[path = "reduction_tests.rs"]
mod reduction_tests;

/// Reduces a four-index interaction tensor to its two-index density-density form.
///
/// ```math
/// U'_{mm'} = \mathrm{Re}\, U_{mm'mm'}, \qquad
/// U_{mm'} = \mathrm{Re}\, U_{mm'mm'} - \mathrm{Re}\, U_{mm'm'm}.
/// ```
///
/// # Arguments
///
/// * `umat` - A four-index interaction tensor of shape $`(d, d, d, d)`$.
///
/// # Returns
///
/// The pair $`(\mathbf{U}, \mathbf{U}')`$ of same-spin and opposite-spin interaction matrices.
pub fn reduce_4index_to_2index<T>(umat: &Array4<T>) -> (Array2<f64>, Array2<f64>)
where
    T: ComplexFloat<Real = f64>,
{
    let dim = umat.shape()[0];
    let mut u = Array2::<f64>::zeros((dim, dim));
    let mut uprime = Array2::<f64>::zeros((dim, dim));
    Zip::indexed(&mut u)
        .and(&mut uprime)
        .for_each(|(m, mp), u_mmp, uprime_mmp| {
            let direct = umat[(m, mp, m, mp)].re();
            *u_mmp = direct - umat[(m, mp, mp, m)].re();
            *uprime_mmp = direct;
        });
    (u, uprime)
}

/// Extracts a sub-array by selecting, independently along every axis, a list of indices.
///
/// ```math
/// B_{i_0 i_1 \ldots i_n} = A_{s_0[i_0]\, s_1[i_1] \ldots s_n[i_n]}.
/// ```
///
/// # Arguments
///
/// * `arr` - The array of rank at least one.
/// * `indices` - One list of indices for each axis of `arr`.
///
/// # Returns
///
/// The extracted sub-array.
///
/// # Errors
///
/// Errors if the number of index lists differs from the rank of `arr`, or if any index is out
/// of bounds.
pub fn subarray<S, D>(
    arr: &ArrayBase<S, D>,
    indices: &[&[usize]],
) -> Result<Array<S::Elem, D>, InteractionError>
where
    S: Data,
    S::Elem: Clone,
    D: Dimension + RemoveAxis,
{
    if arr.ndim() == 0 || indices.len() != arr.ndim() {
        return Err(InteractionError::InconsistentInput(format!(
            "{} index lists provided for an array of rank {}",
            indices.len(),
            arr.ndim()
        )));
    }
    for (axis, (axis_indices, &len)) in indices.iter().zip(arr.shape().iter()).enumerate() {
        if let Some(index) = axis_indices.iter().find(|&&index| index >= len) {
            return Err(InteractionError::InconsistentInput(format!(
                "index {index} is out of bounds for axis {axis} of length {len}"
            )));
        }
    }
    let sub = indices
        .iter()
        .enumerate()
        .fold(arr.to_owned(), |acc, (axis, axis_indices)| {
            acc.select(Axis(axis), axis_indices)
        });
    Ok(sub)
}

/// Selects the same index subset along every axis of a $`d`$-shell array.
fn d_shell_subarray<S, D>(
    arr: &ArrayBase<S, D>,
    subset: &[usize],
) -> Result<Array<S::Elem, D>, InteractionError>
where
    S: Data,
    S::Elem: Clone,
    D: Dimension + RemoveAxis,
{
    if let Some(len) = arr.shape().iter().find(|&&len| len != 5) {
        return Err(InteractionError::InconsistentInput(format!(
            "a d-shell array must have axes of length 5, but an axis of length {len} was found"
        )));
    }
    subarray(arr, &vec![subset; arr.ndim()])
}

/// Extracts the $`t_{2g}`$ block of a two- or four-index $`d`$-shell array expressed in cubic
/// harmonics ordered according to `convention`.
///
/// # Errors
///
/// Errors if any axis of `arr` does not have length 5.
pub fn t2g_submatrix<S, D>(
    arr: &ArrayBase<S, D>,
    convention: CubicConvention,
) -> Result<Array<S::Elem, D>, InteractionError>
where
    S: Data,
    S::Elem: Clone,
    D: Dimension + RemoveAxis,
{
    d_shell_subarray(arr, convention.t2g_indices())
}

/// Extracts the $`e_g`$ block of a two- or four-index $`d`$-shell array expressed in cubic
/// harmonics ordered according to `convention`.
///
/// # Errors
///
/// Errors if any axis of `arr` does not have length 5.
pub fn eg_submatrix<S, D>(
    arr: &ArrayBase<S, D>,
    convention: CubicConvention,
) -> Result<Array<S::Elem, D>, InteractionError>
where
    S: Data,
    S::Elem: Clone,
    D: Dimension + RemoveAxis,
{
    d_shell_subarray(arr, convention.eg_indices())
}
