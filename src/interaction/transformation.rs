//! Basis transformation of four-index interaction tensors.

use ndarray::{Array4, Ix4};
use ndarray_einsum_beta::*;
use num_complex::Complex;

use crate::interaction::{ComplexUMatrix, InteractionError, TransformationMatrix};

#[cfg(test)]
#[path = "transformation_tests.rs"]
mod transformation_tests;

/// Transforms a four-index interaction tensor into another basis.
///
/// The transformation matrix $`\mathbf{T}`$ relates the new creation operators
/// $`b^\dagger`$ to the old ones $`a^\dagger`$ by
///
/// ```math
/// b_{i\sigma}^\dagger = \sum_j T_{ij} a_{j\sigma}^\dagger,
/// ```
///
/// so that the interaction tensor transforms as
///
/// ```math
/// U'_{iknp} = \sum_{jlmo} T^*_{ij} T^*_{kl} U_{jlmo} T_{nm} T_{po}.
/// ```
///
/// $`\mathbf{T}`$ needs not be unitary for the contraction to be carried out, but only unitary
/// matrices describe a change between orthonormal bases.
///
/// # Arguments
///
/// * `umat` - The four-index interaction tensor in the old basis. Real tensors are promoted to
/// complex ones.
/// * `tmat` - The transformation matrix.
///
/// # Returns
///
/// The four-index interaction tensor in the new basis.
///
/// # Errors
///
/// Errors if the dimensions of `tmat` are incompatible with those of `umat`.
pub fn transform_u_matrix<T>(
    umat: &Array4<T>,
    tmat: &TransformationMatrix,
) -> Result<ComplexUMatrix, InteractionError>
where
    T: Copy + Into<Complex<f64>>,
{
    if umat.shape().iter().any(|&dim| dim != tmat.ncols()) {
        return Err(InteractionError::InconsistentInput(format!(
            "a transformation matrix of shape {:?} cannot act on a tensor of shape {:?}",
            tmat.shape(),
            umat.shape()
        )));
    }
    let umat_c = umat.mapv(|x| x.into());
    let tmat_conj = tmat.mapv(|x| x.conj());
    let tmat_t = tmat.t();
    einsum(
        "ij,kl,jlmo,mn,op->iknp",
        &[
            &tmat_conj.view(),
            &tmat_conj.view(),
            &umat_c.view(),
            &tmat_t,
            &tmat_t,
        ],
    )
    .map_err(|err| {
        InteractionError::InconsistentInput(format!(
            "unable to transform a tensor of shape {:?} with a matrix of shape {:?}: {err}",
            umat.shape(),
            tmat.shape()
        ))
    })?
    .into_dimensionality::<Ix4>()
    .map_err(|err| InteractionError::InconsistentInput(err.to_string()))
}
