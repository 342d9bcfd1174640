//! Coulomb interaction tensors.

use std::error::Error;
use std::fmt;

use ndarray::{Array2, Array4};
use num_complex::Complex;

pub mod kanamori;
pub mod radial_integrals;
pub mod reduction;
pub mod slater;
pub mod transformation;

/// A four-index interaction tensor $`U_{ijkl}`$ with real entries.
pub type RealUMatrix = Array4<f64>;

/// A four-index interaction tensor $`U_{ijkl}`$ with complex entries.
pub type ComplexUMatrix = Array4<Complex<f64>>;

/// A basis transformation matrix $`\mathbf{T}`$ whose rows are the new basis functions expressed
/// in the old basis.
pub type TransformationMatrix = Array2<Complex<f64>>;

/// An enumerated type for input-domain errors encountered when constructing interaction tensors.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionError {
    /// A required input has not been supplied. The associated string describes what is missing.
    MissingInput(String),

    /// Several supplied inputs contradict one another. The associated string describes the
    /// contradiction.
    InconsistentInput(String),

    /// The angular momentum is outside the range supported by the requested operation.
    UnsupportedAngularMomentum {
        /// The requested angular momentum.
        l: u32,

        /// The operation that does not support `l`.
        context: &'static str,
    },

    /// The basis convention name is not recognised.
    UnknownConvention(String),

    /// The basis convention is recognised but is not defined for the requested angular momentum.
    UnsupportedConvention {
        /// The name of the convention.
        convention: String,

        /// The requested angular momentum.
        l: u32,
    },

    /// The basis name is not recognised.
    UnknownBasis(String),

    /// A transformation matrix is required for a user-defined basis but none was supplied.
    MissingTransformation,
}

impl fmt::Display for InteractionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InteractionError::MissingInput(msg) => write!(f, "Missing input: {msg}."),
            InteractionError::InconsistentInput(msg) => write!(f, "Inconsistent input: {msg}."),
            InteractionError::UnsupportedAngularMomentum { l, context } => write!(
                f,
                "Unsupported angular momentum: {context} is not implemented for l = {l}."
            ),
            InteractionError::UnknownConvention(name) => {
                write!(f, "Unknown basis convention: `{name}`.")
            }
            InteractionError::UnsupportedConvention { convention, l } => write!(
                f,
                "Unsupported basis convention: `{convention}` is only implemented for l = 2, \
                but l = {l} was requested."
            ),
            InteractionError::UnknownBasis(name) => write!(f, "Unknown basis: `{name}`."),
            InteractionError::MissingTransformation => write!(
                f,
                "Missing input: a transformation matrix must be provided for `other` bases."
            ),
        }
    }
}

impl Error for InteractionError {}
