//! Kanamori parametrisation of the multi-orbital Coulomb interaction.

use std::fmt;

use derive_builder::Builder;
use ndarray::{Array2, Array4, Zip};
use serde::{Deserialize, Serialize};

use crate::interaction::{InteractionError, RealUMatrix};
use crate::io::format::nice_bool;

#[cfg(test)]
#[path = "kanamori_tests.rs"]
mod kanamori_tests;

// ==================
// Struct definitions
// ==================

/// A structure containing control parameters for the construction of the Kanamori interaction.
#[derive(Clone, Builder, Debug, Serialize, Deserialize)]
pub struct KanamoriParams {
    /// The number of orbitals.
    pub n_orb: usize,

    /// The intra-orbital interaction $`U`$.
    pub u_int: f64,

    /// The Hund's coupling $`J`$.
    pub j_hund: f64,

    /// The inter-orbital interaction $`U'`$. Defaults to $`U - 2J`$ when not given.
    #[builder(default = "None")]
    #[serde(default)]
    pub up_int: Option<f64>,

    /// Boolean indicating if the full four-index tensor is to be constructed instead of the
    /// two-index density-density matrices.
    #[builder(default = "false")]
    #[serde(default)]
    pub full_uijkl: bool,

    /// The pair-hopping amplitude $`J_C`$. Defaults to $`J`$ when not given. Only meaningful
    /// when [`Self::full_uijkl`] is `true`.
    #[builder(default = "None")]
    #[serde(default)]
    pub jc_hund: Option<f64>,
}

impl KanamoriParams {
    /// Returns a builder to construct a [`KanamoriParams`] structure.
    pub fn builder() -> KanamoriParamsBuilder {
        KanamoriParamsBuilder::default()
    }

    /// Returns the effective inter-orbital interaction $`U'`$.
    pub fn effective_up_int(&self) -> f64 {
        self.up_int.unwrap_or(self.u_int - 2.0 * self.j_hund)
    }

    /// Returns the effective pair-hopping amplitude $`J_C`$.
    pub fn effective_jc_hund(&self) -> f64 {
        self.jc_hund.unwrap_or(self.j_hund)
    }
}

impl fmt::Display for KanamoriParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of orbitals: {}", self.n_orb)?;
        writeln!(f, "Intra-orbital interaction U: {:.6}", self.u_int)?;
        writeln!(f, "Hund's coupling J: {:.6}", self.j_hund)?;
        writeln!(
            f,
            "Inter-orbital interaction U': {:.6}{}",
            self.effective_up_int(),
            if self.up_int.is_none() { " (U - 2J)" } else { "" }
        )?;
        writeln!(f, "Full four-index tensor: {}", nice_bool(self.full_uijkl))?;
        if self.full_uijkl {
            writeln!(
                f,
                "Pair-hopping amplitude J_C: {:.6}{}",
                self.effective_jc_hund(),
                if self.jc_hund.is_none() { " (J)" } else { "" }
            )?;
        }
        Ok(())
    }
}

/// An enumerated type for the two forms of the Kanamori interaction.
#[derive(Clone, Debug, PartialEq)]
pub enum KanamoriUMatrix {
    /// The density-density form.
    TwoIndex {
        /// The same-spin interaction matrix.
        u: Array2<f64>,

        /// The opposite-spin interaction matrix.
        uprime: Array2<f64>,
    },

    /// The full four-index tensor including spin-flip and pair-hopping terms.
    FourIndex(RealUMatrix),
}

// =========
// Functions
// =========

/// Constructs the Kanamori interaction.
///
/// In the density-density form,
///
/// ```math
/// U_{mm'} = (U' - J)(1 - \delta_{mm'}), \qquad
/// U'_{mm'} = U \delta_{mm'} + U' (1 - \delta_{mm'}).
/// ```
///
/// In the four-index form, $`U_{ijkl}`$ is $`U`$ if all indices coincide, otherwise $`U'`$ if
/// $`i = k, j = l`$, otherwise $`J`$ if $`i = l, j = k`$, otherwise $`J_C`$ if $`i = j, k = l`$,
/// and zero in all other cases.
///
/// # Arguments
///
/// * `params` - The control parameters.
///
/// # Errors
///
/// Errors if $`J_C`$ is given but the full four-index tensor is not requested.
pub fn u_matrix_kanamori(params: &KanamoriParams) -> Result<KanamoriUMatrix, InteractionError> {
    if params.jc_hund.is_some() && !params.full_uijkl {
        return Err(InteractionError::InconsistentInput(
            "the pair-hopping amplitude J_C can only be used with the full four-index tensor"
                .to_string(),
        ));
    }
    let n_orb = params.n_orb;
    let u_int = params.u_int;
    let j_hund = params.j_hund;
    let up_int = params.effective_up_int();

    if params.full_uijkl {
        let jc_hund = params.effective_jc_hund();
        let mut umat = Array4::<f64>::zeros((n_orb, n_orb, n_orb, n_orb));
        Zip::indexed(&mut umat).for_each(|(i, j, k, l), u| {
            *u = if i == j && j == k && k == l {
                u_int
            } else if i == k && j == l {
                up_int
            } else if i == l && j == k {
                j_hund
            } else if i == j && k == l {
                jc_hund
            } else {
                0.0
            };
        });
        Ok(KanamoriUMatrix::FourIndex(umat))
    } else {
        let mut u = Array2::<f64>::zeros((n_orb, n_orb));
        let mut uprime = Array2::<f64>::zeros((n_orb, n_orb));
        Zip::indexed(&mut u)
            .and(&mut uprime)
            .for_each(|(m, mp), u_mmp, uprime_mmp| {
                if m == mp {
                    *uprime_mmp = u_int;
                } else {
                    *u_mmp = up_int - j_hund;
                    *uprime_mmp = up_int;
                }
            });
        Ok(KanamoriUMatrix::TwoIndex { u, uprime })
    }
}
