//! Slater parametrisation of the fully rotationally invariant Coulomb interaction.

use std::fmt;
use std::str::FromStr;

use derive_builder::Builder;
use itertools::Itertools;
use log;
use ndarray::{Array2, Array4, Zip};
use num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::angmom::cubic_harmonics::{spherical_to_cubic, CubicConvention};
use crate::angmom::wigner::{angular_prefactor, angular_q_sum};
use crate::angmom::{shell_dimension, ANGMOM_LABELS, MAX_SUPPORTED_L};
use crate::interaction::radial_integrals::u_j_to_radial_integrals;
use crate::interaction::reduction::reduce_4index_to_2index;
use crate::interaction::transformation::transform_u_matrix;
use crate::interaction::{ComplexUMatrix, InteractionError, RealUMatrix, TransformationMatrix};
use crate::io::format::nice_bool;

#[cfg(test)]
#[path = "slater_tests.rs"]
mod slater_tests;

/// Absolute tolerance for deciding whether explicitly provided radial integrals agree with those
/// derived from $`U`$ and $`J`$.
const RADIAL_INTEGRAL_TOLERANCE: f64 = 1e-10;

// ==================
// Struct definitions
// ==================

// -----
// Basis
// -----

/// An enumerated type for the single-particle bases in which the Slater interaction tensor can be
/// expressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionBasis {
    /// Complex spherical harmonics $`Y_l^{-l}, \ldots, Y_l^l`$.
    #[default]
    Spherical,

    /// Cubic harmonics, ordered according to a [`CubicConvention`].
    Cubic,

    /// A user-defined basis given by an explicit transformation matrix.
    Other,
}

impl FromStr for InteractionBasis {
    type Err = InteractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spherical" => Ok(InteractionBasis::Spherical),
            "cubic" => Ok(InteractionBasis::Cubic),
            "other" => Ok(InteractionBasis::Other),
            _ => Err(InteractionError::UnknownBasis(s.to_string())),
        }
    }
}

impl fmt::Display for InteractionBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteractionBasis::Spherical => write!(f, "spherical"),
            InteractionBasis::Cubic => write!(f, "cubic"),
            InteractionBasis::Other => write!(f, "other"),
        }
    }
}

// ----------
// Parameters
// ----------

/// A structure containing control parameters for the construction of the Slater interaction
/// tensor.
///
/// Either [`Self::radial_integrals`], or both [`Self::u_int`] and [`Self::j_hund`], must be
/// given. If all three are given, the radial integrals take precedence.
#[derive(Clone, Builder, Debug, Serialize, Deserialize)]
pub struct SlaterParams {
    /// The angular momentum of the shell ($`l = 2`$ for a $`d`$ shell, $`l = 3`$ for an $`f`$
    /// shell).
    pub l: u32,

    /// The radial Slater integrals $`[F_0, F_2, \ldots, F_{2l}]`$.
    #[builder(default = "None")]
    #[serde(default)]
    pub radial_integrals: Option<Vec<f64>>,

    /// The screened Hubbard interaction $`U`$.
    #[builder(default = "None")]
    #[serde(default)]
    pub u_int: Option<f64>,

    /// The Hund's coupling $`J`$.
    #[builder(default = "None")]
    #[serde(default)]
    pub j_hund: Option<f64>,

    /// The basis in which the interaction tensor is to be expressed.
    #[builder(default)]
    #[serde(default)]
    pub basis: InteractionBasis,

    /// The cubic-harmonic convention used when [`Self::basis`] is [`InteractionBasis::Cubic`].
    #[builder(default)]
    #[serde(default)]
    pub convention: CubicConvention,

    /// The transformation matrix $`\mathbf{T}`$ defining the new basis via
    /// $`b_{i\sigma}^\dagger = \sum_j T_{ij} a_{j\sigma}^\dagger`$. Required when [`Self::basis`]
    /// is [`InteractionBasis::Other`]; ignored when it is [`InteractionBasis::Cubic`].
    #[builder(default = "None")]
    #[serde(default)]
    pub transformation: Option<TransformationMatrix>,
}

impl SlaterParams {
    /// Returns a builder to construct a [`SlaterParams`] structure.
    pub fn builder() -> SlaterParamsBuilder {
        SlaterParamsBuilder::default()
    }

    /// Determines the radial integrals to be used for the construction of the interaction
    /// tensor, together with any diagnostics about the consistency of the inputs.
    ///
    /// # Errors
    ///
    /// Errors if neither the radial integrals nor both $`U`$ and $`J`$ are given, or if the
    /// number of radial integrals provided alongside $`U`$ and $`J`$ is not $`l+1`$.
    pub fn resolve_radial_integrals(
        &self,
    ) -> Result<(Vec<f64>, Vec<SlaterDiagnostic>), InteractionError> {
        match (self.radial_integrals.as_ref(), self.u_int, self.j_hund) {
            (None, Some(u_int), Some(j_hund)) => {
                Ok((u_j_to_radial_integrals(self.l, u_int, j_hund)?, vec![]))
            }
            (None, _, _) => Err(InteractionError::MissingInput(
                "provide either the radial integrals or both U_int and J_hund".to_string(),
            )),
            (Some(radial_integrals), Some(u_int), Some(j_hund)) => {
                if radial_integrals.len() != self.l as usize + 1 {
                    return Err(InteractionError::InconsistentInput(format!(
                        "{} radial integrals provided for l = {}, but {} expected",
                        radial_integrals.len(),
                        self.l,
                        self.l + 1
                    )));
                }
                let derived = u_j_to_radial_integrals(self.l, u_int, j_hund)?;
                let mismatched = radial_integrals
                    .iter()
                    .zip(derived.iter())
                    .any(|(provided, derived)| {
                        (provided - derived).abs() > RADIAL_INTEGRAL_TOLERANCE
                    });
                if mismatched {
                    let diagnostic = SlaterDiagnostic::RadialIntegralMismatch {
                        provided: radial_integrals.clone(),
                        derived,
                    };
                    log::debug!("{diagnostic}");
                    Ok((radial_integrals.clone(), vec![diagnostic]))
                } else {
                    Ok((radial_integrals.clone(), vec![]))
                }
            }
            (Some(radial_integrals), _, _) => Ok((radial_integrals.clone(), vec![])),
        }
    }
}

impl fmt::Display for SlaterParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shell_label = ANGMOM_LABELS
            .get(self.l as usize)
            .map(|label| label.to_lowercase())
            .unwrap_or_else(|| "?".to_string());
        writeln!(f, "Angular momentum: l = {} ({shell_label} shell)", self.l)?;
        writeln!(
            f,
            "Radial integrals: {}",
            self.radial_integrals
                .as_ref()
                .map(|radial_integrals| radial_integrals
                    .iter()
                    .map(|x| format!("{x:.6}"))
                    .join(", "))
                .unwrap_or_else(|| "--".to_string())
        )?;
        writeln!(
            f,
            "Screened Hubbard interaction U: {}",
            self.u_int
                .map(|u| format!("{u:.6}"))
                .unwrap_or_else(|| "--".to_string())
        )?;
        writeln!(
            f,
            "Hund's coupling J: {}",
            self.j_hund
                .map(|j| format!("{j:.6}"))
                .unwrap_or_else(|| "--".to_string())
        )?;
        writeln!(f, "Basis: {}", self.basis)?;
        if self.basis == InteractionBasis::Cubic {
            writeln!(f, "Cubic-harmonic convention: {}", self.convention)?;
        }
        writeln!(
            f,
            "Explicit transformation matrix: {}",
            nice_bool(self.transformation.is_some())
        )?;
        Ok(())
    }
}

// -----------
// Diagnostics
// -----------

/// An enumerated type for non-fatal diagnostics raised during the construction of the Slater
/// interaction tensor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SlaterDiagnostic {
    /// The explicitly provided radial integrals differ from those derived from $`U`$ and $`J`$.
    /// The provided radial integrals are used.
    RadialIntegralMismatch {
        /// The explicitly provided radial integrals.
        provided: Vec<f64>,

        /// The radial integrals derived from $`U`$ and $`J`$.
        derived: Vec<f64>,
    },
}

impl fmt::Display for SlaterDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlaterDiagnostic::RadialIntegralMismatch { provided, derived } => write!(
                f,
                "Radial integrals provided [{}] do not match those derived from U_int and J_hund \
                [{}]. The provided radial integrals are used.",
                provided.iter().map(|x| format!("{x:.6}")).join(", "),
                derived.iter().map(|x| format!("{x:.6}")).join(", "),
            ),
        }
    }
}

// ------
// Result
// ------

/// A structure containing a constructed Slater interaction tensor.
#[derive(Clone, Debug)]
pub struct SlaterUMatrix {
    /// The four-index interaction tensor in the requested basis.
    pub umat: ComplexUMatrix,

    /// The radial integrals used in the construction.
    pub radial_integrals: Vec<f64>,

    /// Non-fatal diagnostics raised during the construction.
    pub diagnostics: Vec<SlaterDiagnostic>,
}

impl SlaterUMatrix {
    /// Reduces the interaction tensor to its two-index density-density form. See
    /// [`reduce_4index_to_2index`].
    pub fn two_index(&self) -> (Array2<f64>, Array2<f64>) {
        reduce_4index_to_2index(&self.umat)
    }
}

// =========
// Functions
// =========

/// Calculates the four-index Slater interaction tensor in the basis of complex spherical
/// harmonics,
///
/// ```math
/// U_{m_1 m_2 m_3 m_4} = \sum_{k=0}^{2l} F_k\ \alpha(l, k, m_1, m_2, m_3, m_4),
/// ```
///
/// where $`\alpha`$ is given by [`crate::angmom::wigner::angular_matrix_element`] and $`k`$ runs
/// over the even multipoles associated with the radial integrals. The orbitals are ordered by
/// increasing $`m`$.
///
/// # Arguments
///
/// * `l` - The angular momentum of the shell.
/// * `radial_integrals` - The radial integrals $`[F_0, F_2, \ldots]`$.
///
/// # Returns
///
/// The real interaction tensor of dimensions $`(2l+1)^4`$.
///
/// # Errors
///
/// Errors if `l > 3`.
pub fn u_matrix_slater_spherical(
    l: u32,
    radial_integrals: &[f64],
) -> Result<RealUMatrix, InteractionError> {
    if l > MAX_SUPPORTED_L {
        return Err(InteractionError::UnsupportedAngularMomentum {
            l,
            context: "u_matrix_slater_spherical",
        });
    }
    let li = l as i32;
    let dim = shell_dimension(l);
    let weighted_prefactors = radial_integrals
        .iter()
        .enumerate()
        .map(|(n, f_k)| {
            let k = 2 * n as i32;
            (k, f_k * angular_prefactor(li, k))
        })
        .filter(|(_, weight)| *weight != 0.0)
        .collect_vec();

    let mut umat = Array4::<f64>::zeros((dim, dim, dim, dim));
    Zip::indexed(&mut umat).par_for_each(|(i1, i2, i3, i4), u| {
        let (m1, m2, m3, m4) = (
            i1 as i32 - li,
            i2 as i32 - li,
            i3 as i32 - li,
            i4 as i32 - li,
        );
        *u = weighted_prefactors
            .iter()
            .map(|&(k, weight)| weight * angular_q_sum(li, k, m1, m2, m3, m4))
            .sum();
    });
    Ok(umat)
}

/// Calculates the full four-index Slater interaction tensor in the basis requested by `params`.
///
/// The convention for the tensor is that of the Hamiltonian
///
/// ```math
/// \hat{H} = \frac{1}{2} \sum_{ijkl, \sigma\sigma'}
///     U_{ijkl}\ a_{i\sigma}^\dagger a_{j\sigma'}^\dagger a_{l\sigma'} a_{k\sigma}.
/// ```
///
/// The tensor is first built in the spherical-harmonic basis by [`u_matrix_slater_spherical`].
/// It is then transformed with [`spherical_to_cubic`] for [`InteractionBasis::Cubic`], or with
/// the supplied transformation matrix otherwise (if any).
///
/// # Arguments
///
/// * `params` - The control parameters.
///
/// # Returns
///
/// The interaction tensor together with the radial integrals used and any non-fatal
/// diagnostics. A mismatch between explicit radial integrals and $`(U, J)`$ is additionally
/// logged at debug level.
///
/// # Errors
///
/// Errors if `l > 3`, if the radial integrals cannot be determined (see
/// [`SlaterParams::resolve_radial_integrals`]), if the cubic convention is not defined for `l`,
/// if no transformation matrix is given for [`InteractionBasis::Other`], or if the
/// transformation matrix has incompatible dimensions.
pub fn u_matrix_slater(params: &SlaterParams) -> Result<SlaterUMatrix, InteractionError> {
    let l = params.l;
    if l > MAX_SUPPORTED_L {
        return Err(InteractionError::UnsupportedAngularMomentum {
            l,
            context: "u_matrix_slater",
        });
    }
    let (radial_integrals, diagnostics) = params.resolve_radial_integrals()?;

    let tmat_opt = match params.basis {
        InteractionBasis::Cubic => Some(spherical_to_cubic(l, params.convention)?),
        InteractionBasis::Other => Some(
            params
                .transformation
                .clone()
                .ok_or(InteractionError::MissingTransformation)?,
        ),
        InteractionBasis::Spherical => params.transformation.clone(),
    };

    let umat_spherical = u_matrix_slater_spherical(l, &radial_integrals)?;
    let umat = match tmat_opt {
        Some(tmat) => {
            log::debug!("Transforming the Slater interaction tensor to the {} basis.", params.basis);
            transform_u_matrix(&umat_spherical, &tmat)?
        }
        None => umat_spherical.mapv(Complex::from),
    };

    Ok(SlaterUMatrix {
        umat,
        radial_integrals,
        diagnostics,
    })
}
