//! Conversion between complex spherical harmonics and cubic harmonics.
//!
//! Different electronic-structure codes order (and phase) the cubic harmonics of a shell
//! differently. The supported orderings are gathered in [`CubicConvention`].

use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;
use std::str::FromStr;

use ndarray::Array2;
use num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::angmom::{shell_dimension, ANGMOM_INDICES, ANGMOM_LABELS};
use crate::interaction::{InteractionError, TransformationMatrix};

#[cfg(test)]
#[path = "cubic_harmonics_tests.rs"]
mod cubic_harmonics_tests;

// ===========
// Conventions
// ===========

/// An enumerated type for the naming and ordering conventions of cubic harmonics.
///
/// The conventions differ only for $`d`$ shells. For other shells, only [`Self::Triqs`] and
/// [`Self::Vasp`] are defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CubicConvention {
    /// $`d`$ basis ordered as $`(xy, yz, z^2, xz, x^2-y^2)`$.
    #[default]
    Triqs,

    /// Same as [`Self::Triqs`].
    Vasp,

    /// $`d`$ basis ordered as $`(z^2, x^2-y^2, xy, yz, xz)`$, as used by the projectors of
    /// Wien2k's `dmftproj`.
    Wien2k,

    /// $`d`$ basis ordered as $`(z^2, xz, yz, x^2-y^2, xy)`$.
    Wannier90,

    /// Same as [`Self::Wannier90`].
    Qe,
}

impl CubicConvention {
    /// Returns the lowercase name of the convention.
    pub fn name(&self) -> &'static str {
        match self {
            CubicConvention::Triqs => "triqs",
            CubicConvention::Vasp => "vasp",
            CubicConvention::Wien2k => "wien2k",
            CubicConvention::Wannier90 => "wannier90",
            CubicConvention::Qe => "qe",
        }
    }

    /// Returns `true` if the convention is defined for $`d`$ shells only.
    pub fn is_d_only(&self) -> bool {
        matches!(
            self,
            CubicConvention::Wien2k | CubicConvention::Wannier90 | CubicConvention::Qe
        )
    }

    /// Returns the names of the $`d`$ cubic harmonics in the order of this convention.
    pub fn d_orbital_names(&self) -> &'static [&'static str] {
        match self {
            CubicConvention::Triqs | CubicConvention::Vasp => &D_NAMES_TRIQS,
            CubicConvention::Wien2k => &D_NAMES_WIEN2K,
            CubicConvention::Wannier90 | CubicConvention::Qe => &D_NAMES_WANNIER90,
        }
    }

    /// Returns the positions of the $`t_{2g}`$ orbitals in the $`d`$ basis of this convention.
    pub fn t2g_indices(&self) -> &'static [usize] {
        match self {
            CubicConvention::Triqs | CubicConvention::Vasp => &[0, 1, 3],
            CubicConvention::Wien2k => &[2, 3, 4],
            CubicConvention::Wannier90 | CubicConvention::Qe => &[1, 2, 4],
        }
    }

    /// Returns the positions of the $`e_g`$ orbitals in the $`d`$ basis of this convention.
    pub fn eg_indices(&self) -> &'static [usize] {
        match self {
            CubicConvention::Triqs | CubicConvention::Vasp => &[2, 4],
            CubicConvention::Wien2k => &[0, 1],
            CubicConvention::Wannier90 | CubicConvention::Qe => &[0, 3],
        }
    }
}

impl FromStr for CubicConvention {
    type Err = InteractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "triqs" => Ok(CubicConvention::Triqs),
            "vasp" => Ok(CubicConvention::Vasp),
            "wien2k" => Ok(CubicConvention::Wien2k),
            "wannier90" => Ok(CubicConvention::Wannier90),
            "qe" => Ok(CubicConvention::Qe),
            _ => Err(InteractionError::UnknownConvention(s.to_string())),
        }
    }
}

impl fmt::Display for CubicConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ==============
// Orbital shells
// ==============

/// An enumerated type for shells, or crystal-field manifolds of shells, whose cubic harmonics can
/// be named.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrbitalShell {
    /// The $`s`$ shell ($`l = 0`$).
    S,

    /// The $`p`$ shell ($`l = 1`$).
    P,

    /// The $`d`$ shell ($`l = 2`$).
    D,

    /// The $`f`$ shell ($`l = 3`$).
    F,

    /// The $`t_{2g}`$ manifold of the $`d`$ shell.
    T2g,

    /// The $`e_g`$ manifold of the $`d`$ shell.
    Eg,
}

impl TryFrom<u32> for OrbitalShell {
    type Error = InteractionError;

    fn try_from(l: u32) -> Result<Self, Self::Error> {
        match l {
            0 => Ok(OrbitalShell::S),
            1 => Ok(OrbitalShell::P),
            2 => Ok(OrbitalShell::D),
            3 => Ok(OrbitalShell::F),
            _ => Err(InteractionError::UnsupportedAngularMomentum {
                l,
                context: "cubic_names",
            }),
        }
    }
}

impl FromStr for OrbitalShell {
    type Err = InteractionError;

    /// Parses `s`, `p`, `d`, `f` (case-insensitive), `t2g`, and `eg`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "t2g" => Ok(OrbitalShell::T2g),
            "eg" => Ok(OrbitalShell::Eg),
            _ => {
                let l = ANGMOM_INDICES
                    .get(s.to_uppercase().as_str())
                    .copied()
                    .ok_or_else(|| {
                        InteractionError::InconsistentInput(format!(
                            "`{s}` is not a recognised shell label"
                        ))
                    })?;
                OrbitalShell::try_from(l)
            }
        }
    }
}

impl fmt::Display for OrbitalShell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrbitalShell::S => write!(f, "{}", ANGMOM_LABELS[0].to_lowercase()),
            OrbitalShell::P => write!(f, "{}", ANGMOM_LABELS[1].to_lowercase()),
            OrbitalShell::D => write!(f, "{}", ANGMOM_LABELS[2].to_lowercase()),
            OrbitalShell::F => write!(f, "{}", ANGMOM_LABELS[3].to_lowercase()),
            OrbitalShell::T2g => write!(f, "t2g"),
            OrbitalShell::Eg => write!(f, "eg"),
        }
    }
}

static S_NAMES: [&str; 1] = ["s"];
static P_NAMES: [&str; 3] = ["x", "y", "z"];
static D_NAMES_TRIQS: [&str; 5] = ["xy", "yz", "z^2", "xz", "x^2-y^2"];
static D_NAMES_WIEN2K: [&str; 5] = ["z^2", "x^2-y^2", "xy", "yz", "xz"];
static D_NAMES_WANNIER90: [&str; 5] = ["z^2", "xz", "yz", "x^2-y^2", "xy"];
static T2G_NAMES: [&str; 3] = ["xy", "yz", "xz"];
static EG_NAMES: [&str; 2] = ["z^2", "x^2-y^2"];
static F_NAMES: [&str; 7] = [
    "x(x^2-3y^2)",
    "z(x^2-y^2)",
    "xz^2",
    "z^3",
    "yz^2",
    "xyz",
    "y(3x^2-y^2)",
];

/// Returns the names of the cubic harmonics of a shell in the default ([`CubicConvention::Triqs`])
/// ordering.
///
/// # Arguments
///
/// * `shell` - The shell or $`d`$-shell manifold.
///
/// # Returns
///
/// The names of the orbitals.
pub fn cubic_names(shell: OrbitalShell) -> &'static [&'static str] {
    match shell {
        OrbitalShell::S => &S_NAMES,
        OrbitalShell::P => &P_NAMES,
        OrbitalShell::D => &D_NAMES_TRIQS,
        OrbitalShell::F => &F_NAMES,
        OrbitalShell::T2g => &T2G_NAMES,
        OrbitalShell::Eg => &EG_NAMES,
    }
}

/// Returns the names of the cubic harmonics of a shell of angular momentum `l`, ordered as the
/// rows of [`spherical_to_cubic`] for the same `l` and `convention`.
///
/// # Errors
///
/// Errors if `l > 3`, or if `convention` is defined only for $`d`$ shells and `l != 2`.
pub fn cubic_names_in_convention(
    l: u32,
    convention: CubicConvention,
) -> Result<&'static [&'static str], InteractionError> {
    let shell = OrbitalShell::try_from(l)?;
    match shell {
        OrbitalShell::D => Ok(convention.d_orbital_names()),
        _ if convention.is_d_only() => Err(InteractionError::UnsupportedConvention {
            convention: convention.name().to_string(),
            l,
        }),
        _ => Ok(cubic_names(shell)),
    }
}

// =======================
// Transformation matrices
// =======================

/// A non-vanishing entry $`(i, j, T_{ij})`$ of a transformation matrix.
type MatrixEntry = (usize, usize, Complex<f64>);

const ONE: Complex<f64> = Complex::new(1.0, 0.0);
const R: Complex<f64> = Complex::new(FRAC_1_SQRT_2, 0.0);
const MR: Complex<f64> = Complex::new(-FRAC_1_SQRT_2, 0.0);
const I: Complex<f64> = Complex::new(0.0, FRAC_1_SQRT_2);
const MI: Complex<f64> = Complex::new(0.0, -FRAC_1_SQRT_2);

static S_CUBIC: [MatrixEntry; 1] = [(0, 0, ONE)];

#[rustfmt::skip]
static P_CUBIC: [MatrixEntry; 5] = [
    (0, 0, R), (0, 2, MR),
    (1, 0, I), (1, 2, I),
    (2, 1, ONE),
];

#[rustfmt::skip]
static D_CUBIC_TRIQS: [MatrixEntry; 9] = [
    (0, 0, I), (0, 4, MI),
    (1, 1, I), (1, 3, I),
    (2, 2, ONE),
    (3, 1, R), (3, 3, MR),
    (4, 0, R), (4, 4, R),
];

#[rustfmt::skip]
static D_CUBIC_WIEN2K: [MatrixEntry; 9] = [
    (0, 2, ONE),
    (1, 0, R), (1, 4, R),
    (2, 0, MR), (2, 4, R),
    (3, 1, R), (3, 3, MR),
    (4, 1, R), (4, 3, R),
];

#[rustfmt::skip]
static D_CUBIC_WANNIER90: [MatrixEntry; 9] = [
    (0, 2, ONE),
    (1, 1, R), (1, 3, MR),
    (2, 1, I), (2, 3, I),
    (3, 0, R), (3, 4, R),
    (4, 0, I), (4, 4, MI),
];

#[rustfmt::skip]
static F_CUBIC: [MatrixEntry; 13] = [
    (0, 0, R), (0, 6, MR),
    (1, 1, R), (1, 5, R),
    (2, 2, R), (2, 4, MR),
    (3, 3, ONE),
    (4, 2, I), (4, 4, I),
    (5, 1, I), (5, 5, MI),
    (6, 0, I), (6, 6, I),
];

/// Looks up the non-vanishing entries of the spherical-to-cubic transformation matrix.
fn cubic_table(
    l: u32,
    convention: CubicConvention,
) -> Result<&'static [MatrixEntry], InteractionError> {
    if convention.is_d_only() && l != 2 {
        return Err(InteractionError::UnsupportedConvention {
            convention: convention.name().to_string(),
            l,
        });
    }
    match (l, convention) {
        (0, _) => Ok(&S_CUBIC),
        (1, _) => Ok(&P_CUBIC),
        (2, CubicConvention::Triqs | CubicConvention::Vasp) => Ok(&D_CUBIC_TRIQS),
        (2, CubicConvention::Wien2k) => Ok(&D_CUBIC_WIEN2K),
        (2, CubicConvention::Wannier90 | CubicConvention::Qe) => Ok(&D_CUBIC_WANNIER90),
        (3, _) => Ok(&F_CUBIC),
        _ => Err(InteractionError::UnsupportedAngularMomentum {
            l,
            context: "spherical_to_cubic",
        }),
    }
}

/// Obtains the transformation matrix $`\mathbf{T}`$ from complex spherical harmonics to cubic
/// harmonics.
///
/// The columns of $`\mathbf{T}`$ are indexed by the complex spherical harmonics
/// $`Y_l^{-l}, \ldots, Y_l^{l}`$ in increasing-$`m`$ order, and the rows by the cubic harmonics
/// in the order given by [`cubic_names_in_convention`]. The new creation operators are then
/// related to the old ones by
///
/// ```math
/// b_{i\sigma}^\dagger = \sum_j T_{ij} a_{j\sigma}^\dagger.
/// ```
///
/// # Arguments
///
/// * `l` - The angular momentum of the shell ($`0 \le l \le 3`$).
/// * `convention` - The ordering convention of the cubic harmonics.
///
/// # Returns
///
/// The unitary matrix $`\mathbf{T}`$ of dimensions $`(2l+1) \times (2l+1)`$.
///
/// # Errors
///
/// Errors if `l > 3`, or if `convention` is defined only for $`d`$ shells and `l != 2`.
pub fn spherical_to_cubic(
    l: u32,
    convention: CubicConvention,
) -> Result<TransformationMatrix, InteractionError> {
    let entries = cubic_table(l, convention)?;
    let dim = shell_dimension(l);
    let mut tmat = Array2::<Complex<f64>>::zeros((dim, dim));
    for &(i, j, value) in entries {
        tmat[(i, j)] = value;
    }
    log::debug!("Spherical-to-cubic matrix for l = {l} in the `{convention}` convention generated.");
    Ok(tmat)
}
