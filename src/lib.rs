//! # Coulomb tensors for DFT+DMFT Hamiltonians
//!
//! `coulomb_tensors` constructs the two-body Coulomb interaction used in the local interaction
//! term of DFT+DMFT calculations,
//!
//! ```math
//! \hat{H}_{\mathrm{int}} = \frac{1}{2} \sum_{ijkl, \sigma\sigma'}
//!     U_{ijkl}\ a_{i\sigma}^\dagger a_{j\sigma'}^\dagger a_{l\sigma'} a_{k\sigma},
//! ```
//!
//! with the following capabilities:
//! - evaluation of Wigner $`3j`$ symbols, Clebsch--Gordan coefficients, and the angular matrix
//!   elements $`\alpha(l, k, m_1, m_2, m_3, m_4)`$ that couple them,
//! - conversion between the screened parameters $`(U, J)`$ and the radial Slater integrals
//!   $`F_k`$,
//! - construction of the full four-index Slater interaction tensor in the basis of complex
//!   spherical harmonics, cubic harmonics (in several code conventions), or any user-supplied
//!   basis,
//! - construction of the Kanamori interaction in two- or four-index form, and
//! - reduction of four-index tensors to density-density two-index form and extraction of the
//!   $`t_{2g}`$ and $`e_g`$ blocks of $`d`$-shell tensors.
//!
//! ## Getting started
//!
//! All numerical functionalities are pure functions living in [`angmom`] and [`interaction`].
//! For example, the Slater tensor of a $`d`$ shell in the cubic-harmonic basis is obtained by
//!
//! ```
//! use coulomb_tensors::interaction::slater::{u_matrix_slater, InteractionBasis, SlaterParams};
//!
//! let params = SlaterParams::builder()
//!     .l(2)
//!     .u_int(Some(4.0))
//!     .j_hund(Some(0.7))
//!     .basis(InteractionBasis::Cubic)
//!     .build()
//!     .unwrap();
//! let umat = u_matrix_slater(&params).unwrap();
//! assert_eq!(umat.umat.shape(), &[5, 5, 5, 5]);
//! ```
//!
//! The `coulomb` binary reads a YAML input file specifying `slater_interaction` and/or
//! `kanamori_interaction` sections and logs the resulting interaction matrices. See
//! [`interfaces::input`] for the input format.
//!
//! ## License
//!
//! GNU Lesser General Public License v3.0.

pub mod angmom;
pub mod drivers;
pub mod interaction;
pub mod interfaces;
pub mod io;
