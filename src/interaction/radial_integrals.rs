//! Conversion between screened interaction parameters and radial Slater integrals.

use crate::interaction::InteractionError;

#[cfg(test)]
#[path = "radial_integrals_tests.rs"]
mod radial_integrals_tests;

/// The ratio $`F_4/F_2`$ for $`d`$ shells.
const D_F4_OVER_F2: f64 = 0.63;

/// The ratio $`F_4/F_2`$ for $`f`$ shells.
const F_F4_OVER_F2: f64 = 451.0 / 675.0;

/// The ratio $`F_6/F_2`$ for $`f`$ shells.
const F_F6_OVER_F2: f64 = 1001.0 / 2025.0;

/// Returns the factor $`c_l`$ such that $`J = F_2 / c_l`$.
fn hund_factor(l: u32, context: &'static str) -> Result<f64, InteractionError> {
    match l {
        1 => Ok(5.0),
        2 => Ok(14.0 / (1.0 + D_F4_OVER_F2)),
        3 => Ok(6435.0 / (286.0 + 195.0 * F_F4_OVER_F2 + 250.0 * F_F6_OVER_F2)),
        _ => Err(InteractionError::UnsupportedAngularMomentum { l, context }),
    }
}

/// Determines the radial Slater integrals $`[F_0, F_2, \ldots, F_{2l}]`$ from the screened
/// Hubbard interaction $`U`$ and the Hund's coupling $`J`$.
///
/// The higher multipoles are fixed to their atomic ratios: $`F_4/F_2 = 0.63`$ for $`d`$ shells,
/// and $`F_4/F_2 = 451/675`$ and $`F_6/F_2 = 1001/2025`$ for $`f`$ shells.
///
/// # Arguments
///
/// * `l` - The angular momentum of the shell ($`1 \le l \le 3`$).
/// * `u_int` - The screened Hubbard interaction $`U`$.
/// * `j_hund` - The Hund's coupling $`J`$.
///
/// # Returns
///
/// The $`l+1`$ radial integrals.
///
/// # Errors
///
/// Errors if `l` is not 1, 2, or 3.
pub fn u_j_to_radial_integrals(
    l: u32,
    u_int: f64,
    j_hund: f64,
) -> Result<Vec<f64>, InteractionError> {
    let f2 = j_hund * hund_factor(l, "u_j_to_radial_integrals")?;
    let radial_integrals = match l {
        1 => vec![u_int, f2],
        2 => vec![u_int, f2, D_F4_OVER_F2 * f2],
        _ => vec![u_int, f2, F_F4_OVER_F2 * f2, F_F6_OVER_F2 * f2],
    };
    Ok(radial_integrals)
}

/// Determines the screened Hubbard interaction $`U`$ and the Hund's coupling $`J`$ from the
/// radial Slater integrals.
///
/// Only $`F_0`$ and $`F_2`$ enter the conversion; the higher multipoles are assumed to be in
/// the ratios used by [`u_j_to_radial_integrals`].
///
/// # Arguments
///
/// * `l` - The angular momentum of the shell ($`1 \le l \le 3`$).
/// * `radial_integrals` - The radial integrals $`[F_0, F_2, \ldots, F_{2l}]`$.
///
/// # Returns
///
/// The pair $`(U, J)`$.
///
/// # Errors
///
/// Errors if `l` is not 1, 2, or 3, or if the number of radial integrals is not $`l+1`$.
pub fn radial_integrals_to_u_j(
    l: u32,
    radial_integrals: &[f64],
) -> Result<(f64, f64), InteractionError> {
    let factor = hund_factor(l, "radial_integrals_to_u_j")?;
    if radial_integrals.len() != l as usize + 1 {
        return Err(InteractionError::InconsistentInput(format!(
            "{} radial integrals provided for l = {l}, but {} expected",
            radial_integrals.len(),
            l + 1
        )));
    }
    Ok((radial_integrals[0], radial_integrals[1] / factor))
}
