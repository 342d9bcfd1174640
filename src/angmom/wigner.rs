//! Wigner $`3j`$ symbols, Clebsch--Gordan coefficients, and angular matrix elements of the
//! Coulomb interaction.

use factorial::Factorial;
use num::BigUint;
use num_traits::ToPrimitive;

#[cfg(test)]
#[path = "wigner_tests.rs"]
mod wigner_tests;

/// Returns $`(-1)^n`$ as a floating-point number.
fn parity_sign(n: i32) -> f64 {
    if n.rem_euclid(2) == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Computes $`n!`$ exactly and converts it to `f64`.
///
/// # Panics
///
/// Panics if `n` is negative. Callers only ever pass arguments whose non-negativity is guaranteed
/// by the summation bounds of the Racah formula.
fn fact(n: i32) -> f64 {
    let nu = u32::try_from(n).unwrap_or_else(|_| panic!("Unable to compute the factorial of {n}."));
    BigUint::from(nu)
        .checked_factorial()
        .unwrap_or_else(|| panic!("Unable to compute the factorial of {nu}."))
        .to_f64()
        .unwrap_or_else(|| panic!("Unable to convert the factorial of {nu} to `f64`."))
}

/// Calculates the Wigner $`3j`$ symbol
///
/// ```math
/// \begin{pmatrix}
///     j_1 & j_2 & j_3 \\
///     m_1 & m_2 & m_3
/// \end{pmatrix}
/// ```
///
/// using the Racah formula
///
/// ```math
/// (-1)^{j_1 - j_2 - m_3}
/// \sqrt{\Delta(j_1 j_2 j_3)}
/// \sqrt{\prod_{i=1}^{3} (j_i + m_i)! (j_i - m_i)!}
/// \sum_t \frac{(-1)^t}{t! (j_3 - j_2 + m_1 + t)! (j_3 - j_1 - m_2 + t)!
///     (j_1 + j_2 - j_3 - t)! (j_1 - m_1 - t)! (j_2 + m_2 - t)!}
/// ```
///
/// where $`\Delta(j_1 j_2 j_3) = (j_1+j_2-j_3)!(j_1-j_2+j_3)!(-j_1+j_2+j_3)!/(j_1+j_2+j_3+1)!`$
/// and $`t`$ runs over all integers for which every factorial argument is non-negative.
///
/// The symbol vanishes identically, without further computation, if $`m_1 + m_2 + m_3 \ne 0`$,
/// if any $`\lvert m_i \rvert > j_i`$, or if the triangle condition
/// $`\lvert j_1 - j_2 \rvert \le j_3 \le j_1 + j_2`$ is violated.
///
/// # Arguments
///
/// * `jm1` - The pair $`(j_1, m_1)`$.
/// * `jm2` - The pair $`(j_2, m_2)`$.
/// * `jm3` - The pair $`(j_3, m_3)`$.
///
/// # Returns
///
/// The value of the $`3j`$ symbol.
pub fn three_j_symbol(jm1: (i32, i32), jm2: (i32, i32), jm3: (i32, i32)) -> f64 {
    let (j1, m1) = jm1;
    let (j2, m2) = jm2;
    let (j3, m3) = jm3;

    if m1 + m2 + m3 != 0
        || m1 < -j1
        || m1 > j1
        || m2 < -j2
        || m2 > j2
        || m3 < -j3
        || m3 > j3
        || j3 > j1 + j2
        || j3 < (j1 - j2).abs()
    {
        return 0.0;
    }

    let mut three_j = parity_sign(j1 - j2 - m3);
    three_j *= (fact(j1 + j2 - j3) * fact(j1 - j2 + j3) * fact(-j1 + j2 + j3)
        / fact(j1 + j2 + j3 + 1))
    .sqrt();
    three_j *= (fact(j1 - m1)
        * fact(j1 + m1)
        * fact(j2 - m2)
        * fact(j2 + m2)
        * fact(j3 - m3)
        * fact(j3 + m3))
    .sqrt();

    let t_min = (j2 - j3 - m1).max(j1 - j3 + m2).max(0);
    let t_max = (j1 - m1).min(j2 + m2).min(j1 + j2 - j3);
    let t_sum = (t_min..=t_max).fold(0.0, |acc, t| {
        acc + parity_sign(t)
            / (fact(t)
                * fact(j3 - j2 + m1 + t)
                * fact(j3 - j1 - m2 + t)
                * fact(j1 + j2 - j3 - t)
                * fact(j1 - m1 - t)
                * fact(j2 + m2 - t))
    });

    three_j * t_sum
}

/// Calculates the Clebsch--Gordan coefficient
///
/// ```math
/// \langle j_1 m_1 j_2 m_2 | j_3 m_3 \rangle
///     = \lambda \sqrt{2 j_3 + 1}
///     \begin{pmatrix}
///         j_1 & j_2 & j_3 \\
///         m_1 & m_2 & -m_3
///     \end{pmatrix}.
/// ```
///
/// The phase $`\lambda`$ is $`-1`$ whenever $`j_1 - j_2 + (m_3 \bmod 2)`$ is non-zero and $`+1`$
/// otherwise. This coincides with the textbook phase $`(-1)^{j_1 - j_2 + m_3}`$ when
/// $`j_1 = j_2`$ but differs from it for some other combinations, *e.g.* when $`j_1 - j_2`$ and
/// $`m_3`$ are both odd. The behaviour is kept for compatibility with existing interaction
/// tensors and should not be relied upon for $`j_1 \ne j_2`$.
///
/// # Arguments
///
/// * `jm1` - The pair $`(j_1, m_1)`$.
/// * `jm2` - The pair $`(j_2, m_2)`$.
/// * `jm3` - The pair $`(j_3, m_3)`$.
///
/// # Returns
///
/// The Clebsch--Gordan coefficient.
pub fn clebsch_gordan(jm1: (i32, i32), jm2: (i32, i32), jm3: (i32, i32)) -> f64 {
    let phase = if jm1.0 - jm2.0 + jm3.1.rem_euclid(2) != 0 {
        -1.0
    } else {
        1.0
    };
    let norm = f64::from(2 * jm3.0 + 1).sqrt() * phase;
    norm * three_j_symbol(jm1, jm2, (jm3.0, -jm3.1))
}

/// Calculates the $`m`$-independent prefactor
/// $`(2l+1)^2 \begin{pmatrix} l & k & l \\ 0 & 0 & 0 \end{pmatrix}^2`$ of the angular matrix
/// element.
pub(crate) fn angular_prefactor(l: i32, k: i32) -> f64 {
    f64::from((2 * l + 1).pow(2)) * three_j_symbol((l, 0), (k, 0), (l, 0)).powi(2)
}

/// Calculates the $`q`$-sum of the angular matrix element without its prefactor.
pub(crate) fn angular_q_sum(l: i32, k: i32, m1: i32, m2: i32, m3: i32, m4: i32) -> f64 {
    (-k..=k).fold(0.0, |acc, q| {
        acc + three_j_symbol((l, -m1), (k, q), (l, m3))
            * three_j_symbol((l, -m2), (k, -q), (l, m4))
            * parity_sign(m1 + q + m2)
    })
}

/// Calculates the angular matrix element
///
/// ```math
/// \alpha(l, k, m_1, m_2, m_3, m_4) =
///     (2l+1)^2
///     \begin{pmatrix}
///         l & k & l \\
///         0 & 0 & 0
///     \end{pmatrix}^2
///     \sum_{q=-k}^k (-1)^{m_1+m_2+q}
///     \begin{pmatrix}
///         l & k & l \\
///         -m_1 & q & m_3
///     \end{pmatrix}
///     \begin{pmatrix}
///         l & k & l \\
///         -m_2 & -q & m_4
///     \end{pmatrix}
/// ```
///
/// which multiplies the radial Slater integral $`F_k`$ in the spherical-harmonic interaction
/// tensor.
///
/// # Arguments
///
/// * `l` - The angular momentum of the shell.
/// * `k` - The multipole order of the interaction.
/// * `m1`, `m2`, `m3`, `m4` - The magnetic quantum numbers of the four orbitals.
///
/// # Returns
///
/// The angular matrix element.
pub fn angular_matrix_element(l: i32, k: i32, m1: i32, m2: i32, m3: i32, m4: i32) -> f64 {
    angular_q_sum(l, k, m1, m2, m3, m4) * angular_prefactor(l, k)
}
