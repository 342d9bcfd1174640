//! Angular momentum coupling and spherical-to-cubic harmonic conversion.

use phf::phf_map;

pub mod cubic_harmonics;
pub mod wigner;

/// Alphabetical labels of angular momenta.
pub static ANGMOM_LABELS: [&str; 7] = ["S", "P", "D", "F", "G", "H", "I"];

/// Indices of alphabetical labels of angular momenta.
pub static ANGMOM_INDICES: phf::Map<&'static str, u32> = phf_map! {
    "S" => 0,
    "P" => 1,
    "D" => 2,
    "F" => 3,
    "G" => 4,
    "H" => 5,
    "I" => 6,
};

/// The largest angular momentum for which interaction tensors are constructed.
pub const MAX_SUPPORTED_L: u32 = 3;

/// Returns the number of magnetic components $`2l + 1`$ of a shell of angular momentum $`l`$.
pub fn shell_dimension(l: u32) -> usize {
    2 * l as usize + 1
}
