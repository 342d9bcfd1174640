//! Driver for the construction of the Slater interaction tensor.

use anyhow::format_err;
use derive_builder::Builder;
use log;

use crate::angmom::cubic_harmonics::cubic_names_in_convention;
use crate::drivers::CoulombDriver;
use crate::interaction::reduction::{eg_submatrix, t2g_submatrix};
use crate::interaction::slater::{u_matrix_slater, InteractionBasis, SlaterParams, SlaterUMatrix};
use crate::io::format::{
    coulomb_output, coulomb_warn, log_subtitle, log_title, CoulombOutput, MatrixTable,
};


// ==================
// Struct definitions
// ==================

/// A driver for the construction of the Slater interaction tensor.
#[derive(Clone, Builder)]
pub struct SlaterInteractionDriver<'a> {
    /// The control parameters for the Slater interaction.
    parameters: &'a SlaterParams,

    /// The constructed interaction tensor.
    #[builder(setter(skip), default = "None")]
    result: Option<SlaterUMatrix>,
}

impl<'a> SlaterInteractionDriver<'a> {
    /// Returns a builder to construct a [`SlaterInteractionDriver`] structure.
    pub fn builder() -> SlaterInteractionDriverBuilder<'a> {
        SlaterInteractionDriverBuilder::default()
    }

    /// Returns display labels for the `dim` orbitals of the basis in which the tensor is
    /// expressed.
    fn orbital_labels(&self, dim: usize) -> Vec<String> {
        let params = self.parameters;
        let l = params.l;
        match params.basis {
            InteractionBasis::Cubic => match cubic_names_in_convention(l, params.convention) {
                Ok(names) => names.iter().map(|name| name.to_string()).collect(),
                Err(_) => numbered_labels(dim),
            },
            InteractionBasis::Spherical if params.transformation.is_none() => {
                let li = l as i32;
                (-li..=li).map(|m| format!("m = {m:+}")).collect()
            }
            _ => numbered_labels(dim),
        }
    }

    /// Executes the construction of the Slater interaction tensor.
    fn construct_slater_interaction(&mut self) -> Result<(), anyhow::Error> {
        log_title("Slater Interaction");
        coulomb_output!("");
        let params = self.parameters;
        params.log_output_display();
        coulomb_output!("");

        let slater = u_matrix_slater(params).map_err(|err| format_err!(err))?;
        log::debug!(
            "Slater interaction tensor of shape {:?} constructed.",
            slater.umat.shape()
        );

        log_subtitle("Radial integrals");
        coulomb_output!("");
        for (n, f_k) in slater.radial_integrals.iter().enumerate() {
            coulomb_output!("F{}: {f_k:>12.6}", 2 * n);
        }
        coulomb_output!("");

        for diagnostic in slater.diagnostics.iter() {
            coulomb_warn!("{diagnostic}");
            coulomb_output!("");
        }

        let (u, uprime) = slater.two_index();
        let labels = self.orbital_labels(u.nrows());
        MatrixTable {
            title: "Same-spin density-density interaction U".to_string(),
            labels: labels.clone(),
            matrix: &u,
        }
        .log_output_display();
        coulomb_output!("");
        MatrixTable {
            title: "Opposite-spin density-density interaction U'".to_string(),
            labels: labels.clone(),
            matrix: &uprime,
        }
        .log_output_display();
        coulomb_output!("");

        if params.basis == InteractionBasis::Cubic && params.l == 2 {
            let convention = params.convention;
            for (manifold, indices, u_sub, uprime_sub) in [
                (
                    "t2g",
                    convention.t2g_indices(),
                    t2g_submatrix(&u, convention),
                    t2g_submatrix(&uprime, convention),
                ),
                (
                    "eg",
                    convention.eg_indices(),
                    eg_submatrix(&u, convention),
                    eg_submatrix(&uprime, convention),
                ),
            ] {
                let u_sub = u_sub.map_err(|err| format_err!(err))?;
                let uprime_sub = uprime_sub.map_err(|err| format_err!(err))?;
                let sub_labels = indices
                    .iter()
                    .map(|&i| labels[i].clone())
                    .collect::<Vec<_>>();
                MatrixTable {
                    title: format!("Same-spin interaction U in the {manifold} manifold"),
                    labels: sub_labels.clone(),
                    matrix: &u_sub,
                }
                .log_output_display();
                coulomb_output!("");
                MatrixTable {
                    title: format!("Opposite-spin interaction U' in the {manifold} manifold"),
                    labels: sub_labels,
                    matrix: &uprime_sub,
                }
                .log_output_display();
                coulomb_output!("");
            }
        }

        self.result = Some(slater);
        Ok(())
    }
}

impl CoulombDriver for SlaterInteractionDriver<'_> {
    type Params = SlaterParams;

    type Outcome = SlaterUMatrix;

    fn result(&self) -> Result<&Self::Outcome, anyhow::Error> {
        self.result
            .as_ref()
            .ok_or_else(|| format_err!("No Slater interaction results found."))
    }

    fn run(&mut self) -> Result<(), anyhow::Error> {
        self.construct_slater_interaction()
    }
}

// =========
// Functions
// =========

/// Labels `dim` orbitals by their positions.
fn numbered_labels(dim: usize) -> Vec<String> {
    (0..dim).map(|i| format!("#{i}")).collect()
}
