//! Driver for the construction of the Kanamori interaction.

use anyhow::format_err;
use derive_builder::Builder;
use itertools::Itertools;

use crate::drivers::CoulombDriver;
use crate::interaction::kanamori::{u_matrix_kanamori, KanamoriParams, KanamoriUMatrix};
use crate::interaction::reduction::reduce_4index_to_2index;
use crate::io::format::{coulomb_output, log_subtitle, log_title, CoulombOutput, MatrixTable};


/// A driver for the construction of the Kanamori interaction.
#[derive(Clone, Builder)]
pub struct KanamoriInteractionDriver<'a> {
    /// The control parameters for the Kanamori interaction.
    parameters: &'a KanamoriParams,

    /// The constructed interaction.
    #[builder(setter(skip), default = "None")]
    result: Option<KanamoriUMatrix>,
}

impl<'a> KanamoriInteractionDriver<'a> {
    /// Returns a builder to construct a [`KanamoriInteractionDriver`] structure.
    pub fn builder() -> KanamoriInteractionDriverBuilder<'a> {
        KanamoriInteractionDriverBuilder::default()
    }

    /// Executes the construction of the Kanamori interaction.
    fn construct_kanamori_interaction(&mut self) -> Result<(), anyhow::Error> {
        log_title("Kanamori Interaction");
        coulomb_output!("");
        let params = self.parameters;
        params.log_output_display();
        coulomb_output!("");

        let kanamori = u_matrix_kanamori(params).map_err(|err| format_err!(err))?;
        let labels = (0..params.n_orb).map(|i| format!("#{i}")).collect_vec();
        let (u, uprime) = match &kanamori {
            KanamoriUMatrix::TwoIndex { u, uprime } => (u.clone(), uprime.clone()),
            KanamoriUMatrix::FourIndex(umat) => {
                log_subtitle("Non-vanishing four-index elements");
                coulomb_output!("");
                umat.indexed_iter()
                    .filter(|(_, value)| **value != 0.0)
                    .for_each(|((i, j, k, l), value)| {
                        coulomb_output!("U[{i}, {j}, {k}, {l}] = {value:>12.6}");
                    });
                coulomb_output!("");
                reduce_4index_to_2index(umat)
            }
        };
        MatrixTable {
            title: "Same-spin density-density interaction U".to_string(),
            labels: labels.clone(),
            matrix: &u,
        }
        .log_output_display();
        coulomb_output!("");
        MatrixTable {
            title: "Opposite-spin density-density interaction U'".to_string(),
            labels,
            matrix: &uprime,
        }
        .log_output_display();
        coulomb_output!("");

        self.result = Some(kanamori);
        Ok(())
    }
}

impl CoulombDriver for KanamoriInteractionDriver<'_> {
    type Params = KanamoriParams;

    type Outcome = KanamoriUMatrix;

    fn result(&self) -> Result<&Self::Outcome, anyhow::Error> {
        self.result
            .as_ref()
            .ok_or_else(|| format_err!("No Kanamori interaction results found."))
    }

    fn run(&mut self) -> Result<(), anyhow::Error> {
        self.construct_kanamori_interaction()
    }
}
