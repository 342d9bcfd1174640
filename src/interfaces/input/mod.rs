//! YAML input files for the `coulomb` binary.

use anyhow::{self, bail};
use serde::{Deserialize, Serialize};

use crate::drivers::kanamori_interaction::KanamoriInteractionDriver;
use crate::drivers::slater_interaction::SlaterInteractionDriver;
use crate::drivers::CoulombDriver;
use crate::interaction::kanamori::KanamoriParams;
use crate::interaction::slater::SlaterParams;
use crate::interfaces::InputHandle;
use crate::io::format::{coulomb_error, coulomb_output, log_macsec_begin, log_macsec_end};


/// A structure containing input parameters which can be serialised into and deserialised from a
/// YAML input file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Input {
    /// Specification for the Slater interaction. If `None`, no Slater interaction will be
    /// constructed.
    ///
    /// If not specified, this will be taken to be `None`.
    #[serde(default)]
    pub slater_interaction: Option<SlaterParams>,

    /// Specification for the Kanamori interaction. If `None`, no Kanamori interaction will be
    /// constructed.
    ///
    /// If not specified, this will be taken to be `None`.
    #[serde(default)]
    pub kanamori_interaction: Option<KanamoriParams>,
}

impl InputHandle for Input {
    /// Handles the main input structure.
    fn handle(&self) -> Result<(), anyhow::Error> {
        if self.slater_interaction.is_none() && self.kanamori_interaction.is_none() {
            bail!("Neither `slater_interaction` nor `kanamori_interaction` has been specified.");
        }

        if let Some(slater_params) = self.slater_interaction.as_ref() {
            log_macsec_begin("Slater interaction");
            coulomb_output!("");
            let mut slater_driver = SlaterInteractionDriver::builder()
                .parameters(slater_params)
                .build()?;
            slater_driver.run().map_err(|err| {
                coulomb_error!("{err}");
                err
            })?;
            log_macsec_end("Slater interaction");
            coulomb_output!("");
        }

        if let Some(kanamori_params) = self.kanamori_interaction.as_ref() {
            log_macsec_begin("Kanamori interaction");
            coulomb_output!("");
            let mut kanamori_driver = KanamoriInteractionDriver::builder()
                .parameters(kanamori_params)
                .build()?;
            kanamori_driver.run().map_err(|err| {
                coulomb_error!("{err}");
                err
            })?;
            log_macsec_end("Kanamori interaction");
            coulomb_output!("");
        }

        Ok(())
    }
}
