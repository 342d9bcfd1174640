//! Drivers to construct Coulomb interaction tensors and report them.

use anyhow;

pub mod kanamori_interaction;
pub mod slater_interaction;

// =================
// Trait definitions
// =================

/// Trait defining behaviours of Coulomb-interaction drivers.
pub trait CoulombDriver {
    /// The type of the parameter structure controlling the driver.
    type Params;

    /// The type of the successful outcome when executing the driver.
    type Outcome;

    /// Executes the driver and stores the result internally.
    fn run(&mut self) -> Result<(), anyhow::Error>;

    /// Returns the result of the driver execution.
    fn result(&self) -> Result<&Self::Outcome, anyhow::Error>;
}
