//! Command-line interface of the `coulomb` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::io::format::coulomb_output;

const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// Logs a nicely formatted heading to the `coulomb-output` logger.
pub fn log_heading() {
    let version = if let Some(ver) = VERSION {
        format!("v{ver}")
    } else {
        "v unknown".to_string()
    };
    coulomb_output!("╭─────────────────────────────────────────────────────────────────────────────────────────────────────╮");
    coulomb_output!("│                                                                                                     │");
    coulomb_output!("│      ┌─┐┌─┐┬ ┬┬  ┌─┐┌┬┐┌┐    ┌┬┐┌─┐┌┐┌┌─┐┌─┐┬─┐┌─┐                                                  │");
    coulomb_output!("│      │  │ ││ ││  │ ││││├┴┐    │ ├┤ │││└─┐│ │├┬┘└─┐                                                  │");
    coulomb_output!("│      └─┘└─┘└─┘┴─┘└─┘┴ ┴└─┘    ┴ └─┘┘└┘└─┘└─┘┴└─└─┘                                                  │");
    coulomb_output!("│                                                                                                     │");
    coulomb_output!("│      Slater and Kanamori interaction tensors for correlated-electron Hamiltonians                   │");
    coulomb_output!("│                                                                                       {version:>13} │");
    coulomb_output!("╰─────────────────────────────────────────────────────────────────────────────────────────────────────╯");
    coulomb_output!("");
}

/// Command-line arguments of the `coulomb` binary.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// The YAML configuration file specifying the interactions to construct.
    #[arg(short, long)]
    pub config: PathBuf,

    /// An optional file to which the output is also written.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increases the verbosity of the diagnostic log. May be given twice.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
