//! Nice Coulomb-interaction output formatting.

use std::fmt;

use log;
use ndarray::Array2;

const COULOMB_BANNER_LENGTH: usize = 103;

/// Logs an error to the `coulomb-output` logger.
macro_rules! coulomb_error {
    ($fmt:expr $(, $($arg:tt)*)?) => {
        log::error!($fmt, $($($arg)*)?);
        log::error!(target: "coulomb-output", $fmt, $($($arg)*)?);
    }
}

/// Logs a warning to the `coulomb-output` logger.
macro_rules! coulomb_warn {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::warn!(target: "coulomb-output", $fmt, $($($arg)*)?); }
}

/// Logs a main output line to the `coulomb-output` logger.
macro_rules! coulomb_output {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::info!(target: "coulomb-output", $fmt, $($($arg)*)?); }
}

pub(crate) use {coulomb_error, coulomb_output, coulomb_warn};

/// Logs a nicely formatted section title to the `coulomb-output` logger.
pub(crate) fn log_title(title: &str) {
    let length = title.chars().count().max(COULOMB_BANNER_LENGTH - 6);
    let bar = "─".repeat(length);
    coulomb_output!("┌──{bar}──┐");
    coulomb_output!("│§ {title:^length$} §│");
    coulomb_output!("└──{bar}──┘");
}

/// Writes a nicely formatted subtitle.
pub(crate) fn write_subtitle(f: &mut fmt::Formatter<'_>, subtitle: &str) -> fmt::Result {
    let length = subtitle.chars().count();
    let bar = "═".repeat(length);
    writeln!(f, "{subtitle}")?;
    writeln!(f, "{bar}")?;
    Ok(())
}

/// Logs a nicely formatted subtitle to the `coulomb-output` logger.
pub(crate) fn log_subtitle(subtitle: &str) {
    let length = subtitle.chars().count();
    let bar = "═".repeat(length);
    coulomb_output!("{}", subtitle);
    coulomb_output!("{}", bar);
}

/// Logs a nicely formatted macro-section beginning to the `coulomb-output` logger.
pub(crate) fn log_macsec_begin(sectitle: &str) {
    let width = COULOMB_BANNER_LENGTH - 14;
    let sectitle_space = sectitle.to_string() + " ";
    coulomb_output!("❬❬❬❬❬ [Begin] {sectitle_space:❬<width$}");
}

/// Logs a nicely formatted macro-section ending to the `coulomb-output` logger.
pub(crate) fn log_macsec_end(sectitle: &str) {
    let width = COULOMB_BANNER_LENGTH - 14;
    let sectitle_space = sectitle.to_string() + " ";
    coulomb_output!("❭❭❭❭❭ [ End ] {sectitle_space:❭<width$}");
}

/// Turns a boolean into a string of `yes` or `no`.
pub(crate) fn nice_bool(b: bool) -> String {
    if b {
        "yes".to_string()
    } else {
        "no".to_string()
    }
}

/// A labelled two-index interaction matrix for display.
#[derive(Debug)]
pub(crate) struct MatrixTable<'a> {
    /// The title of the table.
    pub(crate) title: String,

    /// The orbital labels, one for each row and column.
    pub(crate) labels: Vec<String>,

    /// The matrix to be displayed.
    pub(crate) matrix: &'a Array2<f64>,
}

impl<'a> fmt::Display for MatrixTable<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_subtitle(f, &self.title)?;
        let label_width = self
            .labels
            .iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0)
            .max(10);
        let header = self
            .labels
            .iter()
            .map(|label| format!("{label:>label_width$}"))
            .collect::<String>();
        writeln!(f, "{:label_width$}{header}", "")?;
        for (label, row) in self.labels.iter().zip(self.matrix.rows()) {
            let entries = row
                .iter()
                .map(|x| format!("{x:>label_width$.6}"))
                .collect::<String>();
            writeln!(f, "{label:<label_width$}{entries}")?;
        }
        Ok(())
    }
}

/// A trait for logging Coulomb-interaction outputs nicely.
pub(crate) trait CoulombOutput: fmt::Debug + fmt::Display {
    /// Logs display output nicely.
    fn log_output_display(&self) {
        let lines = self.to_string();
        lines.lines().for_each(|line| {
            coulomb_output!("{line}");
        })
    }
}

// Blanket implementation
impl<T> CoulombOutput for T where T: fmt::Debug + fmt::Display {}
