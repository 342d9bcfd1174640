use anyhow::{self, format_err};
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;

use coulomb_tensors::interfaces::cli::{log_heading, Cli};
use coulomb_tensors::interfaces::input::Input;
use coulomb_tensors::interfaces::InputHandle;
use coulomb_tensors::io::read_coulomb_yaml;

/// Builds the logging configuration: results go to the `coulomb-output` target on the console
/// (and to the output file if given), diagnostics go to standard error.
fn logging_config(cli: &Cli) -> Result<Config, anyhow::Error> {
    let diagnostic_level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let console_output = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{m}{n}")))
        .build();
    let console_diagnostics = ConsoleAppender::builder()
        .target(log4rs::append::console::Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("[{l}] {M}: {m}{n}")))
        .build();

    let mut output_appenders = vec!["console_output".to_string()];
    let mut config_builder = Config::builder()
        .appender(Appender::builder().build("console_output", Box::new(console_output)))
        .appender(Appender::builder().build("console_diagnostics", Box::new(console_diagnostics)));
    if let Some(output) = cli.output.as_ref() {
        let file_output = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new("{m}{n}")))
            .append(false)
            .build(output)
            .map_err(|err| format_err!(err))?;
        config_builder = config_builder
            .appender(Appender::builder().build("file_output", Box::new(file_output)));
        output_appenders.push("file_output".to_string());
    }

    config_builder
        .logger(
            Logger::builder()
                .appenders(output_appenders)
                .additive(false)
                .build("coulomb-output", LevelFilter::Info),
        )
        .build(
            Root::builder()
                .appender("console_diagnostics")
                .build(diagnostic_level),
        )
        .map_err(|err| format_err!(err))
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    log4rs::init_config(logging_config(&cli)?).map_err(|err| format_err!(err))?;

    log_heading();
    let inp = read_coulomb_yaml::<Input, _>(&cli.config)?;
    inp.handle()
}
