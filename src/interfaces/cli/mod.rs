use std::path::PathBuf;

use anyhow::{self, format_err};
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::io::format::termsym_output;

const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// Logs a nicely formatted `termsym` heading to the `termsym-output` logger.
pub fn log_heading() {
    let version = if let Some(ver) = VERSION {
        format!("v{ver}")
    } else {
        "v unknown".to_string()
    };
    termsym_output!("╭─────────────────────────────────────────────────────────────────────────────────────────────────────╮");
    termsym_output!("│  ████████╗███████╗██████╗ ███╗   ███╗███████╗██╗   ██╗███╗   ███╗                                   │");
    termsym_output!("│  ╚══██╔══╝██╔════╝██╔══██╗████╗ ████║██╔════╝╚██╗ ██╔╝████╗ ████║                                   │");
    termsym_output!("│     ██║   █████╗  ██████╔╝██╔████╔██║███████╗ ╚████╔╝ ██╔████╔██║                                   │");
    termsym_output!("│     ██║   ██╔══╝  ██╔══██╗██║╚██╔╝██║╚════██║  ╚██╔╝  ██║╚██╔╝██║                                   │");
    termsym_output!("│     ██║   ███████╗██║  ██║██║ ╚═╝ ██║███████║   ██║   ██║ ╚═╝ ██║                                   │");
    termsym_output!("│     ╚═╝   ╚══════╝╚═╝  ╚═╝╚═╝     ╚═╝╚══════╝   ╚═╝   ╚═╝     ╚═╝                                   │");
    termsym_output!("│                                                                                                     │");
    termsym_output!("│  Term symbols of atomic and diatomic configurations                                   {version:>13} │");
    termsym_output!("╰─────────────────────────────────────────────────────────────────────────────────────────────────────╯");
    termsym_output!("");
}

/// Command-line arguments of the `termsym` binary.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// The YAML input file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// A file to which the output is also written.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Writes a template YAML input file with the given name (without extension) and exits.
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Logs debugging information from the term machinery.
    #[arg(short, long)]
    pub debug: bool,
}

/// Configures `log4rs` so that the `termsym-output` logger goes to the console and, if
/// requested, to an output file.
///
/// # Arguments
///
/// * `output` - An optional output file.
/// * `debug` - Boolean indicating if debugging records are to be logged too.
pub fn init_logging(output: Option<&PathBuf>, debug: bool) -> Result<(), anyhow::Error> {
    let encoder = || Box::new(PatternEncoder::new("{m}{n}"));
    let mut appenders = vec!["console".to_string()];
    let mut builder = Config::builder().appender(
        Appender::builder().build(
            "console",
            Box::new(ConsoleAppender::builder().encoder(encoder()).build()),
        ),
    );
    if let Some(path) = output {
        let file = FileAppender::builder()
            .encoder(encoder())
            .append(false)
            .build(path)
            .map_err(|err| format_err!("Unable to open output file {}: {err}", path.display()))?;
        builder = builder.appender(Appender::builder().build("output", Box::new(file)));
        appenders.push("output".to_string());
    }
    let config = builder
        .logger(
            Logger::builder()
                .appenders(appenders.clone())
                .additive(false)
                .build("termsym-output", LevelFilter::Info),
        )
        .build(
            Root::builder()
                .appenders(appenders)
                .build(if debug { LevelFilter::Debug } else { LevelFilter::Warn }),
        )
        .map_err(|err| format_err!(err))?;
    log4rs::init_config(config).map_err(|err| format_err!(err))?;
    Ok(())
}
