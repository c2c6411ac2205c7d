use anyhow::{self, format_err};
use clap::Parser;

use termsym::interfaces::cli::{init_logging, log_heading, Cli};
use termsym::interfaces::input::Input;
use termsym::interfaces::InputHandle;
use termsym::io::{read_termsym_yaml, write_termsym_yaml};

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    if let Some(template) = cli.template.as_ref() {
        write_termsym_yaml(template, &Input::default())?;
        println!("Template input written to {}.", template.with_extension("yml").display());
        return Ok(());
    }

    init_logging(cli.output.as_ref(), cli.debug)?;
    log_heading();

    let config = cli
        .config
        .as_ref()
        .ok_or_else(|| format_err!("No input configuration file specified."))?;
    let input = read_termsym_yaml::<Input, _>(config)?;
    input.handle()
}
