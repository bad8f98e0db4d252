use anyhow::Result;
use clap::ArgMatches;
use log::LevelFilter;

use regsel_cli::cli::build_cli;
use regsel_cli::commands::{evaluate, optimize, rfe};
use regsel_cli::exit::exit_code;

fn main() {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("REGSEL_LOG", "error,regsel=info"))
        .init();

    let matches = build_cli().get_matches();

    if let Err(e) = dispatch(&matches) {
        log::error!("{:#}", e);
        std::process::exit(exit_code(&e));
    }
}

fn dispatch(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("optimize", sub_m)) => optimize::run(sub_m),
        Some(("evaluate", sub_m)) => evaluate::run(sub_m),
        Some(("rfe", sub_m)) => rfe::run(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}
