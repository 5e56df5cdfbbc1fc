mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{blocks, files, filter};

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    // RUST_LOG still overrides the flag.
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logger(cli.verbose);
    match &cli.command {
        Commands::Blocks(args) => blocks::run(&cli, args),
        Commands::Files(args) => files::run(&cli, args),
        Commands::Filter(args) => filter::run(&cli, args),
        Commands::FilterFile(args) => filter::run_file(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
