mod cli;
mod commands;

use clap::Parser;
use cli::Cli;

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    commands::bundle::run(cli.input_dir, cli.output_file, cli.suffix, cli.check)
}
