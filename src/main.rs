use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

mod run;

/// Runs a toroidal Game of Life field for the number of generations given in
/// the input file and writes the final field.
#[derive(Parser)]
#[command(name = "torus-life", version)]
struct Cli {
    /// Problem file: generation count, `width height`, then the field rows.
    #[arg(default_value = "input.txt")]
    input: PathBuf,
    /// Where the final field is written.
    #[arg(default_value = "output.txt")]
    output: PathBuf,
    /// Don't echo the final field to stdout.
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let outcome = run::run(&cli.input, &cli.output)?;
    if !cli.quiet {
        println!("Final grid after {} generations:", outcome.generations);
        println!("{}", outcome.rendered);
    }
    Ok(())
}
