use anyhow::Result;
use clap::Parser;

use gav_reader::Cli;

fn main() -> Result<()> {
    // stdout carries the record, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.command.execute()
}
