use clap::Parser;
use prereq_cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().run()
}
