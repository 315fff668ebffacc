use super::LineOperation;
use clap::Parser;

/// command line tool for building and validating transit lines from section files
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct LineApp {
    #[command(subcommand)]
    pub op: LineOperation,
}
