use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input shorthand source file
    pub input: PathBuf,
    /// Output file for the expanded Java source
    pub output: PathBuf,
}
