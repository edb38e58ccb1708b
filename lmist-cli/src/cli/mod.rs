#![cfg_attr(feature = "strict", deny(warnings))]

use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lmist")]
#[command(author, version, about = "Place local files into a directory and list directory contents", long_about = None)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Eq, PartialEq)]
pub enum Commands {
    /// Save a file in the current directory or a specified output location
    #[command(visible_alias = "a")]
    Add(AddArgs),
    /// List the entries directly under a directory
    #[command(visible_alias = "l")]
    Ls(LsArgs),
    /// Print version information
    Version,
}

#[derive(Args, Debug, Eq, PartialEq)]
pub struct AddArgs {
    /// The name of the file to save
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub filename: String,

    /// The directory where the file should be saved [default: current directory]
    #[arg(short, long, env = "LMIST_OUTPUT")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Eq, PartialEq)]
pub struct LsArgs {
    /// The directory to list [default: fs]
    #[arg(env = "LMIST_LIST_TARGET")]
    pub target: Option<PathBuf>,
}
