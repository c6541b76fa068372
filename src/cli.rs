use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::io::ReportFormat;

#[derive(Parser, Debug)]
#[command(name = "debug-decoders")]
#[command(
    about = "Generate an Elm module that runs every JSON decoder of a project against sample input",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the debugging module for an Elm project
    Generate {
        /// Elm project directory (must contain elm-package.json)
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Output file (defaults to <path>/<ModuleName>.elm)
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Read module interfaces from this JSON file instead of running the extractor
        #[arg(long)]
        interface: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .debug-decoders.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the generated module instead of writing it
        #[arg(long)]
        stdout: bool,

        /// Increase verbosity (-v info, -vv debug, -vvv trace)
        #[arg(short, long, action = ArgAction::Count)]
        verbosity: u8,
    },

    /// Show how signatures were classified and paired
    Inspect {
        /// Elm project directory (must contain elm-package.json)
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Read module interfaces from this JSON file instead of running the extractor
        #[arg(long)]
        interface: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .debug-decoders.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: ReportFormat,

        /// Disable colored output
        #[arg(long)]
        plain: bool,

        /// Increase verbosity (-v info, -vv debug, -vvv trace)
        #[arg(short, long, action = ArgAction::Count)]
        verbosity: u8,
    },

    /// Write a default .debug-decoders.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}
