use std::process::ExitCode;

use clap::Parser;
use debug_decoders::cli::{Cli, Commands};
use debug_decoders::commands::{self, GenerateConfig, InspectConfig};
use debug_decoders::core::errors::Error;
use debug_decoders::observability::init_tracing;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<Error>()
                .map_or(1, Error::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            path,
            output,
            interface,
            config,
            stdout,
            verbosity,
        } => {
            init_tracing(verbosity);
            commands::generate_module(GenerateConfig {
                path,
                output,
                interface,
                config,
                stdout,
            })?;
        }
        Commands::Inspect {
            path,
            interface,
            config,
            format,
            plain,
            verbosity,
        } => {
            init_tracing(verbosity);
            commands::inspect_project(InspectConfig {
                path,
                interface,
                config,
                format,
                plain,
            })?;
        }
        Commands::Init { force } => {
            init_tracing(0);
            commands::init_config(force)?;
        }
    }
    Ok(())
}
