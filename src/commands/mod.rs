//! CLI command implementations.
//!
//! Each command resolves configuration, gathers module interfaces (from the
//! extractor or a saved JSON file), then hands them to the pure pipeline.
//!
//! Available commands:
//! - **generate**: Write the debugging module
//! - **inspect**: Report classification and pairing without generating code
//! - **init**: Write a default configuration file

pub mod generate;
pub mod init;
pub mod inspect;

pub use generate::{generate_module, GenerateConfig};
pub use init::init_config;
pub use inspect::{inspect_project, InspectConfig};

use std::path::Path;

use tracing::debug;

use crate::config::DebugDecodersConfig;
use crate::core::errors::Result;
use crate::core::Module;
use crate::io::{self, parse_interface, InterfaceExtractor};

/// Module interfaces for `project`, read from `interface` when given,
/// otherwise produced by running the extractor.
pub fn load_modules(
    project: &Path,
    interface: Option<&Path>,
    config: &DebugDecodersConfig,
) -> Result<Vec<Module>> {
    match interface {
        Some(file) => {
            debug!("Reading module interfaces from {}", file.display());
            parse_interface(&io::read_file(file)?)
        }
        None => InterfaceExtractor::for_project(config, project)?.extract(project),
    }
}
