use std::path::{Path, PathBuf};

use tracing::info;

use super::load_modules;
use crate::config::load_config;
use crate::core::errors::{Error, Result};
use crate::core::{GeneratedModule, Module};
use crate::io;
use crate::pipeline::Pipeline;

#[derive(Debug, Clone, Default)]
pub struct GenerateConfig {
    pub path: PathBuf,
    pub output: Option<PathBuf>,
    pub interface: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub stdout: bool,
}

/// Where the generated module is written unless `--output` says otherwise.
pub fn default_output_path(project: &Path, generated: &GeneratedModule) -> PathBuf {
    project.join(generated.file_name())
}

/// Refuse a generated module name that is already taken by the project.
/// Writing it would overwrite that module's source file.
pub fn ensure_module_name_is_free(modules: &[Module], module_name: &str) -> Result<()> {
    if modules.iter().any(|module| module.module_name == module_name) {
        return Err(Error::Configuration(format!(
            "module_name {module_name:?} is already a module of this project; choose another name"
        )));
    }
    Ok(())
}

pub fn generate_module(config: GenerateConfig) -> Result<()> {
    let settings = load_config(&config.path, config.config.as_deref())?;
    let modules = load_modules(&config.path, config.interface.as_deref(), &settings)?;
    ensure_module_name_is_free(&modules, settings.module_name())?;

    let (_, generated) = Pipeline::from_config(&settings).run(&modules);

    if config.stdout {
        print!("{}", generated.source);
        return Ok(());
    }

    let target = config
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&config.path, &generated));

    println!("Creating a file at {}", target.display());
    io::write_file(&target, &generated.source)?;
    info!(bytes = generated.source.len(), "wrote {}", target.display());
    println!("Open it with elm-reactor!");

    Ok(())
}
