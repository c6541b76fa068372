//! Runs `elm-interface-to-json` and reads what it prints.
//!
//! The extractor needs a compiled project: it reads the interface files
//! `elm-make` leaves behind, which is why failures suggest running `elm-make`
//! first.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info_span};

use crate::config::DebugDecodersConfig;
use crate::core::errors::{Error, Result, ResultExt};
use crate::core::Module;

/// Parse the extractor's JSON output into modules.
pub fn parse_interface(json: &str) -> Result<Vec<Module>> {
    serde_json::from_str(json).map_err(Error::InterfaceParse)
}

/// Fail unless `manifest` exists in `project`.
pub fn ensure_manifest(project: &Path, manifest: &str) -> Result<PathBuf> {
    let path = project.join(manifest);
    if path.is_file() {
        Ok(path)
    } else {
        Err(Error::manifest_not_found(manifest, project))
    }
}

/// Handle on an installed interface extractor.
#[derive(Debug, Clone)]
pub struct InterfaceExtractor {
    program: String,
    program_path: PathBuf,
    manifest: String,
}

impl InterfaceExtractor {
    /// Locate the configured extractor on `PATH`.
    pub fn new(config: &DebugDecodersConfig) -> Result<Self> {
        let program = config.extractor().to_string();
        let program_path = which::which(&program).map_err(|e| Error::ExtractorMissing {
            program: program.clone(),
            source: Some(e),
        })?;
        debug!("Using {} at {}", program, program_path.display());

        Ok(Self {
            program,
            program_path,
            manifest: config.manifest().to_string(),
        })
    }

    /// Check `project` has a manifest, then locate the extractor.
    ///
    /// A missing manifest is reported even when the extractor is not
    /// installed either.
    pub fn for_project(config: &DebugDecodersConfig, project: &Path) -> Result<Self> {
        ensure_manifest(project, config.manifest())?;
        Self::new(config)
    }

    pub fn program_path(&self) -> &Path {
        &self.program_path
    }

    /// Fail unless the project manifest exists in `project`.
    pub fn ensure_manifest(&self, project: &Path) -> Result<PathBuf> {
        ensure_manifest(project, &self.manifest)
    }

    /// Run the extractor over `project` and return its raw output.
    ///
    /// Anything written to stderr counts as a failure, even with a zero exit
    /// status.
    pub fn run(&self, project: &Path) -> Result<String> {
        let output = Command::new(&self.program_path)
            .arg("--path")
            .arg(project)
            .output()
            .context(format!("Failed to run {}", self.program))?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !stderr.is_empty() || !output.status.success() {
            return Err(Error::ExtractorFailed {
                program: self.program.clone(),
                code: output.status.code(),
                stderr: format!("{stderr}\nMaybe try running elm-make first?"),
            });
        }

        String::from_utf8(output.stdout).map_err(|e| {
            Error::WithContext {
                context: format!("{} output", self.program),
                message: e.to_string(),
            }
        })
    }

    /// Check the manifest, run the extractor and parse its output.
    pub fn extract(&self, project: &Path) -> Result<Vec<Module>> {
        let span = info_span!("extract", project = %project.display());
        let _guard = span.enter();

        self.ensure_manifest(project)?;
        let json = self.run(project)?;
        let modules = parse_interface(&json)?;

        debug!(modules = modules.len(), "read module interfaces");
        Ok(modules)
    }
}
