use std::path::PathBuf;

use super::load_modules;
use crate::config::load_config;
use crate::core::errors::Result;
use crate::io::{render_report, InspectReport, ReportFormat};
use crate::pipeline::Pipeline;

#[derive(Debug, Clone, Default)]
pub struct InspectConfig {
    pub path: PathBuf,
    pub interface: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: ReportFormat,
    pub plain: bool,
}

/// Build the report for a project without generating code.
pub fn build_report(config: &InspectConfig) -> Result<InspectReport> {
    let settings = load_config(&config.path, config.config.as_deref())?;
    let modules = load_modules(&config.path, config.interface.as_deref(), &settings)?;

    let pipeline = Pipeline::from_config(&settings);
    let paired = pipeline.pair(pipeline.classify(&modules));

    Ok(InspectReport::from_program(&paired, pipeline.classifier()))
}

pub fn inspect_project(config: InspectConfig) -> Result<()> {
    let report = build_report(&config)?;
    println!("{}", render_report(&report, config.format, !config.plain)?);
    Ok(())
}
