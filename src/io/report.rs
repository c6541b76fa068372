//! Classification and pairing report printed by `inspect`.

use std::fmt::{self, Write as _};

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

use crate::analyzers::{only_decoders, only_simple_views, SignatureClassifier};
use crate::common::naming::fully_qualified_reference;
use crate::core::errors::{Error, Result};
use crate::pairing::{decoder_reference, view_reference, PairingSummary};
use crate::pipeline::PairedProgram;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecoderLine {
    pub reference: String,
    pub signature: String,
    pub payload: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewLine {
    pub reference: String,
    pub signature: String,
    pub input: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairLine {
    pub decoder: String,
    pub view: String,
    pub fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub decoders: Vec<DecoderLine>,
    pub views: Vec<ViewLine>,
    pub pairs: Vec<PairLine>,
    pub summary: PairingSummary,
}

impl InspectReport {
    pub fn from_program<C>(program: &PairedProgram, classifier: &C) -> Self
    where
        C: SignatureClassifier + ?Sized,
    {
        let decoders = program
            .modules
            .iter()
            .map(|module| only_decoders(&module.module, classifier))
            .flat_map(|module| {
                module
                    .signatures()
                    .iter()
                    .map(|decoder| DecoderLine {
                        reference: fully_qualified_reference(&module.module, decoder),
                        signature: decoder.signature.clone(),
                        payload: classifier.decoder_payload(decoder).to_string(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        let views = program
            .modules
            .iter()
            .map(|module| only_simple_views(&module.module, classifier))
            .flat_map(|module| {
                module
                    .signatures()
                    .iter()
                    .map(|view| ViewLine {
                        reference: fully_qualified_reference(&module.module, view),
                        signature: view.signature.clone(),
                        input: classifier.view_input(view).map(str::to_string),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        let pairs = program
            .entries
            .iter()
            .map(|entry| PairLine {
                decoder: decoder_reference(entry),
                view: view_reference(entry),
                fallback: entry.view.is_fallback(),
            })
            .collect();

        Self {
            decoders,
            views,
            pairs,
            summary: program.summary(),
        }
    }
}

/// Format a report. `color` only affects the terminal format.
pub fn render_report(report: &InspectReport, format: ReportFormat, color: bool) -> Result<String> {
    match format {
        ReportFormat::Json => serde_json::to_string_pretty(report).map_err(|e| {
            Error::WithContext {
                context: "Failed to serialize report".to_string(),
                message: e.to_string(),
            }
        }),
        ReportFormat::Terminal => {
            let mut out = String::new();
            write_terminal(&mut out, report, color).map_err(|e| Error::WithContext {
                context: "Failed to format report".to_string(),
                message: e.to_string(),
            })?;
            Ok(out)
        }
    }
}

fn paint(text: &str, color: bool, style: fn(&str) -> colored::ColoredString) -> String {
    if color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

fn header(text: &str) -> colored::ColoredString {
    text.blue().bold()
}

fn warning(text: &str) -> colored::ColoredString {
    text.yellow()
}

fn success(text: &str) -> colored::ColoredString {
    text.green()
}

fn dim(text: &str) -> colored::ColoredString {
    text.dimmed()
}

fn write_terminal(out: &mut String, report: &InspectReport, color: bool) -> fmt::Result {
    writeln!(out, "{}", paint(&format!("Decoders ({})", report.decoders.len()), color, header))?;
    for decoder in &report.decoders {
        writeln!(
            out,
            "  {} : {}",
            decoder.reference,
            paint(&decoder.signature, color, dim)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", paint(&format!("Views ({})", report.views.len()), color, header))?;
    for view in &report.views {
        writeln!(
            out,
            "  {} : {}",
            view.reference,
            paint(&view.signature, color, dim)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", paint("Pairings", color, header))?;
    for pair in &report.pairs {
        let target = if pair.fallback {
            paint(&format!("{} (fallback)", pair.view), color, warning)
        } else {
            paint(&pair.view, color, success)
        };
        writeln!(out, "  {} -> {}", pair.decoder, target)?;
    }

    writeln!(out)?;
    write!(
        out,
        "{} decoders, {} paired with a view, {} rendered as text",
        report.summary.decoders, report.summary.matched, report.summary.fallbacks
    )
}
