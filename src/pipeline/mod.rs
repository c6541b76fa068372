//! The generation pipeline.
//!
//! Raw modules flow one way through three pure stages:
//!
//! ```text
//! Vec<Module> --classify--> ClassifiedProgram --pair--> PairedProgram --assemble--> GeneratedModule
//! ```
//!
//! Each stage consumes the previous stage's value and returns a new one; no
//! stage reads state written by a later one. All I/O (running the extractor,
//! writing the file) happens outside, in `commands`.

use crate::analyzers::{only_decoders_and_views, LexicalClassifier, SignatureClassifier};
use crate::codegen::{self, AssemblyOptions};
use crate::config::DebugDecodersConfig;
use crate::core::{ClassifiedModule, GeneratedModule, Module, PairedEntry};
use crate::pairing::{resolve_pairs, PairingSummary};
use std::fmt;
use tracing::{debug, info, info_span};

/// Stage names used in spans and log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Classify,
    Pair,
    Assemble,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Classify => "classify",
            Self::Pair => "pair",
            Self::Assemble => "assemble",
        };
        f.write_str(name)
    }
}

/// Output of the classify stage: every module reduced to its decoders and
/// simple views. Modules with neither are kept, empty, so positions line up
/// with the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedProgram {
    pub modules: Vec<ClassifiedModule>,
}

impl ClassifiedProgram {
    pub fn signature_count(&self) -> usize {
        self.modules.iter().map(|m| m.signatures().len()).sum()
    }

    fn restricted_modules(&self) -> Vec<Module> {
        self.modules.iter().map(|m| m.module.clone()).collect()
    }
}

/// Output of the pair stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairedProgram {
    pub modules: Vec<ClassifiedModule>,
    pub entries: Vec<PairedEntry>,
}

impl PairedProgram {
    pub fn summary(&self) -> PairingSummary {
        PairingSummary::from_entries(&self.entries)
    }
}

/// The three stages bound to one classifier and one set of options.
#[derive(Debug, Clone)]
pub struct Pipeline<C = LexicalClassifier> {
    classifier: C,
    options: AssemblyOptions,
}

impl Pipeline<LexicalClassifier> {
    /// Build the lexical pipeline described by a configuration.
    pub fn from_config(config: &DebugDecodersConfig) -> Self {
        Self::new(
            LexicalClassifier::new(config.decoder_type(), config.view_type()),
            AssemblyOptions {
                module_name: config.module_name().to_string(),
            },
        )
    }
}

impl Default for Pipeline<LexicalClassifier> {
    fn default() -> Self {
        Self::new(LexicalClassifier::default(), AssemblyOptions::default())
    }
}

impl<C: SignatureClassifier> Pipeline<C> {
    pub fn new(classifier: C, options: AssemblyOptions) -> Self {
        Self {
            classifier,
            options,
        }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    pub fn options(&self) -> &AssemblyOptions {
        &self.options
    }

    pub fn classify(&self, modules: &[Module]) -> ClassifiedProgram {
        let classified = ClassifiedProgram {
            modules: modules
                .iter()
                .map(|module| only_decoders_and_views(module, &self.classifier))
                .collect(),
        };

        debug!(
            stage = %PipelineStage::Classify,
            modules = modules.len(),
            kept = classified.signature_count(),
            "classified signatures"
        );
        classified
    }

    pub fn pair(&self, program: ClassifiedProgram) -> PairedProgram {
        let entries = resolve_pairs(&program.restricted_modules(), &self.classifier);
        let paired = PairedProgram {
            modules: program.modules,
            entries,
        };

        let summary = paired.summary();
        debug!(
            stage = %PipelineStage::Pair,
            decoders = summary.decoders,
            matched = summary.matched,
            fallbacks = summary.fallbacks,
            "paired decoders with views"
        );
        paired
    }

    pub fn assemble(&self, program: &PairedProgram) -> GeneratedModule {
        let plan = codegen::plan(&program.modules, &program.entries, &self.classifier);
        let generated = codegen::render(&plan, &self.options);

        debug!(
            stage = %PipelineStage::Assemble,
            constructors = plan.decoder_cases.len(),
            views = plan.view_cases.len(),
            imports = plan.imports.len(),
            bytes = generated.source.len(),
            "assembled module"
        );
        generated
    }

    /// Run every stage over `modules`.
    pub fn run(&self, modules: &[Module]) -> (PairedProgram, GeneratedModule) {
        let span = info_span!("pipeline", module = %self.options.module_name);
        let _guard = span.enter();

        let paired = self.pair(self.classify(modules));
        let generated = self.assemble(&paired);

        let summary = paired.summary();
        info!(
            decoders = summary.decoders,
            fallbacks = summary.fallbacks,
            "generated {}",
            generated.file_name()
        );
        (paired, generated)
    }
}

/// Classify, pair and assemble with the configured lexical classifier.
pub fn generate(modules: &[Module], config: &DebugDecodersConfig) -> GeneratedModule {
    Pipeline::from_config(config).run(modules).1
}
