//! Generate an Elm debugging module from a project's exported signatures.
//!
//! Every decoder the project exports is paired with a view that can render
//! what it decodes, and the generated program lets you paste JSON and see
//! which decoders accept it.

pub mod analyzers;
pub mod cli;
pub mod codegen;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod io;
pub mod observability;
pub mod pairing;
pub mod pipeline;

pub use crate::analyzers::{
    is_decoder, is_simple_view, only_decoders, only_decoders_and_views, only_simple_views,
    LexicalClassifier, SignatureClassifier,
};
pub use crate::codegen::{assemble, AssemblyOptions};
pub use crate::common::naming::{constructor_name, fully_qualified_reference, payload_constructor_name};
pub use crate::config::DebugDecodersConfig;
pub use crate::core::errors::{Error, Result};
pub use crate::core::{
    ClassifiedModule, GeneratedModule, Module, PairedEntry, PairedView, Signature, SignatureKind,
};
pub use crate::pairing::resolve_pairs;
pub use crate::pipeline::{generate, Pipeline};
