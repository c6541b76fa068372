//! Elm source generation.
//!
//! - [`assembler`]: plans constructors, dispatch branches and imports, then
//!   renders them
//! - [`program`]: the fixed interactive program the generated declarations
//!   plug into

pub mod assembler;
pub mod program;

pub use assembler::{
    assemble, plan, render, AssemblyOptions, AssemblyPlan, DecoderCase, DecoderWrapper, ViewCase,
    DEFAULT_MODULE_NAME, SENTINEL_DECODER_CONSTRUCTOR, SENTINEL_VIEW_CONSTRUCTOR,
};
