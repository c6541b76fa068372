//! Text and naming helpers shared by the pairing and codegen stages.

pub mod naming;
pub mod text;

pub use naming::{constructor_name, fully_qualified_reference, normalize, payload_constructor_name};
pub use text::{elm_string_literal, parenthesize_type};
