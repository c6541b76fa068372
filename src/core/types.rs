//! Data model shared by every stage of the pipeline.
//!
//! Values here are produced once from the extractor's output and never
//! mutated afterwards; every stage returns new values instead.

use serde::{Deserialize, Serialize};

/// One exported value and its raw, unparsed type text.
///
/// `signature` uses arrow notation (`A -> B -> C`) and dotted qualification
/// (`Json.Decode.Decoder`). Nothing in this crate parses it beyond splitting
/// on whitespace and arrows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    pub signature: String,
}

impl Signature {
    pub fn new(name: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            signature: signature.into(),
        }
    }
}

/// The exported signatures of one module, in declaration order.
///
/// An empty `module_name` marks the synthetic placeholder module that owns
/// the fallback view; it never comes from the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    #[serde(rename = "moduleName")]
    pub module_name: String,
    #[serde(rename = "types", default)]
    pub signatures: Vec<Signature>,
}

impl Module {
    pub fn new(module_name: impl Into<String>, signatures: Vec<Signature>) -> Self {
        Self {
            module_name: module_name.into(),
            signatures,
        }
    }

    /// The placeholder module used for the fallback view.
    pub fn placeholder() -> Self {
        Self::new("", Vec::new())
    }

    pub fn is_placeholder(&self) -> bool {
        self.module_name.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

/// Which subset of signatures a [`ClassifiedModule`] was restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureKind {
    Decoders,
    SimpleViews,
    DecodersAndViews,
}

/// A module filtered down to one [`SignatureKind`].
///
/// Always built by a stable filter over the source module, so signature order
/// is the original declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedModule {
    pub kind: SignatureKind,
    pub module: Module,
}

impl ClassifiedModule {
    pub fn module_name(&self) -> &str {
        &self.module.module_name
    }

    pub fn signatures(&self) -> &[Signature] {
        &self.module.signatures
    }

    pub fn is_empty(&self) -> bool {
        self.module.is_empty()
    }
}

/// The view a decoder was paired with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PairedView {
    /// A real simple view whose input type equals the decoder's payload type.
    Matched(Signature),
    /// No compatible view exists; render the value as text instead.
    Fallback,
}

impl PairedView {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback)
    }
}

/// A decoder together with the view that renders its result.
///
/// When `view` is [`PairedView::Fallback`], `view_module` is the placeholder
/// module with an empty name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairedEntry {
    pub decoder: Signature,
    pub decoder_module: Module,
    pub view: PairedView,
    pub view_module: Module,
}

/// Rendered source of the generated module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    pub module_name: String,
    pub source: String,
}

impl GeneratedModule {
    /// Path, relative to the source directory, the module must be saved
    /// under to be importable. `Debug.Json` lives in `Debug/Json.elm`.
    pub fn file_name(&self) -> String {
        format!("{}.elm", self.module_name.replace('.', "/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_deserializes_extractor_field_names() {
        let json = r#"{"moduleName":"Api.User","types":[{"name":"decodeUser","signature":"Json.Decode.Decoder Api.User.User"}]}"#;
        let module: Module = serde_json::from_str(json).unwrap();

        assert_eq!(module.module_name, "Api.User");
        assert_eq!(
            module.signatures,
            vec![Signature::new(
                "decodeUser",
                "Json.Decode.Decoder Api.User.User"
            )]
        );
    }

    #[test]
    fn test_module_without_types_field_is_empty() {
        let module: Module = serde_json::from_str(r#"{"moduleName":"Main"}"#).unwrap();
        assert!(module.is_empty());
    }

    #[test]
    fn test_placeholder_module_has_empty_name() {
        assert!(Module::placeholder().is_placeholder());
        assert!(!Module::new("Main", Vec::new()).is_placeholder());
    }

    #[test]
    fn test_generated_file_name() {
        let generated = GeneratedModule {
            module_name: "DebugDecoders".to_string(),
            source: String::new(),
        };
        assert_eq!(generated.file_name(), "DebugDecoders.elm");
    }

    #[test]
    fn test_nested_generated_file_name() {
        let generated = GeneratedModule {
            module_name: "Debug.Json".to_string(),
            source: String::new(),
        };
        assert_eq!(generated.file_name(), "Debug/Json.elm");
    }
}
