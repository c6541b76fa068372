//! Lexical signature classification
//!
//! Decides whether a raw type signature denotes a JSON decoder value or a
//! simple view function. This is deliberately a surface-level heuristic:
//! signatures are split on arrows and whitespace and compared token by token
//! against fully qualified type names. There is no type checking and no
//! unification, so `Decoder` imported under an alias is not recognised.
//!
//! # Rules
//!
//! - **Decoder**: no arrow anywhere, leading token equals the decoder type
//!   (`Json.Decode.Decoder Int`).
//! - **Simple view**: one or two arrow-separated pieces whose last piece has
//!   at least two tokens and starts with the view type
//!   (`Int -> Html.Html msg`, `Html.Html msg`).
//!
//! The predicates are total. Text that matches neither rule is simply neither.
//!
//! A stricter, structure-aware classifier can replace [`LexicalClassifier`]
//! by implementing [`SignatureClassifier`]; pairing and assembly only ever
//! see the trait.

use crate::core::{ClassifiedModule, Module, Signature, SignatureKind};
use stillwater::predicate::Predicate;

/// Token separating function arguments from results.
pub const ARROW: &str = "->";

/// Fully qualified name of the JSON decoder type.
pub const DEFAULT_DECODER_TYPE: &str = "Json.Decode.Decoder";

/// Fully qualified name of the renderable output type.
pub const DEFAULT_VIEW_TYPE: &str = "Html.Html";

/// Classification seam used by pairing and assembly.
pub trait SignatureClassifier {
    fn is_decoder(&self, signature: &Signature) -> bool;

    fn is_simple_view(&self, signature: &Signature) -> bool;

    /// Type a decoder produces, e.g. `Int` for `Json.Decode.Decoder Int`.
    fn decoder_payload<'a>(&self, decoder: &'a Signature) -> &'a str {
        payload_type(&decoder.signature)
    }

    /// Type a view accepts, or `None` for a view that takes no argument.
    fn view_input<'a>(&self, view: &'a Signature) -> Option<&'a str> {
        declared_input_type(&view.signature)
    }
}

/// Predicate for decoder values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsDecoder {
    decoder_type: String,
}

impl IsDecoder {
    pub fn new(decoder_type: impl Into<String>) -> Self {
        Self {
            decoder_type: decoder_type.into(),
        }
    }

    pub fn decoder_type(&self) -> &str {
        &self.decoder_type
    }

    pub fn description(&self) -> String {
        format!("arrow-free signature starting with {}", self.decoder_type)
    }
}

impl Default for IsDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_DECODER_TYPE)
    }
}

impl Predicate<Signature> for IsDecoder {
    fn check(&self, signature: &Signature) -> bool {
        is_decoder(&signature.signature, &self.decoder_type)
    }
}

/// Predicate for values or single-argument functions producing the view type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsSimpleView {
    view_type: String,
}

impl IsSimpleView {
    pub fn new(view_type: impl Into<String>) -> Self {
        Self {
            view_type: view_type.into(),
        }
    }

    pub fn view_type(&self) -> &str {
        &self.view_type
    }

    pub fn description(&self) -> String {
        format!("at most one argument, result {} <param>", self.view_type)
    }
}

impl Default for IsSimpleView {
    fn default() -> Self {
        Self::new(DEFAULT_VIEW_TYPE)
    }
}

impl Predicate<Signature> for IsSimpleView {
    fn check(&self, signature: &Signature) -> bool {
        is_simple_view(&signature.signature, &self.view_type)
    }
}

/// The token-matching classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexicalClassifier {
    decoder: IsDecoder,
    view: IsSimpleView,
}

impl LexicalClassifier {
    pub fn new(decoder_type: impl Into<String>, view_type: impl Into<String>) -> Self {
        Self {
            decoder: IsDecoder::new(decoder_type),
            view: IsSimpleView::new(view_type),
        }
    }

    pub fn decoder_type(&self) -> &str {
        self.decoder.decoder_type()
    }

    pub fn view_type(&self) -> &str {
        self.view.view_type()
    }
}

impl SignatureClassifier for LexicalClassifier {
    fn is_decoder(&self, signature: &Signature) -> bool {
        self.decoder.check(signature)
    }

    fn is_simple_view(&self, signature: &Signature) -> bool {
        self.view.check(signature)
    }
}

/// True iff `signature` has no arrow and its first token is `decoder_type`.
pub fn is_decoder(signature: &str, decoder_type: &str) -> bool {
    if signature.contains(ARROW) {
        return false;
    }

    signature.split_whitespace().next() == Some(decoder_type)
}

/// True iff `signature` is a value or one-argument function whose result is
/// `view_type` applied to at least one type parameter.
pub fn is_simple_view(signature: &str, view_type: &str) -> bool {
    let pieces: Vec<&str> = signature.split(ARROW).map(str::trim).collect();
    if !(1..=2).contains(&pieces.len()) {
        return false;
    }

    let Some(output) = pieces.last() else {
        return false;
    };
    let mut tokens = output.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(head), Some(_)) => head == view_type,
        _ => false,
    }
}

/// Text before the single arrow of a one-argument function, trimmed.
///
/// Returns `None` when the signature has no arrow or more than one.
pub fn declared_input_type(signature: &str) -> Option<&str> {
    let mut pieces = signature.split(ARROW);
    let input = pieces.next()?;
    pieces.next()?;
    if pieces.next().is_some() {
        return None;
    }
    Some(input.trim())
}

/// The type a signature is "about".
///
/// For functions this is the text before the first arrow; otherwise the text
/// after the leading type token (`Int` in `Json.Decode.Decoder Int`). A
/// signature with neither an arrow nor a second token is its own payload.
pub fn payload_type(signature: &str) -> &str {
    if let Some((input, _)) = signature.split_once(ARROW) {
        return input.trim();
    }

    let trimmed = signature.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((_, rest)) => rest.trim(),
        None => signature,
    }
}

/// Keep only decoder signatures, in original order.
pub fn only_decoders<C>(module: &Module, classifier: &C) -> ClassifiedModule
where
    C: SignatureClassifier + ?Sized,
{
    restrict(module, SignatureKind::Decoders, |s| classifier.is_decoder(s))
}

/// Keep only simple view signatures, in original order.
pub fn only_simple_views<C>(module: &Module, classifier: &C) -> ClassifiedModule
where
    C: SignatureClassifier + ?Sized,
{
    restrict(module, SignatureKind::SimpleViews, |s| {
        classifier.is_simple_view(s)
    })
}

/// Keep signatures that are decoders or simple views, in original order.
pub fn only_decoders_and_views<C>(module: &Module, classifier: &C) -> ClassifiedModule
where
    C: SignatureClassifier + ?Sized,
{
    restrict(module, SignatureKind::DecodersAndViews, |s| {
        classifier.is_decoder(s) || classifier.is_simple_view(s)
    })
}

fn restrict(
    module: &Module,
    kind: SignatureKind,
    keep: impl Fn(&Signature) -> bool,
) -> ClassifiedModule {
    let signatures = module
        .signatures
        .iter()
        .filter(|s| keep(s))
        .cloned()
        .collect();

    ClassifiedModule {
        kind,
        module: Module::new(module.module_name.clone(), signatures),
    }
}
