//! Decoder-to-view pairing.
//!
//! Every decoder is matched with the first simple view, in module order then
//! declaration order, whose input type is textually equal to the decoder's
//! payload type. Later compatible views are ignored. When nothing matches the
//! decoder is paired with the generated module's own text renderer.
//!
//! Matching is string equality on trimmed type text: `Int` pairs with `Int`,
//! but `List Int` does not pair with `(List Int)`.
//!
//! The generated program renders through `Html.Html`. A view classified
//! under some other configured view type (`Html.Styled.Html`) is still
//! reported, but never paired; its decoders render as text.

use crate::analyzers::{is_simple_view, SignatureClassifier, DEFAULT_VIEW_TYPE};
use crate::common::naming::fully_qualified_reference;
use crate::core::{Module, PairedEntry, PairedView, Signature};
use serde::Serialize;

/// Name of the render-as-text function defined in the generated module.
pub const FALLBACK_VIEW_NAME: &str = "viewAsText";

/// Signature of the fallback renderer.
pub fn fallback_view_signature() -> Signature {
    Signature::new(FALLBACK_VIEW_NAME, format!("a -> {DEFAULT_VIEW_TYPE} msg"))
}

/// Pair every decoder in `modules` with a view.
///
/// Produces exactly one entry per decoder signature, in the order decoders
/// appear.
pub fn resolve_pairs<C>(modules: &[Module], classifier: &C) -> Vec<PairedEntry>
where
    C: SignatureClassifier + ?Sized,
{
    modules
        .iter()
        .flat_map(|decoder_module| {
            decoder_module
                .signatures
                .iter()
                .filter(|signature| classifier.is_decoder(signature))
                .map(move |decoder| pair_decoder(decoder, decoder_module, modules, classifier))
        })
        .collect()
}

fn pair_decoder<C>(
    decoder: &Signature,
    decoder_module: &Module,
    modules: &[Module],
    classifier: &C,
) -> PairedEntry
where
    C: SignatureClassifier + ?Sized,
{
    let (view, view_module) = match find_view(decoder, modules, classifier) {
        Some((module, view)) => (PairedView::Matched(view.clone()), module.clone()),
        None => (PairedView::Fallback, Module::placeholder()),
    };

    PairedEntry {
        decoder: decoder.clone(),
        decoder_module: decoder_module.clone(),
        view,
        view_module,
    }
}

/// Whether the generated program can embed `view` directly.
pub fn renders_as_program_html(view: &Signature) -> bool {
    is_simple_view(&view.signature, DEFAULT_VIEW_TYPE)
}

/// First renderable view whose declared input equals the decoder's payload.
pub fn find_view<'a, C>(
    decoder: &Signature,
    modules: &'a [Module],
    classifier: &C,
) -> Option<(&'a Module, &'a Signature)>
where
    C: SignatureClassifier + ?Sized,
{
    let payload = classifier.decoder_payload(decoder);

    modules.iter().find_map(|module| {
        module
            .signatures
            .iter()
            .filter(|signature| classifier.is_simple_view(signature))
            .filter(|view| renders_as_program_html(view))
            .find(|view| classifier.view_input(view) == Some(payload))
            .map(|view| (module, view))
    })
}

/// Fully qualified reference of the entry's decoder, e.g. `Api.User.decoder`.
pub fn decoder_reference(entry: &PairedEntry) -> String {
    fully_qualified_reference(&entry.decoder_module, &entry.decoder)
}

/// Reference of the view rendering the entry; the bare fallback name when
/// nothing matched.
pub fn view_reference(entry: &PairedEntry) -> String {
    match &entry.view {
        PairedView::Matched(view) => fully_qualified_reference(&entry.view_module, view),
        PairedView::Fallback => {
            fully_qualified_reference(&entry.view_module, &fallback_view_signature())
        }
    }
}

/// Counts describing a pairing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PairingSummary {
    pub decoders: usize,
    pub matched: usize,
    pub fallbacks: usize,
}

impl PairingSummary {
    pub fn from_entries(entries: &[PairedEntry]) -> Self {
        let fallbacks = entries.iter().filter(|e| e.view.is_fallback()).count();
        Self {
            decoders: entries.len(),
            matched: entries.len() - fallbacks,
            fallbacks,
        }
    }
}
