//! Generation scenarios exercised through the public library API.

use debug_decoders::codegen::{SENTINEL_DECODER_CONSTRUCTOR, SENTINEL_VIEW_CONSTRUCTOR};
use debug_decoders::io::parse_interface;
use debug_decoders::pairing::{decoder_reference, view_reference};
use debug_decoders::{
    assemble, constructor_name, resolve_pairs, AssemblyOptions, DebugDecodersConfig,
    LexicalClassifier, Module, PairedView, Pipeline, Signature,
};
use proptest::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixture_modules() -> Vec<Module> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/fixtures/interface.json");
    parse_interface(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_fixture_pairs_in_declaration_order() {
    let entries = resolve_pairs(&fixture_modules(), &LexicalClassifier::default());

    let pairs: Vec<(String, String)> = entries
        .iter()
        .map(|entry| (decoder_reference(entry), view_reference(entry)))
        .collect();

    assert_eq!(
        pairs,
        vec![
            ("Api.User.decodeUser".to_string(), "View.User.viewUser".to_string()),
            ("Api.User.decodeAge".to_string(), "View.User.viewAge".to_string()),
            ("Api.Tags.decodeTags".to_string(), "viewAsText".to_string()),
            ("Api.Tags.decodeCount".to_string(), "View.User.viewAge".to_string()),
        ]
    );
}

#[test]
fn test_empty_project_uses_sentinels() {
    let generated = assemble(&[], &LexicalClassifier::default(), &AssemblyOptions::default());

    assert!(generated
        .source
        .contains(&format!("type DecodedValue\n    = {SENTINEL_DECODER_CONSTRUCTOR}")));
    assert!(generated
        .source
        .contains(&format!("type KnownView\n    = {SENTINEL_VIEW_CONSTRUCTOR}")));
}

#[test]
fn test_pipeline_and_assemble_agree_on_fixture() {
    let modules = fixture_modules();
    let (_, generated) = Pipeline::from_config(&DebugDecodersConfig::default()).run(&modules);

    assert_eq!(
        generated,
        assemble(&modules, &LexicalClassifier::default(), &AssemblyOptions::default())
    );
}

#[test]
fn test_fallback_entry_uses_placeholder_module() {
    let modules = vec![Module::new(
        "M",
        vec![Signature::new("foo", "Json.Decode.Decoder Int")],
    )];

    let entries = resolve_pairs(&modules, &LexicalClassifier::default());

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].view, PairedView::Fallback);
    assert_eq!(entries[0].view_module.module_name, "");
}

fn type_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Int", "String", "Bool", "Float", "(List Int)", "User"])
        .prop_map(str::to_string)
}

proptest! {
    #[test]
    fn prop_one_entry_per_decoder(
        decoders in prop::collection::vec(type_name(), 0..8),
        views in prop::collection::vec(type_name(), 0..8),
    ) {
        let decoder_module = Module::new(
            "Decoders",
            decoders
                .iter()
                .enumerate()
                .map(|(i, t)| Signature::new(format!("d{i}"), format!("Json.Decode.Decoder {t}")))
                .collect(),
        );
        let view_module = Module::new(
            "Views",
            views
                .iter()
                .enumerate()
                .map(|(i, t)| Signature::new(format!("v{i}"), format!("{t} -> Html.Html msg")))
                .collect(),
        );

        let entries = resolve_pairs(&[decoder_module, view_module], &LexicalClassifier::default());

        prop_assert_eq!(entries.len(), decoders.len());
        for (entry, payload) in entries.iter().zip(&decoders) {
            prop_assert_eq!(entry.view.is_fallback(), !views.contains(payload));
        }
    }

    #[test]
    fn prop_constructor_name_ignores_whitespace(padding in "[ ]{0,3}") {
        let spaced = Signature::new("a", format!("Json.Decode.Decoder{padding} (List{padding} Int)"));
        let plain = Signature::new("b", "Json.Decode.Decoder (List Int)");
        prop_assume!(!padding.is_empty());
        prop_assert_eq!(constructor_name(&spaced), constructor_name(&plain));
    }
}
