//! Identifier derivation for generated code.
//!
//! Constructor names are derived from the signature text alone, never from
//! the module that declared it. Two decoders with the same type in different
//! modules therefore share one constructor, which is what lets the generated
//! dispatch stay exhaustive over result *types*.

use crate::analyzers::{payload_type, ARROW};
use crate::core::{Module, Signature};

/// Replaces `.`, `(`, `)` and any other character that cannot appear in an
/// identifier.
pub const SEPARATOR: char = '_';

/// Stands in for `->` inside normalized names.
pub const ARROW_REPLACEMENT: &str = "_to_";

/// Suffix of constructors tagging a signature.
pub const TAG_SUFFIX: &str = "Tag";

/// Suffix of constructors carrying a decoded value.
pub const PAYLOAD_SUFFIX: &str = "Payload";

/// `Module.name`, or the bare name for the placeholder module.
pub fn fully_qualified_reference(module: &Module, signature: &Signature) -> String {
    if module.is_placeholder() {
        signature.name.clone()
    } else {
        format!("{}.{}", module.module_name, signature.name)
    }
}

/// Constructor tagging the whole signature.
///
/// `Json.Decode.Decoder (List Int)` becomes `Json_Decode_Decoder_ListInt_Tag`.
pub fn constructor_name(signature: &Signature) -> String {
    format!("{}{}", normalize(&signature.signature), TAG_SUFFIX)
}

/// Constructor wrapping a value of the signature's payload type.
///
/// `Json.Decode.Decoder Int` and `Int -> Html.Html msg` both become
/// `IntPayload`.
pub fn payload_constructor_name(signature: &Signature) -> String {
    format!(
        "{}{}",
        normalize(payload_type(&signature.signature)),
        PAYLOAD_SUFFIX
    )
}

/// Whitespace-free identifier text for a type expression.
///
/// The result always starts with an uppercase letter so it can head a
/// constructor name. Text that does not already start with one is prefixed
/// with `T` rather than case-folded, so `Msg` and `msg` stay distinct.
pub fn normalize(text: &str) -> String {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let replaced = compact.replace(ARROW, ARROW_REPLACEMENT);

    let identifier: String = replaced
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == SEPARATOR {
                c
            } else {
                SEPARATOR
            }
        })
        .collect();

    match identifier.chars().next() {
        Some(first) if first.is_ascii_uppercase() => identifier,
        _ => format!("T{identifier}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_is_qualified() {
        let module = Module::new("Api.User", Vec::new());
        let signature = Signature::new("decodeUser", "Json.Decode.Decoder Api.User.User");
        assert_eq!(
            fully_qualified_reference(&module, &signature),
            "Api.User.decodeUser"
        );
    }

    #[test]
    fn test_reference_in_placeholder_module_is_bare() {
        let signature = Signature::new("viewAsText", "a -> Html.Html msg");
        assert_eq!(
            fully_qualified_reference(&Module::placeholder(), &signature),
            "viewAsText"
        );
    }

    #[test]
    fn test_constructor_name_for_decoder() {
        let signature = Signature::new("foo", "Json.Decode.Decoder Int");
        assert_eq!(constructor_name(&signature), "Json_Decode_DecoderIntTag");
    }

    #[test]
    fn test_constructor_name_replaces_parentheses() {
        let signature = Signature::new("foo", "Json.Decode.Decoder (List Int)");
        assert_eq!(
            constructor_name(&signature),
            "Json_Decode_Decoder_ListInt_Tag"
        );
    }

    #[test]
    fn test_constructor_name_for_view() {
        let signature = Signature::new("bar", "Int -> Html.Html msg");
        assert_eq!(constructor_name(&signature), "Int_to_Html_HtmlmsgTag");
    }

    #[test]
    fn test_constructor_name_ignores_module() {
        let a = Signature::new("decodeA", "Json.Decode.Decoder Int");
        let b = Signature::new("decodeB", "Json.Decode.Decoder   Int");
        assert_eq!(constructor_name(&a), constructor_name(&b));
    }

    #[test]
    fn test_payload_constructor_matches_between_decoder_and_view() {
        let decoder = Signature::new("foo", "Json.Decode.Decoder Int");
        let view = Signature::new("bar", "Int -> Html.Html msg");
        assert_eq!(payload_constructor_name(&decoder), "IntPayload");
        assert_eq!(payload_constructor_name(&view), "IntPayload");
    }

    #[test]
    fn test_payload_constructor_of_degenerate_signature() {
        let decoder = Signature::new("raw", "Json.Decode.Decoder");
        assert_eq!(
            payload_constructor_name(&decoder),
            "Json_Decode_DecoderPayload"
        );
    }

    #[test]
    fn test_normalize_lowercase_type_variable() {
        assert_eq!(normalize("a -> Html.Html msg"), "Ta_to_Html_Htmlmsg");
    }

    #[test]
    fn test_normalize_keeps_case_distinct() {
        assert_eq!(normalize("Msg"), "Msg");
        assert_eq!(normalize("msg"), "Tmsg");
        assert_ne!(
            payload_constructor_name(&Signature::new("a", "Json.Decode.Decoder Msg")),
            payload_constructor_name(&Signature::new("b", "Json.Decode.Decoder msg"))
        );
    }

    #[test]
    fn test_normalize_punctuation_start_gets_prefix() {
        assert_eq!(normalize("( Int, String )"), "T_Int_String_");
        assert_eq!(normalize(""), "T");
    }

    #[test]
    fn test_normalize_records() {
        assert_eq!(normalize("{ name : String }"), "T_name_String_");
    }

    proptest! {
        #[test]
        fn constructor_name_ignores_extra_whitespace(
            tokens in proptest::collection::vec("[A-Za-z.()]{1,8}", 1..5),
            gaps in proptest::collection::vec("[ \t]{1,4}", 5),
        ) {
            let tight = tokens.join(" ");
            let loose = tokens
                .iter()
                .zip(gaps.iter())
                .map(|(token, gap)| format!("{gap}{token}"))
                .collect::<String>();

            prop_assert_eq!(
                constructor_name(&Signature::new("a", tight)),
                constructor_name(&Signature::new("b", loose))
            );
        }

        #[test]
        fn normalized_names_are_identifiers(text in ".*") {
            let name = normalize(&text);
            let first = name.chars().next();
            prop_assert!(first.is_some_and(char::is_uppercase));
            prop_assert!(name.chars().all(|c| c.is_alphanumeric() || c == SEPARATOR));
        }
    }
}
