//! Assembly of the generated Elm module.
//!
//! Assembly is split into a pure planning step, which decides every name and
//! every branch, and a rendering step, which only formats the plan. Neither
//! can fail: malformed signatures produce odd but deterministic identifiers,
//! and checking that the result compiles is left to the Elm compiler.

use super::program::{BASE_IMPORTS, PROGRAM, VIEW_AS_TEXT};
use crate::analyzers::{only_decoders_and_views, only_simple_views, SignatureClassifier};
use crate::common::naming::{constructor_name, fully_qualified_reference, payload_constructor_name};
use crate::common::text::{elm_string_literal, parenthesize_type};
use crate::core::{ClassifiedModule, GeneratedModule, Module, PairedEntry, Signature};
use crate::pairing::{decoder_reference, resolve_pairs, view_reference};
use std::collections::{HashMap, HashSet};

/// Name of the generated module when none is configured.
pub const DEFAULT_MODULE_NAME: &str = "DebugDecoders";

/// Constructor emitted when the program defines no decoders.
pub const SENTINEL_DECODER_CONSTRUCTOR: &str = "NoDecodersFound";

/// Constructor emitted when the program defines no simple views.
pub const SENTINEL_VIEW_CONSTRUCTOR: &str = "NoViewsFound";

const INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyOptions {
    pub module_name: String,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            module_name: DEFAULT_MODULE_NAME.to_string(),
        }
    }
}

/// One `DecodedValue` constructor and its dispatch branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderCase {
    pub constructor: String,
    pub payload_type: String,
    pub view_reference: String,
}

/// One `KnownView` constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewCase {
    pub constructor: String,
    pub signature: String,
}

/// One entry of the `decodersByName` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderWrapper {
    pub reference: String,
    pub constructor: String,
    pub view_reference: String,
}

/// Every decision needed to render the generated module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyPlan {
    pub imports: Vec<String>,
    pub decoder_cases: Vec<DecoderCase>,
    pub view_cases: Vec<ViewCase>,
    pub decoder_table: Vec<DecoderWrapper>,
    pub known_views: Vec<(String, String)>,
}

/// Classify, pair and render in one call.
pub fn assemble<C>(modules: &[Module], classifier: &C, options: &AssemblyOptions) -> GeneratedModule
where
    C: SignatureClassifier + ?Sized,
{
    let relevant: Vec<ClassifiedModule> = modules
        .iter()
        .map(|module| only_decoders_and_views(module, classifier))
        .collect();
    let entries = resolve_pairs(modules, classifier);
    let plan = plan(&relevant, &entries, classifier);

    render(&plan, options)
}

/// Decide imports, constructors and table entries.
///
/// `modules` are the decoder-and-view restricted modules; `entries` come
/// from pairing over the same input.
pub fn plan<C>(modules: &[ClassifiedModule], entries: &[PairedEntry], classifier: &C) -> AssemblyPlan
where
    C: SignatureClassifier + ?Sized,
{
    let (decoder_cases, decoder_table) = plan_decoders(entries, classifier);

    AssemblyPlan {
        imports: plan_imports(modules),
        decoder_cases,
        view_cases: plan_view_cases(modules, classifier),
        decoder_table,
        known_views: plan_known_views(modules, classifier),
    }
}

fn plan_imports(modules: &[ClassifiedModule]) -> Vec<String> {
    let mut seen = HashSet::new();
    modules
        .iter()
        .filter(|module| !module.is_empty() && !module.module.is_placeholder())
        .map(|module| module.module_name().to_string())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// One `DecodedValue` case per distinct decoder signature, plus a table row
/// per decoder pointing at its case.
///
/// Decoders whose signatures differ only in whitespace share a case. Any
/// other signatures whose payload names normalize to the same text get a
/// numeric suffix, so every emitted constructor is unique.
fn plan_decoders<C>(
    entries: &[PairedEntry],
    classifier: &C,
) -> (Vec<DecoderCase>, Vec<DecoderWrapper>)
where
    C: SignatureClassifier + ?Sized,
{
    let mut constructors: HashMap<String, String> = HashMap::new();
    let mut taken = HashSet::new();
    let mut cases = Vec::new();
    let mut table = Vec::with_capacity(entries.len());

    for entry in entries {
        let constructor = constructors
            .entry(signature_key(&entry.decoder))
            .or_insert_with(|| {
                let constructor =
                    unique_constructor(payload_constructor_name(&entry.decoder), &mut taken);
                cases.push(DecoderCase {
                    constructor: constructor.clone(),
                    payload_type: classifier.decoder_payload(&entry.decoder).to_string(),
                    view_reference: view_reference(entry),
                });
                constructor
            })
            .clone();

        table.push(DecoderWrapper {
            reference: decoder_reference(entry),
            constructor,
            view_reference: view_reference(entry),
        });
    }

    (cases, table)
}

fn signature_key(signature: &Signature) -> String {
    signature.signature.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn unique_constructor(base: String, taken: &mut HashSet<String>) -> String {
    if taken.insert(base.clone()) {
        return base;
    }

    let mut suffix = 2;
    loop {
        let candidate = format!("{base}{suffix}");
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        suffix += 1;
    }
}

fn plan_view_cases<C>(modules: &[ClassifiedModule], classifier: &C) -> Vec<ViewCase>
where
    C: SignatureClassifier + ?Sized,
{
    let mut seen = HashSet::new();
    modules
        .iter()
        .flat_map(|module| only_simple_views(&module.module, classifier).module.signatures)
        .filter(|view| seen.insert(constructor_name(view)))
        .map(|view| ViewCase {
            constructor: constructor_name(&view),
            signature: view.signature,
        })
        .collect()
}

fn plan_known_views<C>(modules: &[ClassifiedModule], classifier: &C) -> Vec<(String, String)>
where
    C: SignatureClassifier + ?Sized,
{
    modules
        .iter()
        .flat_map(|module| {
            let views = only_simple_views(&module.module, classifier);
            views
                .signatures()
                .iter()
                .map(|view| {
                    (
                        fully_qualified_reference(&views.module, view),
                        constructor_name(view),
                    )
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Format a plan as Elm source.
pub fn render(plan: &AssemblyPlan, options: &AssemblyOptions) -> GeneratedModule {
    let sections = [
        render_header(plan, options),
        render_decoded_type(plan),
        render_known_view_type(plan),
        render_decoder_table(plan),
        render_paired_views(plan),
        render_known_views(plan),
        VIEW_AS_TEXT.to_string(),
        render_view_dispatch(plan),
        render_summary(plan),
        PROGRAM.to_string(),
    ];

    let mut source = sections.join("\n\n\n");
    source.push('\n');

    GeneratedModule {
        module_name: options.module_name.clone(),
        source,
    }
}

fn render_header(plan: &AssemblyPlan, options: &AssemblyOptions) -> String {
    let mut header = format!("module {} exposing (main)\n\n", options.module_name);

    for import in BASE_IMPORTS {
        header.push_str(&format!("import {import}\n"));
    }

    let project_imports: Vec<String> = plan
        .imports
        .iter()
        .filter(|name| **name != options.module_name && !BASE_IMPORTS.contains(&name.as_str()))
        .map(|name| format!("import {name}"))
        .collect();
    if !project_imports.is_empty() {
        header.push('\n');
        header.push_str(&project_imports.join("\n"));
        header.push('\n');
    }

    header.trim_end().to_string()
}

pub(crate) fn render_decoded_type(plan: &AssemblyPlan) -> String {
    let constructors: Vec<String> = if plan.decoder_cases.is_empty() {
        vec![SENTINEL_DECODER_CONSTRUCTOR.to_string()]
    } else {
        plan.decoder_cases
            .iter()
            .map(|case| format!("{} {}", case.constructor, parenthesize_type(&case.payload_type)))
            .collect()
    };

    render_union("DecodedValue", &constructors)
}

pub(crate) fn render_known_view_type(plan: &AssemblyPlan) -> String {
    let constructors: Vec<String> = if plan.view_cases.is_empty() {
        vec![SENTINEL_VIEW_CONSTRUCTOR.to_string()]
    } else {
        plan.view_cases
            .iter()
            .map(|case| case.constructor.clone())
            .collect()
    };

    render_union("KnownView", &constructors)
}

fn render_union(name: &str, constructors: &[String]) -> String {
    let mut union = format!("type {name}");
    for (index, constructor) in constructors.iter().enumerate() {
        let lead = if index == 0 { '=' } else { '|' };
        union.push_str(&format!("\n{INDENT}{lead} {constructor}"));
    }
    union
}

pub(crate) fn render_decoder_table(plan: &AssemblyPlan) -> String {
    let rows: Vec<String> = plan
        .decoder_table
        .iter()
        .map(|wrapper| {
            format!(
                "( {}, Json.Decode.map {} {} )",
                elm_string_literal(&wrapper.reference),
                wrapper.constructor,
                wrapper.reference
            )
        })
        .collect();

    format!(
        "decodersByName : Dict.Dict String (Json.Decode.Decoder DecodedValue)\ndecodersByName =\n{INDENT}Dict.fromList\n{}",
        render_list(&rows, 2)
    )
}

fn render_paired_views(plan: &AssemblyPlan) -> String {
    let rows: Vec<String> = plan
        .decoder_table
        .iter()
        .map(|wrapper| {
            format!(
                "( {}, {} )",
                elm_string_literal(&wrapper.reference),
                elm_string_literal(&wrapper.view_reference)
            )
        })
        .collect();

    format!(
        "pairedViews : Dict.Dict String String\npairedViews =\n{INDENT}Dict.fromList\n{}",
        render_list(&rows, 2)
    )
}

fn render_known_views(plan: &AssemblyPlan) -> String {
    let rows: Vec<String> = plan
        .known_views
        .iter()
        .map(|(reference, constructor)| format!("( {}, {} )", elm_string_literal(reference), constructor))
        .collect();

    format!(
        "knownViews : List ( String, KnownView )\nknownViews =\n{}",
        render_list(&rows, 1)
    )
}

pub(crate) fn render_view_dispatch(plan: &AssemblyPlan) -> String {
    let branches: Vec<(String, String)> = if plan.decoder_cases.is_empty() {
        vec![(
            SENTINEL_DECODER_CONSTRUCTOR.to_string(),
            "Html.text \"No decoders were found\"".to_string(),
        )]
    } else {
        plan.decoder_cases
            .iter()
            .map(|case| {
                (
                    format!("{} value", case.constructor),
                    format!(
                        "Html.map (always IgnoreViewMsg) ({} value)",
                        case.view_reference
                    ),
                )
            })
            .collect()
    };

    format!(
        "viewDecoded : DecodedValue -> Html.Html Msg\nviewDecoded decoded =\n{}",
        render_case("decoded", &branches)
    )
}

pub(crate) fn render_summary(plan: &AssemblyPlan) -> String {
    let branches: Vec<(String, String)> = if plan.decoder_cases.is_empty() {
        vec![(
            SENTINEL_DECODER_CONSTRUCTOR.to_string(),
            "\"No decoders were found\"".to_string(),
        )]
    } else {
        plan.decoder_cases
            .iter()
            .map(|case| {
                (
                    format!("{} value", case.constructor),
                    format!(
                        "{} ++ toString value",
                        elm_string_literal(&format!("{}: ", case.payload_type.trim()))
                    ),
                )
            })
            .collect()
    };

    format!(
        "summarizeDecoded : DecodedValue -> String\nsummarizeDecoded decoded =\n{}",
        render_case("decoded", &branches)
    )
}

fn render_case(subject: &str, branches: &[(String, String)]) -> String {
    let arms: Vec<String> = branches
        .iter()
        .map(|(pattern, body)| format!("{INDENT}{INDENT}{pattern} ->\n{INDENT}{INDENT}{INDENT}{body}"))
        .collect();

    format!("{INDENT}case {subject} of\n{}", arms.join("\n\n"))
}

fn render_list(rows: &[String], depth: usize) -> String {
    let indent = INDENT.repeat(depth);
    if rows.is_empty() {
        return format!("{indent}[]");
    }

    let mut list = String::new();
    for (index, row) in rows.iter().enumerate() {
        let lead = if index == 0 { '[' } else { ',' };
        list.push_str(&format!("{indent}{lead} {row}\n"));
    }
    list.push_str(&format!("{indent}]"));
    list
}
