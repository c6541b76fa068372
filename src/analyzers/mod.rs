pub mod signature_classifier;

pub use signature_classifier::{
    declared_input_type, is_decoder, is_simple_view, only_decoders, only_decoders_and_views,
    only_simple_views, payload_type, IsDecoder, IsSimpleView, LexicalClassifier,
    SignatureClassifier, ARROW, DEFAULT_DECODER_TYPE, DEFAULT_VIEW_TYPE,
};
