use serde::{Deserialize, Serialize};

use crate::analyzers::{DEFAULT_DECODER_TYPE, DEFAULT_VIEW_TYPE};
use crate::codegen::DEFAULT_MODULE_NAME;

/// Default extractor executable.
pub const DEFAULT_EXTRACTOR: &str = "elm-interface-to-json";

/// Default project manifest file name.
pub const DEFAULT_MANIFEST: &str = "elm-package.json";

/// Root configuration structure, read from `.debug-decoders.toml`.
///
/// Every key is optional; the accessors fall back to the defaults an Elm 0.18
/// project expects.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DebugDecodersConfig {
    /// Leading token that marks a signature as a decoder
    #[serde(default)]
    pub decoder_type: Option<String>,

    /// Result type that marks a function as a view
    #[serde(default)]
    pub view_type: Option<String>,

    /// Name of the generated Elm module
    #[serde(default)]
    pub module_name: Option<String>,

    /// Executable that dumps the project's module interfaces as JSON
    #[serde(default)]
    pub extractor: Option<String>,

    /// File that must exist in the project directory
    #[serde(default)]
    pub manifest: Option<String>,
}

impl DebugDecodersConfig {
    pub fn decoder_type(&self) -> &str {
        self.decoder_type.as_deref().unwrap_or(DEFAULT_DECODER_TYPE)
    }

    pub fn view_type(&self) -> &str {
        self.view_type.as_deref().unwrap_or(DEFAULT_VIEW_TYPE)
    }

    pub fn module_name(&self) -> &str {
        self.module_name.as_deref().unwrap_or(DEFAULT_MODULE_NAME)
    }

    pub fn extractor(&self) -> &str {
        self.extractor.as_deref().unwrap_or(DEFAULT_EXTRACTOR)
    }

    pub fn manifest(&self) -> &str {
        self.manifest.as_deref().unwrap_or(DEFAULT_MANIFEST)
    }

    /// Check every configured value, collecting all problems.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let errors: Vec<String> = [
            validate_type_name("decoder_type", self.decoder_type()),
            validate_type_name("view_type", self.view_type()),
            validate_module_name(self.module_name()),
            validate_non_empty("extractor", self.extractor()),
            validate_non_empty("manifest", self.manifest()),
        ]
        .into_iter()
        .flatten()
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn validate_type_name(key: &str, value: &str) -> Option<String> {
    if value.is_empty() {
        Some(format!("{key} must not be empty"))
    } else if value.chars().any(char::is_whitespace) {
        Some(format!("{key} must not contain whitespace, got {value:?}"))
    } else {
        None
    }
}

fn validate_module_name(value: &str) -> Option<String> {
    match value.chars().next() {
        Some(first) if first.is_ascii_uppercase() => None,
        _ => Some(format!(
            "module_name must start with an uppercase ASCII letter, got {value:?}"
        )),
    }
}

fn validate_non_empty(key: &str, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{key} must not be empty"))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_configured() {
        let config = DebugDecodersConfig::default();

        assert_eq!(config.decoder_type(), "Json.Decode.Decoder");
        assert_eq!(config.view_type(), "Html.Html");
        assert_eq!(config.module_name(), "DebugDecoders");
        assert_eq!(config.extractor(), "elm-interface-to-json");
        assert_eq!(config.manifest(), "elm-package.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_configured_values_override_defaults() {
        let config: DebugDecodersConfig = toml::from_str(
            r#"
decoder_type = "Decode.Decoder"
module_name = "Debug.Json"
"#,
        )
        .unwrap();

        assert_eq!(config.decoder_type(), "Decode.Decoder");
        assert_eq!(config.module_name(), "Debug.Json");
        assert_eq!(config.view_type(), "Html.Html");
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result = toml::from_str::<DebugDecodersConfig>("decoder = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_collects_every_problem() {
        let config = DebugDecodersConfig {
            decoder_type: Some("Json Decoder".to_string()),
            view_type: Some(String::new()),
            module_name: Some("debug".to_string()),
            ..Default::default()
        };

        let errors = config.validate().unwrap_err();

        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("decoder_type"));
        assert!(errors[1].contains("view_type"));
        assert!(errors[2].contains("module_name"));
    }

    #[test]
    fn test_blank_extractor_is_invalid() {
        let config = DebugDecodersConfig {
            extractor: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().len(), 1);
    }
}
