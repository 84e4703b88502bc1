//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub mapping: MappingSettings,
    pub compound: CompoundSettings,
    pub variants: VariantSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MappingSettings {
    pub seed_min_occurrence: u32,
    pub extend_min_occurrence: u32,
    pub rare_mapping_threshold: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompoundSettings {
    pub min_compound_len: usize,
    pub min_split_index: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariantSettings {
    pub length_mark: String,
    pub aspiration_mark: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.trim().is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    check_positive!(mapping.seed_min_occurrence);
    check_positive!(mapping.extend_min_occurrence);
    check_positive!(mapping.rare_mapping_threshold);

    check_positive!(compound.min_compound_len);
    check_positive!(compound.min_split_index);

    check_non_empty!(variants.length_mark);
    check_non_empty!(variants.aspiration_mark);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.mapping.seed_min_occurrence, 1000);
        assert_eq!(s.mapping.extend_min_occurrence, 100);
        assert_eq!(s.mapping.rare_mapping_threshold, 20);
        assert_eq!(s.compound.min_compound_len, 4);
        assert_eq!(s.compound.min_split_index, 2);
        assert_eq!(s.variants.length_mark, ":");
        assert_eq!(s.variants.aspiration_mark, "_h");
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[mapping]
seed_min_occurrence = 5
extend_min_occurrence = 2
rare_mapping_threshold = 3

[compound]
min_compound_len = 3
min_split_index = 1

[variants]
length_mark = "ː"
aspiration_mark = "ʰ"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.mapping.seed_min_occurrence, 5);
        assert_eq!(s.compound.min_split_index, 1);
        assert_eq!(s.variants.length_mark, "ː");
    }

    #[test]
    fn error_zero_threshold() {
        let toml = r#"
[mapping]
seed_min_occurrence = 0
extend_min_occurrence = 100
rare_mapping_threshold = 20

[compound]
min_compound_len = 4
min_split_index = 2

[variants]
length_mark = ":"
aspiration_mark = "_h"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("mapping.seed_min_occurrence"));
    }

    #[test]
    fn error_zero_split_index() {
        let toml = r#"
[mapping]
seed_min_occurrence = 1000
extend_min_occurrence = 100
rare_mapping_threshold = 20

[compound]
min_compound_len = 4
min_split_index = 0

[variants]
length_mark = ":"
aspiration_mark = "_h"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("compound.min_split_index"));
    }

    #[test]
    fn error_empty_mark() {
        let toml = r#"
[mapping]
seed_min_occurrence = 1000
extend_min_occurrence = 100
rare_mapping_threshold = 20

[compound]
min_compound_len = 4
min_split_index = 2

[variants]
length_mark = ""
aspiration_mark = "_h"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("variants.length_mark"));
    }

    #[test]
    fn error_negative_value_is_parse_error() {
        let toml = r#"
[mapping]
seed_min_occurrence = -1
extend_min_occurrence = 100
rare_mapping_threshold = 20

[compound]
min_compound_len = 4
min_split_index = 2

[variants]
length_mark = ":"
aspiration_mark = "_h"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[mapping]
seed_min_occurrence = 1000
extend_min_occurrence = 100
rare_mapping_threshold = 20
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
