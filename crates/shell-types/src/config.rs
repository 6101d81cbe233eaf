use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::loading::LoadingConfig;

/// Top-level UI config file structure (`ui.toml`).
///
/// Every section is optional; a missing or empty file yields the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub loading: LoadingConfig,
}

impl UiConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::io(path.display().to_string(), e.to_string()))?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded UI config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::{ColorVariant, SpinnerSize};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = UiConfig::from_toml_str("").unwrap();
        assert_eq!(config, UiConfig::default());
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let config = UiConfig::from_toml_str(
            r#"
            [loading]
            size = "large"
            "#,
        )
        .unwrap();
        assert_eq!(config.loading.size, SpinnerSize::Large);
        assert_eq!(config.loading.color, ColorVariant::Primary);
        assert_eq!(config.loading.message, "Loading...");
        assert_eq!(config.loading.line_count, 3);
    }

    #[test]
    fn full_table() {
        let config = UiConfig::from_toml_str(
            r#"
            [loading]
            size = "xlarge"
            color = "danger"
            message = "Hold on"
            show_message = false
            visible = false
            line_count = 5
            "#,
        )
        .unwrap();
        assert_eq!(
            config.loading,
            LoadingConfig {
                size: SpinnerSize::XLarge,
                color: ColorVariant::Danger,
                message: "Hold on".into(),
                show_message: false,
                visible: false,
                line_count: 5,
            }
        );
    }

    #[test]
    fn unknown_option_values_fall_back_to_defaults() {
        let config = UiConfig::from_toml_str(
            r#"
            [loading]
            size = "gigantic"
            color = "chartreuse"
            line_count = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.loading.size, SpinnerSize::Medium);
        assert_eq!(config.loading.color, ColorVariant::Primary);
        assert_eq!(config.loading.line_count, 2);
    }

    #[test]
    fn negative_line_count_is_rejected() {
        let err = UiConfig::from_toml_str(
            r#"
            [loading]
            line_count = -1
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn wrong_type_is_a_parse_error() {
        let err = UiConfig::from_toml_str("loading = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = UiConfig::load("/nonexistent/ui.toml").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert_eq!(path, "/nonexistent/ui.toml"),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
