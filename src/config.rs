//! Generation configuration.
//!
//! All knobs of the transformation live here: the subsystem variable name
//! spliced into each map-key expression, the help banner, and the record
//! template. Everything has a default matching the historical output, so a
//! config file is only needed to override the free parameters.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::template::DEFAULT_RECORD_TEMPLATE;

fn default_subsystem_var() -> String {
    "subsystem".to_string()
}

fn default_banner() -> String {
    "jcmd VM.native_memory metric".to_string()
}

fn default_record_template() -> String {
    DEFAULT_RECORD_TEMPLATE.to_string()
}

/// Configuration for one generation run.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GenConfig {
    /// Variable name concatenated with the metric name in each map-key
    /// expression. Emitted verbatim into the generated code.
    #[serde(default = "default_subsystem_var")]
    pub subsystem_var: String,

    /// Banner prefixed to every derived help label.
    #[serde(default = "default_banner")]
    pub banner: String,

    /// Table-entry layout, see [`crate::template::RecordTemplate`].
    #[serde(default = "default_record_template")]
    pub record_template: String,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            subsystem_var: default_subsystem_var(),
            banner: default_banner(),
            record_template: default_record_template(),
        }
    }
}

impl GenConfig {
    /// Load a config from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(format!("Config file does not exist: {}", path.display()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

        let config: GenConfig = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.subsystem_var.is_empty() {
            return Err("subsystem_var must not be empty".to_string());
        }

        for placeholder in ["{group}", "{name}", "{help}"] {
            if !self.record_template.contains(placeholder) {
                return Err(format!(
                    "record_template is missing the {} placeholder",
                    placeholder
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_historical_output() {
        let config = GenConfig::default();
        assert_eq!(config.subsystem_var, "subsystem");
        assert_eq!(config.banner, "jcmd VM.native_memory metric");
        assert!(config.record_template.contains("metricAttr"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: GenConfig = serde_yaml::from_str("subsystem_var: jvmSubsystem").unwrap();
        assert_eq!(config.subsystem_var, "jvmSubsystem");
        assert_eq!(config.banner, "jcmd VM.native_memory metric");
        assert_eq!(config.record_template, DEFAULT_RECORD_TEMPLATE);
    }

    #[test]
    fn test_validate_rejects_template_without_placeholders() {
        let config = GenConfig {
            record_template: "m[{prefix}] = {name}".to_string(),
            ..GenConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("{group}"));
    }

    #[test]
    fn test_validate_rejects_empty_subsystem_var() {
        let config = GenConfig {
            subsystem_var: String::new(),
            ..GenConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<GenConfig, _> = serde_yaml::from_str("no_such_knob: true");
        assert!(result.is_err());
    }
}
