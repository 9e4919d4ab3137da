// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Server configuration.
//!
//! Loaded from TOML. Every section and field has a default, so an empty document yields
//! [`ServerConfig::default`].
//!
//! ```toml
//! [naming]
//! prefix = "New"
//! label_kind = "label"
//!
//! [attributes]
//! default_type = "EString"
//!
//! [operations]
//! strict_containment = false
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::model::{BuiltinType, LabelKind};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default)]
    naming: NamingConfig,
    #[serde(default)]
    attributes: AttributeConfig,
    #[serde(default)]
    operations: OperationConfig,
}

impl ServerConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn naming(&self) -> &NamingConfig {
        &self.naming
    }

    pub fn attributes(&self) -> &AttributeConfig {
        &self.attributes
    }

    pub fn operations(&self) -> &OperationConfig {
        &self.operations
    }

    pub fn with_strict_containment(mut self, strict: bool) -> Self {
        self.operations.strict_containment = strict;
        self
    }
}

/// Default names are `<prefix><kind name><counter>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    prefix: String,
    label_kind: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            prefix: "New".to_owned(),
            label_kind: LabelKind::LABEL.as_str().to_owned(),
        }
    }
}

impl NamingConfig {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn label_kind(&self) -> LabelKind {
        LabelKind::new(self.label_kind.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AttributeConfig {
    default_type: BuiltinType,
}

impl Default for AttributeConfig {
    fn default() -> Self {
        Self {
            default_type: BuiltinType::EString,
        }
    }
}

impl AttributeConfig {
    pub fn default_type(&self) -> BuiltinType {
        self.default_type
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OperationConfig {
    /// Reject a child kind the container cannot own instead of skipping it.
    strict_containment: bool,
}

impl OperationConfig {
    pub fn strict_containment(&self) -> bool {
        self.strict_containment
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ServerConfig};
    use crate::model::{BuiltinType, LabelKind};

    #[test]
    fn empty_document_yields_defaults() {
        let config = ServerConfig::from_toml_str("").expect("parse");

        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.naming().prefix(), "New");
        assert_eq!(config.naming().label_kind(), LabelKind::LABEL);
        assert_eq!(config.attributes().default_type(), BuiltinType::EString);
        assert!(!config.operations().strict_containment());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = ServerConfig::from_toml_str(
            "[attributes]\ndefault_type = \"EInt\"\n\n[operations]\nstrict_containment = true\n",
        )
        .expect("parse");

        assert_eq!(config.attributes().default_type(), BuiltinType::EInt);
        assert!(config.operations().strict_containment());
        assert_eq!(config.naming().prefix(), "New");
    }

    #[test]
    fn unknown_builtin_type_is_rejected() {
        let toml = "[attributes]\ndefault_type = \"Text\"\n";
        let err = ServerConfig::from_toml_str(toml).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
        let message = err.to_string();
        assert!(message.contains("unknown built-in data type 'Text'"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = ServerConfig::from_toml_str("[naming]\nsuffix = \"x\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
