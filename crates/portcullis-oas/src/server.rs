use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::validation::{validate_extensions, ValidationOptions};

/// A server override: where requests for this path are served from
/// instead of the document-level servers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: BTreeMap<String, ServerVariable>,

    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

impl Server {
    pub fn validate(&self, options: &ValidationOptions) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::EmptyServerUrl);
        }
        for (name, variable) in &self.variables {
            variable.validate(name, options)?;
        }
        validate_extensions(options, &self.extensions)
    }
}

/// A substitution variable for a templated server url.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerVariable {
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enumeration: Vec<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub default: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

impl ServerVariable {
    pub(crate) fn validate(
        &self,
        name: &str,
        options: &ValidationOptions,
    ) -> Result<(), ValidationError> {
        if self.default.is_empty() {
            return Err(ValidationError::MissingVariableDefault(name.to_string()));
        }
        if !self.enumeration.is_empty() && !self.enumeration.contains(&self.default) {
            return Err(ValidationError::DefaultNotInEnum {
                name: name.to_string(),
                default: self.default.clone(),
            });
        }
        validate_extensions(options, &self.extensions)
    }
}
