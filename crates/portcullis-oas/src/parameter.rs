use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::validation::{validate_extensions, ValidationOptions};

/// Locations a parameter may be carried in.
const LOCATIONS: [&str; 4] = ["path", "query", "header", "cookie"];

/// A parameter shared by every operation on a path.
///
/// Schema, example, and content payloads are carried opaquely;
/// JSON-Schema validation of their contents is out of scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameter {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(rename = "in", skip_serializing_if = "String::is_empty")]
    pub location: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "crate::is_false")]
    pub required: bool,

    #[serde(skip_serializing_if = "crate::is_false")]
    pub deprecated: bool,

    #[serde(rename = "allowEmptyValue", skip_serializing_if = "crate::is_false")]
    pub allow_empty_value: bool,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub style: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,

    #[serde(rename = "allowReserved", skip_serializing_if = "crate::is_false")]
    pub allow_reserved: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,

    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

impl Parameter {
    pub fn validate(&self, options: &ValidationOptions) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyParameterName);
        }
        if !LOCATIONS.contains(&self.location.as_str()) {
            return Err(ValidationError::InvalidParameterLocation {
                name: self.name.clone(),
                location: self.location.clone(),
            });
        }
        // Path parameters are always required.
        if self.location == "path" && !self.required {
            return Err(ValidationError::OptionalPathParameter(self.name.clone()));
        }
        validate_extensions(options, &self.extensions)
    }
}
