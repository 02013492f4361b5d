use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::parameter::Parameter;
use crate::response::Responses;
use crate::server::Server;
use crate::validation::{validate_extensions, ValidationOptions};

/// A single HTTP method's request/response contract on a path.
///
/// Request-body, callback, and security payloads are carried opaquely;
/// only the structural rules below are enforced here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Operation {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<Value>,

    #[serde(rename = "operationId", skip_serializing_if = "String::is_empty")]
    pub operation_id: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<Value>,

    #[serde(skip_serializing_if = "Responses::is_empty")]
    pub responses: Responses,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub callbacks: Option<Value>,

    #[serde(skip_serializing_if = "crate::is_false")]
    pub deprecated: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Value>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,

    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

impl Operation {
    /// Validate the operation's structure: at least one response, sound
    /// parameters and server overrides, well-named extensions.
    pub fn validate(&self, options: &ValidationOptions) -> Result<(), ValidationError> {
        self.responses.validate(options)?;
        for parameter in &self.parameters {
            parameter.validate(options)?;
        }
        for server in &self.servers {
            server.validate(options)?;
        }
        validate_extensions(options, &self.extensions)
    }
}
