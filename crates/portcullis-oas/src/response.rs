use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::validation::{validate_extensions, ValidationOptions};

/// The responses map of an operation, keyed by status pattern
/// (`"200"`, `"default"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Responses(pub BTreeMap<String, Response>);

impl Responses {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn insert(&mut self, status: impl Into<String>, response: Response) {
        self.0.insert(status.into(), response);
    }

    pub fn get(&self, status: &str) -> Option<&Response> {
        self.0.get(status)
    }

    /// Look up the response for a concrete status code.
    ///
    /// Falls back to the `default` entry when no exact key matches.
    pub fn status(&self, status: u16) -> Result<&Response, ValidationError> {
        self.0
            .get(&status.to_string())
            .or_else(|| self.0.get("default"))
            .ok_or_else(|| ValidationError::NoResponseForStatus(status.to_string()))
    }

    pub(crate) fn validate(&self, options: &ValidationOptions) -> Result<(), ValidationError> {
        if self.0.is_empty() {
            return Err(ValidationError::NoResponseDefined);
        }
        for (status, response) in &self.0 {
            response.validate(status, options)?;
        }
        Ok(())
    }
}

/// A single response object. Header, content, and link payloads are
/// carried opaquely; their schemas are not this crate's concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Response {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,

    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

impl Response {
    pub(crate) fn validate(
        &self,
        status: &str,
        options: &ValidationOptions,
    ) -> Result<(), ValidationError> {
        if self.description.is_empty() {
            return Err(ValidationError::MissingResponseDescription(
                status.to_string(),
            ));
        }
        validate_extensions(options, &self.extensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::code;
    use serde_json::json;

    fn ok_response() -> Response {
        Response {
            description: "ok".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn status_resolves_exact_key() {
        let mut responses = Responses::default();
        responses.insert("200", ok_response());
        assert!(responses.status(200).is_ok());
    }

    #[test]
    fn status_falls_back_to_default() {
        let mut responses = Responses::default();
        responses.insert("default", ok_response());
        assert!(responses.status(503).is_ok());
    }

    #[test]
    fn status_miss_reports_code_20001() {
        let mut responses = Responses::default();
        responses.insert("200", ok_response());
        let err = responses.status(404).unwrap_err();
        assert_eq!(err.code(), Some(code::NO_RESPONSE_FOR_STATUS));
        assert_eq!(err.to_string(), "E20001: no response is defined for status \"404\"");
    }

    #[test]
    fn empty_responses_fail_with_code_20000() {
        let responses = Responses::default();
        let err = responses.validate(&ValidationOptions::new()).unwrap_err();
        assert_eq!(err.code(), Some(code::NO_RESPONSE_DEFINED));
    }

    #[test]
    fn response_requires_description() {
        let mut responses = Responses::default();
        responses.insert("204", Response::default());
        let err = responses.validate(&ValidationOptions::new()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingResponseDescription(ref status) if status == "204"
        ));
    }

    #[test]
    fn round_trip_keeps_opaque_content_and_extensions() {
        let doc = json!({
            "200": {
                "description": "ok",
                "content": { "application/json": { "schema": { "type": "object" } } },
                "x-cache": "private"
            }
        });
        let responses: Responses = serde_json::from_value(doc.clone()).unwrap();
        assert_eq!(responses.len(), 1);
        let response = responses.get("200").unwrap();
        assert_eq!(response.extensions["x-cache"], json!("private"));
        assert_eq!(serde_json::to_value(&responses).unwrap(), doc);
    }
}
