//! Ambient configuration threaded through recursive validation calls.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::ValidationError;

/// Read-only options for a single validation pass.
///
/// Passed by shared reference into every recursive `validate` call; never
/// stored on the objects being validated.
#[derive(Debug, Clone, Default)]
pub struct ValidationOptions {
    allow_unprefixed_extensions: bool,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Permit extension keys that do not start with `x-`.
    pub fn allow_unprefixed_extensions(mut self, allow: bool) -> Self {
        self.allow_unprefixed_extensions = allow;
        self
    }
}

/// Validate an extension bag against the naming rules.
///
/// Reserved keys never appear here (decoding strips them into named
/// fields), so the only rule is the `x-` prefix, unless the pass opts
/// out.
pub fn validate_extensions(
    options: &ValidationOptions,
    extensions: &BTreeMap<String, Value>,
) -> Result<(), ValidationError> {
    if options.allow_unprefixed_extensions {
        return Ok(());
    }
    for key in extensions.keys() {
        if !key.starts_with("x-") {
            return Err(ValidationError::UnprefixedExtension(key.clone()));
        }
    }
    Ok(())
}
