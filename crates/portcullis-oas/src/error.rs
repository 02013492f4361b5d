use thiserror::Error;

/// Stable numeric error codes for programmatic matching.
///
/// The 10xxx block covers operation addressing, the 20xxx block covers
/// structural validation.
pub mod code {
    /// Requested HTTP method is outside the addressable subset.
    pub const NO_SUCH_HTTP_METHOD: u32 = 10000;
    /// Method is recognized but no operation is defined for it.
    pub const NO_SUCH_OPERATION: u32 = 10001;
    /// An operation defines no responses at all.
    pub const NO_RESPONSE_DEFINED: u32 = 20000;
    /// No entry in the responses map matches the requested status.
    pub const NO_RESPONSE_FOR_STATUS: u32 = 20001;
}

/// Addressing failures from method-keyed operation lookup.
///
/// Always recoverable: unknown methods are routine input on dispatch
/// paths and are returned to the caller, never logged or swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MethodError {
    /// E10000: the method is not addressable through this lookup.
    #[error("E10000: unsupported HTTP method {0:?}")]
    NoSuchHttpMethod(String),

    /// E10001: the method is recognized but its slot is empty.
    #[error("E10001: no operation is defined for HTTP method {0:?}")]
    NoSuchOperation(String),
}

impl MethodError {
    /// The stable numeric code for this error.
    pub fn code(&self) -> u32 {
        match self {
            MethodError::NoSuchHttpMethod(_) => code::NO_SUCH_HTTP_METHOD,
            MethodError::NoSuchOperation(_) => code::NO_SUCH_OPERATION,
        }
    }
}

/// Structural validation failures.
///
/// Validation is fail-fast: the first violation propagates upward,
/// gaining an [`InvalidOperation`](ValidationError::InvalidOperation)
/// context frame at each recursion level.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// E20000: an operation must define at least one response.
    #[error("E20000: no response is defined")]
    NoResponseDefined,

    /// E20001: no responses entry matches the requested status.
    #[error("E20001: no response is defined for status {0:?}")]
    NoResponseForStatus(String),

    /// Context frame identifying which operation failed.
    #[error("invalid operation {method}: {source}")]
    InvalidOperation {
        method: String,
        source: Box<ValidationError>,
    },

    #[error("extension key {0:?} is missing the \"x-\" prefix")]
    UnprefixedExtension(String),

    #[error("server url must not be empty")]
    EmptyServerUrl,

    #[error("server variable {0:?} must declare a default value")]
    MissingVariableDefault(String),

    #[error("server variable {name:?} default {default:?} is not listed in its enum")]
    DefaultNotInEnum { name: String, default: String },

    #[error("parameter name must not be empty")]
    EmptyParameterName,

    #[error("parameter {name:?} has unsupported location {location:?}")]
    InvalidParameterLocation { name: String, location: String },

    #[error("path parameter {0:?} must be required")]
    OptionalPathParameter(String),

    #[error("response {0:?} must have a description")]
    MissingResponseDescription(String),
}

impl ValidationError {
    /// The stable numeric code, for the coded subset of variants.
    ///
    /// Context frames report the code of the failure they wrap; purely
    /// structural variants have no code.
    pub fn code(&self) -> Option<u32> {
        match self {
            ValidationError::NoResponseDefined => Some(code::NO_RESPONSE_DEFINED),
            ValidationError::NoResponseForStatus(_) => Some(code::NO_RESPONSE_FOR_STATUS),
            ValidationError::InvalidOperation { source, .. } => source.code(),
            _ => None,
        }
    }
}
