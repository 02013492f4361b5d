//! OpenAPI 3.x path-item object model.
//!
//! Round-trips path items through JSON/YAML without losing vendor
//! extensions, exposes the per-method operation slots as a keyed mapping,
//! and validates the object structure with stable `E`-prefixed error codes.

pub mod error;
pub mod operation;
pub mod parameter;
pub mod path_item;
pub mod response;
pub mod server;
pub mod validation;

pub use error::{MethodError, ValidationError};
pub use operation::Operation;
pub use parameter::Parameter;
pub use path_item::{PathItem, METHODS};
pub use response::{Response, Responses};
pub use server::{Server, ServerVariable};
pub use validation::{validate_extensions, ValidationOptions};

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
