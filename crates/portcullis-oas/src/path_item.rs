//! The path-item document node: one URL path's set of HTTP-method
//! operations, shared metadata, and vendor extensions.

use std::collections::{BTreeMap, HashMap};

use serde::de::{self, DeserializeOwned};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{MethodError, ValidationError};
use crate::operation::Operation;
use crate::parameter::Parameter;
use crate::server::Server;
use crate::validation::{validate_extensions, ValidationOptions};

/// Canonical uppercase HTTP method names.
pub const CONNECT: &str = "CONNECT";
pub const DELETE: &str = "DELETE";
pub const GET: &str = "GET";
pub const HEAD: &str = "HEAD";
pub const OPTIONS: &str = "OPTIONS";
pub const PATCH: &str = "PATCH";
pub const POST: &str = "POST";
pub const PUT: &str = "PUT";
pub const TRACE: &str = "TRACE";

/// All nine recognized methods, in field order.
pub const METHODS: [&str; 9] = [
    CONNECT, DELETE, GET, HEAD, OPTIONS, PATCH, POST, PUT, TRACE,
];

/// Keys owned by named fields. Everything else in a decoded object is a
/// vendor extension.
const RESERVED_KEYS: [&str; 14] = [
    "$ref",
    "summary",
    "description",
    "connect",
    "delete",
    "get",
    "head",
    "options",
    "patch",
    "post",
    "put",
    "trace",
    "servers",
    "parameters",
];

/// One URL path's entry in an OpenAPI description: per-method operations
/// plus shared metadata, server overrides, parameters, and vendor
/// extensions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
    /// When non-empty the item is a reference to a path item defined
    /// elsewhere, and every other field is suppressed on encode.
    pub reference: String,
    pub summary: String,
    pub description: String,
    pub connect: Option<Operation>,
    pub delete: Option<Operation>,
    pub get: Option<Operation>,
    pub head: Option<Operation>,
    pub options: Option<Operation>,
    pub patch: Option<Operation>,
    pub post: Option<Operation>,
    pub put: Option<Operation>,
    pub trace: Option<Operation>,
    pub servers: Vec<Server>,
    pub parameters: Vec<Parameter>,
    /// Vendor extensions: every decoded key that is not a reserved field
    /// name. Rebuilt wholesale on each decode, never tracked
    /// incrementally.
    pub extensions: BTreeMap<String, Value>,
}

impl PathItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// The populated operation slots keyed by canonical method name.
    ///
    /// The mapping itself carries no ordering guarantee; callers wanting
    /// deterministic iteration sort the method names first.
    pub fn operations(&self) -> HashMap<&'static str, &Operation> {
        let mut operations = HashMap::new();
        if let Some(op) = &self.connect {
            operations.insert(CONNECT, op);
        }
        if let Some(op) = &self.delete {
            operations.insert(DELETE, op);
        }
        if let Some(op) = &self.get {
            operations.insert(GET, op);
        }
        if let Some(op) = &self.head {
            operations.insert(HEAD, op);
        }
        if let Some(op) = &self.options {
            operations.insert(OPTIONS, op);
        }
        if let Some(op) = &self.patch {
            operations.insert(PATCH, op);
        }
        if let Some(op) = &self.post {
            operations.insert(POST, op);
        }
        if let Some(op) = &self.put {
            operations.insert(PUT, op);
        }
        if let Some(op) = &self.trace {
            operations.insert(TRACE, op);
        }
        operations
    }

    /// Look up the operation for a request-safe method.
    ///
    /// CONNECT and TRACE are not addressable through this lookup; asking
    /// for them, or any unrecognized name, fails with E10000. A
    /// recognized method with an empty slot fails with E10001.
    pub fn get_operation(&self, method: &str) -> Result<&Operation, MethodError> {
        let slot = match method {
            DELETE => &self.delete,
            GET => &self.get,
            HEAD => &self.head,
            OPTIONS => &self.options,
            PATCH => &self.patch,
            POST => &self.post,
            PUT => &self.put,
            _ => return Err(MethodError::NoSuchHttpMethod(method.to_string())),
        };
        slot.as_ref()
            .ok_or_else(|| MethodError::NoSuchOperation(method.to_string()))
    }

    /// Assign the operation slot for any of the nine recognized methods.
    ///
    /// Panics on an unrecognized method name: callers of this accessor
    /// own the method enumeration, so a miss is a defect in the calling
    /// code, not input to recover from.
    pub fn set_operation(&mut self, method: &str, operation: Operation) {
        *self.slot_mut(method) = Some(operation);
    }

    /// The operation for any of the nine recognized methods, if set.
    ///
    /// Panics on an unrecognized method name, like
    /// [`set_operation`](Self::set_operation). An empty slot is not an
    /// error at this accessor.
    #[allow(clippy::panic)]
    pub fn must_get_operation(&self, method: &str) -> Option<&Operation> {
        match method {
            CONNECT => self.connect.as_ref(),
            DELETE => self.delete.as_ref(),
            GET => self.get.as_ref(),
            HEAD => self.head.as_ref(),
            OPTIONS => self.options.as_ref(),
            PATCH => self.patch.as_ref(),
            POST => self.post.as_ref(),
            PUT => self.put.as_ref(),
            TRACE => self.trace.as_ref(),
            _ => panic!("unsupported HTTP method {method:?}"),
        }
    }

    #[allow(clippy::panic)]
    fn slot_mut(&mut self, method: &str) -> &mut Option<Operation> {
        match method {
            CONNECT => &mut self.connect,
            DELETE => &mut self.delete,
            GET => &mut self.get,
            HEAD => &mut self.head,
            OPTIONS => &mut self.options,
            PATCH => &mut self.patch,
            POST => &mut self.post,
            PUT => &mut self.put,
            TRACE => &mut self.trace,
            _ => panic!("unsupported HTTP method {method:?}"),
        }
    }

    /// Validate the path item against the structural rules.
    ///
    /// Populated operations are validated in lexicographic method order
    /// so error reporting is reproducible across runs; the first failure
    /// is wrapped with the failing method and returned immediately.
    /// Server overrides and shared parameters are validated next, then
    /// the extension bag; the extension validator's result is returned
    /// unmodified.
    pub fn validate(&self, options: &ValidationOptions) -> Result<(), ValidationError> {
        let operations = self.operations();

        let mut methods: Vec<&str> = operations.keys().copied().collect();
        methods.sort_unstable();
        for method in methods {
            if let Err(err) = operations[method].validate(options) {
                return Err(ValidationError::InvalidOperation {
                    method: method.to_string(),
                    source: Box::new(err),
                });
            }
        }

        for server in &self.servers {
            server.validate(options)?;
        }
        for parameter in &self.parameters {
            parameter.validate(options)?;
        }

        validate_extensions(options, &self.extensions)
    }
}

impl Serialize for PathItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // A reference suppresses every other field.
        if !self.reference.is_empty() {
            let mut map = serializer.serialize_map(Some(1))?;
            map.serialize_entry("$ref", &self.reference)?;
            return map.end();
        }

        // Extensions first, then named fields overlaid so they win any
        // collision (decoding keeps reserved keys out of the bag, so a
        // collision means the bag was populated by hand).
        let mut out: BTreeMap<String, Value> = self.extensions.clone();
        if !self.summary.is_empty() {
            out.insert("summary".to_string(), Value::String(self.summary.clone()));
        }
        if !self.description.is_empty() {
            out.insert(
                "description".to_string(),
                Value::String(self.description.clone()),
            );
        }
        for (key, operation) in [
            ("connect", &self.connect),
            ("delete", &self.delete),
            ("get", &self.get),
            ("head", &self.head),
            ("options", &self.options),
            ("patch", &self.patch),
            ("post", &self.post),
            ("put", &self.put),
            ("trace", &self.trace),
        ] {
            if let Some(operation) = operation {
                let value =
                    serde_json::to_value(operation).map_err(serde::ser::Error::custom)?;
                out.insert(key.to_string(), value);
            }
        }
        if !self.servers.is_empty() {
            let value =
                serde_json::to_value(&self.servers).map_err(serde::ser::Error::custom)?;
            out.insert("servers".to_string(), value);
        }
        if !self.parameters.is_empty() {
            let value =
                serde_json::to_value(&self.parameters).map_err(serde::ser::Error::custom)?;
            out.insert("parameters".to_string(), value);
        }

        out.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PathItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut raw = Map::<String, Value>::deserialize(deserializer)?;

        // The full decoded object minus the reserved keys is the
        // extension bag.
        let mut extensions: BTreeMap<String, Value> =
            raw.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        for key in RESERVED_KEYS {
            extensions.remove(key);
        }

        Ok(PathItem {
            reference: field(&mut raw, "$ref")?,
            summary: field(&mut raw, "summary")?,
            description: field(&mut raw, "description")?,
            connect: field(&mut raw, "connect")?,
            delete: field(&mut raw, "delete")?,
            get: field(&mut raw, "get")?,
            head: field(&mut raw, "head")?,
            options: field(&mut raw, "options")?,
            patch: field(&mut raw, "patch")?,
            post: field(&mut raw, "post")?,
            put: field(&mut raw, "put")?,
            trace: field(&mut raw, "trace")?,
            servers: field(&mut raw, "servers")?,
            parameters: field(&mut raw, "parameters")?,
            extensions,
        })
    }
}

/// Structurally decode one named field out of the raw object. Absent or
/// explicitly null means the field's default.
fn field<T, E>(raw: &mut Map<String, Value>, key: &str) -> Result<T, E>
where
    T: DeserializeOwned + Default,
    E: de::Error,
{
    match raw.remove(key) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => serde_json::from_value(value).map_err(E::custom),
    }
}
