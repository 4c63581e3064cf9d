//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses or any other protocol-specific envelope. The recipe domain uses
//! four failure classes on top of the generic codes:
//!
//! - argument type errors (`"<value> is not a string"`),
//! - unexistence errors (a referenced user, recipe or ingredient is missing),
//! - duplicity errors (a unique name is already taken),
//! - value errors (a well-typed value breaks a domain rule).
//!
//! Each class is tagged in `details.code` so clients can branch on it without
//! parsing messages.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// The request conflicts with existing state.
    Conflict,
    /// A backing service is temporarily unreachable.
    ServiceUnavailable,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

/// Failure class tag stored under `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// An untyped argument was not of the expected primitive type.
    ArgumentType,
    /// A referenced entity (or any search result) does not exist.
    Unexistence,
    /// A uniquely named entity already exists.
    Duplicity,
    /// A value violates a domain rule.
    InvalidValue,
}

impl ErrorClass {
    /// Wire representation used in `details.code`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ArgumentType => "argument_type",
            Self::Unexistence => "unexistence",
            Self::Duplicity => "duplicity",
            Self::InvalidValue => "invalid_value",
        }
    }
}

/// Domain error payload.
///
/// # Examples
/// ```
/// use cookbook::domain::{Error, ErrorCode};
///
/// let err = Error::unexistence("user with id 42 does not exist");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.to_string(), "user with id 42 does not exist");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(alias = "trace_id")]
    trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Create a new error.
    ///
    /// Captures the current trace identifier if one is in scope so the error
    /// payload is correlated automatically.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier captured when the error was created.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary error details for adapters.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Failure class tag, when the error was built by a class constructor.
    pub fn class(&self) -> Option<ErrorClass> {
        let tag = self.details.as_ref()?.get("code")?.as_str()?;
        [
            ErrorClass::ArgumentType,
            ErrorClass::Unexistence,
            ErrorClass::Duplicity,
            ErrorClass::InvalidValue,
        ]
        .into_iter()
        .find(|class| class.as_str() == tag)
    }

    /// Attach a trace identifier to the error.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use cookbook::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("bad").with_details(json!({ "field": "name" }));
    /// assert!(err.details().is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Argument type error: `literal` is the rendered offending value.
    ///
    /// # Examples
    /// ```
    /// use cookbook::domain::Error;
    ///
    /// assert_eq!(Error::argument_type("undefined").message(), "undefined is not a string");
    /// ```
    pub fn argument_type(literal: impl AsRef<str>) -> Self {
        Self::invalid_request(format!("{} is not a string", literal.as_ref()))
            .tagged(ErrorClass::ArgumentType)
    }

    /// Unexistence error for a missing entity or an empty search.
    pub fn unexistence(message: impl Into<String>) -> Self {
        Self::not_found(message).tagged(ErrorClass::Unexistence)
    }

    /// Duplicity error for an already existing uniquely named entity.
    pub fn duplicity(message: impl Into<String>) -> Self {
        Self::conflict(message).tagged(ErrorClass::Duplicity)
    }

    /// Value error for well-typed input that breaks a domain rule.
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::invalid_request(message).tagged(ErrorClass::InvalidValue)
    }

    fn tagged(self, class: ErrorClass) -> Self {
        self.with_details(json!({ "code": class.as_str() }))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
