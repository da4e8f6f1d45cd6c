use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

/// Error kinds for feature store and cursor operations.
///
/// Each kind describes a specific category of failure, enabling precise
/// error handling at the call site.
///
/// # Examples
///
/// ```rust,ignore
/// use geofeature::errors::{FeatureError, ErrorKind, FeatureResult};
///
/// fn example() -> FeatureResult<()> {
///     Err(FeatureError::new("store is closed", ErrorKind::StoreAlreadyClosed))
/// }
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// The provided feature identifier is invalid
    InvalidId,
    /// The requested resource was not found
    NotFound,
    /// The operation is not valid in the current context
    InvalidOperation,
    /// Generic validation error (invalid shape, invalid extent, etc.)
    ValidationError,
    /// Store has already been closed
    StoreAlreadyClosed,
    /// Error from an extension crate; the String names the extension
    Extension(String),
    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidId => write!(f, "Invalid ID"),
            ErrorKind::NotFound => write!(f, "Not found"),
            ErrorKind::InvalidOperation => write!(f, "Invalid operation"),
            ErrorKind::ValidationError => write!(f, "Validation error"),
            ErrorKind::StoreAlreadyClosed => write!(f, "Store already closed"),
            ErrorKind::Extension(name) => write!(f, "{} error", name),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Error type for all fallible feature store operations.
///
/// `FeatureError` carries the error message, a kind, and an optional cause,
/// supporting error chaining for debugging.
///
/// The `FeatureResult<T>` alias is equivalent to `Result<T, FeatureError>`
/// and is used throughout the crate.
#[derive(Clone)]
pub struct FeatureError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<FeatureError>>,
}

impl FeatureError {
    /// Creates a new `FeatureError` with the specified message and kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        FeatureError {
            message: message.to_string(),
            error_kind,
            cause: None,
        }
    }

    /// Creates a new `FeatureError` with an underlying cause attached.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: FeatureError) -> Self {
        FeatureError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&FeatureError> {
        self.cause.as_deref()
    }
}

impl Display for FeatureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for FeatureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{} ({})", self.message, self.error_kind),
        }
    }
}

impl Error for FeatureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for feature store operations.
pub type FeatureResult<T> = Result<T, FeatureError>;

impl From<String> for FeatureError {
    fn from(msg: String) -> Self {
        FeatureError::new(&msg, ErrorKind::InternalError)
    }
}

impl From<&str> for FeatureError {
    fn from(msg: &str) -> Self {
        FeatureError::new(msg, ErrorKind::InternalError)
    }
}

impl From<std::num::ParseIntError> for FeatureError {
    fn from(err: std::num::ParseIntError) -> Self {
        FeatureError::new(
            &format!("Integer parsing error: {}", err),
            ErrorKind::ValidationError,
        )
    }
}

impl From<std::num::ParseFloatError> for FeatureError {
    fn from(err: std::num::ParseFloatError) -> Self {
        FeatureError::new(
            &format!("Float parsing error: {}", err),
            ErrorKind::ValidationError,
        )
    }
}
