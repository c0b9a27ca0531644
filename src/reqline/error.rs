//! Reqline error taxonomy.
//!
//! # Design Decisions
//! - One enum for the whole pipeline; every stage returns `Result<_, ReqlineError>`
//! - Validation kinds abort before any network call is made
//! - `HttpRequest` is the only execution-time kind

use thiserror::Error;

use crate::reqline::keyword::Keyword;

/// Broad classification of a [`ReqlineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The reqline text (or the request carrying it) is malformed.
    Validation,
    /// The reqline was valid but the outbound call failed.
    Execution,
}

/// Errors raised while validating or executing a reqline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReqlineError {
    /// The request body carried no reqline (absent, null or empty).
    #[error("Missing reqline in request body")]
    MissingReqline,

    /// The reqline field was present but not a string.
    #[error("reqline must be a string")]
    NotAString,

    /// A pipe sits at either end of the input or lacks a space on one side.
    #[error("Invalid spacing around pipe delimiter")]
    InvalidSpacing,

    /// More than one space on either side of a pipe.
    #[error("Multiple spaces found around pipe delimiter")]
    MultipleSpacingAroundPipe,

    /// The first segment is not the HTTP method declaration.
    #[error("Missing required HTTP keyword")]
    HttpMissing,

    /// The second segment is not the URL declaration.
    #[error("Missing required URL keyword")]
    UrlMissing,

    /// A segment has no space separating keyword and value.
    #[error("Missing space after keyword")]
    NoKeywordSpace,

    /// A segment's value is empty after trimming.
    #[error("Missing value after keyword")]
    InvalidValue,

    /// A known keyword written in the wrong case.
    #[error("Keywords must be uppercase")]
    InvalidCase,

    /// Not a reqline keyword at all.
    #[error("Invalid keyword")]
    InvalidKeyword,

    /// A keyword appears more than once.
    #[error("Duplicate keyword")]
    DuplicateKey,

    /// The method is neither GET nor POST.
    #[error("Invalid HTTP method. Only GET and POST are supported")]
    InvalidHttpMethod,

    /// The URL does not start with `https`.
    #[error("Invalid URL format")]
    InvalidUrl,

    /// A HEADERS/QUERY/BODY value is not a JSON object.
    #[error("Invalid JSON format in {0} section")]
    InvalidJsonValue(Keyword),

    /// The outbound call failed.
    #[error("Error making request: {0}")]
    HttpRequest(String),
}

impl ReqlineError {
    /// Classify this error as a validation or execution failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReqlineError::HttpRequest(_) => ErrorKind::Execution,
            _ => ErrorKind::Validation,
        }
    }

    /// True for every kind raised before the outbound call.
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}

/// Result type for reqline operations.
pub type ReqlineResult<T> = Result<T, ReqlineError>;
