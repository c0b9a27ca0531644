//! Reqline grammar validation and execution.
//!
//! # Data Flow
//! ```text
//! raw reqline
//!     → lexer.rs (spacing, segments, fixed HTTP/URL positions)
//!     → parser.rs (keyword/value split, per-keyword value checks)
//!     → query.rs (merge QUERY into URL)
//!     → executor.rs (timed GET/POST through HttpClient)
//!     → result.rs (request echo + response timing)
//! ```
//!
//! Grammar:
//! ```text
//! reqline       := method_part " | " url_part ( " | " optional_part )*
//! method_part   := "HTTP" SP ("GET" | "POST")
//! url_part      := "URL" SP https-prefixed-string
//! optional_part := ("HEADERS" | "QUERY" | "BODY") SP json-object
//! ```
//!
//! Every stage fails fast with a [`ReqlineError`]; nothing is shared between
//! calls.

pub mod error;
pub mod executor;
pub mod keyword;
pub mod lexer;
pub mod parser;
pub mod query;
pub mod result;
pub mod service;

pub use error::{ErrorKind, ReqlineError};
pub use executor::{ExecutionResult, Executor};
pub use keyword::{HttpMethod, Keyword};
pub use parser::{parse, JsonMap, ParsedRequest, ResolvedRequest};
pub use result::ReqlineReport;
pub use service::ReqlineService;
