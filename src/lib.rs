//! Reqline service library.
//!
//! Validates single-line HTTP request descriptions ("reqlines"), executes
//! them, and reports the resolved request together with response timing.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod reqline;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use reqline::{ReqlineError, ReqlineReport, ReqlineService};
