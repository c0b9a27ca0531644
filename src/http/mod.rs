//! HTTP surface of the service.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → handlers.rs (decode body, run reqline pipeline)
//!     → client.rs (outbound call, via the reqline executor)
//!     → response.rs (error body mapping)
//!     → Send to client
//! ```

pub mod client;
pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use client::{ClientError, HttpClient, HttpResponse, ReqwestClient};
pub use request::{UuidRequestId, X_REQUEST_ID};
pub use response::ErrorBody;
pub use server::{AppState, HttpServer};
