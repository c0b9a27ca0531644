//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and the reqline pipeline produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters and histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every inbound span
//! - Metrics are cheap no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
