//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → axum (accept, parse, per-request task)
//!     → TraceLayer (request/response logging)
//!     → handlers.rs (GET /check)
//!     → profile.rs  (GET /debug/pprof/profile)
//!
//! Drain signal from lifecycle controller
//!     → server.rs stops accepting, waits for in-flight requests
//! ```
//!
//! # Design Decisions
//! - Handlers are stateless; the only shared state is the fixed check body
//! - Per-request concurrency is delegated entirely to axum/hyper
//! - The server task never initiates shutdown; it only reacts to the drain
//!   signal it was given at start

pub mod handlers;
pub mod profile;
pub mod server;

pub use server::HttpServer;
