//! checkd — a minimal health-check HTTP server with graceful shutdown.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌─────────────────────────────────────────────┐
//!                     │                   checkd                    │
//!                     │                                             │
//!   GET /check        │   ┌──────────┐         ┌─────────────────┐ │
//!   ──────────────────┼──▶│   http   │         │    lifecycle    │ │
//!   GET /debug/       │   │  server  │◀────────│   controller    │ │
//!       pprof/profile │   └──────────┘  drain  └────────┬────────┘ │
//!                     │                                 │          │
//!                     │                        ┌────────┴────────┐ │
//!   SIGINT / SIGTERM  │                        │ shutdown token  │ │
//!   ──────────────────┼───────────────────────▶│ signal listener │ │
//!                     │                        └─────────────────┘ │
//!                     └─────────────────────────────────────────────┘
//! ```
//!
//! The server task and the lifecycle controller are the only two long-lived
//! execution paths. The controller owns the server handle: it starts the
//! server exactly once and shuts it down exactly once, so no locking is
//! needed between them.

pub mod config;
pub mod http;
pub mod lifecycle;

pub use config::schema::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::{LifecycleController, LifecycleState, Shutdown};
