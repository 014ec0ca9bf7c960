//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! CLI arguments (--listen)
//!     → schema.rs (typed config with defaults)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → consumed by the lifecycle controller
//! ```
//!
//! # Design Decisions
//! - Config is immutable once built; there is no reload path
//! - All fields have defaults so a bare invocation works
//! - No config files and no environment variables; the CLI is the only input

pub mod schema;
pub mod validation;

pub use schema::ListenerConfig;
pub use schema::ServerConfig;
pub use schema::ShutdownConfig;
