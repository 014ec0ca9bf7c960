//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (controller.rs):
//!     Validate config → Bind listener → Spawn server → Wait for trigger
//!
//! Shutdown (controller.rs):
//!     Trigger received → Run drain tasks → Stop accepting → Join server
//!     under grace period → Run post-stop tasks → Exit code
//!
//! Signals (signals.rs):
//!     SIGINT/SIGTERM → shutdown.trigger()
//! ```
//!
//! # Design Decisions
//! - The shutdown token is injected, not an OS global; tests trigger it
//!   synthetically
//! - Ordered shutdown: drain tasks, then stop accept, then join
//! - The grace-period timeout abandons the join but is not treated as a
//!   failure; serve errors and panics are

pub mod cleanup;
pub mod controller;
pub mod shutdown;
pub mod signals;

pub use cleanup::CleanupTask;
pub use controller::{LifecycleController, LifecycleState};
pub use shutdown::Shutdown;
