//! TaskMaster Core Library
//!
//! This is the core library for the TaskMaster task-dependency runner. It
//! provides the registry of task definitions, the recursive resolution
//! engine that executes prerequisites before dependents, and the ordered
//! execution log.
//!
//! ## Architecture
//!
//! The core library is organized into a few modules:
//!
//! - [`registry`] - Task definitions and name-based lookup
//! - [`execution`] - The resolution engine and the `run` entry point
//! - [`log`] - Execution log sinks (file-backed and in-memory)
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
//!
//! The primary entry point is the [`TaskRunner`], which owns a populated
//! [`TaskRegistry`] and a [`LogSink`]:
//!
//! ```rust,no_run
//! use taskmaster_core::{FileSink, TaskRegistry, TaskRunner};
//!
//! # fn example() -> taskmaster_core::TaskMasterResult<()> {
//! let mut registry = TaskRegistry::new();
//! registry.define("wave", vec![], Box::new(|| println!("waves")))?;
//! registry.define("hi", vec!["wave".to_string()], Box::new(|| println!("say hi")))?;
//!
//! let mut runner = TaskRunner::new(registry, FileSink::new("taskmaster_log.txt"));
//! let completed = runner.run(&["hi".to_string()])?;
//! assert_eq!(completed, vec!["wave".to_string(), "hi".to_string()]);
//! # Ok(())
//! # }
//! ```

pub mod execution;
pub mod log;
pub mod registry;
pub mod types;

// Re-export the main types for easier usage
pub use execution::{Role, RunContext, TaskRunner};
pub use log::{FileSink, LogSink, MemorySink};
pub use registry::{Action, Task, TaskRegistry};
pub use types::{TaskMasterError, TaskMasterResult};
