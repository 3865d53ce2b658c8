//! Task execution module
//!
//! This module handles the actual execution of tasks: recursive dependency
//! resolution, run-once tracking, cycle detection, and the ordered record of
//! what ran.

pub mod runner;

pub use runner::{Role, RunContext, TaskRunner};
