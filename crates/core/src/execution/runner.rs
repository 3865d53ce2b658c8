//! Recursive task resolution and the run entry point
//!
//! This module provides the engine that walks prerequisite chains
//! depth-first, executes each task at most once per top-level invocation,
//! detects circular dependencies against the active ancestry, and records
//! every decision through the log sink.

use crate::log::LogSink;
use crate::registry::TaskRegistry;
use crate::types::{TaskMasterError, TaskMasterResult};

/// How a task came to be resolved: named directly in a `run` call, or
/// reached through another task's dependency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    TopLevel,
    Dependent,
}

/// Transient per-invocation state threaded through the recursion.
///
/// Reset between top-level tasks of the same `run` call, so identical
/// top-level names each fully execute while prerequisites shared within a
/// single top-level subtree execute only once.
#[derive(Debug, Default)]
pub struct RunContext {
    // Only top-level resolutions are pushed here; dependency names are
    // checked against it before recursing. A name appearing twice would
    // mean a dependency chain revisited its own ancestry.
    run_stack: Vec<String>,
    // Ordered: doubles as the completion-order record for the result list.
    completed: Vec<String>,
    depth: usize,
}

impl RunContext {
    fn reset(&mut self) {
        self.run_stack.clear();
        self.completed.clear();
        self.depth = 0;
    }

    fn is_completed(&self, name: &str) -> bool {
        self.completed.iter().any(|completed| completed == name)
    }
}

/// Task runner that owns the registry and a log sink, and coordinates
/// resolution of one or more top-level tasks per `run` call.
pub struct TaskRunner<S: LogSink> {
    registry: TaskRegistry,
    sink: S,
}

impl<S: LogSink> TaskRunner<S> {
    pub fn new(registry: TaskRegistry, sink: S) -> Self {
        Self { registry, sink }
    }

    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run the named top-level tasks in order, prerequisites first.
    ///
    /// Opens the log sink fresh (truncating any prior log), then resolves
    /// each name with a clean completion/run-tracking state. Returns the
    /// cumulative list of task names that completed, in completion order;
    /// duplicates appear when top-level subtrees overlap.
    ///
    /// Fails with [`TaskMasterError::UnknownTask`] or
    /// [`TaskMasterError::CircularDependency`]; either aborts the whole
    /// call, though actions already invoked are not rolled back.
    pub fn run(&mut self, names: &[String]) -> TaskMasterResult<Vec<String>> {
        self.sink.begin_run()?;

        let mut all_completed = Vec::new();
        let mut ctx = RunContext::default();

        for name in names {
            self.registry.lookup(name)?;
            self.resolve(name, Role::TopLevel, &mut ctx)?;

            // housekeeping: collect this subtree's completions, then start
            // the next top-level task with clean state
            all_completed.append(&mut ctx.completed);
            ctx.reset();
        }

        Ok(all_completed)
    }

    /// Recursively resolve one task: log the executing/skipping decision,
    /// resolve dependencies in declared order, then invoke the action.
    ///
    /// A task already in the completed set is logged as `skipping completed`
    /// and its action is not re-invoked.
    fn resolve(&mut self, name: &str, role: Role, ctx: &mut RunContext) -> TaskMasterResult<()> {
        let dependencies = self.registry.lookup(name)?.dependencies.clone();

        // Only top-level resolutions enter the run stack; dependents are
        // caught by the check against their parent's dependency names below.
        if role == Role::TopLevel {
            ctx.run_stack.push(name.to_string());
        }

        // The executing/skipping message describes this task, not its
        // prerequisites, so it is logged before the dependency walk.
        let already_completed = ctx.is_completed(name);
        if already_completed {
            self.sink
                .write(ctx.depth, &format!("skipping completed {}", name.to_uppercase()))?;
        } else {
            let prefix = match role {
                Role::TopLevel => "",
                Role::Dependent => "dependent ",
            };
            self.sink
                .write(ctx.depth, &format!("{prefix}executing {}", name.to_uppercase()))?;
        }

        for dependency in &dependencies {
            if ctx.run_stack.iter().any(|active| active == dependency) {
                return Err(TaskMasterError::CircularDependency {
                    dependency: dependency.clone(),
                    dependent: name.to_string(),
                });
            }

            // Depth is restored even when the recursion fails, so later
            // top-level tasks in the same call never inherit a stale indent.
            ctx.depth += 1;
            let resolved = self.resolve(dependency, Role::Dependent, ctx);
            ctx.depth -= 1;
            resolved?;
        }

        if !already_completed {
            self.registry.lookup_mut(name)?.invoke();
        }
        if !ctx.is_completed(name) {
            ctx.completed.push(name.to_string());
        }

        Ok(())
    }
}
