//! Task definitions and the registry that holds them
//!
//! The registry is populated once during a setup phase and treated as
//! read-only during execution. Dependency names may reference tasks that
//! have not been defined yet; they are only resolved lazily at run time.

use std::collections::HashMap;
use std::fmt;

use crate::types::{TaskMasterError, TaskMasterResult};

/// The action a task performs when it executes.
pub type Action = Box<dyn FnMut()>;

/// A named unit of work with declared prerequisites and an action.
pub struct Task {
    pub name: String,
    /// Prerequisite task names, in declared order. Duplicates and forward
    /// references are permitted at definition time.
    pub dependencies: Vec<String>,
    action: Action,
}

impl Task {
    /// Invoke the task's action.
    pub fn invoke(&mut self) {
        (self.action)()
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("name", &self.name)
            .field("dependencies", &self.dependencies)
            .finish_non_exhaustive()
    }
}

/// Mapping from task name to task definition, append-only within a process
/// lifetime.
#[derive(Debug, Default)]
pub struct TaskRegistry {
    tasks: HashMap<String, Task>,
    // definition order, for listing
    order: Vec<String>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task. Re-registering an existing name is rejected with
    /// [`TaskMasterError::DuplicateTask`].
    pub fn define(
        &mut self,
        name: &str,
        dependencies: Vec<String>,
        action: Action,
    ) -> TaskMasterResult<()> {
        if self.tasks.contains_key(name) {
            return Err(TaskMasterError::DuplicateTask(name.to_string()));
        }

        self.order.push(name.to_string());
        self.tasks.insert(
            name.to_string(),
            Task {
                name: name.to_string(),
                dependencies,
                action,
            },
        );
        Ok(())
    }

    /// Look up a task by name. An undeclared dependency is only caught here,
    /// at the moment resolution reaches it.
    pub fn lookup(&self, name: &str) -> TaskMasterResult<&Task> {
        self.tasks
            .get(name)
            .ok_or_else(|| TaskMasterError::UnknownTask(name.to_string()))
    }

    pub(crate) fn lookup_mut(&mut self, name: &str) -> TaskMasterResult<&mut Task> {
        self.tasks
            .get_mut(name)
            .ok_or_else(|| TaskMasterError::UnknownTask(name.to_string()))
    }

    /// Iterate over defined tasks in definition order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.order.iter().filter_map(|name| self.tasks.get(name))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
