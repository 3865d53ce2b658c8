use thiserror::Error;

/// The main error type for TaskMaster operations
#[derive(Debug, Error)]
pub enum TaskMasterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown task: {0}")]
    UnknownTask(String),

    #[error("Task {dependency} contains a circular dependency on {dependent}")]
    CircularDependency {
        dependency: String,
        dependent: String,
    },

    #[error("Task '{0}' is already defined")]
    DuplicateTask(String),
}

/// Result type alias for TaskMaster operations
pub type TaskMasterResult<T> = Result<T, TaskMasterError>;
