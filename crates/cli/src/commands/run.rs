use std::cell::Cell;
use std::path::Path;
use std::process::Command;
use std::rc::Rc;

use anyhow::Result;
use colored::*;
use taskmaster_core::{Action, FileSink, TaskRegistry, TaskRunner};

use crate::config::CookbookConfig;

pub fn execute(cookbook: &CookbookConfig, log_path: &Path, tasks: &[String]) -> Result<()> {
    println!("{} {}", "Running".bold(), tasks.join(" ").cyan());
    println!();

    // Actions cannot report failure through the engine, so command status
    // is collected out-of-band and turned into the process exit code here.
    let failed = Rc::new(Cell::new(false));

    let mut registry = TaskRegistry::new();
    for entry in &cookbook.tasks {
        let dependencies = entry.dependencies.clone().unwrap_or_default();
        let action = shell_action(entry.name.clone(), entry.command.clone(), Rc::clone(&failed));
        registry
            .define(&entry.name, dependencies, action)
            .map_err(|e| anyhow::anyhow!("Failed to define task: {}", e))?;
    }

    let mut runner = TaskRunner::new(registry, FileSink::new(log_path));
    let completed = runner
        .run(tasks)
        .map_err(|e| anyhow::anyhow!("Failed to run tasks: {}", e))?;

    if failed.get() {
        anyhow::bail!("One or more task commands failed");
    }

    println!();
    println!(
        "{} {}",
        "✓".green().bold(),
        format!("Completed: {}", completed.join(", ")).green().bold()
    );

    Ok(())
}

/// Build a task action that runs a shell command, printing the task's log
/// line to the console as it starts.
fn shell_action(name: String, command: Option<String>, failed: Rc<Cell<bool>>) -> Action {
    Box::new(move || {
        let Some(command) = command.as_deref() else {
            return;
        };

        println!("{} {}", "┌─".bright_black(), name.cyan().bold());
        match Command::new("sh").arg("-c").arg(command).status() {
            Ok(status) if status.success() => {}
            Ok(status) => {
                eprintln!(
                    "{}",
                    format!(
                        "Task '{}' failed with exit code {}",
                        name,
                        status.code().unwrap_or(-1)
                    )
                    .red()
                );
                failed.set(true);
            }
            Err(e) => {
                eprintln!("{}", format!("Failed to execute task '{}': {}", name, e).red());
                failed.set(true);
            }
        }
    })
}
