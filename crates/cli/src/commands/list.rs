use anyhow::Result;
use colored::*;

use crate::config::CookbookConfig;

pub fn execute(cookbook: &CookbookConfig) -> Result<()> {
    let heading = cookbook.name.as_deref().unwrap_or("Tasks");
    println!("{}", heading.bold().underline());

    if cookbook.tasks.is_empty() {
        println!("  {}", "No tasks defined".dimmed());
        return Ok(());
    }

    let mut entries: Vec<_> = cookbook.tasks.iter().collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    for entry in entries {
        match entry.dependencies.as_deref() {
            Some(deps) if !deps.is_empty() => {
                println!(
                    "{} {}",
                    entry.name.blue().bold(),
                    format!("depends on: {}", deps.join(", ")).dimmed()
                );
            }
            _ => println!("{}", entry.name.blue().bold()),
        }
        if let Some(description) = &entry.description {
            println!("  {}", description.dimmed());
        }
    }

    Ok(())
}
