//! Execution log sinks
//!
//! The engine records every executing/skipping decision through a
//! [`LogSink`]. The sink is opened fresh (truncating any prior log) at the
//! start of each `run` call and flushed after every write, so the log is
//! readable even if a later task aborts the batch.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use crate::types::TaskMasterResult;

/// Render a single log line: tab indentation by depth, a `** ` marker, then
/// the message.
pub fn render_line(depth: usize, message: &str) -> String {
    format!("{}** {}", "\t".repeat(depth), message)
}

/// Ordered sink for execution log entries.
pub trait LogSink {
    /// Open the sink fresh, discarding any prior contents.
    fn begin_run(&mut self) -> TaskMasterResult<()>;

    /// Append one entry at the given indent depth.
    fn write(&mut self, depth: usize, message: &str) -> TaskMasterResult<()>;
}

/// Sink that writes rendered log lines to a file, truncated on each run and
/// flushed after every write.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Option<File>,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }
}

impl LogSink for FileSink {
    fn begin_run(&mut self) -> TaskMasterResult<()> {
        self.file = Some(File::create(&self.path)?);
        Ok(())
    }

    fn write(&mut self, depth: usize, message: &str) -> TaskMasterResult<()> {
        if self.file.is_none() {
            self.file = Some(File::create(&self.path)?);
        }
        if let Some(file) = self.file.as_mut() {
            writeln!(file, "{}", render_line(depth, message))?;
            file.flush()?;
        }
        Ok(())
    }
}

/// Sink that captures raw `(depth, message)` entries in memory. Used as a
/// test double and for callers that format the log themselves.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Vec<(usize, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[(usize, String)] {
        &self.entries
    }
}

impl LogSink for MemorySink {
    fn begin_run(&mut self) -> TaskMasterResult<()> {
        self.entries.clear();
        Ok(())
    }

    fn write(&mut self, depth: usize, message: &str) -> TaskMasterResult<()> {
        self.entries.push((depth, message.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_line_indents_with_tabs() {
        assert_eq!(render_line(0, "executing BUILD"), "** executing BUILD");
        assert_eq!(
            render_line(2, "skipping completed COMPILE"),
            "\t\t** skipping completed COMPILE"
        );
    }

    #[test]
    fn test_file_sink_truncates_on_begin_run() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join("taskmaster_log.txt");
        std::fs::write(&path, "stale contents from a prior run\n")
            .expect("seed file should be written");

        let mut sink = FileSink::new(&path);
        sink.begin_run().expect("begin_run should truncate the log");
        sink.write(1, "executing BUILD").expect("write should succeed");

        let contents = std::fs::read_to_string(&path).expect("log should be readable");
        assert_eq!(
            contents, "\t** executing BUILD\n",
            "Prior contents should have been discarded"
        );
    }

    #[test]
    fn test_file_sink_writes_in_order() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join("taskmaster_log.txt");

        let mut sink = FileSink::new(&path);
        sink.begin_run().expect("begin_run should succeed");
        sink.write(0, "executing A").expect("write should succeed");
        sink.write(1, "executing B").expect("write should succeed");

        let contents = std::fs::read_to_string(&path).expect("log should be readable");
        assert_eq!(contents, "** executing A\n\t** executing B\n");
    }

    #[test]
    fn test_memory_sink_clears_on_begin_run() {
        let mut sink = MemorySink::new();
        sink.write(0, "executing A").expect("write should succeed");
        sink.begin_run().expect("begin_run should succeed");
        assert!(
            sink.entries().is_empty(),
            "begin_run should discard prior entries"
        );
    }
}
