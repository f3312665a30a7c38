use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Stdio;

use chrono::Local;

/// The run log: one file holding every child's combined output,
/// interleaved with marker lines written by the runner itself.
/// Created fresh (truncated) for every run.
pub struct RunLog {
    path: PathBuf,
    file: File,
}

impl RunLog {
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(RunLog {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn step_begin(&mut self, name: &str) -> io::Result<()> {
        self.write_line(&format!("=== {} begin {}", name, timestamp()))
    }

    /// Trace lines carry no timestamp so identical plans trace
    /// byte-identically across runs.
    pub fn trace(&mut self, rendered: &str) -> io::Result<()> {
        self.write_line(&format!("+ {}", rendered))
    }

    pub fn step_end(&mut self, name: &str, status: i32) -> io::Result<()> {
        self.write_line(&format!(
            "=== {} end {} (status {})",
            name,
            timestamp(),
            status
        ))
    }

    pub fn note(&mut self, text: &str) -> io::Result<()> {
        self.write_line(&format!("=== {}", text))
    }

    // Children share the file description, so their writes land after
    // whatever the runner has already flushed.
    pub fn child_stdout(&self) -> io::Result<Stdio> {
        Ok(Stdio::from(self.file.try_clone()?))
    }

    pub fn child_stderr(&self) -> io::Result<Stdio> {
        Ok(Stdio::from(self.file.try_clone()?))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.file, "{}", line)?;
        self.file.flush()
    }
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_log(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    #[test]
    fn test_markers_in_order() {
        let path = temp_log("perfrun_log_markers.log");
        let mut log = RunLog::create(&path).unwrap();

        log.step_begin("bench (nightly)").unwrap();
        log.trace("cargo +nightly bench -- --nocapture").unwrap();
        log.step_end("bench (nightly)", 0).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("=== bench (nightly) begin "));
        assert_eq!(lines[1], "+ cargo +nightly bench -- --nocapture");
        assert!(lines[2].starts_with("=== bench (nightly) end "));
        assert!(lines[2].ends_with("(status 0)"));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_create_truncates() {
        let path = temp_log("perfrun_log_truncate.log");
        fs::write(&path, "stale content from a previous run\n").unwrap();

        let mut log = RunLog::create(&path).unwrap();
        log.note("fresh run").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "=== fresh run\n");

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_child_handle_shares_cursor() {
        let path = temp_log("perfrun_log_cursor.log");
        let mut log = RunLog::create(&path).unwrap();

        log.note("before child").unwrap();
        // Simulate a child write through a duplicated handle.
        let mut clone = log.file.try_clone().unwrap();
        writeln!(clone, "child output").unwrap();
        log.note("after child").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "=== before child\nchild output\n=== after child\n"
        );

        let _ = fs::remove_file(path);
    }
}
