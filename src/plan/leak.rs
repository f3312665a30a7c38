use std::path::{Path, PathBuf};

use super::{Step, StepKind};

/// Builder for the leak-check invocation: the memory-instrumentation
/// wrapper run against the previously built release binary.
#[derive(Debug, Clone)]
pub struct LeakCheck {
    wrapper: String,
    target_dir: PathBuf,
    binary: String,
    loads: Option<u64>,
    ops: Option<u64>,
}

impl LeakCheck {
    pub fn new(wrapper: &str, target_dir: &Path, binary: &str) -> Self {
        LeakCheck {
            wrapper: wrapper.to_string(),
            target_dir: target_dir.to_path_buf(),
            binary: binary.to_string(),
            loads: None,
            ops: None,
        }
    }

    pub fn loads(mut self, count: u64) -> Self {
        self.loads = Some(count);
        self
    }

    pub fn ops(mut self, count: u64) -> Self {
        self.ops = Some(count);
        self
    }

    /// The release binary path. Not checked for existence here: the
    /// optimized run earlier in the sequence is what produces it.
    pub fn binary_path(&self) -> PathBuf {
        self.target_dir.join("release").join(&self.binary)
    }

    pub fn into_step(self, name: String) -> Step {
        let binary_path = self.binary_path();

        let mut args = vec![
            "--leak-check=full".to_string(),
            "--track-origins=yes".to_string(),
            binary_path.to_string_lossy().into_owned(),
        ];
        if let Some(count) = self.loads {
            args.push("--loads".to_string());
            args.push(count.to_string());
        }
        if let Some(count) = self.ops {
            args.push("--ops".to_string());
            args.push(count.to_string());
        }

        Step {
            name,
            program: self.wrapper,
            args,
            kind: StepKind::Leak,
        }
    }
}
