use crate::config::ConfigError;
use crate::plan::PlanError;
use crate::process::ProcessError;

#[derive(Debug)]
pub enum RunError {
    Io(std::io::Error),
    Flag(String),
    Config(ConfigError),
    Plan(PlanError),
    Process(ProcessError),
    StepFailed { step: String, status: i32 },
    Interrupted,
}

impl From<std::io::Error> for RunError {
    fn from(err: std::io::Error) -> Self {
        RunError::Io(err)
    }
}

impl From<ConfigError> for RunError {
    fn from(err: ConfigError) -> Self {
        RunError::Config(err)
    }
}

impl From<PlanError> for RunError {
    fn from(err: PlanError) -> Self {
        RunError::Plan(err)
    }
}

impl From<ProcessError> for RunError {
    fn from(err: ProcessError) -> Self {
        RunError::Process(err)
    }
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunError::Io(e) => write!(f, "IO error: {}", e),
            RunError::Flag(msg) => write!(f, "Flag error: {}", msg),
            RunError::Config(e) => write!(f, "Config error: {}", e),
            RunError::Plan(e) => write!(f, "Plan error: {}", e),
            RunError::Process(e) => write!(f, "Process error: {}", e),
            RunError::StepFailed { step, status } => {
                write!(f, "step '{}' failed with status {}", step, status)
            }
            RunError::Interrupted => write!(f, "interrupted"),
        }
    }
}

impl std::error::Error for RunError {}
