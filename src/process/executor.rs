use std::io;
use std::os::unix::process::ExitStatusExt;
use std::process::{Command, ExitStatus, Stdio};

use super::{signal::SigintPassthrough, ProcessError};
use crate::flags::Flags;
use crate::logfile::RunLog;
use crate::plan::Step;

#[derive(Clone)]
pub struct StepExecutor {
    quiet_mode: bool,
}

impl StepExecutor {
    pub fn new(flags: &Flags) -> Self {
        StepExecutor {
            quiet_mode: flags.is_set("quiet"),
        }
    }

    /// Runs one step to completion: begin marker, trace line, spawn
    /// with both output streams redirected into the log, wait, end
    /// marker. Returns the step's exit status.
    pub fn run_step(&self, step: &Step, log: &mut RunLog) -> Result<i32, ProcessError> {
        log.step_begin(&step.name)?;
        log.trace(&step.render())?;

        let mut command = Command::new(&step.program);
        command
            .args(&step.args)
            .stdin(Stdio::inherit())
            .stdout(log.child_stdout()?)
            .stderr(log.child_stderr()?);

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                if e.kind() == io::ErrorKind::NotFound {
                    if !self.quiet_mode {
                        eprintln!("perfrun: command not found: {}", step.program);
                    }
                    log.step_end(&step.name, 127)?;
                    return Ok(127);
                }
                return Err(e.into());
            }
        };

        let _passthrough = SigintPassthrough::install()?;

        let status = match child.wait() {
            Ok(status) => status,
            Err(e) => {
                if e.kind() == io::ErrorKind::NotFound {
                    return Err(ProcessError::CommandNotFound(step.program.clone()));
                }
                return Err(e.into());
            }
        };

        let code = exit_code(&status);
        log.step_end(&step.name, code)?;
        Ok(code)
    }
}

// Signal-terminated children report no code; callers expect the shell
// convention of 128 plus the signal number.
fn exit_code(status: &ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => 128 + status.signal().unwrap_or(0),
    }
}
