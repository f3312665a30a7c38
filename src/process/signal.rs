use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use libc::{signal, sighandler_t, SIGINT, SIG_ERR, SIG_IGN};

use super::ProcessError;

/// Ignores SIGINT in the runner while a child runs, so an interactive
/// Ctrl-C reaches the foreground child first. The previous disposition
/// is restored on drop.
pub struct SigintPassthrough {
    previous: sighandler_t,
}

impl SigintPassthrough {
    pub fn install() -> Result<Self, ProcessError> {
        let previous = unsafe { signal(SIGINT, SIG_IGN) };
        if previous == SIG_ERR {
            return Err(ProcessError::SignalError(
                "failed to ignore SIGINT".to_string(),
            ));
        }
        Ok(SigintPassthrough { previous })
    }
}

impl Drop for SigintPassthrough {
    fn drop(&mut self) {
        unsafe {
            signal(SIGINT, self.previous);
        }
    }
}

/// Process-wide interrupt flag, set by SIGINT and SIGTERM once
/// registered. The runner checks it between steps.
#[derive(Clone)]
pub struct InterruptFlag {
    flag: Arc<AtomicBool>,
}

impl Default for InterruptFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl InterruptFlag {
    pub fn new() -> Self {
        InterruptFlag {
            flag: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn register(&self) -> Result<(), ProcessError> {
        signal_hook::flag::register(signal_hook::consts::SIGTERM, Arc::clone(&self.flag))
            .map_err(|e| ProcessError::SignalError(e.to_string()))?;

        let flag = Arc::clone(&self.flag);
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
            .map_err(|e| ProcessError::SignalError(e.to_string()))?;
        Ok(())
    }

    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    #[cfg(test)]
    pub(crate) fn set(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }
}
