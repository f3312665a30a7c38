use std::time::Instant;

mod report;

pub use report::{RunReport, StepOutcome};

use crate::{
    config::{Config, Settings},
    error::RunError,
    flags::Flags,
    logfile::RunLog,
    plan::Plan,
    process::{executor::StepExecutor, signal::InterruptFlag},
    style::StatusStyle,
};

pub struct Runner {
    flags: Flags,
    interrupt: InterruptFlag,
    settings: Settings,
    ignored_keys: Vec<String>,
    plan: Plan,
    executor: StepExecutor,
    style: StatusStyle,
}

impl Runner {
    pub fn new(flags: Flags, interrupt: InterruptFlag) -> Result<Self, RunError> {
        let mut config = Config::new()?;
        let explicit = flags.get_value("config").cloned();
        config.load(explicit.as_deref())?;
        config.apply_flags(&flags)?;
        let (settings, ignored_keys) = config.into_parts();

        let plan = Plan::from_settings(&settings)?;
        let executor = StepExecutor::new(&flags);

        Ok(Runner {
            flags,
            interrupt,
            settings,
            ignored_keys,
            plan,
            executor,
            style: StatusStyle::new(),
        })
    }

    /// Construct a runner around an already-built plan, skipping config
    /// file discovery. Used when the caller owns plan construction.
    pub fn with_plan(
        flags: Flags,
        interrupt: InterruptFlag,
        settings: Settings,
        plan: Plan,
    ) -> Self {
        let executor = StepExecutor::new(&flags);
        Runner {
            flags,
            interrupt,
            settings,
            ignored_keys: Vec::new(),
            plan,
            executor,
            style: StatusStyle::new(),
        }
    }

    pub fn run(&mut self) -> Result<RunReport, RunError> {
        if self.flags.is_set("dry-run") {
            return self.render_dry_run();
        }

        if self.flags.is_set("debug") {
            self.print_diagnostics();
        }

        let mut log = RunLog::create(&self.settings.log_path)?;
        let mut report = RunReport::new();
        let total = self.plan.len();

        for (index, step) in self.plan.steps().iter().enumerate() {
            if self.interrupt.is_set() {
                log.note("interrupted, stopping before next step")?;
                return Err(RunError::Interrupted);
            }

            if !self.quiet() {
                println!(
                    "{}",
                    self.style
                        .banner(&format!("[{}/{}] {}", index + 1, total, step.name))
                );
                println!("  {}", self.style.command(&step.render()));
            }

            let started = Instant::now();
            let status = self.executor.run_step(step, &mut log)?;
            let duration_ms = started.elapsed().as_millis() as u64;
            report.record(step, status, duration_ms);

            if status != 0 {
                if !self.quiet() {
                    eprintln!(
                        "{}",
                        self.style.error(&format!(
                            "step '{}' failed with status {}",
                            step.name, status
                        ))
                    );
                }
                return Err(RunError::StepFailed {
                    step: step.name.clone(),
                    status,
                });
            }
        }

        if !self.quiet() {
            for line in report.summary_lines() {
                println!("{}", self.style.success(&line));
            }
        }
        Ok(report)
    }

    fn render_dry_run(&self) -> Result<RunReport, RunError> {
        for step in self.plan.steps() {
            println!("{}", self.style.command(&step.render()));
        }
        Ok(RunReport::new())
    }

    fn print_diagnostics(&self) {
        eprintln!("{}", self.style.dim(&format!("settings: {:?}", self.settings)));
        if !self.ignored_keys.is_empty() {
            eprintln!(
                "{}",
                self.style.dim(&format!(
                    "ignored config keys: {}",
                    self.ignored_keys.join(", ")
                ))
            );
        }
    }

    fn quiet(&self) -> bool {
        self.flags.is_set("quiet")
    }
}
