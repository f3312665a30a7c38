use std::fmt;

mod cargo;
mod leak;

pub use cargo::CargoCommand;
pub use leak::LeakCheck;

use crate::config::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Bench,
    Release,
    Leak,
}

#[derive(Debug, Clone)]
pub struct Step {
    pub name: String,
    pub program: String,
    pub args: Vec<String>,
    pub kind: StepKind,
}

impl Step {
    /// Rendering is deterministic: identical settings give identical strings.
    pub fn render(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

pub struct Plan {
    steps: Vec<Step>,
}

impl Plan {
    pub fn new(steps: Vec<Step>) -> Self {
        Plan { steps }
    }

    /// Builds the default sequence: one bench step per toolchain channel,
    /// the optimized run, then the leak check against the release binary.
    pub fn from_settings(settings: &Settings) -> Result<Self, PlanError> {
        if settings.binary.trim().is_empty() {
            return Err(PlanError::EmptyField("binary"));
        }
        if settings.feature.trim().is_empty() {
            return Err(PlanError::EmptyField("feature"));
        }
        if settings.valgrind.trim().is_empty() {
            return Err(PlanError::EmptyField("valgrind"));
        }

        let mut steps = Vec::new();

        for channel in &settings.toolchains {
            steps.push(
                CargoCommand::new("bench")
                    .toolchain(channel)
                    .trailing_arg("--nocapture")
                    .into_step(format!("bench ({})", channel), StepKind::Bench),
            );
        }

        steps.push(
            CargoCommand::new("run")
                .release()
                .features(&settings.feature)
                .bin(&settings.binary)
                .trailing_arg("--loads")
                .trailing_arg(&settings.loads.to_string())
                .trailing_arg("--ops")
                .trailing_arg(&settings.ops.to_string())
                .into_step("release run".to_string(), StepKind::Release),
        );

        steps.push(
            LeakCheck::new(&settings.valgrind, &settings.target_dir, &settings.binary)
                .loads(settings.loads)
                .ops(settings.ops)
                .into_step("leak check".to_string()),
        );

        Ok(Plan { steps })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[derive(Debug)]
pub enum PlanError {
    EmptyField(&'static str),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::EmptyField(name) => write!(f, "empty {} setting", name),
        }
    }
}
