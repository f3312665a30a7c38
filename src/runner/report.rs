use crate::plan::Step;

#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub name: String,
    pub command: String,
    pub status: i32,
    pub duration_ms: u64,
}

#[derive(Debug, Default)]
pub struct RunReport {
    outcomes: Vec<StepOutcome>,
}

impl RunReport {
    pub fn new() -> Self {
        RunReport {
            outcomes: Vec::new(),
        }
    }

    pub fn record(&mut self, step: &Step, status: i32, duration_ms: u64) {
        self.outcomes.push(StepOutcome {
            name: step.name.clone(),
            command: step.render(),
            status,
            duration_ms,
        });
    }

    pub fn outcomes(&self) -> &[StepOutcome] {
        &self.outcomes
    }

    pub fn total_ms(&self) -> u64 {
        self.outcomes.iter().map(|o| o.duration_ms).sum()
    }

    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .outcomes
            .iter()
            .map(|o| format!("ok  {} ({} ms)", o.name, o.duration_ms))
            .collect();
        lines.push(format!(
            "all {} steps passed in {} ms",
            self.outcomes.len(),
            self.total_ms()
        ));
        lines
    }
}
