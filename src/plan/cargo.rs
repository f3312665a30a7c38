use super::{Step, StepKind};

/// Builder for a single cargo invocation.
#[derive(Debug, Clone)]
pub struct CargoCommand {
    toolchain: Option<String>,
    subcommand: String,
    release: bool,
    features: Option<String>,
    bin: Option<String>,
    trailing: Vec<String>,
}

impl CargoCommand {
    pub fn new(subcommand: &str) -> Self {
        CargoCommand {
            toolchain: None,
            subcommand: subcommand.to_string(),
            release: false,
            features: None,
            bin: None,
            trailing: Vec::new(),
        }
    }

    pub fn toolchain(mut self, channel: &str) -> Self {
        self.toolchain = Some(channel.to_string());
        self
    }

    pub fn release(mut self) -> Self {
        self.release = true;
        self
    }

    pub fn features(mut self, feature: &str) -> Self {
        self.features = Some(feature.to_string());
        self
    }

    pub fn bin(mut self, name: &str) -> Self {
        self.bin = Some(name.to_string());
        self
    }

    /// Argument forwarded to the invoked target after `--`.
    pub fn trailing_arg(mut self, arg: &str) -> Self {
        self.trailing.push(arg.to_string());
        self
    }

    pub fn into_step(self, name: String, kind: StepKind) -> Step {
        let mut args = Vec::new();

        // The `+channel` selector must come before the subcommand.
        if let Some(channel) = self.toolchain {
            args.push(format!("+{}", channel));
        }
        args.push(self.subcommand);
        if self.release {
            args.push("--release".to_string());
        }
        if let Some(feature) = self.features {
            args.push("--features".to_string());
            args.push(feature);
        }
        if let Some(bin) = self.bin {
            args.push("--bin".to_string());
            args.push(bin);
        }
        if !self.trailing.is_empty() {
            args.push("--".to_string());
            args.extend(self.trailing);
        }

        Step {
            name,
            program: "cargo".to_string(),
            args,
            kind,
        }
    }
}
