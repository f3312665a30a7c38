use crate::error::RunError;
use std::collections::HashMap;

// Fixed ordering for --help output; the map itself is unordered.
const FLAG_ORDER: [&str; 9] = [
    "help", "version", "quiet", "debug", "config", "log", "loads", "ops", "dry-run",
];

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag {
                short: "-h".to_string(),
                long: "--help".to_string(),
                description: "Print this help message".to_string(),
                takes_value: false,
                value: None,
            },
        );

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-v".to_string(),
                long: "--version".to_string(),
                description: "Show version information".to_string(),
                takes_value: false,
                value: None,
            },
        );

        flags.insert(
            "quiet".to_string(),
            Flag {
                short: "-q".to_string(),
                long: "--quiet".to_string(),
                description: "Suppress console status output".to_string(),
                takes_value: false,
                value: None,
            },
        );

        flags.insert(
            "debug".to_string(),
            Flag {
                short: "-d".to_string(),
                long: "--debug".to_string(),
                description: "Print resolved settings and plan diagnostics".to_string(),
                takes_value: false,
                value: None,
            },
        );

        flags.insert(
            "config".to_string(),
            Flag {
                short: "-c".to_string(),
                long: "--config".to_string(),
                description: "Specify custom config file path".to_string(),
                takes_value: true,
                value: None,
            },
        );

        flags.insert(
            "log".to_string(),
            Flag {
                short: "-l".to_string(),
                long: "--log".to_string(),
                description: "Run log file path".to_string(),
                takes_value: true,
                value: None,
            },
        );

        flags.insert(
            "loads".to_string(),
            Flag {
                short: "-L".to_string(),
                long: "--loads".to_string(),
                description: "Loads parameter passed to the measured binary".to_string(),
                takes_value: true,
                value: None,
            },
        );

        flags.insert(
            "ops".to_string(),
            Flag {
                short: "-O".to_string(),
                long: "--ops".to_string(),
                description: "Ops parameter passed to the measured binary".to_string(),
                takes_value: true,
                value: None,
            },
        );

        flags.insert(
            "dry-run".to_string(),
            Flag {
                short: "-n".to_string(),
                long: "--dry-run".to_string(),
                description: "Render the step plan without running anything".to_string(),
                takes_value: false,
                value: None,
            },
        );

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), RunError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            let mut matched = false;
            for flag in self.flags.values_mut() {
                if arg == &flag.short || arg == &flag.long {
                    matched = true;
                    if flag.takes_value {
                        if i + 1 < args.len() {
                            flag.value = Some(args[i + 1].clone());
                            i += 1;
                        } else {
                            return Err(RunError::Flag(format!(
                                "Flag {} requires a value",
                                arg
                            )));
                        }
                    } else {
                        flag.value = Some("true".to_string());
                    }
                    break;
                }
            }

            if !matched {
                return Err(RunError::Flag(format!("Unknown argument: {}", arg)));
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn print_help(&self) {
        println!("Usage: perfrun [OPTIONS]");
        println!("\nOptions:");
        for name in FLAG_ORDER {
            if let Some(flag) = self.flags.get(name) {
                println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
            }
        }
    }
}
