use std::fmt;
use std::path::Path;

mod loader;
mod paths;
mod settings;

use crate::flags::Flags;
use loader::ConfigLoader;
pub use paths::ConfigPaths;
pub use settings::Settings;

pub struct Config {
    paths: ConfigPaths,
    settings: Settings,
    ignored_keys: Vec<String>,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        let paths = ConfigPaths::new()?;

        Ok(Config {
            paths,
            settings: Settings::default(),
            ignored_keys: Vec::new(),
        })
    }

    pub fn load(&mut self, explicit: Option<&str>) -> Result<(), ConfigError> {
        let paths = self.paths.clone();
        let loader = ConfigLoader::new(&paths);
        self.ignored_keys = match explicit {
            Some(path) => loader.load_explicit(Path::new(path), &mut self.settings)?,
            None => loader.load_configs(&mut self.settings)?,
        };
        Ok(())
    }

    pub fn apply_flags(&mut self, flags: &Flags) -> Result<(), ConfigError> {
        self.settings.apply_flags(flags)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn into_parts(self) -> (Settings, Vec<String>) {
        (self.settings, self.ignored_keys)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ConfigDirNotFound,
    ConfigFileNotFound(String),
    EnvVarNotFound(String),
    InvalidValue { key: String, value: String },
    IoError(std::io::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ConfigDirNotFound => write!(f, "Config directory not found"),
            ConfigError::ConfigFileNotFound(path) => {
                write!(f, "Config file not found: {}", path)
            }
            ConfigError::EnvVarNotFound(var) => {
                write!(f, "Environment variable not found: {}", var)
            }
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {}: {}", key, value)
            }
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn test_load_explicit_and_flag_overrides() {
        let path = env::temp_dir().join("perfrun_config_explicit.conf");
        fs::write(&path, "loads = 11\nops = 22\n").unwrap();

        let mut config = Config::new().unwrap();
        config
            .load(Some(path.to_string_lossy().as_ref()))
            .unwrap();
        assert_eq!(config.settings().loads, 11);

        let mut flags = Flags::new();
        let args: Vec<String> = ["--loads", "33"].iter().map(|s| s.to_string()).collect();
        flags.parse(&args).unwrap();
        config.apply_flags(&flags).unwrap();

        let (settings, ignored) = config.into_parts();
        assert_eq!(settings.loads, 33);
        assert_eq!(settings.ops, 22);
        assert!(ignored.is_empty());

        let _ = fs::remove_file(path);
    }
}
