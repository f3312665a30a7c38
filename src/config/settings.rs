use super::ConfigError;
use crate::flags::Flags;
use std::borrow::Cow;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Settings {
    pub log_path: PathBuf,
    pub loads: u64,
    pub ops: u64,
    pub toolchains: Vec<String>,
    pub feature: String,
    pub binary: String,
    pub valgrind: String,
    pub target_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_path: PathBuf::from("perf_run.log"),
            loads: 10_000,
            ops: 100_000,
            toolchains: vec!["nightly".to_string(), "stable".to_string()],
            feature: "perf".to_string(),
            binary: "perf".to_string(),
            valgrind: "valgrind".to_string(),
            target_dir: PathBuf::from("target"),
        }
    }
}

impl Settings {
    /// Applies one config entry. Returns false when the key is unknown.
    pub fn apply_entry(&mut self, key: &str, value: &str) -> Result<bool, ConfigError> {
        match key {
            "log" => self.log_path = PathBuf::from(expand_value(value)?.as_ref()),
            "loads" => self.loads = parse_count("loads", value)?,
            "ops" => self.ops = parse_count("ops", value)?,
            "toolchains" => self.toolchains = split_list(value),
            "feature" => self.feature = value.to_string(),
            "binary" => self.binary = value.to_string(),
            "valgrind" => self.valgrind = value.to_string(),
            "target-dir" => self.target_dir = PathBuf::from(expand_value(value)?.as_ref()),
            _ => return Ok(false),
        }
        Ok(true)
    }

    pub fn apply_flags(&mut self, flags: &Flags) -> Result<(), ConfigError> {
        if let Some(path) = flags.get_value("log") {
            self.log_path = PathBuf::from(expand_value(path)?.as_ref());
        }
        if let Some(value) = flags.get_value("loads") {
            self.loads = parse_count("loads", value)?;
        }
        if let Some(value) = flags.get_value("ops") {
            self.ops = parse_count("ops", value)?;
        }
        Ok(())
    }
}

fn parse_count(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

pub(crate) fn expand_value(value: &str) -> Result<Cow<'_, str>, ConfigError> {
    if value.is_empty() {
        return Ok(Cow::Borrowed(value));
    }

    let mut modified = false;
    let mut result = value.to_string();

    for var in ["HOME", "CARGO_TARGET_DIR"] {
        let marker = format!("${}", var);
        if result.contains(&marker) {
            let expansion =
                env::var(var).map_err(|_| ConfigError::EnvVarNotFound(var.to_string()))?;
            result = result.replace(&marker, &expansion);
            modified = true;
        }
    }

    Ok(if modified {
        Cow::Owned(result)
    } else {
        Cow::Borrowed(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.log_path, PathBuf::from("perf_run.log"));
        assert_eq!(settings.loads, 10_000);
        assert_eq!(settings.ops, 100_000);
        assert_eq!(settings.toolchains, vec!["nightly", "stable"]);
        assert_eq!(settings.feature, "perf");
        assert_eq!(settings.binary, "perf");
    }

    #[test]
    fn test_apply_entry_counts() -> Result<(), ConfigError> {
        let mut settings = Settings::default();
        assert!(settings.apply_entry("loads", "42")?);
        assert!(settings.apply_entry("ops", " 777 ")?);
        assert_eq!(settings.loads, 42);
        assert_eq!(settings.ops, 777);
        Ok(())
    }

    #[test]
    fn test_apply_entry_invalid_count() {
        let mut settings = Settings::default();
        let result = settings.apply_entry("loads", "not-a-number");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_apply_entry_toolchains() -> Result<(), ConfigError> {
        let mut settings = Settings::default();
        settings.apply_entry("toolchains", "beta, 1.84.0 ,")?;
        assert_eq!(settings.toolchains, vec!["beta", "1.84.0"]);
        Ok(())
    }

    #[test]
    fn test_apply_entry_empty_toolchains() -> Result<(), ConfigError> {
        let mut settings = Settings::default();
        settings.apply_entry("toolchains", "")?;
        assert!(settings.toolchains.is_empty());
        Ok(())
    }

    #[test]
    fn test_apply_entry_unknown_key() -> Result<(), ConfigError> {
        let mut settings = Settings::default();
        assert!(!settings.apply_entry("no-such-key", "value")?);
        Ok(())
    }

    #[test]
    fn test_expand_value_home() -> Result<(), ConfigError> {
        env::set_var("HOME", "/home/test");
        let expanded = expand_value("$HOME/logs/perf.log")?;
        assert_eq!(expanded, "/home/test/logs/perf.log");
        Ok(())
    }

    #[test]
    fn test_expand_value_untouched() -> Result<(), ConfigError> {
        let expanded = expand_value("plain/path.log")?;
        assert!(matches!(expanded, Cow::Borrowed(_)));
        Ok(())
    }

    #[test]
    fn test_apply_flags_overrides() -> Result<(), ConfigError> {
        let mut flags = Flags::new();
        let args: Vec<String> = ["--loads", "5", "--ops", "9", "--log", "custom.log"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        flags.parse(&args).unwrap();

        let mut settings = Settings::default();
        settings.apply_flags(&flags)?;
        assert_eq!(settings.loads, 5);
        assert_eq!(settings.ops, 9);
        assert_eq!(settings.log_path, PathBuf::from("custom.log"));
        Ok(())
    }
}
