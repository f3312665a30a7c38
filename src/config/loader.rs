use std::{fs, path::Path};

use super::{ConfigError, ConfigPaths, Settings};

pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    /// Loads the user file then the project file; later entries win.
    /// Returns the keys that were present but not recognized.
    pub fn load_configs(&self, settings: &mut Settings) -> Result<Vec<String>, ConfigError> {
        let mut ignored = Vec::new();
        self.source_if_exists(&self.paths.user_path, settings, &mut ignored)?;
        self.source_if_exists(&self.paths.project_path, settings, &mut ignored)?;
        Ok(ignored)
    }

    /// An explicit --config file replaces both default locations and must exist.
    pub fn load_explicit(
        &self,
        path: &Path,
        settings: &mut Settings,
    ) -> Result<Vec<String>, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::ConfigFileNotFound(
                path.display().to_string(),
            ));
        }
        let mut ignored = Vec::new();
        self.source_file(path, settings, &mut ignored)?;
        Ok(ignored)
    }

    fn source_if_exists(
        &self,
        path: &Path,
        settings: &mut Settings,
        ignored: &mut Vec<String>,
    ) -> Result<(), ConfigError> {
        if path.exists() {
            self.source_file(path, settings, ignored)?;
        }
        Ok(())
    }

    fn source_file(
        &self,
        path: &Path,
        settings: &mut Settings,
        ignored: &mut Vec<String>,
    ) -> Result<(), ConfigError> {
        let content = fs::read_to_string(path)?;
        for line in content.lines() {
            self.process_line(line, settings, ignored)?;
        }
        Ok(())
    }

    fn process_line(
        &self,
        line: &str,
        settings: &mut Settings,
        ignored: &mut Vec<String>,
    ) -> Result<(), ConfigError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let mut value = value.trim();

            // Remove surrounding quotes if present
            if (value.starts_with('"') && value.ends_with('"') && value.len() >= 2)
                || (value.starts_with('\'') && value.ends_with('\'') && value.len() >= 2)
            {
                value = &value[1..value.len() - 1];
            }

            if !settings.apply_entry(key, value)? {
                ignored.push(key.to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    fn temp_paths(user: &str, project: &str) -> ConfigPaths {
        ConfigPaths {
            user_path: env::temp_dir().join(user),
            project_path: env::temp_dir().join(project),
        }
    }

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = env::temp_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_source_file_entries() {
        let content = r#"
            # comment line
            loads = 123
            ops = "456"
            feature = 'fastpath'
        "#;
        let path = write_temp("perfrun_loader_entries.conf", content);

        let paths = temp_paths("perfrun_nope_a.conf", "perfrun_nope_b.conf");
        let loader = ConfigLoader::new(&paths);
        let mut settings = Settings::default();
        let mut ignored = Vec::new();

        loader
            .source_file(&path, &mut settings, &mut ignored)
            .unwrap();
        assert_eq!(settings.loads, 123);
        assert_eq!(settings.ops, 456);
        assert_eq!(settings.feature, "fastpath");
        assert!(ignored.is_empty());

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_unknown_keys_collected() {
        let path = write_temp(
            "perfrun_loader_unknown.conf",
            "mystery = 1\nloads = 7\nother = x\n",
        );

        let paths = temp_paths("perfrun_nope_c.conf", "perfrun_nope_d.conf");
        let loader = ConfigLoader::new(&paths);
        let mut settings = Settings::default();
        let mut ignored = Vec::new();

        loader
            .source_file(&path, &mut settings, &mut ignored)
            .unwrap();
        assert_eq!(ignored, vec!["mystery", "other"]);
        assert_eq!(settings.loads, 7);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_project_file_wins_over_user_file() {
        let user = write_temp("perfrun_loader_user.conf", "loads = 1\nops = 2\n");
        let project = write_temp("perfrun_loader_project.conf", "loads = 99\n");

        let paths = ConfigPaths {
            user_path: user.clone(),
            project_path: project.clone(),
        };
        let loader = ConfigLoader::new(&paths);
        let mut settings = Settings::default();

        loader.load_configs(&mut settings).unwrap();
        assert_eq!(settings.loads, 99);
        assert_eq!(settings.ops, 2);

        let _ = fs::remove_file(user);
        let _ = fs::remove_file(project);
    }

    #[test]
    fn test_missing_files_are_fine() {
        let paths = temp_paths("perfrun_absent_user.conf", "perfrun_absent_project.conf");
        let loader = ConfigLoader::new(&paths);
        let mut settings = Settings::default();

        let ignored = loader.load_configs(&mut settings).unwrap();
        assert!(ignored.is_empty());
        assert_eq!(settings.loads, Settings::default().loads);
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let paths = temp_paths("perfrun_nope_e.conf", "perfrun_nope_f.conf");
        let loader = ConfigLoader::new(&paths);
        let mut settings = Settings::default();

        let result = loader.load_explicit(
            &env::temp_dir().join("perfrun_definitely_absent.conf"),
            &mut settings,
        );
        assert!(matches!(result, Err(ConfigError::ConfigFileNotFound(_))));
    }
}
