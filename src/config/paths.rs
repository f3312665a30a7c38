use super::ConfigError;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub user_path: PathBuf,
    pub project_path: PathBuf,
}

impl ConfigPaths {
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(ConfigPaths {
            user_path: config_dir.join("perfrun").join("perfrun.conf"),
            project_path: PathBuf::from("perfrun.conf"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_user_path_layout() {
        let paths = ConfigPaths::new().unwrap();
        assert!(paths.user_path.ends_with(Path::new("perfrun/perfrun.conf")));
    }

    #[test]
    fn test_project_path_is_cwd_relative() {
        let paths = ConfigPaths::new().unwrap();
        assert_eq!(paths.project_path, PathBuf::from("perfrun.conf"));
    }
}
