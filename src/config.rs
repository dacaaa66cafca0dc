//! TOML configuration for the demonstration runner.
//!
//! Every field has a default, so an empty document is a valid config:
//!
//! ```toml
//! demos = ["shapes", "files"]
//!
//! [output]
//! color = false
//!
//! [files]
//! dir = "/tmp/oop"
//! text_file = "example.txt"
//! binary_file = "example.bin"
//!
//! [greeting]
//! name = "Ferris"
//! ```

use crate::demo::Demo;
use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub demos: Vec<Demo>,
    pub output: OutputConfig,
    pub files: FilesConfig,
    pub greeting: GreetingConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            demos: Demo::ALL.to_vec(),
            output: OutputConfig::default(),
            files: FilesConfig::default(),
            greeting: GreetingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilesConfig {
    pub dir: PathBuf,
    pub text_file: String,
    pub binary_file: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            text_file: "example.txt".to_string(),
            binary_file: "example.bin".to_string(),
        }
    }
}

impl FilesConfig {
    pub fn text_path(&self) -> PathBuf {
        self.dir.join(&self.text_file)
    }

    pub fn binary_path(&self) -> PathBuf {
        self.dir.join(&self.binary_file)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GreetingConfig {
    pub name: String,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            name: "Rustacean".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), demos = config.demos.len(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.demos, Demo::ALL.to_vec());
        assert!(config.output.color);
        assert_eq!(config.files.text_path(), Path::new("./example.txt"));
        assert_eq!(config.files.binary_path(), Path::new("./example.bin"));
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let toml = r#"
demos = ["sounds", "files"]

[files]
dir = "/tmp/oop"
"#;
        let config = DemoConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.demos, vec![Demo::Sounds, Demo::Files]);
        assert_eq!(config.files.text_path(), Path::new("/tmp/oop/example.txt"));
        assert_eq!(config.greeting.name, "Rustacean");
    }

    #[test]
    fn test_unknown_demo_is_rejected() {
        let result = DemoConfig::from_toml_str(r#"demos = ["teleporter"]"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = DemoConfig::from_toml_str("[output]\ncolour = true\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\ncolor = false\n\n[greeting]\nname = \"Ferris\"").unwrap();

        let config = DemoConfig::load(file.path()).unwrap();
        assert!(!config.output.color);
        assert_eq!(config.greeting.name, "Ferris");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = DemoConfig::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
