use crate::error::{LibrisError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BOOKS_FILE: &str = "books.csv";
const DEFAULT_STUDENTS_FILE: &str = "students.csv";
const DEFAULT_ISSUES_FILE: &str = "issues.csv";

/// Configuration for libris, stored as config.json in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibrisConfig {
    /// File name of the book store inside the data directory
    #[serde(default = "default_books_file")]
    pub books_file: String,

    /// File name of the student store
    #[serde(default = "default_students_file")]
    pub students_file: String,

    /// File name of the issue store
    #[serde(default = "default_issues_file")]
    pub issues_file: String,
}

fn default_books_file() -> String {
    DEFAULT_BOOKS_FILE.to_string()
}

fn default_students_file() -> String {
    DEFAULT_STUDENTS_FILE.to_string()
}

fn default_issues_file() -> String {
    DEFAULT_ISSUES_FILE.to_string()
}

impl Default for LibrisConfig {
    fn default() -> Self {
        Self {
            books_file: default_books_file(),
            students_file: default_students_file(),
            issues_file: default_issues_file(),
        }
    }
}

impl LibrisConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LibrisError::Io)?;
        let config: LibrisConfig =
            serde_json::from_str(&content).map_err(LibrisError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LibrisError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(LibrisError::Serialization)?;
        fs::write(config_path, content).map_err(LibrisError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "books-file" => Some(self.books_file.clone()),
            "students-file" => Some(self.students_file.clone()),
            "issues-file" => Some(self.issues_file.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        if value.trim().is_empty() {
            return Err("file names cannot be empty".to_string());
        }
        match key {
            "books-file" => self.books_file = value.to_string(),
            "students-file" => self.students_file = value.to_string(),
            "issues-file" => self.issues_file = value.to_string(),
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LibrisConfig::default();
        assert_eq!(config.books_file, "books.csv");
        assert_eq!(config.students_file, "students.csv");
        assert_eq!(config.issues_file, "issues.csv");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = LibrisConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, LibrisConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();

        let mut config = LibrisConfig::default();
        config.set("books-file", "catalogue.csv").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = LibrisConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.books_file, "catalogue.csv");
        assert_eq!(loaded.students_file, "students.csv");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut config = LibrisConfig::default();
        assert!(config.set("loan-days", "14").is_err());
        assert!(config.get("loan-days").is_none());
    }

    #[test]
    fn test_empty_file_name_rejected() {
        let mut config = LibrisConfig::default();
        assert!(config.set("books-file", "  ").is_err());
        assert_eq!(config.books_file, "books.csv");
    }
}
