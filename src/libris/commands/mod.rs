use crate::config::LibrisConfig;
use crate::model::{Book, Issue, Student};
use crate::store::StorePaths;
use std::path::PathBuf;

pub mod add_book;
pub mod add_student;
pub mod config;
pub mod helpers;
pub mod init;
pub mod issue;
pub mod issued;
pub mod search;

/// Where the library keeps its data files and configuration.
#[derive(Debug, Clone)]
pub struct LibraryPaths {
    pub data_dir: PathBuf,
}

impl LibraryPaths {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// The per-entity file locations under this data directory, with the
    /// file names the configuration asks for.
    pub fn store_paths(&self, config: &LibrisConfig) -> StorePaths {
        StorePaths::in_dir(
            &self.data_dir,
            &config.books_file,
            &config.students_file,
            &config.issues_file,
        )
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of one operation. The CLI renders these; the core
/// never prints.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub books: Vec<Book>,
    pub students: Vec<Student>,
    pub issues: Vec<Issue>,
    pub config: Option<LibrisConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_books(mut self, books: Vec<Book>) -> Self {
        self.books = books;
        self
    }

    pub fn with_students(mut self, students: Vec<Student>) -> Self {
        self.students = students;
        self
    }

    pub fn with_issues(mut self, issues: Vec<Issue>) -> Self {
        self.issues = issues;
        self
    }

    pub fn with_config(mut self, config: LibrisConfig) -> Self {
        self.config = Some(config);
        self
    }
}
