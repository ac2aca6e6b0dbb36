//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all libris operations, regardless of the front
//! end driving them.
//!
//! The facade dispatches to command functions and returns structured
//! `Result<CmdResult>` values. It holds no business logic, performs no I/O
//! formatting, and never touches stdout or stderr.
//!
//! ## Generic Over DataStore
//!
//! `LibrisApi<S: DataStore>` is generic over the storage backend:
//! - Production: `LibrisApi<FileStore>`
//! - Testing: `LibrisApi<InMemoryStore>`
//!
//! This enables exercising every operation without a filesystem.

use crate::commands;
use crate::error::Result;
use crate::model::Book;
use crate::store::DataStore;
use chrono::Local;

/// The main API facade for libris operations.
///
/// All front ends (the bundled CLI or anything else) should interact
/// through this API.
pub struct LibrisApi<S: DataStore> {
    store: S,
    paths: commands::LibraryPaths,
}

impl<S: DataStore> LibrisApi<S> {
    pub fn new(store: S, paths: commands::LibraryPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_book(&mut self, book: Book) -> Result<commands::CmdResult> {
        commands::add_book::run(&mut self.store, book)
    }

    pub fn add_student(&mut self, usn: String, name: String) -> Result<commands::CmdResult> {
        commands::add_student::run(&mut self.store, usn, name)
    }

    /// Issue a book to a student, dated today.
    pub fn issue_book(&mut self, usn: &str, isbn: &str) -> Result<commands::CmdResult> {
        let today = Local::now().date_naive();
        commands::issue::run(&mut self.store, usn, isbn, today)
    }

    pub fn search_books(&self, mode: SearchMode, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, mode, term)
    }

    /// Every book with its author, in file order.
    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, SearchMode::All, "")
    }

    /// Every issue recorded against a usn.
    pub fn issued_to(&self, usn: &str) -> Result<commands::CmdResult> {
        commands::issued::run(&self.store, usn)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn paths(&self) -> &commands::LibraryPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::search::SearchMode;
pub use commands::{CmdMessage, CmdResult, LibraryPaths, MessageLevel};
