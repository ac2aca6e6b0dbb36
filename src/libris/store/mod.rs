//! # Storage Layer
//!
//! This module defines the storage abstraction for libris. The [`DataStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production flat-file storage
//!   - One comma-delimited file per entity type, each with a fixed header
//!   - Appends for new rows; a full-file rewrite for the single mutable
//!     field (book quantity)
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! For `FileStore` (file names configurable, see [`crate::config`]):
//! ```text
//! <data dir>/
//! ├── books.csv      # isbn,title,category,quantity,author,email
//! ├── students.csv   # usn,name
//! ├── issues.csv     # usn,name,isbn,bookTitle,issueDate,returnDate
//! └── config.json    # store configuration
//! ```
//!
//! Rows are joined with bare commas. There is no quoting or escaping: a
//! comma inside a title or name shifts every following column on the next
//! read. Dates are `YYYY-MM-DD`, quantities plain decimal integers.

use crate::error::Result;
use crate::model::{Book, Issue, Student};
use std::path::{Path, PathBuf};

pub mod flat_file;
pub mod fs;
pub mod memory;

/// Where each entity file lives. Passed explicitly into
/// [`fs::FileStore::new`]; nothing in the crate hardcodes a path.
#[derive(Debug, Clone)]
pub struct StorePaths {
    pub books: PathBuf,
    pub students: PathBuf,
    pub issues: PathBuf,
}

impl StorePaths {
    pub fn in_dir(dir: &Path, books: &str, students: &str, issues: &str) -> Self {
        Self {
            books: dir.join(books),
            students: dir.join(students),
            issues: dir.join(issues),
        }
    }
}

/// Abstract interface for the three record stores.
///
/// Write operations take `&mut self` even where the file-backed
/// implementation does not strictly need it; mutation is serialized by the
/// borrow checker within one process, which is the only concurrency this
/// system supports.
pub trait DataStore {
    /// Append a book row. ISBN uniqueness is NOT checked here or anywhere:
    /// duplicate ISBNs coexist and quantity updates only ever touch the
    /// first match.
    fn add_book(&mut self, book: &Book) -> Result<()>;

    /// All book rows in file order.
    fn list_books(&self) -> Result<Vec<Book>>;

    /// Overwrite the stored quantity of the first book whose ISBN matches
    /// (exact, trimmed). Returns whether a row was updated. Callers compute
    /// the new value; no bounds are enforced here.
    fn set_book_quantity(&mut self, isbn: &str, quantity: i64) -> Result<bool>;

    /// Append a student row. Uniqueness of the usn is the command layer's
    /// concern.
    fn add_student(&mut self, student: &Student) -> Result<()>;

    /// All student rows in file order.
    fn list_students(&self) -> Result<Vec<Student>>;

    /// Append an issue row.
    fn add_issue(&mut self, issue: &Issue) -> Result<()>;

    /// All issue rows in file order.
    fn list_issues(&self) -> Result<Vec<Issue>>;
}
