use crate::error::Result;
use crate::model::{Book, Student};
use crate::store::DataStore;

/// Existence probe: exact, trimmed, case-sensitive usn match. An empty or
/// absent store answers `false`, never an error.
pub fn student_exists<S: DataStore>(store: &S, usn: &str) -> Result<bool> {
    Ok(store
        .list_students()?
        .iter()
        .any(|s| s.usn.trim() == usn.trim()))
}

/// Full-row load of the first student whose usn matches.
pub fn find_student<S: DataStore>(store: &S, usn: &str) -> Result<Option<Student>> {
    Ok(store
        .list_students()?
        .into_iter()
        .find(|s| s.usn.trim() == usn.trim()))
}

/// Full-row load of the first book whose ISBN matches. With duplicate
/// ISBNs this is always the earliest row, the same one the quantity
/// updater touches.
pub fn find_book<S: DataStore>(store: &S, isbn: &str) -> Result<Option<Book>> {
    Ok(store
        .list_books()?
        .into_iter()
        .find(|b| b.isbn.trim() == isbn.trim()))
}
