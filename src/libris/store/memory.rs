use super::DataStore;
use crate::error::Result;
use crate::model::{Book, Issue, Student};

/// In-memory [`DataStore`] for tests. Mirrors `FileStore` semantics,
/// including first-match-only quantity updates over duplicate ISBNs.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    books: Vec<Book>,
    students: Vec<Student>,
    issues: Vec<Issue>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn add_book(&mut self, book: &Book) -> Result<()> {
        self.books.push(book.clone());
        Ok(())
    }

    fn list_books(&self) -> Result<Vec<Book>> {
        Ok(self.books.clone())
    }

    fn set_book_quantity(&mut self, isbn: &str, quantity: i64) -> Result<bool> {
        match self
            .books
            .iter_mut()
            .find(|b| b.isbn.trim() == isbn.trim())
        {
            Some(book) => {
                book.quantity = quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn add_student(&mut self, student: &Student) -> Result<()> {
        self.students.push(student.clone());
        Ok(())
    }

    fn list_students(&self) -> Result<Vec<Student>> {
        Ok(self.students.clone())
    }

    fn add_issue(&mut self, issue: &Issue) -> Result<()> {
        self.issues.push(issue.clone());
        Ok(())
    }

    fn list_issues(&self) -> Result<Vec<Issue>> {
        Ok(self.issues.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_book(mut self, isbn: &str, title: &str, quantity: i64) -> Self {
            let book = Book {
                isbn: isbn.to_string(),
                title: title.to_string(),
                category: "General".to_string(),
                quantity,
                author: "Anon".to_string(),
                email: "anon@example.com".to_string(),
            };
            self.store.add_book(&book).unwrap();
            self
        }

        pub fn with_student(mut self, usn: &str, name: &str) -> Self {
            let student = Student::new(usn.to_string(), name.to_string());
            self.store.add_student(&student).unwrap();
            self
        }
    }
}
