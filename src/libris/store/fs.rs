use super::flat_file::FlatFile;
use super::{DataStore, StorePaths};
use crate::error::{LibrisError, Result};
use crate::model::{Book, Issue, Student};
use chrono::NaiveDate;

const BOOKS_HEADER: &str = "isbn,title,category,quantity,author,email";
const STUDENTS_HEADER: &str = "usn,name";
const ISSUES_HEADER: &str = "usn,name,isbn,bookTitle,issueDate,returnDate";

const BOOK_ISBN_COL: usize = 0;
const BOOK_QUANTITY_COL: usize = 3;

const DATE_FMT: &str = "%Y-%m-%d";

/// Flat-file backed [`DataStore`]: one delimited file per entity type.
///
/// Each operation opens, uses, and closes its file; no handle outlives a
/// single call. Rows with fewer fields than their schema are skipped on
/// read, matching how partially corrupted files have always been handled.
pub struct FileStore {
    books: FlatFile,
    students: FlatFile,
    issues: FlatFile,
}

impl FileStore {
    pub fn new(paths: StorePaths) -> Self {
        Self {
            books: FlatFile::new(paths.books, BOOKS_HEADER),
            students: FlatFile::new(paths.students, STUDENTS_HEADER),
            issues: FlatFile::new(paths.issues, ISSUES_HEADER),
        }
    }
}

impl DataStore for FileStore {
    fn add_book(&mut self, book: &Book) -> Result<()> {
        self.books.append(&[
            book.isbn.clone(),
            book.title.clone(),
            book.category.clone(),
            book.quantity.to_string(),
            book.author.clone(),
            book.email.clone(),
        ])
    }

    fn list_books(&self) -> Result<Vec<Book>> {
        self.books
            .rows()?
            .iter()
            .filter(|fields| fields.len() >= 6)
            .map(|fields| parse_book(fields))
            .collect()
    }

    fn set_book_quantity(&mut self, isbn: &str, quantity: i64) -> Result<bool> {
        self.books.rewrite_field(
            BOOK_ISBN_COL,
            isbn,
            BOOK_QUANTITY_COL,
            &quantity.to_string(),
        )
    }

    fn add_student(&mut self, student: &Student) -> Result<()> {
        self.students
            .append(&[student.usn.clone(), student.name.clone()])
    }

    fn list_students(&self) -> Result<Vec<Student>> {
        Ok(self
            .students
            .rows()?
            .into_iter()
            .filter(|fields| fields.len() >= 2)
            .map(|fields| Student {
                usn: fields[0].clone(),
                name: fields[1].clone(),
            })
            .collect())
    }

    fn add_issue(&mut self, issue: &Issue) -> Result<()> {
        self.issues.append(&[
            issue.usn.clone(),
            issue.student_name.clone(),
            issue.isbn.clone(),
            issue.book_title.clone(),
            issue.issue_date.format(DATE_FMT).to_string(),
            issue.return_date.format(DATE_FMT).to_string(),
        ])
    }

    fn list_issues(&self) -> Result<Vec<Issue>> {
        self.issues
            .rows()?
            .iter()
            .filter(|fields| fields.len() >= 6)
            .map(|fields| parse_issue(fields))
            .collect()
    }
}

fn parse_book(fields: &[String]) -> Result<Book> {
    let quantity: i64 = fields[3].trim().parse().map_err(|_| {
        LibrisError::Corrupt(format!(
            "book {} has a non-numeric quantity: {}",
            fields[0], fields[3]
        ))
    })?;
    Ok(Book {
        isbn: fields[0].clone(),
        title: fields[1].clone(),
        category: fields[2].clone(),
        quantity,
        author: fields[4].clone(),
        email: fields[5].clone(),
    })
}

fn parse_issue(fields: &[String]) -> Result<Issue> {
    let parse_date = |value: &String| -> Result<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), DATE_FMT).map_err(|_| {
            LibrisError::Corrupt(format!(
                "issue for usn {} has an unreadable date: {}",
                fields[0], value
            ))
        })
    };
    Ok(Issue {
        usn: fields[0].clone(),
        student_name: fields[1].clone(),
        isbn: fields[2].clone(),
        book_title: fields[3].clone(),
        issue_date: parse_date(&fields[4])?,
        return_date: parse_date(&fields[5])?,
    })
}
