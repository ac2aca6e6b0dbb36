use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// How long a book stays out before it is due back.
pub const LOAN_DAYS: u64 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub category: String,
    // Signed on purpose: the issue path decrements without a floor check,
    // so the stored count can drop below zero.
    pub quantity: i64,
    pub author: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub usn: String,
    pub name: String,
}

impl Student {
    pub fn new(usn: String, name: String) -> Self {
        Self { usn, name }
    }
}

/// One lending transaction. Copies the student and book fields at creation
/// time; later edits to either store do not reach back into this row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub usn: String,
    pub student_name: String,
    pub isbn: String,
    pub book_title: String,
    pub issue_date: NaiveDate,
    pub return_date: NaiveDate,
}

impl Issue {
    pub fn new(student: &Student, book: &Book, issue_date: NaiveDate) -> Self {
        Self {
            usn: student.usn.clone(),
            student_name: student.name.clone(),
            isbn: book.isbn.clone(),
            book_title: book.title.clone(),
            issue_date,
            return_date: issue_date + Days::new(LOAN_DAYS),
        }
    }
}
