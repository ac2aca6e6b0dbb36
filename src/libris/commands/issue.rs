use super::helpers;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LibrisError, Result};
use crate::model::Issue;
use crate::store::DataStore;
use chrono::NaiveDate;

/// Issue a book to a student.
///
/// Four stages, short-circuiting on the first failure:
///
/// 1. existence probe on the student store;
/// 2. full student row load (a miss here after the probe passed means the
///    store changed underneath us, reported as corruption);
/// 3. book scan by ISBN: the stored quantity is decremented as soon as the
///    row is matched, before the issue row exists, and with no floor check:
///    issuing an out-of-stock book drives the count negative;
/// 4. append of the denormalized issue row, due back in a week.
///
/// There is no rollback: when stage 4 fails, the stage 3 decrement stays on
/// disk. Known defect, kept.
pub fn run<S: DataStore>(
    store: &mut S,
    usn: &str,
    isbn: &str,
    today: NaiveDate,
) -> Result<CmdResult> {
    if !helpers::student_exists(store, usn)? {
        return Err(LibrisError::StudentNotFound(usn.to_string()));
    }

    let student = helpers::find_student(store, usn)?.ok_or_else(|| {
        LibrisError::Corrupt(format!(
            "student {} passed the existence check but could not be loaded",
            usn
        ))
    })?;

    let book = match helpers::find_book(store, isbn)? {
        Some(book) => {
            store.set_book_quantity(&book.isbn, book.quantity - 1)?;
            book
        }
        None => return Err(LibrisError::BookNotFound(isbn.to_string())),
    };

    let issue = Issue::new(&student, &book, today);
    store.add_issue(&issue)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Issued {} to {}, due back {}",
        issue.book_title, issue.student_name, issue.return_date
    )));
    result.issues.push(issue);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    #[test]
    fn issue_decrements_stock_and_appends_a_denormalized_row() {
        let mut store = StoreFixture::new()
            .with_student("U1", "Alice")
            .with_book("111", "Dune", 2)
            .store;

        let result = run(&mut store, "U1", "111", today()).unwrap();

        assert_eq!(store.list_books().unwrap()[0].quantity, 1);

        let issues = store.list_issues().unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].usn, "U1");
        assert_eq!(issues[0].student_name, "Alice");
        assert_eq!(issues[0].isbn, "111");
        assert_eq!(issues[0].book_title, "Dune");
        assert_eq!(issues[0].issue_date, today());
        assert_eq!(
            issues[0].return_date,
            NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
        );
        assert_eq!(result.issues[0], issues[0]);
    }

    #[test]
    fn unknown_student_aborts_before_any_mutation() {
        let mut store = StoreFixture::new().with_book("111", "Dune", 2).store;

        match run(&mut store, "U9", "111", today()) {
            Err(LibrisError::StudentNotFound(usn)) => assert_eq!(usn, "U9"),
            other => panic!("expected StudentNotFound, got {:?}", other),
        }
        assert_eq!(store.list_books().unwrap()[0].quantity, 2);
        assert!(store.list_issues().unwrap().is_empty());
    }

    #[test]
    fn unknown_book_aborts_after_the_student_checks() {
        let mut store = StoreFixture::new().with_student("U1", "Alice").store;

        match run(&mut store, "U1", "999", today()) {
            Err(LibrisError::BookNotFound(isbn)) => assert_eq!(isbn, "999"),
            other => panic!("expected BookNotFound, got {:?}", other),
        }
        assert!(store.list_issues().unwrap().is_empty());
    }

    #[test]
    fn out_of_stock_book_goes_negative() {
        // The issue path has no quantity floor; only creation validates.
        let mut store = StoreFixture::new()
            .with_student("U1", "Alice")
            .with_book("111", "Dune", 0)
            .store;

        run(&mut store, "U1", "111", today()).unwrap();
        assert_eq!(store.list_books().unwrap()[0].quantity, -1);
    }

    #[test]
    fn duplicate_isbn_issues_against_the_first_row() {
        let mut store = StoreFixture::new()
            .with_student("U1", "Alice")
            .with_book("111", "Dune", 2)
            .with_book("111", "Dune (reprint)", 7)
            .store;

        run(&mut store, "U1", "111", today()).unwrap();

        let books = store.list_books().unwrap();
        assert_eq!(books[0].quantity, 1);
        assert_eq!(books[1].quantity, 7);
        assert_eq!(store.list_issues().unwrap()[0].book_title, "Dune");
    }

    #[test]
    fn usn_match_is_trimmed_for_lookup_but_the_row_keeps_its_spelling() {
        let mut store = StoreFixture::new()
            .with_student(" U1 ", "Alice")
            .with_book("111", "Dune", 1)
            .store;

        run(&mut store, "U1", "111", today()).unwrap();
        assert_eq!(store.list_issues().unwrap()[0].usn, " U1 ");
    }
}
