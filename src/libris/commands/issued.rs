use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// List every issue recorded against a usn.
///
/// This is the one place a key comparison ignores case; every other usn
/// and ISBN match in the crate is case-sensitive.
pub fn run<S: DataStore>(store: &S, usn: &str) -> Result<CmdResult> {
    let matches = store
        .list_issues()?
        .into_iter()
        .filter(|issue| issue.usn.trim().eq_ignore_ascii_case(usn))
        .collect();

    Ok(CmdResult::default().with_issues(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::issue;
    use crate::store::memory::fixtures::StoreFixture;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    #[test]
    fn lists_only_the_requested_students_issues() {
        let mut store = StoreFixture::new()
            .with_student("U1", "Alice")
            .with_student("U2", "Bob")
            .with_book("111", "Dune", 5)
            .with_book("333", "The Hobbit", 5)
            .store;
        issue::run(&mut store, "U1", "111", today()).unwrap();
        issue::run(&mut store, "U2", "333", today()).unwrap();
        issue::run(&mut store, "U1", "333", today()).unwrap();

        let result = run(&store, "U1").unwrap();
        let titles: Vec<&str> = result.issues.iter().map(|i| i.book_title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "The Hobbit"]);
    }

    #[test]
    fn usn_match_ignores_case() {
        let mut store = StoreFixture::new()
            .with_student("U1", "Alice")
            .with_book("111", "Dune", 1)
            .store;
        issue::run(&mut store, "U1", "111", today()).unwrap();

        assert_eq!(run(&store, "u1").unwrap().issues.len(), 1);
    }

    #[test]
    fn unknown_usn_yields_an_empty_list() {
        let store = StoreFixture::new().store;
        assert!(run(&store, "U9").unwrap().issues.is_empty());
    }
}
