use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// Which field a catalogue search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Case-insensitive substring match on the title.
    Title,
    /// Case-insensitive substring match on the category.
    Category,
    /// Case-insensitive substring match on the author name OR email.
    Author,
    /// Every row, unconditionally.
    All,
}

/// Scan the book store. Read-only; results keep file order and are not
/// capped. An empty term is a substring of everything, so it matches every
/// row in any mode.
pub fn run<S: DataStore>(store: &S, mode: SearchMode, term: &str) -> Result<CmdResult> {
    let term_lower = term.to_lowercase();

    let matches = store
        .list_books()?
        .into_iter()
        .filter(|book| match mode {
            SearchMode::Title => book.title.to_lowercase().contains(&term_lower),
            SearchMode::Category => book.category.to_lowercase().contains(&term_lower),
            SearchMode::Author => {
                book.author.to_lowercase().contains(&term_lower)
                    || book.email.to_lowercase().contains(&term_lower)
            }
            SearchMode::All => true,
        })
        .collect();

    Ok(CmdResult::default().with_books(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Book;
    use crate::store::memory::InMemoryStore;
    use crate::store::DataStore;

    fn book(isbn: &str, title: &str, category: &str, author: &str, email: &str) -> Book {
        Book {
            isbn: isbn.into(),
            title: title.into(),
            category: category.into(),
            quantity: 1,
            author: author.into(),
            email: email.into(),
        }
    }

    fn catalogue() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for b in [
            book("111", "Dune", "SciFi", "Herbert", "h@x.com"),
            book("222", "Dune Messiah", "SciFi", "Herbert", "h@x.com"),
            book("333", "The Hobbit", "Fantasy", "Tolkien", "jrr@inklings.org"),
        ] {
            store.add_book(&b).unwrap();
        }
        store
    }

    #[test]
    fn title_match_is_case_insensitive_substring() {
        let store = catalogue();
        let result = run(&store, SearchMode::Title, "dune").unwrap();
        assert_eq!(result.books.len(), 2);
        assert_eq!(result.books[0].title, "Dune");
        assert_eq!(result.books[1].title, "Dune Messiah");
    }

    #[test]
    fn category_match_is_case_insensitive_substring() {
        let store = catalogue();
        let result = run(&store, SearchMode::Category, "fan").unwrap();
        assert_eq!(result.books.len(), 1);
        assert_eq!(result.books[0].title, "The Hobbit");
    }

    #[test]
    fn author_mode_matches_name_or_email() {
        let store = catalogue();

        let by_name = run(&store, SearchMode::Author, "tolkien").unwrap();
        assert_eq!(by_name.books.len(), 1);

        let by_email = run(&store, SearchMode::Author, "inklings").unwrap();
        assert_eq!(by_email.books.len(), 1);
        assert_eq!(by_email.books[0].title, "The Hobbit");
    }

    #[test]
    fn all_mode_returns_every_row_in_file_order() {
        let store = catalogue();
        let result = run(&store, SearchMode::All, "").unwrap();
        let titles: Vec<&str> = result.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "Dune Messiah", "The Hobbit"]);
    }

    #[test]
    fn empty_term_matches_everything_in_any_mode() {
        let store = catalogue();
        assert_eq!(run(&store, SearchMode::Title, "").unwrap().books.len(), 3);
        assert_eq!(run(&store, SearchMode::Category, "").unwrap().books.len(), 3);
    }

    #[test]
    fn search_is_idempotent() {
        let store = catalogue();
        let first = run(&store, SearchMode::Title, "dune").unwrap();
        let second = run(&store, SearchMode::Title, "dune").unwrap();
        assert_eq!(first.books, second.books);
    }

    #[test]
    fn empty_store_yields_no_matches() {
        let store = InMemoryStore::new();
        assert!(run(&store, SearchMode::All, "").unwrap().books.is_empty());
    }
}
