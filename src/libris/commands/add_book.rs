use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LibrisError, Result};
use crate::model::Book;
use crate::store::DataStore;

/// Add a book to the catalogue. A negative copy count is rejected before
/// anything touches the store. There is no ISBN uniqueness check: a second
/// row with the same ISBN simply lands after the first.
pub fn run<S: DataStore>(store: &mut S, book: Book) -> Result<CmdResult> {
    if book.quantity < 0 {
        return Err(LibrisError::InvalidInput(
            "the number of copies cannot be negative".to_string(),
        ));
    }

    store.add_book(&book)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book created: {} ({}), {} copies",
        book.title, book.isbn, book.quantity
    )));
    result.books.push(book);
    Ok(result)
}
