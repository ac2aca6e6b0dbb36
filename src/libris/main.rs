use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use libris::api::{CmdMessage, ConfigAction, LibrisApi, LibraryPaths, MessageLevel, SearchMode};
use libris::config::LibrisConfig;
use libris::error::Result;
use libris::model::{Book, Issue};
use libris::store::fs::FileStore;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, SearchField};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: LibrisApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::AddBook {
            isbn,
            title,
            category,
            quantity,
            author,
            email,
        } => handle_add_book(&mut ctx, isbn, title, category, quantity, author, email),
        Commands::AddStudent { usn, name } => handle_add_student(&mut ctx, usn, name),
        Commands::Search { term, by } => handle_search(&ctx, term, by),
        Commands::List => handle_list(&ctx),
        Commands::Issue { usn, isbn } => handle_issue(&mut ctx, usn, isbn),
        Commands::Issued { usn } => handle_issued(&ctx, usn),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
        Commands::Init => handle_init(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => {
            let proj_dirs = ProjectDirs::from("com", "libris", "libris")
                .expect("Could not determine data dir");
            proj_dirs.data_dir().to_path_buf()
        }
    };
    std::fs::create_dir_all(&data_dir)?;

    let config = LibrisConfig::load(&data_dir).unwrap_or_default();
    let paths = LibraryPaths::new(data_dir);
    let store = FileStore::new(paths.store_paths(&config));
    let api = LibrisApi::new(store, paths);

    Ok(AppContext { api })
}

#[allow(clippy::too_many_arguments)]
fn handle_add_book(
    ctx: &mut AppContext,
    isbn: String,
    title: String,
    category: String,
    quantity: i64,
    author: String,
    email: String,
) -> Result<()> {
    let book = Book {
        isbn,
        title,
        category,
        quantity,
        author,
        email,
    };
    let result = ctx.api.add_book(book)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_add_student(ctx: &mut AppContext, usn: String, name: String) -> Result<()> {
    let result = ctx.api.add_student(usn, name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: String, by: SearchField) -> Result<()> {
    let mode = match by {
        SearchField::Title => SearchMode::Title,
        SearchField::Category => SearchMode::Category,
        SearchField::Author => SearchMode::Author,
    };
    let result = ctx.api.search_books(mode, &term)?;
    print_books(&result.books);
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_books()?;
    print_books(&result.books);
    print_messages(&result.messages);
    Ok(())
}

fn handle_issue(ctx: &mut AppContext, usn: String, isbn: String) -> Result<()> {
    let result = ctx.api.issue_book(&usn, &isbn)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_issued(ctx: &AppContext, usn: String) -> Result<()> {
    let result = ctx.api.issued_to(&usn)?;
    print_issues(&result.issues);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("books-file = {}", config.books_file);
        println!("students-file = {}", config.students_file);
        println!("issues-file = {}", config.issues_file);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const ISBN_WIDTH: usize = 15;
const TITLE_WIDTH: usize = 28;
const CATEGORY_WIDTH: usize = 13;
const QTY_WIDTH: usize = 5;
const AUTHOR_WIDTH: usize = 18;

fn print_books(books: &[Book]) {
    if books.is_empty() {
        println!("No books found.");
        return;
    }

    println!(
        "{}{}{}{}{}{}",
        pad_to_width("ISBN", ISBN_WIDTH).dimmed(),
        pad_to_width("TITLE", TITLE_WIDTH).dimmed(),
        pad_to_width("CATEGORY", CATEGORY_WIDTH).dimmed(),
        pad_to_width("QTY", QTY_WIDTH).dimmed(),
        pad_to_width("AUTHOR", AUTHOR_WIDTH).dimmed(),
        "EMAIL".dimmed()
    );
    for book in books {
        println!(
            "{}{}{}{}{}{}",
            pad_to_width(&book.isbn, ISBN_WIDTH),
            pad_to_width(&book.title, TITLE_WIDTH).bold(),
            pad_to_width(&book.category, CATEGORY_WIDTH),
            pad_to_width(&book.quantity.to_string(), QTY_WIDTH),
            pad_to_width(&book.author, AUTHOR_WIDTH),
            book.email
        );
    }
}

fn print_issues(issues: &[Issue]) {
    if issues.is_empty() {
        println!("No books found for this USN.");
        return;
    }

    println!(
        "{}{}{}",
        pad_to_width("BOOK", TITLE_WIDTH).dimmed(),
        pad_to_width("ISSUED", 12).dimmed(),
        "DUE".dimmed()
    );
    for issue in issues {
        println!(
            "{}{}{}",
            pad_to_width(&issue.book_title, TITLE_WIDTH).bold(),
            pad_to_width(&issue.issue_date.to_string(), 12),
            issue.return_date.to_string().yellow()
        );
    }
}

/// Truncate to `width - 1` columns (with an ellipsis when cut) and pad the
/// remainder with spaces.
fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width.saturating_sub(1));
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
