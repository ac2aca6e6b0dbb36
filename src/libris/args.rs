use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "libris")]
#[command(about = "Flat-file library record keeper", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the library data files (defaults to the platform
    /// data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book to the catalogue
    #[command(name = "add-book", alias = "ab")]
    AddBook {
        isbn: String,
        title: String,
        category: String,

        /// Number of copies on the shelf
        #[arg(allow_negative_numbers = true)]
        quantity: i64,

        /// Author name
        author: String,

        /// Author email
        email: String,
    },

    /// Register a student
    #[command(name = "add-student", alias = "as")]
    AddStudent { usn: String, name: String },

    /// Search the catalogue
    #[command(alias = "s")]
    Search {
        term: String,

        /// Field to match against
        #[arg(short, long, value_enum, default_value_t = SearchField::Title)]
        by: SearchField,
    },

    /// List every book with its author
    #[command(alias = "ls")]
    List,

    /// Issue a book to a student
    #[command(alias = "i")]
    Issue { usn: String, isbn: String },

    /// List the books issued to a student
    Issued { usn: String },

    /// Get or set configuration
    Config {
        /// Configuration key (books-file, students-file, issues-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data directory
    Init,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum SearchField {
    Title,
    Category,
    Author,
}
