// UI layer: the numbered text menu.
// Choices and fields are read one line at a time. On a terminal the lines
// come from `dialoguer` prompts; when stdin is piped they are read straight
// from it, so the menu can be scripted. The loop itself only sees a
// `LineSource` and a writer, which keeps it testable without a terminal.

use crate::book::{Book, Status};
use crate::diagnostics::DiagnosticSink;
use crate::store::CatalogStore;
use anyhow::{Context, Result};
use crossterm::style::Stylize;
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};

pub const MENU_ITEMS: [&str; 7] = [
    "1. Add Book",
    "2. Issue Book",
    "3. Return Book",
    "4. View All Books",
    "5. Search Book by Title",
    "6. Search Book by ISBN",
    "7. Exit",
];

pub const NO_BOOKS: &str = "No books in the catalog.";
pub const NO_TITLE_MATCH: &str = "No book found with the title.";
pub const NO_ISBN_MATCH: &str = "No book found with the ISBN.";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
pub const GOODBYE: &str = "Exiting the Library Inventory Manager. Goodbye!";

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Issue,
    Return,
    ViewAll,
    SearchTitle,
    SearchIsbn,
    Exit,
}

/// Map a typed line onto a menu entry. Only the numbers `1` to `7` are
/// accepted; surrounding whitespace is ignored.
pub fn parse_choice(line: &str) -> Option<MenuChoice> {
    match line.trim() {
        "1" => Some(MenuChoice::Add),
        "2" => Some(MenuChoice::Issue),
        "3" => Some(MenuChoice::Return),
        "4" => Some(MenuChoice::ViewAll),
        "5" => Some(MenuChoice::SearchTitle),
        "6" => Some(MenuChoice::SearchIsbn),
        "7" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// Where the menu reads its lines from. `Ok(None)` means input is
/// exhausted.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Interactive prompts on the terminal.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl LineSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let value: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .with_context(|| format!("Failed to read `{prompt}`"))?;
        Ok(Some(value))
    }
}

/// Plain lines from any reader, e.g. piped stdin. Prompts are not echoed.
#[derive(Debug)]
pub struct ReaderInput<R> {
    reader: R,
}

impl<R: BufRead> ReaderInput<R> {
    pub fn new(reader: R) -> Self {
        ReaderInput { reader }
    }
}

impl<R: BufRead> LineSource for ReaderInput<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .with_context(|| format!("Failed to read `{prompt}`"))?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

/// Main interactive menu on stdin/stdout. Runs until the user picks
/// "Exit" or input runs out.
pub fn main_menu<S: DiagnosticSink>(mut store: CatalogStore<S>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if stdin.is_terminal() {
        run_menu(&mut store, &mut TerminalInput, &mut stdout, true)
    } else {
        let mut input = ReaderInput::new(stdin.lock());
        run_menu(&mut store, &mut input, &mut stdout, false)
    }
}

/// The menu loop. `colored` turns on status colors in listings.
pub fn run_menu<S, L, W>(
    store: &mut CatalogStore<S>,
    input: &mut L,
    out: &mut W,
    colored: bool,
) -> Result<()>
where
    S: DiagnosticSink,
    L: LineSource + ?Sized,
    W: Write,
{
    loop {
        writeln!(out, "\n--- Library Inventory Manager ---")?;
        for item in MENU_ITEMS {
            writeln!(out, "{item}")?;
        }
        out.flush()?;

        let Some(line) = input.read_line("Enter your choice")? else {
            return Ok(());
        };
        let Some(choice) = parse_choice(&line) else {
            writeln!(out, "{INVALID_CHOICE}")?;
            continue;
        };
        if choice == MenuChoice::Exit {
            writeln!(out, "{GOODBYE}")?;
            return Ok(());
        }
        if !handle_choice(store, choice, input, out, colored)? {
            return Ok(());
        }
    }
}

// Runs one non-exit menu action. Returns false when input ran out midway.
fn handle_choice<S, L, W>(
    store: &mut CatalogStore<S>,
    choice: MenuChoice,
    input: &mut L,
    out: &mut W,
    colored: bool,
) -> Result<bool>
where
    S: DiagnosticSink,
    L: LineSource + ?Sized,
    W: Write,
{
    match choice {
        MenuChoice::Add => {
            let Some(title) = input.read_line("Enter title")? else {
                return Ok(false);
            };
            let Some(author) = input.read_line("Enter author")? else {
                return Ok(false);
            };
            let Some(isbn) = input.read_line("Enter ISBN")? else {
                return Ok(false);
            };
            writeln!(out, "{}", add_book(store, &title, &author, &isbn))?;
        }
        MenuChoice::Issue => {
            let Some(isbn) = input.read_line("Enter ISBN to issue")? else {
                return Ok(false);
            };
            writeln!(out, "{}", issue_book(store, isbn.trim()))?;
        }
        MenuChoice::Return => {
            let Some(isbn) = input.read_line("Enter ISBN to return")? else {
                return Ok(false);
            };
            writeln!(out, "{}", return_book(store, isbn.trim()))?;
        }
        MenuChoice::ViewAll => {
            let books: Vec<&Book> = store.list_all().iter().collect();
            write_books(out, &books, NO_BOOKS, colored)?;
        }
        MenuChoice::SearchTitle => {
            let Some(query) = input.read_line("Enter title to search")? else {
                return Ok(false);
            };
            write_books(out, &store.find_by_title(query.trim()), NO_TITLE_MATCH, colored)?;
        }
        MenuChoice::SearchIsbn => {
            let Some(isbn) = input.read_line("Enter ISBN to search")? else {
                return Ok(false);
            };
            match store.find_by_isbn(isbn.trim()) {
                Some(book) => write_book(out, book, colored)?,
                None => writeln!(out, "{NO_ISBN_MATCH}")?,
            }
        }
        MenuChoice::Exit => {}
    }
    Ok(true)
}

/// Add a book and describe the outcome.
pub fn add_book<S: DiagnosticSink>(
    store: &mut CatalogStore<S>,
    title: &str,
    author: &str,
    isbn: &str,
) -> &'static str {
    if store.add(title, author, isbn) {
        "Book added successfully."
    } else {
        "Book with this ISBN already exists."
    }
}

pub fn issue_book<S: DiagnosticSink>(store: &mut CatalogStore<S>, isbn: &str) -> &'static str {
    if store.issue(isbn) {
        "Book issued successfully."
    } else {
        "Book not found or already issued."
    }
}

pub fn return_book<S: DiagnosticSink>(store: &mut CatalogStore<S>, isbn: &str) -> &'static str {
    if store.return_book(isbn) {
        "Book returned successfully."
    } else {
        "Book not found or not issued."
    }
}

fn write_books<W: Write>(
    out: &mut W,
    books: &[&Book],
    empty_message: &str,
    colored: bool,
) -> io::Result<()> {
    if books.is_empty() {
        writeln!(out, "{empty_message}")?;
    }
    for book in books {
        write_book(out, book, colored)?;
    }
    Ok(())
}

// Same layout as `Book`'s Display, with the status optionally colored.
fn write_book<W: Write>(out: &mut W, book: &Book, colored: bool) -> io::Result<()> {
    if !colored {
        return writeln!(out, "{book}");
    }
    let status = match book.status {
        Status::Available => book.status.as_str().green(),
        Status::Issued => book.status.as_str().yellow(),
    };
    writeln!(
        out,
        "Title: {} | Author: {} | ISBN: {} | Status: {}",
        book.title, book.author, book.isbn, status
    )
}
