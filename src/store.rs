// Catalog store: owns the in-memory list of books and keeps the JSON file
// in sync with it.
// - The whole catalog is rewritten on every successful mutation.
// - Load and save never fail from the caller's point of view; problems are
//   reported to the diagnostic sink and the store carries on.

use crate::book::Book;
use crate::diagnostics::{DiagnosticSink, LogSink};
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure while reading or writing the catalog file. Only ever rendered
/// into a diagnostic entry.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid catalog data in `{}`: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Book catalog backed by a single JSON file.
#[derive(Debug)]
pub struct CatalogStore<S = LogSink> {
    path: PathBuf,
    books: Vec<Book>,
    sink: S,
}

impl<S: DiagnosticSink> CatalogStore<S> {
    /// Open the catalog at `path` and load whatever it holds. A missing or
    /// unreadable file results in an empty catalog.
    pub fn open(path: impl Into<PathBuf>, sink: S) -> Self {
        let mut store = CatalogStore {
            path: path.into(),
            books: Vec::new(),
            sink,
        };
        store.load();
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the in-memory catalog with the file contents.
    ///
    /// A missing file yields an empty catalog silently. Any other read or
    /// parse failure also yields an empty catalog, and the failure is
    /// reported to the sink; the unreadable data is discarded.
    pub fn load(&mut self) {
        match self.read_books() {
            Ok(Some(books)) => {
                self.books = books;
                self.sink.info(&format!(
                    "event=catalog_load status=ok path={} books={}",
                    self.path.display(),
                    self.books.len()
                ));
            }
            Ok(None) => self.books = Vec::new(),
            Err(err) => {
                self.books = Vec::new();
                self.sink
                    .error(&format!("event=catalog_load status=error error={err}"));
            }
        }
    }

    /// Write the full catalog to disk, overwriting the previous file.
    /// Failures go to the sink; the in-memory catalog is left as is.
    pub fn save(&self) {
        match self.write_books() {
            Ok(()) => self.sink.info(&format!(
                "event=catalog_save status=ok path={} books={}",
                self.path.display(),
                self.books.len()
            )),
            Err(err) => self
                .sink
                .error(&format!("event=catalog_save status=error error={err}")),
        }
    }

    /// Append a new available book and persist. Returns false without
    /// touching the catalog when the isbn is already taken.
    pub fn add(&mut self, title: &str, author: &str, isbn: &str) -> bool {
        if self.find_by_isbn(isbn).is_some() {
            return false;
        }
        self.books.push(Book::new(title, author, isbn));
        self.save();
        true
    }

    /// Issue the book with this isbn and persist. False when there is no
    /// such book or it is already issued.
    pub fn issue(&mut self, isbn: &str) -> bool {
        self.transition(isbn, Book::issue)
    }

    /// Return the book with this isbn and persist. False when there is no
    /// such book or it is not issued.
    pub fn return_book(&mut self, isbn: &str) -> bool {
        self.transition(isbn, Book::return_book)
    }

    pub fn find_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.isbn == isbn)
    }

    /// Case-insensitive substring search over titles, in catalog order.
    pub fn find_by_title(&self, query: &str) -> Vec<&Book> {
        let needle = query.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.title.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn list_all(&self) -> &[Book] {
        &self.books
    }

    fn transition(&mut self, isbn: &str, apply: fn(&mut Book) -> bool) -> bool {
        let changed = match self.books.iter_mut().find(|book| book.isbn == isbn) {
            Some(book) => apply(book),
            None => false,
        };
        if changed {
            self.save();
        }
        changed
    }

    fn read_books(&self) -> Result<Option<Vec<Book>>, StoreError> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let books = serde_json::from_str(&data).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(books))
    }

    fn write_books(&self) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.books
            .serialize(&mut serializer)
            .map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;
        std::fs::write(&self.path, buf).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
