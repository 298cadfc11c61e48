// Book record: the single catalog entry and its availability state machine.
// A book starts `available`; `issue` and `return_book` are the only
// transitions and each one is refused when the book is already in the
// target state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Availability of a book. Persisted as the lowercase strings
/// `"available"` and `"issued"`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Available,
    Issued,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::Issued => "issued",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry. Field names mirror the persisted JSON objects.
/// A missing `status` in the file is read as `available`; any other
/// missing or extra key is a parse error.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(default)]
    pub status: Status,
}

impl Book {
    /// Create a new book in the `available` state.
    pub fn new(title: impl Into<String>, author: impl Into<String>, isbn: impl Into<String>) -> Self {
        Book {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            status: Status::Available,
        }
    }

    /// Mark the book as issued. Returns false (and changes nothing) when
    /// the book is already out.
    pub fn issue(&mut self) -> bool {
        if self.status == Status::Available {
            self.status = Status::Issued;
            return true;
        }
        false
    }

    /// Bring an issued book back. Returns false when it was not issued.
    pub fn return_book(&mut self) -> bool {
        if self.status == Status::Issued {
            self.status = Status::Available;
            return true;
        }
        false
    }

    pub fn is_available(&self) -> bool {
        self.status == Status::Available
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {} | Author: {} | ISBN: {} | Status: {}",
            self.title, self.author, self.isbn, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_book_is_available() {
        let book = Book::new("Dune", "Herbert", "111");
        assert_eq!(book.status, Status::Available);
        assert!(book.is_available());
    }

    #[test]
    fn issue_then_return_restores_availability() {
        let mut book = Book::new("Dune", "Herbert", "111");
        assert!(book.issue());
        assert!(!book.is_available());
        assert!(book.return_book());
        assert!(book.is_available());
    }

    #[test]
    fn issue_twice_is_rejected() {
        let mut book = Book::new("Dune", "Herbert", "111");
        assert!(book.issue());
        assert!(!book.issue());
        assert_eq!(book.status, Status::Issued);
    }

    #[test]
    fn return_of_available_book_is_rejected() {
        let mut book = Book::new("Dune", "Herbert", "111");
        assert!(!book.return_book());
        assert_eq!(book.status, Status::Available);
    }

    #[test]
    fn display_uses_pipe_separated_fields() {
        let mut book = Book::new("Dune", "Herbert", "111");
        book.issue();
        assert_eq!(
            book.to_string(),
            "Title: Dune | Author: Herbert | ISBN: 111 | Status: issued"
        );
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&Book::new("Dune", "Herbert", "111")).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Dune","author":"Herbert","isbn":"111","status":"available"}"#
        );
    }

    #[test]
    fn missing_status_defaults_to_available() {
        let book: Book =
            serde_json::from_str(r#"{"title":"Emma","author":"Austen","isbn":"222"}"#).unwrap();
        assert_eq!(book.status, Status::Available);
    }

    #[test]
    fn extra_key_is_a_parse_error() {
        let parsed = serde_json::from_str::<Book>(
            r#"{"title":"Emma","author":"Austen","isbn":"222","status":"issued","shelf":"B4"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn unknown_status_is_a_parse_error() {
        let parsed = serde_json::from_str::<Book>(
            r#"{"title":"Emma","author":"Austen","isbn":"222","status":"lost"}"#,
        );
        assert!(parsed.is_err());
    }
}
