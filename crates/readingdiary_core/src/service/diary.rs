//! Reading diary use-case service.
//!
//! # Responsibility
//! - Own every registered `Book`, keyed by ISBN.
//! - Route per-book operations and compute cross-book aggregates.
//!
//! # Invariants
//! - No two books share an ISBN.
//! - Iteration order is `add_book` insertion order.
//! - Rejected operations never mutate state.

use crate::model::book::{Book, BookError};
use crate::model::rating::Rating;
use chrono::NaiveDateTime;
use log::{debug, info};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DiaryResult<T> = Result<T, DiaryError>;

/// Reason a diary operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiaryError {
    /// A book with this ISBN is already registered.
    DuplicateIsbn(String),
    /// No book is registered under this ISBN.
    BookNotFound(String),
    /// The target book rejected the mutation.
    Book(BookError),
}

impl Display for DiaryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateIsbn(isbn) => write!(f, "book already registered: {isbn}"),
            Self::BookNotFound(isbn) => write!(f, "book not found: {isbn}"),
            Self::Book(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DiaryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Book(err) => Some(err),
            Self::DuplicateIsbn(_) | Self::BookNotFound(_) => None,
        }
    }
}

impl From<BookError> for DiaryError {
    fn from(value: BookError) -> Self {
        Self::Book(value)
    }
}

/// In-memory collection of books and their notes.
#[derive(Debug, Clone, Default)]
pub struct ReadingDiary {
    books: Vec<Book>,
    index: HashMap<String, usize>,
}

impl ReadingDiary {
    /// Creates an empty diary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Books in registration order.
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    /// Registers a new unrated book without notes.
    ///
    /// # Errors
    /// - `DiaryError::DuplicateIsbn` when `isbn` is taken; the existing book
    ///   is left untouched.
    pub fn try_add_book(
        &mut self,
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        pages: u32,
    ) -> DiaryResult<&Book> {
        let isbn = isbn.into();
        if self.index.contains_key(isbn.as_str()) {
            debug!("event=book_add module=diary status=rejected reason=duplicate isbn={isbn}");
            return Err(DiaryError::DuplicateIsbn(isbn));
        }

        let position = self.books.len();
        self.index.insert(isbn.clone(), position);
        self.books.push(Book::new(isbn, title, author, pages));

        let book = &self.books[position];
        info!(
            "event=book_add module=diary status=ok isbn={} pages={} book_count={}",
            book.isbn(),
            book.pages(),
            self.books.len()
        );
        Ok(book)
    }

    /// Boolean form of [`ReadingDiary::try_add_book`].
    pub fn add_book(
        &mut self,
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        pages: u32,
    ) -> bool {
        self.try_add_book(isbn, title, author, pages).is_ok()
    }

    /// Looks up one book by ISBN.
    pub fn search_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.index
            .get(isbn)
            .and_then(|position| self.books.get(*position))
    }

    fn book_mut(&mut self, isbn: &str) -> DiaryResult<&mut Book> {
        match self.index.get(isbn) {
            Some(position) => Ok(&mut self.books[*position]),
            None => {
                debug!("event=book_lookup module=diary status=not_found isbn={isbn}");
                Err(DiaryError::BookNotFound(isbn.to_string()))
            }
        }
    }

    /// Attaches a note to the book registered under `isbn`.
    ///
    /// # Errors
    /// - `DiaryError::BookNotFound` for an unknown ISBN.
    /// - `DiaryError::Book` when the book rejects the page.
    pub fn try_add_note_to_book(
        &mut self,
        isbn: &str,
        text: impl Into<String>,
        page: u32,
        date: NaiveDateTime,
    ) -> DiaryResult<()> {
        self.book_mut(isbn)?.try_add_note(text, page, date)?;
        Ok(())
    }

    /// Boolean form of [`ReadingDiary::try_add_note_to_book`].
    pub fn add_note_to_book(
        &mut self,
        isbn: &str,
        text: impl Into<String>,
        page: u32,
        date: NaiveDateTime,
    ) -> bool {
        self.try_add_note_to_book(isbn, text, page, date).is_ok()
    }

    /// Rates the book registered under `isbn`.
    ///
    /// # Errors
    /// - `DiaryError::BookNotFound` for an unknown ISBN.
    /// - `DiaryError::Book` when the rating cannot be assigned.
    pub fn try_rate_book(&mut self, isbn: &str, rating: Rating) -> DiaryResult<()> {
        self.book_mut(isbn)?.try_set_rating(rating)?;
        Ok(())
    }

    /// Boolean form of [`ReadingDiary::try_rate_book`].
    pub fn rate_book(&mut self, isbn: &str, rating: Rating) -> bool {
        self.try_rate_book(isbn, rating).is_ok()
    }

    /// Rates a book through its integer rating code.
    pub fn rate_book_code(&mut self, isbn: &str, code: i32) -> bool {
        self.book_mut(isbn)
            .map(|book| book.set_rating_code(code))
            .unwrap_or(false)
    }

    /// Returns the book with the strictly highest note count.
    ///
    /// `None` when the diary is empty or no book has notes. Ties go to the
    /// book registered first.
    pub fn book_with_most_notes(&self) -> Option<&Book> {
        let mut best: Option<&Book> = None;
        let mut max_count = 0;
        for book in &self.books {
            if book.note_count() > max_count {
                max_count = book.note_count();
                best = Some(book);
            }
        }
        best
    }
}
