//! Book domain model.
//!
//! # Responsibility
//! - Own the bibliographic metadata, rating and notes of one book.
//! - Validate note placement and rating assignments.
//!
//! # Invariants
//! - Every note satisfies `note.page() <= book.pages()`.
//! - Notes keep insertion order.
//! - Rating starts as `Rating::Unrated` and can only be overwritten with a
//!   rated value.

use crate::model::note::Note;
use crate::model::rating::Rating;
use chrono::NaiveDateTime;
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Sentinel returned by `Book::page_with_most_notes` when there are no notes.
pub const NO_PAGE: i64 = -1;

/// Reason a book mutation was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Note page lies past the last page of the book.
    PageOutOfRange { page: u32, pages: u32 },
    /// Rating value cannot be assigned (only `Unrated` today).
    InvalidRating(Rating),
    /// Integer code does not name any rating.
    UnknownRatingCode(i32),
}

impl Display for BookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PageOutOfRange { page, pages } => {
                write!(f, "page {page} is out of range; book has {pages} pages")
            }
            Self::InvalidRating(rating) => write!(f, "rating `{rating}` cannot be assigned"),
            Self::UnknownRatingCode(code) => write!(f, "unknown rating code: {code}"),
        }
    }
}

impl Error for BookError {}

/// One registered book and its reading notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookRecord")]
pub struct Book {
    isbn: String,
    title: String,
    author: String,
    pages: u32,
    rating: Rating,
    notes: Vec<Note>,
}

/// Unchecked wire shape; converted through `Book::try_from`.
#[derive(Deserialize)]
struct BookRecord {
    isbn: String,
    title: String,
    author: String,
    pages: u32,
    #[serde(default)]
    rating: Rating,
    #[serde(default)]
    notes: Vec<Note>,
}

impl TryFrom<BookRecord> for Book {
    type Error = BookError;

    fn try_from(value: BookRecord) -> Result<Self, Self::Error> {
        if let Some(note) = value.notes.iter().find(|note| note.page() > value.pages) {
            return Err(BookError::PageOutOfRange {
                page: note.page(),
                pages: value.pages,
            });
        }
        Ok(Self {
            isbn: value.isbn,
            title: value.title,
            author: value.author,
            pages: value.pages,
            rating: value.rating,
            notes: value.notes,
        })
    }
}

impl Book {
    /// Creates an unrated book without notes.
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        pages: u32,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            pages,
            rating: Rating::Unrated,
            notes: Vec::new(),
        }
    }

    pub fn isbn(&self) -> &str {
        self.isbn.as_str()
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    /// Total page count.
    pub fn pages(&self) -> u32 {
        self.pages
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    /// Notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        self.notes.as_slice()
    }

    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    /// Appends a note when `page` lies within the book.
    ///
    /// # Errors
    /// - `BookError::PageOutOfRange` when `page > pages`; notes stay unchanged.
    pub fn try_add_note(
        &mut self,
        text: impl Into<String>,
        page: u32,
        date: NaiveDateTime,
    ) -> Result<(), BookError> {
        if page > self.pages {
            debug!(
                "event=note_add module=book status=rejected isbn={} page={} pages={}",
                self.isbn, page, self.pages
            );
            return Err(BookError::PageOutOfRange {
                page,
                pages: self.pages,
            });
        }
        self.notes.push(Note::new(text, page, date));
        debug!(
            "event=note_add module=book status=ok isbn={} page={} note_count={}",
            self.isbn,
            page,
            self.notes.len()
        );
        Ok(())
    }

    /// Boolean form of [`Book::try_add_note`].
    pub fn add_note(&mut self, text: impl Into<String>, page: u32, date: NaiveDateTime) -> bool {
        self.try_add_note(text, page, date).is_ok()
    }

    /// Overwrites the rating with one of the rated values.
    ///
    /// # Errors
    /// - `BookError::InvalidRating` for `Rating::Unrated`; rating stays unchanged.
    pub fn try_set_rating(&mut self, rating: Rating) -> Result<(), BookError> {
        if !rating.is_rated() {
            debug!(
                "event=rating_set module=book status=rejected isbn={} rating={}",
                self.isbn, rating
            );
            return Err(BookError::InvalidRating(rating));
        }
        self.rating = rating;
        debug!(
            "event=rating_set module=book status=ok isbn={} rating={}",
            self.isbn, rating
        );
        Ok(())
    }

    /// Boolean form of [`Book::try_set_rating`].
    pub fn set_rating(&mut self, rating: Rating) -> bool {
        self.try_set_rating(rating).is_ok()
    }

    /// Integer-code entry point for rating assignment.
    ///
    /// # Errors
    /// - `BookError::UnknownRatingCode` when `code` names no rating.
    /// - `BookError::InvalidRating` when `code` names `Rating::Unrated`.
    pub fn try_set_rating_code(&mut self, code: i32) -> Result<(), BookError> {
        let rating = Rating::from_code(code).ok_or(BookError::UnknownRatingCode(code))?;
        self.try_set_rating(rating)
    }

    /// Boolean form of [`Book::try_set_rating_code`].
    pub fn set_rating_code(&mut self, code: i32) -> bool {
        self.try_set_rating_code(code).is_ok()
    }

    /// Returns the notes taken on `page`, in insertion order.
    ///
    /// Always returns a list; it is empty when the page has no notes.
    pub fn get_notes_of_page(&self, page: u32) -> Vec<&Note> {
        self.notes.iter().filter(|note| note.page() == page).collect()
    }

    /// Returns the page carrying the most notes, or `None` without notes.
    ///
    /// Ties go to the page whose first note was added earliest.
    pub fn most_annotated_page(&self) -> Option<u32> {
        // (page, count) in first-seen order.
        let mut counts: Vec<(u32, usize)> = Vec::new();
        for note in &self.notes {
            match counts.iter_mut().find(|(page, _)| *page == note.page()) {
                Some((_, count)) => *count += 1,
                None => counts.push((note.page(), 1)),
            }
        }

        let mut best: Option<(u32, usize)> = None;
        for (page, count) in counts {
            let beats_best = match best {
                Some((_, max)) => count > max,
                None => true,
            };
            if beats_best {
                best = Some((page, count));
            }
        }
        best.map(|(page, _)| page)
    }

    /// Sentinel form of [`Book::most_annotated_page`]: `-1` without notes.
    pub fn page_with_most_notes(&self) -> i64 {
        self.most_annotated_page()
            .map(i64::from)
            .unwrap_or(NO_PAGE)
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ISBN: {}\nTitle: {}\nAuthor: {}\nPages: {}\nRating: {}",
            self.isbn, self.title, self.author, self.pages, self.rating
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Book, BookError, NO_PAGE};
    use crate::model::rating::Rating;
    use chrono::{NaiveDate, NaiveDateTime};

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .and_then(|date| date.and_hms_opt(9, 0, 0))
            .expect("valid timestamp")
    }

    fn book_with_pages(pages: &[u32]) -> Book {
        let mut book = Book::new("111", "Dune", "Herbert", 400);
        for (idx, page) in pages.iter().enumerate() {
            assert!(book.add_note(format!("note {idx}"), *page, day(1)));
        }
        book
    }

    #[test]
    fn new_book_is_unrated_and_empty() {
        let book = Book::new("111", "Dune", "Herbert", 400);
        assert_eq!(book.rating(), Rating::Unrated);
        assert!(book.notes().is_empty());
        assert_eq!(book.page_with_most_notes(), NO_PAGE);
    }

    #[test]
    fn note_on_last_page_is_accepted() {
        let mut book = Book::new("111", "Dune", "Herbert", 400);
        assert!(book.add_note("last page", 400, day(2)));
        assert_eq!(book.note_count(), 1);
    }

    #[test]
    fn note_past_last_page_reports_reason() {
        let mut book = Book::new("111", "Dune", "Herbert", 400);
        let err = book.try_add_note("past end", 401, day(2)).unwrap_err();
        assert_eq!(
            err,
            BookError::PageOutOfRange {
                page: 401,
                pages: 400
            }
        );
        assert!(book.notes().is_empty());
    }

    #[test]
    fn most_annotated_page_ties_go_to_first_seen_page() {
        let book = book_with_pages(&[20, 10, 10, 20]);
        assert_eq!(book.most_annotated_page(), Some(20));
    }

    #[test]
    fn most_annotated_page_prefers_strictly_higher_count() {
        let book = book_with_pages(&[5, 7, 7]);
        assert_eq!(book.page_with_most_notes(), 7);
    }

    #[test]
    fn error_messages_are_stable() {
        assert_eq!(
            BookError::UnknownRatingCode(7).to_string(),
            "unknown rating code: 7"
        );
        assert_eq!(
            BookError::InvalidRating(Rating::Unrated).to_string(),
            "rating `unrated` cannot be assigned"
        );
    }
}
