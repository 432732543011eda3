//! Domain model for books and reading notes.
//!
//! # Responsibility
//! - Define the value types owned by a reading diary.
//! - Enforce per-book invariants at mutation time.
//!
//! # Invariants
//! - Ownership is strictly diary -> book -> note, with no back-references.
//! - Notes are immutable once attached to a book.

pub mod book;
pub mod note;
pub mod rating;
