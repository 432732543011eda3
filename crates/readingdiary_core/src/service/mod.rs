//! Core use-case services.
//!
//! # Responsibility
//! - Expose diary-level entry points over the book/note model.
//! - Keep callers decoupled from per-book storage details.

pub mod diary;
