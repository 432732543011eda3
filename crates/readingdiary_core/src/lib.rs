//! Core domain logic for the reading diary.
//! This crate is the single source of truth for book and note invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod service;

pub use config::LoggingConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::{Book, BookError, NO_PAGE};
pub use model::note::Note;
pub use model::rating::Rating;
pub use service::diary::{DiaryError, DiaryResult, ReadingDiary};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
