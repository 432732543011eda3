//! Note domain model.
//!
//! # Responsibility
//! - Hold one dated, page-scoped annotation.
//!
//! # Invariants
//! - A note is never mutated after creation.
//! - Page bounds are checked by the owning `Book`, not here.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One annotation attached to a book page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    text: String,
    page: u32,
    date: NaiveDateTime,
}

impl Note {
    pub(crate) fn new(text: impl Into<String>, page: u32, date: NaiveDateTime) -> Self {
        Self {
            text: text.into(),
            page,
            date,
        }
    }

    /// Annotation body.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Page the annotation refers to.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// When the annotation was taken.
    pub fn date(&self) -> NaiveDateTime {
        self.date
    }
}

impl Display for Note {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - page {}: {}", self.date, self.page, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::Note;
    use chrono::NaiveDate;

    #[test]
    fn display_renders_date_page_and_text() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|day| day.and_hms_opt(18, 30, 0))
            .expect("valid timestamp");
        let note = Note::new("great opening", 10, date);

        assert_eq!(
            note.to_string(),
            "2024-03-09 18:30:00 - page 10: great opening"
        );
    }
}
