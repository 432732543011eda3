//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `readingdiary_core` linkage and logging configuration.
//! - Print the textual renderings of a small sample diary.

use chrono::NaiveDate;
use readingdiary_core::{core_version, LoggingConfig, Rating, ReadingDiary};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match LoggingConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("readingdiary: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = config.apply() {
        eprintln!("readingdiary: {err}");
        return ExitCode::FAILURE;
    }

    println!("readingdiary_core version={}", core_version());

    let Some(date) = NaiveDate::from_ymd_opt(2024, 1, 15).and_then(|day| day.and_hms_opt(21, 0, 0))
    else {
        return ExitCode::FAILURE;
    };

    let mut diary = ReadingDiary::new();
    diary.add_book("9780441172719", "Dune", "Frank Herbert", 412);
    diary.add_note_to_book("9780441172719", "great opening", 10, date);
    diary.add_note_to_book("9780441172719", "the litany", 10, date);
    diary.rate_book("9780441172719", Rating::Excellent);

    if let Some(book) = diary.book_with_most_notes() {
        println!("{book}");
        for note in book.notes() {
            println!("  {note}");
        }
        println!("most annotated page={}", book.page_with_most_notes());
    }
    log::info!(
        "event=smoke_run module=cli status=ok book_count={}",
        diary.len()
    );

    ExitCode::SUCCESS
}
