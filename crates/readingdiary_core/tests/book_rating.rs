use readingdiary_core::{Book, BookError, Rating};

#[test]
fn rated_values_are_accepted() {
    let mut book = Book::new("111", "Dune", "Herbert", 400);

    for rating in [Rating::Excellent, Rating::Good, Rating::Bad] {
        assert!(book.set_rating(rating));
        assert_eq!(book.rating(), rating);
    }
}

#[test]
fn unrated_is_rejected_and_keeps_current_rating() {
    let mut book = Book::new("111", "Dune", "Herbert", 400);
    assert!(book.set_rating(Rating::Bad));

    assert!(!book.set_rating(Rating::Unrated));
    assert_eq!(book.rating(), Rating::Bad);
    assert_eq!(
        book.try_set_rating(Rating::Unrated).unwrap_err(),
        BookError::InvalidRating(Rating::Unrated)
    );
}

#[test]
fn rating_codes_follow_rated_values_only() {
    let mut book = Book::new("111", "Dune", "Herbert", 400);

    assert!(book.set_rating_code(3));
    assert_eq!(book.rating(), Rating::Excellent);
    assert!(book.set_rating_code(2));
    assert_eq!(book.rating(), Rating::Good);
    assert!(book.set_rating_code(1));
    assert_eq!(book.rating(), Rating::Bad);

    assert!(!book.set_rating_code(-1));
    assert!(!book.set_rating_code(0));
    assert!(!book.set_rating_code(42));
    assert_eq!(book.rating(), Rating::Bad);
    assert_eq!(
        book.try_set_rating_code(0).unwrap_err(),
        BookError::UnknownRatingCode(0)
    );
}

#[test]
fn book_display_lists_metadata_and_rating_label() {
    let mut book = Book::new("111", "Dune", "Herbert", 400);
    assert_eq!(
        book.to_string(),
        "ISBN: 111\nTitle: Dune\nAuthor: Herbert\nPages: 400\nRating: unrated"
    );

    book.set_rating(Rating::Excellent);
    assert!(book.to_string().ends_with("Rating: excellent"));
    book.set_rating(Rating::Good);
    assert!(book.to_string().ends_with("Rating: good"));
    book.set_rating(Rating::Bad);
    assert!(book.to_string().ends_with("Rating: bad"));
}
