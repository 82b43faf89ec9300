//! Shared test utilities and fixtures.

#![allow(dead_code)]

use shelfsort::Book;

// Re-export canonical test utilities from shelfsort::testing
pub use shelfsort::testing::{book_list, make_book, make_genre, titles_of};

/// Titles with mixed case and diacritics that all fold into ties or near-ties.
pub const ACCENTED_TITLES: &[&str] = &[
    "Álvaro",
    "alvaro",
    "Cem Anos de Solidão",
    "café",
    "Cafe",
    "naïve",
    "Naive",
];

/// A mid-sized catalog in scrambled title order, ids assigned by position.
/// Titles may repeat; the engine treats equal folded keys as ties.
pub fn scrambled_catalog(size: usize) -> Vec<Book> {
    // Multiplicative hashing scrambles without needing an RNG seed.
    (0..size)
        .map(|index| {
            let scrambled = index.wrapping_mul(2_654_435_761) % 1_000_000;
            make_book(&index.to_string(), &format!("Title {scrambled:06}"))
        })
        .collect()
}

/// Project a book slice onto its ids, preserving order.
pub fn ids_of(books: &[Book]) -> Vec<String> {
    books.iter().map(|book| book.id.clone()).collect()
}
