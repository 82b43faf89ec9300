// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The record types the engine sorts and searches.
//!
//! Records arrive from the catalog API as JSON lists and are never mutated
//! field-wise by the engine - sorting reorders them, searching filters them.
//! Identity is the `id` field; duplicate ids are the caller's problem and are
//! not deduplicated here.
//!
//! Both record types expose their sort/search key through [`SortKey`], so the
//! algorithm modules are written once and work for books, genres, and any
//! future keyed record.

use serde::{Deserialize, Serialize};

/// A catalog book.
///
/// `title` is the primary sort and search key. Everything else is display
/// metadata carried through sorting untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    /// Cover image reference. The API spells this `coverimg` and may send null.
    #[serde(rename = "coverimg", default)]
    pub cover_img: Option<String>,
    /// Raw rating as the API sends it: either a 0-5 value or a 0-500 value.
    /// Use [`Book::rating_out_of_five`] instead of reading this directly.
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub ratings_count: Option<u64>,
}

impl Book {
    /// The book's rating on the 0-5 scale, whatever scale the API used.
    ///
    /// Upstream data mixes two encodings: `3.87` and `387` both mean 3.87
    /// stars. Values above 5 are treated as the 0-500 encoding and divided by
    /// 100; missing, non-finite, and non-positive ratings are 0; the result is
    /// clamped to `[0, 5]`.
    pub fn rating_out_of_five(&self) -> f64 {
        let raw = match self.rating {
            Some(r) if r.is_finite() && r > 0.0 => r,
            _ => return 0.0,
        };
        let scaled = if raw > 5.0 { raw / 100.0 } else { raw };
        scaled.clamp(0.0, 5.0)
    }
}

/// A catalog genre.
///
/// `genre` is the sort and search key. The timestamps are opaque strings from
/// the API; the engine never parses or compares them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: String,
    pub genre: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Key extraction for sortable/searchable records.
///
/// The sort and search functions compare records by
/// `normalize_key(record.sort_key())`, never by the raw field, so two records
/// whose keys differ only in case or diacritics are ties.
pub trait SortKey {
    /// The raw string key, before folding.
    fn sort_key(&self) -> &str;
}

impl SortKey for Book {
    fn sort_key(&self) -> &str {
        &self.title
    }
}

impl SortKey for Genre {
    fn sort_key(&self) -> &str {
        &self.genre
    }
}
