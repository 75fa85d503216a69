#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]
#![doc = include_str!("../README.md")]

mod api;
mod book;
mod error;
mod favorites;
mod search;
mod store;

pub use book::{BookId, BookRecord};
pub use error::{Error, ErrorKind};
pub use favorites::{Favorites, FavoritesStore};
pub use search::{SearchSession, MAX_RESULTS, NO_RESULTS, SEARCH_FAILED};
pub use store::{MemoryStore, Store};

use log::trace;

type Client = reqwest::blocking::Client;

/// Search Open Library for books matching a `title`.
///
/// Returns the raw result list in API order, untruncated. Most callers want
/// [`SearchSession::search`] instead, which also tracks the loading flag,
/// the user-facing error message and the ten-result cap.
///
/// # Errors
///
/// An `Err` of kind [`ErrorKind::NoResults`] is returned when nothing matches
/// the `title`.
/// An `Err` is returned when the request fails or the response body cannot be
/// deserialized.
#[inline]
pub fn books_by_title(title: &str) -> Result<Vec<BookRecord>, Error> {
    trace!("Search books by title of '{title}'");
    api::open_library::books_by_title::<Client>(title)
}
