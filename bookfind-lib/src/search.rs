use log::{trace, warn};

use crate::{api, book::BookRecord, ErrorKind};

/// Message shown when a search completes but matches nothing.
pub const NO_RESULTS: &str = "No books found.";

/// Message shown when the search request fails or returns an unreadable body.
pub const SEARCH_FAILED: &str = "Something went wrong.";

/// Most results kept from a single search.
pub const MAX_RESULTS: usize = 10;

/// Holds the outcome of the most recent title search.
///
/// The session owns the result list (capped at [`MAX_RESULTS`]), a loading
/// flag and a single user-facing error slot. Zero matches is reported through
/// the error slot as [`NO_RESULTS`] rather than as a failure, so a display
/// layer only needs the one channel. A failed search keeps the previous
/// results.
///
/// Searches are blocking: one completes before another can start on the
/// calling thread, so a stale response can never overwrite a newer one.
#[derive(Debug, Default)]
pub struct SearchSession {
    results: Vec<BookRecord>,
    loading: bool,
    error: Option<&'static str>,
}

impl SearchSession {
    /// Searches Open Library for books matching `query` and replaces the
    /// session state with the outcome.
    ///
    /// An empty or whitespace-only `query` is ignored entirely: no request is
    /// sent and no state changes.
    pub fn search(&mut self, query: &str) {
        self.search_with::<reqwest::blocking::Client>(query);
    }

    pub(crate) fn search_with<C: api::Client>(&mut self, query: &str) {
        if query.trim().is_empty() {
            trace!("Ignoring empty search query");
            return;
        }

        self.loading = true;
        self.error = None;

        match api::open_library::books_by_title::<C>(query) {
            Ok(mut books) => {
                books.truncate(MAX_RESULTS);
                self.results = books;
            }
            Err(err) if err.kind() == ErrorKind::NoResults => {
                trace!("Search for '{query}' matched nothing");
                self.error = Some(NO_RESULTS);
                self.results.clear();
            }
            Err(err) => {
                warn!("Search for '{query}' failed: {err}");
                self.error = Some(SEARCH_FAILED);
            }
        }

        self.loading = false;
    }

    /// The results of the most recent completed search, at most
    /// [`MAX_RESULTS`] records.
    #[must_use]
    pub fn results(&self) -> &[BookRecord] {
        &self.results
    }

    /// Returns true while a search is in flight.
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// The current user-facing message, either [`NO_RESULTS`] or
    /// [`SEARCH_FAILED`]; `None` after a successful search or before any.
    #[must_use]
    pub const fn error(&self) -> Option<&'static str> {
        self.error
    }
}
