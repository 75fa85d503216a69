use log::{info, trace};
use serde::Deserialize;

use crate::{book::BookRecord, Error, ErrorKind};

use super::Client;

const SEARCH_URL: &str = "https://openlibrary.org/search.json?title=";

/// One page of the Open Library search response.
///
/// The response carries many more fields (`numFound`, facet data, per-doc
/// edition details) that are ignored. A missing `docs` field deserializes as
/// an empty list and is treated the same as zero matches.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct SearchPage {
    #[serde(default)]
    docs: Vec<BookRecord>,
}

pub(crate) fn books_by_title<C: Client>(title: &str) -> Result<Vec<BookRecord>, Error> {
    info!("Searching for title '{title}' using the Open Library search API");
    let mut url = SEARCH_URL.to_owned();
    url.push_str(title);

    let client = C::default();
    let SearchPage { docs } = client.get_json(&url)?;

    trace!("Request was successful");

    if docs.is_empty() {
        Err(Error::new(
            ErrorKind::NoResults,
            format!("No books found with a title of '{title}'"),
        ))
    } else {
        Ok(docs)
    }
}
