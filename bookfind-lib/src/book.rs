use serde::{Deserialize, Serialize};

const COVER_URL: &str = "https://covers.openlibrary.org/b/id/";
const NO_COVER_URL: &str = "https://placehold.co/200x300?text=No+Cover";

/// A book as returned by the search API and as stored on the favorites shelf.
///
/// Only the fields this crate uses are kept; everything else in a search
/// response document is ignored. All fields are optional in the API so each
/// one falls back to its default when absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Title of the book.
    #[serde(default)]
    pub title: String,
    /// Author names in the order the API lists them.
    #[serde(default)]
    pub author_name: Vec<String>,
    /// Year of the earliest known edition.
    #[serde(default)]
    pub first_publish_year: Option<i64>,
    /// Cover image identifier for the covers endpoint.
    #[serde(default)]
    pub cover_i: Option<u64>,
    /// Externally assigned stable identifier, e.g. `/works/OL893415W`.
    #[serde(default)]
    pub key: Option<String>,
}

impl BookRecord {
    /// Returns the identity used to compare this record against others.
    #[must_use]
    pub fn id(&self) -> BookId {
        BookId::of(self)
    }

    /// URL of the medium-size cover image, or a fixed placeholder when the
    /// record has no cover identifier.
    #[must_use]
    pub fn cover_url(&self) -> String {
        match self.cover_i {
            Some(cover) => format!("{COVER_URL}{cover}-M.jpg"),
            None => NO_COVER_URL.to_owned(),
        }
    }
}

/// Identity key deciding whether two [`BookRecord`]s are the same book.
///
/// The external `key` wins when present and non-empty, independent of title
/// and authors. Otherwise the identity is the title and the comma-joined
/// author list, `-` separated. A record with no key, no title and no authors
/// ends up with the empty identity; empty identities compare equal, so such
/// records collide with each other.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BookId(String);

impl BookId {
    /// Derives the identity of a [`BookRecord`].
    #[must_use]
    pub fn of(book: &BookRecord) -> Self {
        match &book.key {
            Some(key) if !key.is_empty() => Self(key.clone()),
            _ if book.title.is_empty() && book.author_name.is_empty() => Self(String::new()),
            _ => Self(format!("{}-{}", book.title, book.author_name.join(","))),
        }
    }

    /// The identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, authors: &[&str], key: Option<&str>) -> BookRecord {
        BookRecord {
            title: title.to_owned(),
            author_name: authors.iter().map(|&a| a.to_owned()).collect(),
            key: key.map(str::to_owned),
            ..BookRecord::default()
        }
    }

    #[test]
    fn key_wins_over_title_and_authors() {
        let a = book("Dune", &["Frank Herbert"], Some("/works/OL1W"));
        let b = book("Completely different", &[], Some("/works/OL1W"));

        assert_eq!("/works/OL1W", a.id().as_str());
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn empty_key_falls_back_to_title_and_authors() {
        let a = book("Dune", &["Frank Herbert"], Some(""));

        assert_eq!("Dune-Frank Herbert", a.id().as_str());
    }

    #[test]
    fn missing_key_joins_title_and_comma_separated_authors() {
        let a = book("House Atreides", &["Brian Herbert", "Kevin J. Anderson"], None);

        assert_eq!("House Atreides-Brian Herbert,Kevin J. Anderson", a.id().as_str());
    }

    #[test]
    fn no_authors_still_contributes_the_separator() {
        let a = book("Dune", &[], None);

        assert_eq!("Dune-", a.id().as_str());
    }

    #[test]
    fn fully_blank_records_share_the_empty_identity() {
        let a = BookRecord::default();
        let b = BookRecord {
            first_publish_year: Some(1965),
            ..BookRecord::default()
        };

        assert_eq!("", a.id().as_str());
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn cover_url_uses_cover_identifier_when_present() {
        let mut a = book("Dune", &["Frank Herbert"], None);
        a.cover_i = Some(11_481_354);

        assert_eq!(
            "https://covers.openlibrary.org/b/id/11481354-M.jpg",
            a.cover_url()
        );
    }

    #[test]
    fn cover_url_is_placeholder_without_cover_identifier() {
        let a = book("Dune", &["Frank Herbert"], None);

        assert_eq!("https://placehold.co/200x300?text=No+Cover", a.cover_url());
    }
}
