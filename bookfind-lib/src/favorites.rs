use log::{trace, warn};

use crate::{
    book::{BookId, BookRecord},
    store::Store,
    Error, ErrorKind,
};

/// The user's shelf of favorite books.
///
/// Ordered newest-addition first and unique by non-empty [`BookId`]: toggling
/// a book whose identity is already on the shelf removes every record with
/// that identity instead of adding a duplicate.
#[derive(Debug, Default, PartialEq)]
pub struct Favorites {
    books: Vec<BookRecord>,
}

impl Favorites {
    /// Creates an empty shelf.
    #[must_use]
    pub const fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Parses a shelf from its JSON snapshot, a plain array of records.
    ///
    /// # Errors
    ///
    /// An `Err` of kind [`ErrorKind::Deserialize`] is returned when the
    /// snapshot is not a valid record array.
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        serde_json::from_str(raw)
            .map(|books| Self { books })
            .map_err(|e| Error::wrap(ErrorKind::Deserialize, e))
    }

    /// Serializes the shelf to its JSON snapshot.
    ///
    /// # Errors
    ///
    /// An `Err` of kind [`ErrorKind::Deserialize`] is returned when
    /// serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(&self.books).map_err(|e| Error::wrap(ErrorKind::Deserialize, e))
    }

    /// Adds `book` to the front of the shelf, or removes it when a record
    /// with the same identity is already present.
    ///
    /// Returns `true` when the book was added and `false` when it was
    /// removed. The relative order of the other records is preserved either
    /// way.
    pub fn toggle(&mut self, book: BookRecord) -> bool {
        let id = book.id();
        let before = self.books.len();
        self.books.retain(|b| b.id() != id);

        if self.books.len() == before {
            trace!("Adding '{}' to the favorites shelf", book.title);
            self.books.insert(0, book);
            true
        } else {
            trace!("Removing '{}' from the favorites shelf", book.title);
            false
        }
    }

    /// Removes every book from the shelf.
    pub fn clear(&mut self) {
        self.books.clear();
    }

    /// Returns true when a record with the same identity as `book` is on the
    /// shelf.
    #[must_use]
    pub fn is_favorite(&self, book: &BookRecord) -> bool {
        let id = book.id();
        self.books.iter().any(|b| b.id() == id)
    }

    /// The shelf's records, newest addition first.
    pub fn iter(&self) -> impl Iterator<Item = &BookRecord> {
        self.books.iter()
    }

    /// Number of books on the shelf.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns true when the shelf holds no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// A [`Favorites`] shelf kept in sync with a persistence [`Store`].
///
/// The store is read once when loading and the full snapshot is rewritten
/// after every mutation. Store failures never propagate: the shelf stays
/// correct in memory for the session and the failure is logged, so a broken
/// store degrades favorites to session-only behaviour.
#[derive(Debug)]
pub struct FavoritesStore<S: Store> {
    favorites: Favorites,
    store: S,
}

impl<S: Store> FavoritesStore<S> {
    /// Loads the shelf from `store`, best-effort.
    ///
    /// A store that cannot be read, or a snapshot that cannot be parsed,
    /// yields an empty shelf with a warning rather than an error.
    pub fn load(mut store: S) -> Self {
        let favorites = match store.read() {
            Ok(Some(raw)) => Favorites::from_json(&raw).unwrap_or_else(|err| {
                warn!("Stored favorites could not be parsed, starting with none: {err}");
                Favorites::new()
            }),
            Ok(None) => Favorites::new(),
            Err(err) => {
                warn!("Stored favorites could not be read, starting with none: {err}");
                Favorites::new()
            }
        };

        Self { favorites, store }
    }

    /// Toggles `book` on the shelf and persists the result.
    ///
    /// Returns `true` when the book was added and `false` when removed.
    pub fn toggle(&mut self, book: BookRecord) -> bool {
        let added = self.favorites.toggle(book);
        self.persist();
        added
    }

    /// Empties the shelf and persists the empty snapshot.
    pub fn clear(&mut self) {
        self.favorites.clear();
        self.persist();
    }

    /// Returns true when a record with the same identity as `book` is on the
    /// shelf.
    #[must_use]
    pub fn is_favorite(&self, book: &BookRecord) -> bool {
        self.favorites.is_favorite(book)
    }

    /// The in-memory shelf.
    #[must_use]
    pub const fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    fn persist(&mut self) {
        let res = self
            .favorites
            .to_json()
            .and_then(|raw| self.store.write(&raw));

        if let Err(err) = res {
            warn!("Favorites could not be persisted and will last this session only: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    struct FailingStore;

    impl Store for FailingStore {
        fn read(&mut self) -> Result<Option<String>, Error> {
            Err(Error::new(ErrorKind::Storage, "read failure"))
        }

        fn write(&mut self, _contents: &str) -> Result<(), Error> {
            Err(Error::new(ErrorKind::Storage, "write failure"))
        }
    }

    fn book(title: &str, key: &str) -> BookRecord {
        BookRecord {
            title: title.to_owned(),
            key: Some(key.to_owned()),
            ..BookRecord::default()
        }
    }

    #[test]
    fn toggle_adds_newest_first() {
        let mut favorites = Favorites::new();

        assert!(favorites.toggle(book("Dune", "/works/OL1W")));
        assert!(favorites.toggle(book("Dune Messiah", "/works/OL2W")));

        let titles: Vec<_> = favorites.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(vec!["Dune Messiah", "Dune"], titles);
    }

    #[test]
    fn toggle_twice_is_a_membership_no_op() {
        let mut favorites = Favorites::new();
        favorites.toggle(book("Dune Messiah", "/works/OL2W"));

        assert!(favorites.toggle(book("Dune", "/works/OL1W")));
        assert!(!favorites.toggle(book("Dune", "/works/OL1W")));

        let titles: Vec<_> = favorites.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(vec!["Dune Messiah"], titles, "other members keep their order");
    }

    #[test]
    fn toggle_matches_on_identity_not_equality() {
        let mut favorites = Favorites::new();
        favorites.toggle(book("Dune", "/works/OL1W"));

        // same key, different title: still the same book
        assert!(!favorites.toggle(book("Dune (40th anniversary)", "/works/OL1W")));
        assert!(favorites.is_empty());
    }

    #[test]
    fn no_two_records_share_a_non_empty_identity() {
        let mut favorites = Favorites::new();
        favorites.toggle(book("Dune", "/works/OL1W"));
        favorites.toggle(book("Dune Messiah", "/works/OL2W"));
        favorites.toggle(book("Dune", "/works/OL1W"));
        favorites.toggle(book("Dune", "/works/OL1W"));

        let mut ids: Vec<_> = favorites
            .iter()
            .map(|b| b.id())
            .filter(|id| !id.as_str().is_empty())
            .collect();
        let total = ids.len();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();

        assert_eq!(total, ids.len());
    }

    #[test]
    fn is_favorite_matches_by_identity() {
        let mut favorites = Favorites::new();
        favorites.toggle(book("Dune", "/works/OL1W"));

        assert!(favorites.is_favorite(&book("Anything", "/works/OL1W")));
        assert!(!favorites.is_favorite(&book("Dune Messiah", "/works/OL2W")));
    }

    #[test]
    fn clear_empties_the_shelf() {
        let mut favorites = Favorites::new();
        favorites.toggle(book("Dune", "/works/OL1W"));

        favorites.clear();

        assert!(favorites.is_empty());
    }

    #[test]
    fn snapshot_round_trip_preserves_order_and_records() {
        let mut favorites = Favorites::new();
        favorites.toggle(book("Dune", "/works/OL1W"));
        favorites.toggle(book("Dune Messiah", "/works/OL2W"));

        let raw = favorites.to_json().unwrap();
        let reloaded = Favorites::from_json(&raw).unwrap();

        assert_eq!(favorites, reloaded);
    }

    #[test]
    fn malformed_snapshot_is_a_deserialize_error() {
        let err = Favorites::from_json("not json at all").unwrap_err();

        assert_eq!(ErrorKind::Deserialize, err.kind());
    }

    #[test]
    fn load_with_malformed_snapshot_starts_empty() {
        let store = MemoryStore::with_contents("{ definitely broken");

        let favorites = FavoritesStore::load(store);

        assert!(favorites.favorites().is_empty());
    }

    #[test]
    fn load_with_unreadable_store_starts_empty() {
        let favorites = FavoritesStore::load(FailingStore);

        assert!(favorites.favorites().is_empty());
    }

    #[test]
    fn every_mutation_persists_the_full_snapshot() {
        let mut favorites = FavoritesStore::load(MemoryStore::default());
        favorites.toggle(book("Dune", "/works/OL1W"));
        favorites.toggle(book("Dune Messiah", "/works/OL2W"));
        favorites.clear();
        favorites.toggle(book("Children of Dune", "/works/OL3W"));

        let FavoritesStore { store, .. } = favorites;

        let reloaded = FavoritesStore::load(store);
        let titles: Vec<_> = reloaded
            .favorites()
            .iter()
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(vec!["Children of Dune"], titles);
    }

    #[test]
    fn failed_persistence_keeps_the_shelf_in_memory() {
        let mut favorites = FavoritesStore::load(FailingStore);

        assert!(favorites.toggle(book("Dune", "/works/OL1W")));
        assert!(favorites.is_favorite(&book("Dune", "/works/OL1W")));
    }
}
