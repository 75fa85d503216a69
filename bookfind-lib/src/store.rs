use crate::Error;

/// A persistence collaborator holding a single favorites snapshot.
///
/// The shelf is stored whole: every write replaces the previous snapshot.
/// Abstracting the store behind a trait keeps the favorites logic testable
/// without a filesystem; the CLI contributes the file-backed implementation.
pub trait Store {
    /// Reads the stored snapshot, `None` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// An `Err` is returned when the underlying storage cannot be read.
    fn read(&mut self) -> Result<Option<String>, Error>;

    /// Replaces the stored snapshot with `contents`.
    ///
    /// # Errors
    ///
    /// An `Err` is returned when the underlying storage cannot be written.
    fn write(&mut self, contents: &str) -> Result<(), Error>;
}

/// In-memory [`Store`] for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: Option<String>,
}

impl MemoryStore {
    /// Creates a store that already holds a snapshot.
    #[must_use]
    pub fn with_contents<S: Into<String>>(contents: S) -> Self {
        Self {
            contents: Some(contents.into()),
        }
    }

    /// The current snapshot, `None` when nothing has been written.
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Store for MemoryStore {
    fn read(&mut self) -> Result<Option<String>, Error> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<(), Error> {
        self.contents = Some(contents.to_owned());
        Ok(())
    }
}
