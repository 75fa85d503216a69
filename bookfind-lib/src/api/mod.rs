use serde::de::DeserializeOwned;

pub(crate) mod open_library;

/// The HTTP collaborator used by the search functions.
///
/// Generic so that the network edge can be swapped for a mock in tests.
pub trait Client
where
    Self: Default,
{
    /// Sends a GET request to `url` and deserializes the JSON response body.
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned;
}

impl Client for reqwest::blocking::Client {
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        self.get(url)
            .send()
            .map_err(|e| Error::wrap(ErrorKind::Network, e))
            .and_then(|r| r.json().map_err(|e| Error::wrap(ErrorKind::Deserialize, e)))
    }
}

#[cfg(test)]
pub(crate) use test::{
    assert_url, impl_json_producer, MockClient, NetworkErrorProducer, Producer, URL_SINK,
};

use crate::{Error, ErrorKind};
