use std::future::Future;

use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::FetchError;

/// Capability to GET a path relative to the page origin and parse the body as JSON.
pub trait Fetch {
    fn get_json(&self, path: &str) -> impl Future<Output = Result<Value, FetchError>> + Send;
}

#[derive(Clone, Debug)]
pub struct HttpFetch {
    client: Client,
    origin: Url,
}

impl HttpFetch {
    pub fn new(origin: Url) -> Self {
        Self {
            client: Client::new(),
            origin,
        }
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    pub fn resolve(&self, path: &str) -> Result<Url, FetchError> {
        self.origin
            .join(path)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", path, e)))
    }
}

impl Fetch for HttpFetch {
    async fn get_json(&self, path: &str) -> Result<Value, FetchError> {
        let url = self.resolve(path)?;
        debug!(%url, "Fetching");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        // Like the browser fetch, a non-2xx status is not a failure by itself.
        if !status.is_success() {
            warn!(%url, %status, "Unsuccessful response status");
        }

        let body = response.bytes().await?;

        Ok(serde_json::from_slice(&body)?)
    }
}
