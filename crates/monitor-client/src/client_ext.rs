use crate::error::{Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::future::Future;
use url::Url;

pub trait ClientExt {
    fn fetch_json<T>(&self, url: Url) -> impl Future<Output = Result<T>> + Send
    where
        T: DeserializeOwned + Send;
}

/// Add-on methods for [`reqwest::Client`].
///
/// [`reqwest::Client`]: https://docs.rs/reqwest/latest/reqwest/struct.Client.html
impl ClientExt for Client {
    /// GET `url` and decode the JSON body; a non-2xx response becomes
    /// [`Error::Status`] carrying the numeric code.
    async fn fetch_json<T>(&self, url: Url) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        log::debug!("GET {url}");
        let response = self.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("GET {url} returned {status}");
            return Err(Error::Status(status.as_u16()));
        }

        // decode from the raw bytes so that a bad body is a `Decode` error, not a transport one
        let body = response.bytes().await?;
        let data: T = serde_json::from_slice(&body)?;
        Ok(data)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////

/// Source of the dashboard's JSON: "GET this path & query, decode the body".
///
/// Paths look like `/api/movers?watchlist=DAX`; the implementor decides
/// where they are sent.
pub trait Backend {
    fn get_json<T>(&self, path: &str) -> impl Future<Output = Result<T>> + Send
    where
        T: DeserializeOwned + Send;
}

/// The real backend, reached over HTTP.
///
/// Request paths are resolved below the base URL, so a backend mounted at
/// `https://host/monitor` is asked for `https://host/monitor/api/movers`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base: Url,
}

impl HttpBackend {
    pub fn new(client: Client, mut base: Url) -> Self {
        // without a trailing slash `join` would replace the last segment
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        HttpBackend { client, base }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Absolute URL of `path` under the base.
    pub fn url_for(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path.trim_start_matches('/'))?)
    }
}

impl Backend for HttpBackend {
    async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        let url = self.url_for(path)?;
        self.client.fetch_json(url).await
    }
}
