//! The HTTP seam between the archive fetcher and the network.
//!
//! The fetcher only needs "GET this URL, give me the status and the bytes". Keeping that
//! behind [`HttpClient`] lets the pipeline run against canned responses, and leaves
//! timeouts, proxies and TLS to whoever builds the client.

use crate::weather_data::error::HttpError;
use bon::bon;
use log::debug;
use reqwest::StatusCode;
use std::borrow::Cow;
use std::time::Duration;

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A completed HTTP exchange. Non-2xx statuses are not errors at this level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The body decoded as UTF-8, with invalid sequences replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Blocking fetch-by-URL.
pub trait HttpClient {
    /// Performs a GET request and returns whatever the server answered.
    ///
    /// # Errors
    ///
    /// Only transport failures are errors; an HTTP error status is returned as a
    /// regular [`HttpResponse`].
    fn get(&self, url: &str) -> Result<HttpResponse, HttpError>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        (**self).get(url)
    }
}

/// [`HttpClient`] backed by `reqwest`'s blocking client.
#[derive(Debug, Clone)]
pub struct BlockingHttpClient {
    client: reqwest::blocking::Client,
}

#[bon]
impl BlockingHttpClient {
    /// Builds the client.
    ///
    /// # Arguments
    ///
    /// * `.timeout(Duration)`: Optional. Total time allowed per request. Defaults to
    ///   `reqwest`'s own default.
    /// * `.user_agent(String)`: Optional. Defaults to `smhi_weather/<version>`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::ClientBuild`] if the TLS backend cannot be initialised.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use smhi_weather::BlockingHttpClient;
    /// use std::time::Duration;
    ///
    /// let client = BlockingHttpClient::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()?;
    /// # Ok::<(), smhi_weather::HttpError>(())
    /// ```
    #[builder]
    pub fn new(
        timeout: Option<Duration>,
        #[builder(into)] user_agent: Option<String>,
    ) -> Result<Self, HttpError> {
        let mut builder = reqwest::blocking::Client::builder()
            .user_agent(user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(HttpError::ClientBuild)?;
        Ok(Self { client })
    }
}

impl HttpClient for BlockingHttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| HttpError::NetworkRequest(url.to_string(), e))?;
        let status = response.status();
        let body = response
            .bytes()
            .map_err(|e| HttpError::Body(url.to_string(), e))?;
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
