//! HTTP client for the balldontlie API.
//!
//! [`Client`] owns the immutable configuration (base URL, user agent,
//! timeout) and the transport. Every resource accessor funnels through
//! [`Client::new_request`], [`Client::execute`] and the response decoder.

use crate::core::response::{decode, Response, ResponseParts};
use crate::error::{Error, Result};
use crate::resources::{Game, Player, SeasonAverage, Service, Stat, Team};
use reqwest::header::{HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Method, Request};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;
use url::Url;


/// Public balldontlie host.
pub const DEFAULT_BASE_URL: &str = "https://www.balldontlie.io";

/// Upper bound on total request duration.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("balldontlie-rs/", env!("CARGO_PKG_VERSION"));

/// Typed balldontlie client.
///
/// Cheap to clone; clones share configuration and the connection pool.
///
/// ```rust,no_run
/// use balldontlie::{Client, GamesOptions};
///
/// # async fn example() -> balldontlie::Result<()> {
/// let client = Client::new("https://www.balldontlie.io")?;
///
/// let team = client.teams().get(14).await?.into_data();
/// println!("{}", team.full_name);
///
/// let games = client
///     .games()
///     .find(&GamesOptions {
///         seasons: vec![2019],
///         team_ids: vec![team.id],
///         ..Default::default()
///     })
///     .await?;
/// println!("{} games", games.data().data.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    http: reqwest::Client,
    base_url: Url,
    user_agent: HeaderValue,
    timeout: Duration,
}

impl Client {
    /// Client for `base_url` with default settings.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::builder().base_url(base_url).build()
    }

    /// Client for [`DEFAULT_BASE_URL`].
    pub fn default_host() -> Result<Self> {
        Self::new(DEFAULT_BASE_URL)
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    pub fn user_agent(&self) -> &str {
        self.inner.user_agent.to_str().unwrap_or_default()
    }

    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    pub fn games(&self) -> Service<Game> {
        Service::new(self.clone())
    }

    pub fn players(&self) -> Service<Player> {
        Service::new(self.clone())
    }

    pub fn teams(&self) -> Service<Team> {
        Service::new(self.clone())
    }

    pub fn stats(&self) -> Service<Stat> {
        Service::new(self.clone())
    }

    pub fn season_averages(&self) -> Service<SeasonAverage> {
        Service::new(self.clone())
    }

    /// Build a request for `path`, resolved against the base URL.
    ///
    /// Resolution follows URL reference rules: `/api/v1/teams` replaces the
    /// base path, a full URL replaces the base entirely.
    pub fn new_request(&self, method: Method, path: &str) -> Result<Request> {
        let url = self
            .inner
            .base_url
            .join(path)
            .map_err(|source| Error::InvalidPath {
                path: path.to_string(),
                source,
            })?;

        let mut request = Request::new(method, url);
        let headers = request.headers_mut();
        headers.insert(USER_AGENT, self.inner.user_agent.clone());
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(request)
    }

    /// Send `request` through the transport.
    ///
    /// The configured timeout covers the whole exchange, including reading
    /// the body.
    pub async fn execute(&self, mut request: Request) -> Result<reqwest::Response> {
        *request.timeout_mut() = Some(self.inner.timeout);

        trace!(method = %request.method(), url = %request.url(), "sending request");
        let response = self
            .inner
            .http
            .execute(request)
            .await
            .map_err(Error::Transport)?;
        trace!(status = %response.status(), url = %response.url(), "received response");

        Ok(response)
    }

    /// Send `request` and decode the response body into `T`.
    pub async fn send<T: DeserializeOwned>(&self, request: Request) -> Result<Response<T>> {
        let response = self.execute(request).await?;
        let parts = ResponseParts::from(&response);
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(source) => {
                return Err(Error::Body {
                    source,
                    response: Box::new(parts),
                });
            }
        };

        decode(parts, &body)
    }

    /// `GET` a path relative to the base URL.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Response<T>> {
        let request = self.new_request(Method::GET, path)?;
        self.send(request).await
    }
}

/// Builder for [`Client`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolute base URL of the service (required).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Total request duration bound; defaults to [`DEFAULT_TIMEOUT`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use an existing transport, e.g. to share its connection pool.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn build(self) -> Result<Client> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Config("base_url is required".to_string()))?;
        let base_url = Url::parse(&base_url).map_err(Error::InvalidBaseUrl)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "base_url {base_url} cannot be used as a base"
            )));
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let user_agent = HeaderValue::from_str(&user_agent)
            .map_err(|_| Error::Config(format!("invalid user agent {user_agent:?}")))?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|err| Error::Config(format!("failed to build HTTP client: {err}")))?,
        };

        Ok(Client {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                user_agent,
                timeout,
            }),
        })
    }
}
