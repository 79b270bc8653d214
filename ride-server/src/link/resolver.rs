//! Shared link resolution.

use std::time::Duration;

use reqwest::redirect::Policy;
use tracing::{debug, info};
use url::Url;

use super::error::LinkError;
use super::shape::{RouteEnds, extract_route_ends};

/// Hosts that serve shortened Google Maps links.
const DEFAULT_SHORTENER_HOSTS: [&str; 2] = ["goo.gl", "g.co"];

/// Default timeout for following a short link.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default redirect limit when following a short link.
const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Configuration for the link resolver.
#[derive(Debug, Clone)]
pub struct LinkConfig {
    /// Hosts whose links must be expanded before parsing.
    /// Subdomains match too (`goo.gl` covers `maps.app.goo.gl`).
    pub shortener_hosts: Vec<String>,
    /// Timeout for the whole expansion request, redirects included
    pub timeout_secs: u64,
    /// Maximum redirects to follow
    pub max_redirects: usize,
}

impl LinkConfig {
    /// Add a host to treat as a link shortener.
    pub fn with_shortener_host(mut self, host: impl Into<String>) -> Self {
        self.shortener_hosts.push(host.into());
        self
    }

    /// Set the expansion timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            shortener_hosts: DEFAULT_SHORTENER_HOSTS.iter().map(|h| h.to_string()).collect(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

/// Turns shared map links into origin/destination pairs.
///
/// Short links are expanded with a single redirect-following GET; every
/// other link is parsed without touching the network.
#[derive(Debug, Clone)]
pub struct LinkResolver {
    http: reqwest::Client,
    shortener_hosts: Vec<String>,
}

impl LinkResolver {
    /// Create a resolver with the given configuration.
    pub fn new(config: LinkConfig) -> Result<Self, LinkError> {
        let http = reqwest::Client::builder()
            .redirect(Policy::limited(config.max_redirects))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            shortener_hosts: config.shortener_hosts,
        })
    }

    /// Resolve a shared link into its route ends.
    ///
    /// Fails if the input is not a URL, a short link cannot be followed, or
    /// no known link shape yields both ends. A short link that cannot be
    /// expanded is an error rather than being parsed as-is, since the short
    /// form carries no route information.
    pub async fn resolve(&self, raw: &str) -> Result<RouteEnds, LinkError> {
        let mut url = Url::parse(raw.trim()).map_err(|e| LinkError::InvalidUrl {
            message: e.to_string(),
        })?;

        if self.is_shortened(&url) {
            url = self.expand(&url).await?;
        }

        let ends = extract_route_ends(&url).ok_or_else(|| LinkError::NoRouteEnds {
            url: url.to_string(),
        })?;

        info!(
            shape = %ends.shape,
            origin = %ends.origin,
            destination = %ends.destination,
            "resolved link"
        );
        Ok(ends)
    }

    /// Whether the URL is on a known link-shortener host.
    pub fn is_shortened(&self, url: &Url) -> bool {
        let Some(host) = url.host_str() else {
            return false;
        };
        self.shortener_hosts.iter().any(|h| {
            host.eq_ignore_ascii_case(h)
                || host
                    .to_ascii_lowercase()
                    .ends_with(&format!(".{}", h.to_ascii_lowercase()))
        })
    }

    /// Follow a short link's redirects and return the final URL.
    pub async fn expand(&self, url: &Url) -> Result<Url, LinkError> {
        debug!(url = %url, "expanding short link");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| LinkError::Expansion {
                url: url.to_string(),
                source,
            })?;

        let expanded = response.url().clone();
        debug!(from = %url, to = %expanded, status = %response.status(), "expanded short link");
        Ok(expanded)
    }
}
