//! Authenticated HTTP client for the locations and services API.

use crate::config::Config;
use crate::error::{Error, Result};
use reqwest::{Client, Method, Response, StatusCode};
use serde_json::Value;
use std::time::{Duration, Instant};

/// Largest page size the API accepts.
pub const MAX_PAGE_SIZE: u32 = 10_000;

/// Client carrying the resource URLs and a bearer token.
///
/// Built once per test run via [`ApiClient::authenticate`]; every request
/// after that reuses the token.
pub struct ApiClient {
    http: Client,
    token: String,
    locations_url: String,
    services_url: String,
}

impl ApiClient {
    /// Fetch an access token with the client-credentials grant and build
    /// a client around it.
    pub async fn authenticate(config: &Config) -> Result<Self> {
        let http = Client::new();
        let token = fetch_access_token(&http, config).await?;
        tracing::debug!("access token obtained");

        Ok(Self {
            http,
            token,
            locations_url: config.locations_url(),
            services_url: config.services_url(),
        })
    }

    pub fn locations_url(&self) -> &str {
        &self.locations_url
    }

    pub fn services_url(&self) -> &str {
        &self.services_url
    }

    /// Send a request with query parameters and the bearer token, and
    /// return the raw response. Status and body stay available to the
    /// caller; nothing is asserted here.
    pub async fn query(
        &self,
        url: &str,
        method: Method,
        params: &[(&str, &str)],
    ) -> Result<Response> {
        tracing::debug!(%url, %method, ?params, "request");
        let response = self
            .http
            .request(method, url)
            .query(params)
            .bearer_auth(&self.token)
            .send()
            .await?;
        Ok(response)
    }

    /// GET with query parameters, body parsed as JSON.
    pub async fn query_json(&self, url: &str, params: &[(&str, &str)]) -> Result<Value> {
        let body = self
            .query(url, Method::GET, params)
            .await?
            .json::<Value>()
            .await?;
        Ok(body)
    }

    /// GET a single resource by id, body parsed as JSON.
    pub async fn get_by_id(&self, url: &str, id: &str, params: &[(&str, &str)]) -> Result<Value> {
        let url = format!("{url}/{id}");
        self.query_json(&url, params).await
    }

    /// Status of a plain search request sent without any Authorization
    /// header.
    pub async fn unauthenticated_status(&self, url: &str) -> Result<StatusCode> {
        let response = self
            .http
            .get(url)
            .query(&[("q", "Oxford")])
            .send()
            .await?;
        Ok(response.status())
    }

    /// Wall-clock duration of one authenticated search query.
    pub async fn response_time(&self, url: &str) -> Result<Duration> {
        let started = Instant::now();
        self.query(url, Method::GET, &[("q", "Oxford")]).await?;
        Ok(started.elapsed())
    }

    /// The `links` object of a query returning more than one page.
    pub async fn links(&self, url: &str) -> Result<Value> {
        let body = self.query_json(url, &[("q", "Hall"), ("page[size]", "10")]).await?;
        Ok(body.get("links").cloned().unwrap_or(Value::Null))
    }

    /// Ids of buildings that have related services, deduplicated.
    pub async fn buildings_with_services(&self) -> Result<Vec<String>> {
        let max = MAX_PAGE_SIZE.to_string();
        let url = self.services_url.clone();
        let body = self.query_json(&url, &[("page[size]", &max)]).await?;

        let mut ids = Vec::new();
        if let Some(services) = body.get("data").and_then(Value::as_array) {
            for service in services {
                let location_id = service
                    .pointer("/relationships/locations/data/0/id")
                    .and_then(Value::as_str);
                if let Some(id) = location_id {
                    if !ids.iter().any(|existing| existing == id) {
                        ids.push(id.to_owned());
                    }
                }
            }
        }
        Ok(ids)
    }

    /// Whether a handshake capped at `max` succeeds against the API.
    ///
    /// Uses a one-off client; the shared pool keeps its default TLS
    /// configuration.
    pub async fn probe_tls(&self, url: &str, max: reqwest::tls::Version) -> bool {
        let client = match Client::builder().max_tls_version(max).build() {
            Ok(client) => client,
            Err(_) => return false,
        };

        client
            .get(url)
            .query(&[("q", "Oxford")])
            .bearer_auth(&self.token)
            .send()
            .await
            .is_ok()
    }
}

async fn fetch_access_token(http: &Client, config: &Config) -> Result<String> {
    let form = [
        ("client_id", config.client_id.as_str()),
        ("client_secret", config.client_secret.as_str()),
        ("grant_type", "client_credentials"),
    ];

    let response = http.post(config.token_url()).form(&form).send().await?;
    let status = response.status();
    let body: Value = response.json().await.map_err(Error::Http)?;

    body.get("access_token")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| Error::Token(format!("no access_token in {status} response")))
}
