use super::model::{self, QueryResult, TargetsData};
use super::PrometheusApi;
use crate::core::config::CheckConfig;
use crate::error::{CheckError, Result};
use chrono::{DateTime, Utc};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::COOKIE;
use std::time::Duration;
use url::Url;

const QUERY_PATH: &str = "api/v1/query";
const TARGETS_PATH: &str = "api/v1/targets";

/// Blocking client for the Prometheus v1 HTTP API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base: Url,
    cookie: Option<String>,
    timeout: Option<Duration>,
}

impl HttpClient {
    pub fn new(config: &CheckConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("check_prometheus/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.insecure)
            .build()?;

        if config.insecure {
            log::debug!("TLS certificate verification is disabled");
        }

        Ok(Self {
            client,
            base: config.address.clone(),
            cookie: config.cookie_header(),
            timeout: config.timeout,
        })
    }

    /// Append `path` to the base address, keeping any path prefix it has
    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        let joined = format!("{}/{}", url.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        url
    }

    fn send(&self, request: RequestBuilder) -> Result<String> {
        let request = match &self.cookie {
            Some(cookie) => request.header(COOKIE, cookie),
            None => request,
        };

        let response = request.send().map_err(|e| self.request_error(e))?;
        let status = response.status();
        let body = response.text().map_err(|e| self.request_error(e))?;
        log::debug!("Response status {}, {} bytes", status, body.len());

        if !status.is_success() {
            return Err(model::error_from_body(&body)
                .unwrap_or_else(|| CheckError::api(format!("server returned HTTP {}", status))));
        }

        Ok(body)
    }

    fn request_error(&self, err: reqwest::Error) -> CheckError {
        match self.timeout {
            Some(timeout) if err.is_timeout() => CheckError::Timeout(timeout.as_secs()),
            _ => CheckError::Http(err),
        }
    }
}

impl PrometheusApi for HttpClient {
    fn query(&self, query: &str, at: DateTime<Utc>) -> Result<QueryResult> {
        let url = self.endpoint(QUERY_PATH);
        let time = format!("{:.3}", at.timestamp_millis() as f64 / 1000.0);
        log::debug!("Sending POST request to {} (query: {}, time: {})", url, query, time);

        let body = self.send(
            self.client
                .post(url)
                .form(&[("query", query), ("time", time.as_str())]),
        )?;

        model::decode_query_response(&body, query)
    }

    fn targets(&self) -> Result<TargetsData> {
        let url = self.endpoint(TARGETS_PATH);
        log::debug!("Sending GET request to {}", url);

        let body = self.send(self.client.get(url))?;
        model::decode_targets_response(&body)
    }
}
