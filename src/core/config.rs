use crate::core::freshness::Freshness;
use crate::error::{CheckError, Result};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ADDRESS: &str = "http://localhost:9100";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_DATA_AGE_SECS: u64 = 300;

const MAX_COOKIE_VALUE_LENGTH: usize = 4096;

/// A `name=value` cookie sent with every API request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

impl FromStr for Cookie {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self> {
        if s.matches('=').count() != 1 {
            return Err(CheckError::invalid_cookie(
                "there should be exactly one '=' in the cookie definition",
            ));
        }
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| CheckError::invalid_cookie("missing '='"))?;

        if name.is_empty() {
            return Err(CheckError::invalid_cookie("cookie key cannot be empty"));
        }
        if value.is_empty() {
            return Err(CheckError::invalid_cookie("cookie value cannot be empty"));
        }
        if value.len() > MAX_COOKIE_VALUE_LENGTH {
            return Err(CheckError::invalid_cookie(format!(
                "cookie value cannot be longer than {} characters",
                MAX_COOKIE_VALUE_LENGTH
            )));
        }

        Ok(Cookie {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Settings shared by every check mode.
///
/// Built once from the command line and handed to the API client and the
/// freshness check.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub address: Url,
    /// Request deadline; `None` waits forever
    pub timeout: Option<Duration>,
    /// Maximum sample age; `None` disables the freshness check
    pub data_age: Option<Duration>,
    pub insecure: bool,
    pub cookies: Vec<Cookie>,
}

impl CheckConfig {
    pub fn new(address: &str) -> Result<Self> {
        Ok(Self {
            address: parse_address(address)?,
            timeout: non_zero_secs(DEFAULT_TIMEOUT_SECS),
            data_age: non_zero_secs(DEFAULT_DATA_AGE_SECS),
            insecure: false,
            cookies: Vec::new(),
        })
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = non_zero_secs(secs);
        self
    }

    pub fn with_data_age_secs(mut self, secs: u64) -> Self {
        self.data_age = non_zero_secs(secs);
        self
    }

    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    pub fn with_cookies(mut self, cookies: Vec<Cookie>) -> Self {
        self.cookies = cookies;
        self
    }

    pub fn freshness(&self) -> Freshness {
        Freshness::new(self.data_age)
    }

    /// `Cookie` header value, if any cookies are configured
    pub fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        Some(
            self.cookies
                .iter()
                .map(Cookie::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

fn non_zero_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

fn parse_address(address: &str) -> Result<Url> {
    let url = Url::parse(address.trim())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(CheckError::config(format!(
            "address must use http or https, got '{}'",
            scheme
        ))),
    }
}
