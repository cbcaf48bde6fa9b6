use crate::error::{CheckError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::str::FromStr;

/// How the `-q` argument was encoded on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryEncoding {
    #[default]
    Raw,
    Base64,
    Url,
}

impl QueryEncoding {
    pub const NAMES: [&'static str; 3] = ["raw", "base64", "url"];

    pub fn decode(self, query: &str) -> Result<String> {
        match self {
            QueryEncoding::Raw => Ok(query.to_string()),
            QueryEncoding::Base64 => {
                let bytes = STANDARD.decode(query.trim()).map_err(|e| {
                    CheckError::query_decode(format!("base64 query decoding failed with error: {}", e))
                })?;
                String::from_utf8(bytes).map_err(|e| {
                    CheckError::query_decode(format!("base64 query decoding failed with error: {}", e))
                })
            }
            QueryEncoding::Url => url_unescape(query).map_err(|e| {
                CheckError::query_decode(format!("url query decoding failed with error: {}", e))
            }),
        }
    }
}

impl FromStr for QueryEncoding {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "raw" => Ok(QueryEncoding::Raw),
            "base64" => Ok(QueryEncoding::Base64),
            "url" => Ok(QueryEncoding::Url),
            _ => Err(CheckError::query_decode(
                "unknown query encoding, available values are 'raw', 'base64', 'url'",
            )),
        }
    }
}

/// Query-string unescaping: `+` is a space and every `%` needs two hex digits.
fn url_unescape(input: &str) -> std::result::Result<String, String> {
    let bytes = input.as_bytes();
    for (i, _) in input.match_indices('%') {
        let hex = bytes.get(i + 1..i + 3);
        if !hex.is_some_and(|h| h.iter().all(u8::is_ascii_hexdigit)) {
            let end = (i + 3).min(bytes.len());
            return Err(format!(
                "invalid URL escape {:?}",
                String::from_utf8_lossy(&bytes[i..end])
            ));
        }
    }

    urlencoding::decode(&input.replace('+', " "))
        .map(|decoded| decoded.into_owned())
        .map_err(|e| e.to_string())
}
