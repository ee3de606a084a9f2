use serde::{Deserialize, Serialize};

/// One shrink mapping: the original URL and how many times it was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub url: String,
    pub hits: u64,
}

impl UrlRecord {
    /// A fresh record always starts with zero hits.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            hits: 0,
        }
    }
}

/// Body of `POST /shrink`.
#[derive(Debug, Deserialize)]
pub struct ShrinkRequest {
    /// A missing field shrinks the empty string.
    #[serde(rename = "longURL", default)]
    pub long_url: String,
}

/// Successful response of `POST /shrink`.
#[derive(Debug, Serialize)]
pub struct ShrinkResponse {
    /// Full short link, e.g. `https://sho.rt/-69cd`.
    #[serde(rename = "shrinkURL")]
    pub shrink_url: String,

    /// Bare four hex digit code.
    #[serde(rename = "shortCode")]
    pub short_code: String,
}
