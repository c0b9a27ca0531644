//! Reqline keywords and HTTP methods.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::reqline::error::ReqlineError;

/// A section keyword. Keywords are case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Http,
    Url,
    Headers,
    Query,
    Body,
}

impl Keyword {
    /// Every keyword, required ones first.
    pub const ALL: [Keyword; 5] = [
        Keyword::Http,
        Keyword::Url,
        Keyword::Headers,
        Keyword::Query,
        Keyword::Body,
    ];

    /// The literal spelling of the keyword in a reqline.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Http => "HTTP",
            Keyword::Url => "URL",
            Keyword::Headers => "HEADERS",
            Keyword::Query => "QUERY",
            Keyword::Body => "BODY",
        }
    }

    /// Whether the keyword's value is a JSON object.
    pub fn is_json_section(self) -> bool {
        matches!(self, Keyword::Headers | Keyword::Query | Keyword::Body)
    }

    fn from_exact(token: &str) -> Option<Keyword> {
        Keyword::ALL.into_iter().find(|k| k.as_str() == token)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Keyword {
    type Err = ReqlineError;

    /// Exact match only; a known keyword in the wrong case is `InvalidCase`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if let Some(keyword) = Keyword::from_exact(token) {
            return Ok(keyword);
        }
        if Keyword::from_exact(&token.to_uppercase()).is_some() {
            Err(ReqlineError::InvalidCase)
        } else {
            Err(ReqlineError::InvalidKeyword)
        }
    }
}

/// Supported outbound methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ReqlineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            _ => Err(ReqlineError::InvalidHttpMethod),
        }
    }
}
