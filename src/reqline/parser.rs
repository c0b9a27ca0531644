//! Keyword extraction and value interpretation.
//!
//! # Data Flow
//! ```text
//! raw text
//!     → lexer::validate_spacing
//!     → lexer::segment
//!     → lexer::check_order
//!     → per segment: split_segment → interpret
//!     → ParsedRequest
//! ```

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::reqline::error::{ReqlineError, ReqlineResult};
use crate::reqline::keyword::{HttpMethod, Keyword};
use crate::reqline::lexer;
use crate::reqline::query::compose_url;

/// JSON object decoded from a HEADERS, QUERY or BODY section.
pub type JsonMap = Map<String, Value>;

/// A fully validated reqline.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Option<JsonMap>,
    pub query: Option<JsonMap>,
    pub body: Option<JsonMap>,
}

impl ParsedRequest {
    /// Merge the query section into the URL and default absent sections.
    pub fn resolve(self) -> ResolvedRequest {
        let full_url = match &self.query {
            Some(query) => compose_url(&self.url, query),
            None => self.url,
        };
        ResolvedRequest {
            method: self.method,
            full_url,
            headers: self.headers.unwrap_or_default(),
            query: self.query.unwrap_or_default(),
            body: self.body.unwrap_or_default(),
        }
    }
}

/// The request actually dispatched.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ResolvedRequest {
    pub method: HttpMethod,
    pub full_url: String,
    pub headers: JsonMap,
    pub query: JsonMap,
    pub body: JsonMap,
}

/// Parse and validate a reqline. Fails on the first violation.
pub fn parse(raw: &str) -> ReqlineResult<ParsedRequest> {
    lexer::validate_spacing(raw)?;
    let segments = lexer::segment(raw);
    lexer::check_order(&segments)?;

    let mut builder = Builder::default();
    for segment in segments {
        let (keyword, value) = split_segment(segment)?;
        builder.accept(keyword, value)?;
    }
    builder.finish()
}

/// Split a segment into its keyword and trimmed, non-empty value.
pub fn split_segment(segment: &str) -> ReqlineResult<(Keyword, &str)> {
    let part = segment.trim();
    let space = part.find(' ').ok_or(ReqlineError::NoKeywordSpace)?;

    let value = part[space + 1..].trim();
    if value.is_empty() {
        return Err(ReqlineError::InvalidValue);
    }

    let keyword = part[..space].parse::<Keyword>()?;
    Ok((keyword, value))
}

/// Decode a section value into a plain JSON object.
pub fn parse_json_object(keyword: Keyword, value: &str) -> ReqlineResult<JsonMap> {
    match serde_json::from_str::<Value>(value) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(ReqlineError::InvalidJsonValue(keyword)),
    }
}

#[derive(Default)]
struct Builder {
    seen: HashSet<Keyword>,
    method: Option<HttpMethod>,
    url: Option<String>,
    headers: Option<JsonMap>,
    query: Option<JsonMap>,
    body: Option<JsonMap>,
}

impl Builder {
    fn accept(&mut self, keyword: Keyword, value: &str) -> ReqlineResult<()> {
        if !self.seen.insert(keyword) {
            return Err(ReqlineError::DuplicateKey);
        }

        match keyword {
            Keyword::Http => self.method = Some(value.parse()?),
            Keyword::Url => {
                // Prefix check only; `httpsfoo` is accepted.
                if !value.starts_with("https") {
                    return Err(ReqlineError::InvalidUrl);
                }
                self.url = Some(value.to_string());
            }
            Keyword::Headers => self.headers = Some(parse_json_object(keyword, value)?),
            Keyword::Query => self.query = Some(parse_json_object(keyword, value)?),
            Keyword::Body => self.body = Some(parse_json_object(keyword, value)?),
        }

        tracing::trace!(keyword = %keyword, "Accepted reqline section");
        Ok(())
    }

    fn finish(self) -> ReqlineResult<ParsedRequest> {
        Ok(ParsedRequest {
            method: self.method.ok_or(ReqlineError::HttpMissing)?,
            url: self.url.ok_or(ReqlineError::UrlMissing)?,
            headers: self.headers,
            query: self.query,
            body: self.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_get() {
        let parsed = parse("HTTP GET | URL https://api.example.com").unwrap();
        assert_eq!(parsed.method, HttpMethod::Get);
        assert_eq!(parsed.url, "https://api.example.com");
        assert!(parsed.headers.is_none());
        assert!(parsed.query.is_none());
        assert!(parsed.body.is_none());

        let resolved = parsed.resolve();
        assert_eq!(resolved.full_url, "https://api.example.com");
        assert!(resolved.headers.is_empty());
        assert!(resolved.query.is_empty());
        assert!(resolved.body.is_empty());
    }

    #[test]
    fn test_full_post() {
        let raw = r#"HTTP POST | URL https://api.example.com/users | HEADERS {"Content-Type": "application/json"} | BODY {"name": "Ada", "age": 36}"#;
        let parsed = parse(raw).unwrap();
        assert_eq!(parsed.method, HttpMethod::Post);
        assert_eq!(
            Value::Object(parsed.headers.clone().unwrap()),
            json!({"Content-Type": "application/json"})
        );
        assert_eq!(
            Value::Object(parsed.body.clone().unwrap()),
            json!({"name": "Ada", "age": 36})
        );
    }

    #[test]
    fn test_optional_sections_any_order() {
        let raw = r#"HTTP GET | URL https://a.io | BODY {} | QUERY {"x": "1"} | HEADERS {}"#;
        let resolved = parse(raw).unwrap().resolve();
        assert_eq!(resolved.full_url, "https://a.io?x=1");
    }

    #[test]
    fn test_query_composition() {
        let raw = r#"HTTP GET | URL https://api.example.com | QUERY {"a":"1","b":"2"}"#;
        let resolved = parse(raw).unwrap().resolve();
        assert_eq!(resolved.full_url, "https://api.example.com?a=1&b=2");
        assert_eq!(Value::Object(resolved.query), json!({"a": "1", "b": "2"}));
    }

    #[test]
    fn test_empty_query_section_appends_separator() {
        let resolved = parse("HTTP GET | URL https://a.io | QUERY {}").unwrap().resolve();
        assert_eq!(resolved.full_url, "https://a.io?");
        assert!(resolved.query.is_empty());
    }

    #[test]
    fn test_parsing_is_deterministic() {
        let raw = r#"HTTP GET | URL https://a.io/x?y=0 | QUERY {"k": "v w"}"#;
        let first = parse(raw).unwrap();
        let second = parse(raw).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.resolve().full_url, second.resolve().full_url);
    }

    #[test]
    fn test_spacing_errors() {
        assert_eq!(
            parse("HTTP GET|URL https://api.example.com"),
            Err(ReqlineError::InvalidSpacing)
        );
        assert_eq!(
            parse("HTTP GET  | URL https://api.example.com"),
            Err(ReqlineError::MultipleSpacingAroundPipe)
        );
    }

    #[test]
    fn test_duplicate_keywords() {
        assert_eq!(
            parse("HTTP GET | HTTP POST | URL https://api.example.com"),
            Err(ReqlineError::DuplicateKey)
        );
        assert_eq!(
            parse("HTTP GET | URL https://a.io | HTTP POST"),
            Err(ReqlineError::DuplicateKey)
        );
        assert_eq!(
            parse("HTTP GET | URL https://a.io | QUERY {} | QUERY {}"),
            Err(ReqlineError::DuplicateKey)
        );
    }

    #[test]
    fn test_second_segment_near_misses_are_url_missing() {
        assert_eq!(
            parse("HTTP GET | HTTPX foo | URL https://a.io"),
            Err(ReqlineError::UrlMissing)
        );
        assert_eq!(
            parse("HTTP GET | http POST | URL https://a.io"),
            Err(ReqlineError::UrlMissing)
        );
    }

    #[test]
    fn test_empty_json_section_still_counts_as_seen() {
        assert_eq!(
            parse("HTTP GET | URL https://a.io | HEADERS {} | HEADERS {\"a\": \"b\"}"),
            Err(ReqlineError::DuplicateKey)
        );
    }

    #[test]
    fn test_keyword_case() {
        assert_eq!(
            parse("http GET | URL https://api.example.com"),
            Err(ReqlineError::InvalidCase)
        );
        assert_eq!(
            parse("HTTP GET | URL https://a.io | headers {}"),
            Err(ReqlineError::InvalidCase)
        );
        assert_eq!(
            parse("HTTP GET | URL https://a.io | COOKIES {}"),
            Err(ReqlineError::InvalidKeyword)
        );
    }

    #[test]
    fn test_missing_required_keywords() {
        assert_eq!(parse("URL https://a.io | HTTP GET"), Err(ReqlineError::HttpMissing));
        assert_eq!(parse("HTTP GET"), Err(ReqlineError::UrlMissing));
        assert_eq!(
            parse("HTTP GET | QUERY {} | URL https://a.io"),
            Err(ReqlineError::UrlMissing)
        );
    }

    #[test]
    fn test_segment_shape_errors() {
        assert_eq!(parse("HTTPGET | URL https://a.io"), Err(ReqlineError::NoKeywordSpace));
        // Trailing whitespace is trimmed away before the keyword split.
        assert_eq!(
            parse("HTTP GET | URL https://a.io | BODY  "),
            Err(ReqlineError::NoKeywordSpace)
        );
    }

    #[test]
    fn test_method_and_url_values() {
        assert_eq!(
            parse("HTTP PUT | URL https://api.example.com"),
            Err(ReqlineError::InvalidHttpMethod)
        );
        assert_eq!(
            parse("HTTP get | URL https://api.example.com"),
            Err(ReqlineError::InvalidHttpMethod)
        );
        assert_eq!(
            parse("HTTP GET | URL http://api.example.com"),
            Err(ReqlineError::InvalidUrl)
        );
        // Only the literal prefix is checked.
        assert!(parse("HTTP GET | URL httpsfoo").is_ok());
    }

    #[test]
    fn test_json_sections_must_be_objects() {
        for value in ["[1,2]", "not json", "null", "42", "\"text\""] {
            let raw = format!("HTTP GET | URL https://a.io | HEADERS {value}");
            assert_eq!(
                parse(&raw),
                Err(ReqlineError::InvalidJsonValue(Keyword::Headers)),
                "value {value:?}"
            );
        }
    }

    #[test]
    fn test_split_segment() {
        assert_eq!(
            split_segment("  URL https://a.io  "),
            Ok((Keyword::Url, "https://a.io"))
        );
        assert_eq!(split_segment(" BODY"), Err(ReqlineError::NoKeywordSpace));
    }
}
