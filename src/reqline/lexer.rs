//! Delimiter-level checks over the raw reqline text.
//!
//! # Responsibilities
//! - Validate spacing around every `|` delimiter
//! - Split the text into ordered segments
//! - Enforce the fixed positions of the HTTP and URL declarations
//!
//! Scanning is byte-wise; `|` and space are ASCII so indices never land
//! inside a multi-byte character.

use crate::reqline::error::{ReqlineError, ReqlineResult};
use crate::reqline::keyword::Keyword;

/// Segment delimiter.
pub const PIPE: char = '|';

const PIPE_BYTE: u8 = b'|';
const SPACE: u8 = b' ';

/// Check that every pipe has exactly one space on each side.
///
/// A pipe at either end of the input, or without a space directly before and
/// after it, is `InvalidSpacing`. A second space two positions away on either
/// side is `MultipleSpacingAroundPipe`.
pub fn validate_spacing(raw: &str) -> ReqlineResult<()> {
    let bytes = raw.as_bytes();
    let len = bytes.len();

    for (i, _) in bytes.iter().enumerate().filter(|(_, b)| **b == PIPE_BYTE) {
        if i == 0 || i == len - 1 {
            return Err(ReqlineError::InvalidSpacing);
        }
        if bytes[i - 1] != SPACE || bytes[i + 1] != SPACE {
            return Err(ReqlineError::InvalidSpacing);
        }
        if (i >= 2 && bytes[i - 2] == SPACE) || (i + 2 < len && bytes[i + 2] == SPACE) {
            return Err(ReqlineError::MultipleSpacingAroundPipe);
        }
    }

    Ok(())
}

/// Split on the delimiter, keeping order. Segments are not trimmed.
pub fn segment(raw: &str) -> Vec<&str> {
    raw.split(PIPE).collect()
}

/// Enforce that segment 0 declares the method and segment 1 the URL.
///
/// The leading keyword is compared case-insensitively so that a
/// wrongly-cased keyword in the right position reaches the keyword check and
/// is reported as `InvalidCase`. A second segment whose keyword token is
/// exactly `HTTP` re-declares the method and is a duplicate, not a missing URL.
pub fn check_order(segments: &[&str]) -> ReqlineResult<()> {
    let first = segments.first().map(|s| s.trim()).unwrap_or_default();
    if !leads_with(first, Keyword::Http) {
        return Err(ReqlineError::HttpMissing);
    }

    let second = segments.get(1).map(|s| s.trim()).unwrap_or_default();
    if leads_with(second, Keyword::Url) {
        Ok(())
    } else if second.split(' ').next() == Some(Keyword::Http.as_str()) {
        Err(ReqlineError::DuplicateKey)
    } else {
        Err(ReqlineError::UrlMissing)
    }
}

fn leads_with(segment: &str, keyword: Keyword) -> bool {
    let expected = keyword.as_str();
    segment
        .get(..expected.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(expected))
}
