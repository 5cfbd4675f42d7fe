use serde::Serialize;
use std::fmt;

use crate::core::constants::{http_status, tags};

/// A URL-looking substring found in a response text.
///
/// `raw` is the full pattern match, which may carry sentence punctuation.
/// `url` is the cleaned form and always equals `text[start..end]` of the text
/// it was extracted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The matched substring, before cleanup
    pub raw: String,
    /// The matched substring with trailing punctuation removed
    pub url: String,
    /// Byte offset of the match in the source text
    pub start: usize,
    /// Byte offset one past the cleaned URL
    pub end: usize,
}

impl Candidate {
    /// Create a candidate from a raw match found at `start`.
    ///
    /// # Examples
    /// ```
    /// use linktag::core::types::Candidate;
    ///
    /// let candidate = Candidate::new("https://example.com/page).", 4);
    /// assert_eq!(candidate.url, "https://example.com/page");
    /// assert_eq!(candidate.start, 4);
    /// assert_eq!(candidate.end, 4 + "https://example.com/page".len());
    /// ```
    pub fn new(raw: &str, start: usize) -> Self {
        let url = crate::discovery::extractor::clean_candidate(raw);
        Self {
            raw: raw.to_string(),
            url: url.to_string(),
            start,
            end: start + url.len(),
        }
    }

    /// Get the cleaned URL as a string slice.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether cleanup removed anything from the raw match.
    pub fn was_trimmed(&self) -> bool {
        self.raw.len() != self.url.len()
    }
}

/// Liveness classification of a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Verified,
    Unverified,
}

impl Verdict {
    /// The tag written in front of the URL in annotated text.
    pub fn tag(&self) -> &'static str {
        match self {
            Verdict::Verified => tags::VERIFIED,
            Verdict::Unverified => tags::UNVERIFIED,
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, Verdict::Verified)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// What a liveness probe observed.
///
/// Exactly one of `status_code` and `description` is expected to be set:
/// a status when the server answered, a description of the transport fault
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeOutcome {
    pub status_code: Option<u16>,
    pub description: Option<String>,
}

impl ProbeOutcome {
    /// The server answered with `status_code`.
    pub fn status(status_code: u16) -> Self {
        Self {
            status_code: Some(status_code),
            description: None,
        }
    }

    /// The request never produced a response.
    pub fn failure(description: impl Into<String>) -> Self {
        Self {
            status_code: None,
            description: Some(description.into()),
        }
    }

    /// Any response below 400 counts as alive, redirects included.
    pub fn is_verified(&self) -> bool {
        matches!(self.status_code, Some(code) if code < http_status::ERROR_THRESHOLD)
    }

    pub fn verdict(&self) -> Verdict {
        if self.is_verified() {
            Verdict::Verified
        } else {
            Verdict::Unverified
        }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.status_code, &self.description) {
            (Some(code), _) => write!(f, "{code}"),
            (None, Some(desc)) => write!(f, "{desc}"),
            (None, None) => write!(f, "no response"),
        }
    }
}

/// Per-URL summary of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlReport {
    pub url: String,
    pub verdict: Verdict,
    pub status_code: Option<u16>,
    pub description: Option<String>,
    /// How many occurrences of the URL were tagged
    pub occurrences: usize,
}

impl UrlReport {
    pub fn new(url: String, outcome: &ProbeOutcome) -> Self {
        Self {
            url,
            verdict: outcome.verdict(),
            status_code: outcome.status_code,
            description: outcome.description.clone(),
            occurrences: 0,
        }
    }
}
