/// Application-wide constants to avoid magic values throughout the codebase.
///
/// Output format constants
pub mod output_formats {
    /// Annotated text, printed as-is
    pub const TEXT: &str = "text";
    /// JSON output format - annotated text plus per-URL verdicts
    pub const JSON: &str = "json";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 2] = [TEXT, JSON];
}

/// HTTP status code constants
pub mod http_status {
    /// First status code that counts as an error response
    pub const ERROR_THRESHOLD: u16 = 400;
}

/// Timeout constants
pub mod timeouts {
    /// Default probe timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;
    /// Maximum accepted timeout in seconds (1 hour)
    pub const MAX_TIMEOUT_SECONDS: u64 = 3600;
}

/// Annotation tags
pub mod tags {
    /// Prefix for URLs that answered with a non-error status
    pub const VERIFIED: &str = "[Verified]";
    /// Prefix for URLs that failed the probe
    pub const UNVERIFIED: &str = "[Unverified]";
}

/// URL discovery constants
pub mod patterns {
    /// Any run of non-whitespace starting with an http(s) scheme
    pub const CANDIDATE_URL: &str = r"https?://\S+";
    /// Characters stripped from the end of a candidate
    pub const TRAILING_PUNCTUATION: [char; 2] = ['.', ')'];
}

/// Upstream source constants
pub mod sources {
    /// Prefix of the text substituted for a failed upstream response
    pub const ERROR_PREFIX: &str = "Error occurred:";
    /// Argument value meaning "read standard input"
    pub const STDIN_MARKER: &str = "-";
}

/// Configuration file constants
pub mod config_files {
    /// Config file name looked up in the current and parent directories
    pub const FILE_NAME: &str = ".linktag.toml";
    /// How many parent directories to search
    pub const MAX_PARENT_DEPTH: usize = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_formats_constants() {
        assert_eq!(output_formats::TEXT, "text");
        assert_eq!(output_formats::JSON, "json");
        assert_eq!(output_formats::DEFAULT, "text");
        assert_eq!(output_formats::ALL.len(), 2);
    }

    #[test]
    fn test_timeout_constants() {
        assert_eq!(timeouts::DEFAULT_TIMEOUT_SECONDS, 5);
        assert!(timeouts::MAX_TIMEOUT_SECONDS > timeouts::DEFAULT_TIMEOUT_SECONDS);
    }

    #[test]
    fn test_http_status_constants() {
        assert_eq!(http_status::ERROR_THRESHOLD, 400);
    }

    #[test]
    fn test_tag_constants() {
        assert_eq!(tags::VERIFIED, "[Verified]");
        assert_eq!(tags::UNVERIFIED, "[Unverified]");
    }
}
