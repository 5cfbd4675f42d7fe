use std::fmt;

/// Error types for linktag operations
///
/// None of these are raised by the annotation pipeline itself. Malformed URLs
/// and failed probes degrade to "untouched" and "unverified"; these variants
/// cover the surrounding plumbing (config, sources, client construction).
#[derive(Debug)]
pub enum LinktagError {
    /// IO error (reading sources, config files)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP client error
    Http(reqwest::Error),

    /// Regex compilation error
    Regex(regex::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Invalid argument error
    InvalidArgument(String),

    /// Upstream text source failed to produce a response
    Source(String),
}

impl fmt::Display for LinktagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinktagError::Io(err) => write!(f, "IO error: {err}"),
            LinktagError::Config(msg) => write!(f, "Configuration error: {msg}"),
            LinktagError::Http(err) => write!(f, "HTTP error: {err}"),
            LinktagError::Regex(err) => write!(f, "Regex error: {err}"),
            LinktagError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            LinktagError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            LinktagError::Source(msg) => write!(f, "Source error: {msg}"),
        }
    }
}

impl std::error::Error for LinktagError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LinktagError::Io(err) => Some(err),
            LinktagError::Http(err) => Some(err),
            LinktagError::Regex(err) => Some(err),
            LinktagError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LinktagError {
    fn from(err: std::io::Error) -> Self {
        LinktagError::Io(err)
    }
}

impl From<reqwest::Error> for LinktagError {
    fn from(err: reqwest::Error) -> Self {
        LinktagError::Http(err)
    }
}

impl From<regex::Error> for LinktagError {
    fn from(err: regex::Error) -> Self {
        LinktagError::Regex(err)
    }
}

impl From<toml::de::Error> for LinktagError {
    fn from(err: toml::de::Error) -> Self {
        LinktagError::TomlParsing(err)
    }
}

/// Type alias for Results using LinktagError
pub type Result<T> = std::result::Result<T, LinktagError>;
