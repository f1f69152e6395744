use ::scraper::error::SelectorErrorKind;

/// All errors that can occur while retrieving or parsing GameTracker pages.
#[derive(thiserror::Error, Debug)]
pub enum GtError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),
}

impl<'a> From<SelectorErrorKind<'a>> for GtError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        GtError::Selector(err.to_string())
    }
}

/// A whole fetch cycle that failed, tagged with the nickname it was for.
///
/// No partial statistics survive a failed cycle; the caller either gets a
/// complete [`crate::model::StatsSnapshot`] or this.
#[derive(thiserror::Error, Debug)]
#[error("failed to fetch stats for '{nickname}': {source}")]
pub struct FetchError {
    /// The nickname the fetch was attempted for.
    pub nickname: String,
    /// Local wall-clock time (`HH:MM:SS`) when the failure was recorded.
    pub timestamp: String,
    #[source]
    pub source: GtError,
}

impl FetchError {
    /// Display-ready failure text: the nickname, a checklist of the likely
    /// causes, and the underlying technical error.
    pub fn user_message(&self) -> String {
        format!(
            "Failed to load stats for '{}'. Make sure:\n\
             1. You're using the exact in-game nickname and clan tag\n\
             2. The player exists on gametracker.com\n\
             3. Check your internet connection\n\n\
             Technical details: {}",
            self.nickname, self.source
        )
    }
}

pub type Result<T, E = GtError> = std::result::Result<T, E>;
