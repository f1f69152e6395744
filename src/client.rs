use tracing::instrument;

use crate::error::FetchError;
use crate::model::StatsSnapshot;
use crate::scraper;

/// The main entry point for interacting with GameTracker.
///
/// `GameTrackerClient` wraps a [`reqwest::Client`] and exposes a single
/// operation to fetch the full statistics record for one nickname.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> Result<(), gametracker_scraper::FetchError> {
/// use gametracker_scraper::GameTrackerClient;
///
/// let client = GameTrackerClient::new();
/// let snapshot = client.get_player_stats("Corpse Decay [x]").await?;
/// println!("session score: {}", snapshot.stats.session_score);
/// # Ok(())
/// # }
/// ```
pub struct GameTrackerClient {
    http: reqwest::Client,
}

impl GameTrackerClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, headers, etc. The 15
    /// second request timeout is applied per request either way.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { http: client }
    }

    /// Fetch the complete statistics record for `nickname`.
    ///
    /// `nickname` must be the exact in-game name including any clan tag,
    /// already trimmed by the caller. Each call is an independent fetch:
    /// nothing is cached between calls, and the caller owns any refresh
    /// cadence.
    #[instrument(skip(self))]
    pub async fn get_player_stats(&self, nickname: &str) -> Result<StatsSnapshot, FetchError> {
        scraper::stats::get_player_stats(&self.http, nickname).await
    }
}

impl Default for GameTrackerClient {
    fn default() -> Self {
        Self::new()
    }
}
