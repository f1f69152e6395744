use chrono::Local;
use tracing::{debug, instrument};

use crate::error::{FetchError, Result};
use crate::model::{PlayerStats, StatsSnapshot};
use crate::scraper::{self, profile, session};

const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// Run one full fetch cycle for `nickname`.
///
/// Both documents are fetched fresh on every call. Any retrieval failure
/// aborts the whole cycle as a single [`FetchError`]; a player missing
/// from the online list is not a failure (their session score is `"0"`).
#[instrument(skip(client))]
pub(crate) async fn get_player_stats(
    client: &reqwest::Client,
    nickname: &str,
) -> Result<StatsSnapshot, FetchError> {
    fetch_stats(client, scraper::WIDGET_URL, &scraper::profile_url(nickname), nickname)
        .await
        .map_err(|source| FetchError {
            nickname: nickname.to_owned(),
            timestamp: timestamp(),
            source,
        })
}

async fn fetch_stats(
    client: &reqwest::Client,
    widget_url: &str,
    profile_url: &str,
    nickname: &str,
) -> Result<StatsSnapshot> {
    // Each document is dropped before the next await so the future stays Send.
    let session_score = {
        let document = scraper::get_document(client, widget_url).await?;
        session::locate_session_score(&document, nickname)?
    };

    let profile = {
        let document = scraper::get_document(client, profile_url).await?;
        profile::parse_profile(&document)
    };

    let (session_hours, session_remaining_minutes) = profile::split_minutes(profile.session_minutes);
    let (all_time_hours, all_time_remaining_minutes) =
        profile::split_minutes(profile.all_time_minutes);

    debug!(nickname, score = %session_score, rank = %profile.rank, "merged player stats");

    Ok(StatsSnapshot {
        stats: PlayerStats {
            session_score,
            session_minutes: profile.session_minutes,
            session_hours,
            session_remaining_minutes,
            session_score_per_minute: profile.session_score_per_minute,
            all_time_score: profile.all_time_score,
            all_time_minutes: profile.all_time_minutes,
            all_time_hours,
            all_time_remaining_minutes,
            all_time_score_per_minute: profile.all_time_score_per_minute,
            rank: profile.rank,
        },
        fetched_at: timestamp(),
    })
}

fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_format() {
        let ts = timestamp();
        assert_eq!(ts.len(), 8);
        let parts: Vec<&str> = ts.split(':').collect();
        assert_eq!(parts.len(), 3);
        for part in parts {
            assert_eq!(part.len(), 2);
            assert!(part.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_yields_single_fetch_error() {
        let client = reqwest::Client::new();
        // The .invalid TLD is guaranteed not to resolve.
        let result = fetch_stats(
            &client,
            "http://stats.invalid/widget",
            "http://stats.invalid/profile",
            "Ace",
        )
        .await;
        let source = result.unwrap_err();

        let err = FetchError {
            nickname: "Ace".to_string(),
            timestamp: timestamp(),
            source,
        };
        assert!(err.to_string().contains("Ace"));
        assert!(err.user_message().contains("Technical details:"));
    }
}
