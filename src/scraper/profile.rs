use ::scraper::Selector;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::error::Result;
use crate::model::RANK_UNAVAILABLE;
use crate::scraper::{select_text, Html};

// Profile pages flatten each stats section into loose text, so fields are
// pulled out with patterns rather than selectors. Keep them together: a
// layout tweak on GameTracker's side should only ever touch this table.
static SCORE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Score:\s*(\d+)").unwrap());
static MINUTES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Minutes Played:\s*(\d+)").unwrap());
static SPM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Score per Minute:\s*([\d.]+)").unwrap());
static RANK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\d+ out of \d+)").unwrap());

const CURRENT_TITLE: &str = "CURRENT STATS";
const ALL_TIME_TITLE: &str = "ALL TIME STATS";

/// Raw values read off a profile page, before minute decomposition.
///
/// Each section fills in independently; a missing or malformed section
/// leaves its fields at these defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProfileStats {
    pub session_minutes: u32,
    pub session_score_per_minute: String,
    pub all_time_score: String,
    pub all_time_minutes: u32,
    pub all_time_score_per_minute: String,
    pub rank: String,
}

impl Default for ProfileStats {
    fn default() -> Self {
        Self {
            session_minutes: 0,
            session_score_per_minute: "0".to_string(),
            all_time_score: "0".to_string(),
            all_time_minutes: 0,
            all_time_score_per_minute: "0".to_string(),
            rank: RANK_UNAVAILABLE.to_string(),
        }
    }
}

/// Parse both stats sections of a profile page.
///
/// This stage prefers degraded output over failure: any internal error is
/// logged and an all-default record returned, so a broken profile page
/// never takes the session score down with it.
pub(crate) fn parse_profile(document: &Html) -> ProfileStats {
    match try_parse_profile(document) {
        Ok(stats) => stats,
        Err(e) => {
            warn!(error = %e, "profile page unparsable, using default stats");
            ProfileStats::default()
        }
    }
}

fn try_parse_profile(document: &Html) -> Result<ProfileStats> {
    let container_selector = Selector::parse("div.item_float_left")?;
    let title_selector = Selector::parse("div.section_title")?;

    let mut stats = ProfileStats::default();
    for container in document.select(&container_selector) {
        let title = select_text(&container, &title_selector);
        let text = container.text().collect::<String>();

        if title.contains(CURRENT_TITLE) {
            stats.session_minutes = capture_minutes(&text);
            stats.session_score_per_minute = capture_or(&SPM_RE, &text, "0");
        } else if title.contains(ALL_TIME_TITLE) {
            stats.all_time_score = capture_or(&SCORE_RE, &text, "0");
            stats.all_time_minutes = capture_minutes(&text);
            stats.all_time_score_per_minute = capture_or(&SPM_RE, &text, "0");
            stats.rank = capture_or(&RANK_RE, &text, RANK_UNAVAILABLE);
        }
        // Other sections (maps, aliases, ...) are ignored.
    }
    Ok(stats)
}

fn capture_or(re: &Regex, text: &str, default: &str) -> String {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| default.to_string())
}

fn capture_minutes(text: &str) -> u32 {
    capture_or(&MINUTES_RE, text, "0").parse().unwrap_or(0)
}

/// Decompose a minute total into whole hours and leftover minutes.
pub(crate) fn split_minutes(total: u32) -> (u32, u32) {
    (total / 60, total % 60)
}
