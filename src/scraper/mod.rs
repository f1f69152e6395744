pub(crate) mod name_match;
pub(crate) mod profile;
pub(crate) mod session;
pub(crate) mod stats;

use std::time::Duration;

pub(crate) use ::scraper::Html;
use ::scraper::{ElementRef, Selector};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::debug;

use crate::error::{GtError, Result};

/// Host:port of the game server whose stats are tracked.
const GAME_SERVER: &str = "arma.badcompanypmc.com:2312";

/// Themed "current players" fragment for [`GAME_SERVER`]. The query string
/// must stay byte-identical for the rendering endpoint to serve the same
/// markup the cell selectors expect.
pub(crate) const WIDGET_URL: &str = "https://cache.gametracker.com/components/html0/?host=arma.badcompanypmc.com:2312&bgColor=121212&fontColor=CCCCCC&titleBgColor=242424&titleColor=4EFF05&borderColor=242424&linkColor=4EFF05&borderLinkColor=9C9C9C&showMap=0&currentPlayersHeight=100&showCurrPlayers=1&topPlayersHeight=100&showTopPlayers=0&showBlogs=0&width=270";

/// Per-request timeout; a dead endpoint fails the cycle instead of hanging.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Characters escaped when a nickname is embedded as a URL path segment.
/// Spaces become `%20` (never `+`) and clan-tag brackets are escaped too;
/// the unreserved `- . _ *` stay literal.
const NICKNAME_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'*');

pub(crate) fn encode_nickname(nickname: &str) -> String {
    utf8_percent_encode(nickname, NICKNAME_SEGMENT).to_string()
}

/// Canonical profile page URL for `nickname` on [`GAME_SERVER`].
pub(crate) fn profile_url(nickname: &str) -> String {
    format!(
        "https://www.gametracker.com/player/{}/{GAME_SERVER}/",
        encode_nickname(nickname)
    )
}

/// Fetch a URL and parse the response body as an HTML document.
pub(crate) async fn get_document(client: &reqwest::Client, url: &str) -> Result<Html> {
    debug!(url, "fetching page");

    let response = client
        .get(url)
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await
        .map_err(|e| GtError::Http {
            url: url.to_owned(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(GtError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    let body = response.text().await.map_err(|e| GtError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })?;

    Ok(Html::parse_document(&body))
}

/// Extract trimmed text content from the first element matching `selector`
/// inside `element`. Returns an empty string if nothing matches.
pub(crate) fn select_text(element: &ElementRef, selector: &Selector) -> String {
    element
        .select(selector)
        .next()
        .and_then(|d| d.text().map(|t| t.trim()).find(|t| !t.is_empty()))
        .unwrap_or_default()
        .trim()
        .replace(['\n', '\t'], "")
        .to_string()
}
