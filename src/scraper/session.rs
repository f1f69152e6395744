use ::scraper::{CaseSensitivity, Selector};
use tracing::debug;

use crate::error::Result;
use crate::scraper::{name_match, Html};

// The widget renders one player per three sibling cells, cycling through
// these classes with no row container around them.
const RANK_CELL: &str = "scrollable_on_c01";
const NAME_CELL: &str = "scrollable_on_c02";
const SCORE_CELL: &str = "scrollable_on_c03";

/// One reconstructed row of the "current players" widget.
#[derive(Debug, Clone)]
struct PlayerRow {
    rank: String,
    name: String,
    score: String,
}

/// Find the live session score of `nickname` in the players widget.
///
/// Returns the score cell text of the first reconstructed row whose name
/// matches, or `"0"` when the player is not in the online list. An absent
/// player is not an error.
pub(crate) fn locate_session_score(document: &Html, nickname: &str) -> Result<String> {
    if let Some(row) = collect_rows(document)?
        .into_iter()
        .find(|row| name_match::names_match(&row.name, nickname))
    {
        debug!(rank = %row.rank, score = %row.score, "player found in online list");
        return Ok(row.score);
    }
    debug!(nickname, "player not in online list");
    Ok("0".to_string())
}

/// Re-group the flat cell sequence into rows.
///
/// A rank cell marks a row boundary and discards any half-built row. A row
/// is committed only on its score cell and only once a name is pending, so
/// the terminal row needs no trailing boundary and an incomplete tail is
/// never compared.
fn collect_rows(document: &Html) -> Result<Vec<PlayerRow>> {
    let cell_selector = Selector::parse(
        "div.scrollable_on_c01, div.scrollable_on_c02, div.scrollable_on_c03",
    )?;
    let link_selector = Selector::parse("a")?;

    let mut rows = vec![];
    let mut rank = String::new();
    let mut name: Option<String> = None;

    for cell in document.select(&cell_selector) {
        let element = cell.value();
        if element.has_class(RANK_CELL, CaseSensitivity::CaseSensitive) {
            rank = cell.text().collect::<String>().trim().to_string();
            name = None;
        } else if element.has_class(NAME_CELL, CaseSensitivity::CaseSensitive) {
            name = cell
                .select(&link_selector)
                .next()
                .map(|a| a.text().collect::<String>().trim().to_string());
        } else if element.has_class(SCORE_CELL, CaseSensitivity::CaseSensitive) {
            if let Some(name) = name.take() {
                rows.push(PlayerRow {
                    rank: std::mem::take(&mut rank),
                    name,
                    score: cell.text().collect::<String>().trim().to_string(),
                });
            }
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(rows: &[(&str, &str, &str)]) -> Html {
        let cells = rows
            .iter()
            .map(|(rank, name, score)| {
                format!(
                    "<div class=\"scrollable_on_c01\">{rank}</div>\
                     <div class=\"scrollable_on_c02\"><a href=\"#\">{name}</a></div>\
                     <div class=\"scrollable_on_c03\">{score}</div>"
                )
            })
            .collect::<String>();
        Html::parse_document(&format!("<html><body>{cells}</body></html>"))
    }

    #[test]
    fn test_matching_row_returns_its_score() {
        let document = widget(&[("1", "Alpha", "120"), ("2", "Ace", "85"), ("3", "Bravo", "40")]);
        assert_eq!(locate_session_score(&document, "Ace").unwrap(), "85");
    }

    #[test]
    fn test_terminal_row_without_trailing_boundary() {
        // The last row ends the document; there is no rank cell after it.
        let document = widget(&[("1", "Alpha", "120"), ("2", "Ace", "85")]);
        assert_eq!(locate_session_score(&document, "ace").unwrap(), "85");
    }

    #[test]
    fn test_absent_player_yields_zero() {
        let document = widget(&[("1", "Alpha", "120"), ("2", "Bravo", "40")]);
        assert_eq!(locate_session_score(&document, "Ace").unwrap(), "0");
    }

    #[test]
    fn test_empty_widget_yields_zero() {
        let document = Html::parse_document("<html><body></body></html>");
        assert_eq!(locate_session_score(&document, "Ace").unwrap(), "0");
    }

    #[test]
    fn test_first_matching_row_wins() {
        let document = widget(&[("1", "Ace", "120"), ("2", "Ace", "85")]);
        assert_eq!(locate_session_score(&document, "Ace").unwrap(), "120");
    }

    #[test]
    fn test_name_normalization_applies_to_rows() {
        let document = widget(&[("1", "Corpse  Decay [x]", "77")]);
        assert_eq!(
            locate_session_score(&document, "corpse decay[X]").unwrap(),
            "77"
        );
    }

    #[test]
    fn test_name_cell_without_anchor_is_skipped() {
        let html = "<html><body>\
            <div class=\"scrollable_on_c01\">1</div>\
            <div class=\"scrollable_on_c02\">Ace</div>\
            <div class=\"scrollable_on_c03\">85</div>\
            </body></html>";
        let document = Html::parse_document(html);
        assert_eq!(locate_session_score(&document, "Ace").unwrap(), "0");
    }

    #[test]
    fn test_incomplete_trailing_row_is_never_compared() {
        // Name cell with no score cell after it.
        let html = "<html><body>\
            <div class=\"scrollable_on_c01\">1</div>\
            <div class=\"scrollable_on_c02\"><a href=\"#\">Ace</a></div>\
            </body></html>";
        let document = Html::parse_document(html);
        assert_eq!(locate_session_score(&document, "Ace").unwrap(), "0");
    }
}
