use itertools::Itertools;

/// Whether a name scraped from a page and the queried nickname denote the
/// same player.
///
/// GameTracker is loose about spacing around clan tags, so the comparison
/// accepts any of, case-insensitively: exact equality, equality after
/// collapsing whitespace runs, or equality after also dropping `[`/`]` and
/// all whitespace. No partial or fuzzy matching beyond that.
pub(crate) fn names_match(found: &str, query: &str) -> bool {
    found.to_lowercase() == query.to_lowercase()
        || collapse_whitespace(found).to_lowercase() == collapse_whitespace(query).to_lowercase()
        || normalize(found) == normalize(query)
}

fn collapse_whitespace(name: &str) -> String {
    name.split_whitespace().join(" ")
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '[' && *c != ']')
        .collect::<String>()
        .to_lowercase()
}
