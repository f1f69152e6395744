use serde::Serialize;

/// Sentinel rank shown when the all-time ranking could not be read.
pub const RANK_UNAVAILABLE: &str = "not available";

/// A player's statistics, merged from the live players widget and the
/// profile page.
///
/// Every field is always populated: values that could not be resolved hold
/// `0`/`"0"` (or [`RANK_UNAVAILABLE`] for the rank) rather than being
/// absent. For both time spans,
/// `hours * 60 + remaining_minutes == minutes`.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerStats {
    /// Score accrued in the current session, `"0"` when the player is not
    /// in the online list.
    pub session_score: String,
    pub session_minutes: u32,
    pub session_hours: u32,
    pub session_remaining_minutes: u32,
    pub session_score_per_minute: String,
    pub all_time_score: String,
    pub all_time_minutes: u32,
    pub all_time_hours: u32,
    pub all_time_remaining_minutes: u32,
    pub all_time_score_per_minute: String,
    /// `"<place> out of <total>"`, or [`RANK_UNAVAILABLE`].
    pub rank: String,
}

/// A [`PlayerStats`] record plus the local wall-clock time it was taken at.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    pub stats: PlayerStats,
    /// `HH:MM:SS`, captured when the fetch completed.
    pub fetched_at: String,
}
