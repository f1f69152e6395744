//! Scrape live and all-time player statistics from GameTracker.
//!
//! GameTracker renders a server's "current players" widget and per-player
//! profile pages as plain HTML. This crate fetches both documents for a
//! given nickname, walks them with CSS selectors and regular expressions,
//! and merges the results into a single fully populated
//! [`model::PlayerStats`] record.
//!
//! The entry point is [`GameTrackerClient`]:
//!
//! ```no_run
//! # async fn example() -> Result<(), gametracker_scraper::FetchError> {
//! use gametracker_scraper::GameTrackerClient;
//!
//! let client = GameTrackerClient::new();
//! let snapshot = client.get_player_stats("Corpse Decay [x]").await?;
//! println!(
//!     "{} points, rank {} (as of {})",
//!     snapshot.stats.session_score, snapshot.stats.rank, snapshot.fetched_at
//! );
//! # Ok(())
//! # }
//! ```

pub use client::GameTrackerClient;
pub use error::{FetchError, GtError, Result};

mod client;
pub mod error;
pub mod model;
pub(crate) mod scraper;
