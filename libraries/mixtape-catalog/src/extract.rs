//! Ordered extraction strategies over raw page text.

use mixtape_core::types::SongDraft;
use tracing::debug;

/// One way of pulling songs out of a fetched page.
///
/// A strategy sees the raw page text and nothing else. It returns every
/// song it can find, or empty when the page does not carry its shape.
/// Failures stay inside the strategy (logged and swallowed) so the next
/// strategy still gets its turn.
pub(crate) struct Strategy<'a> {
    /// Name used in logs
    pub name: &'static str,

    /// The extraction itself
    pub run: &'a dyn Fn(&str) -> Vec<SongDraft>,
}

/// Run strategies in slice order and keep the first non-empty yield.
///
/// Later strategies are not evaluated once one yields. Returns empty
/// when every strategy comes back empty; raising the terminal error for
/// that is the caller's job.
pub(crate) fn first_non_empty(page: &str, strategies: &[Strategy<'_>]) -> Vec<SongDraft> {
    for strategy in strategies {
        let songs = (strategy.run)(page);
        debug!(
            strategy = strategy.name,
            count = songs.len(),
            "Extraction strategy finished"
        );
        if !songs.is_empty() {
            return songs;
        }
    }
    Vec::new()
}
