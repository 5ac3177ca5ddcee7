//! Typed read views over the raw response models.
//!
//! Each entity owns exactly one model plus a cheap handle to the client that
//! produced it. The handle is only there so an entity can construct nested
//! entities (e.g. a player's ranked-stat views); no property access ever
//! triggers another remote call. Computed properties (parsed dates, URLs,
//! enum mappings, child entities) are memoized on first read through
//! [`std::sync::OnceLock`], so repeated reads are idempotent and return the
//! identical value.

use url::Url;

mod god;
mod misc;
mod player;

/// Parses a URL field, treating empty and malformed values as absent.
pub(crate) fn parse_url(value: Option<&str>) -> Option<Url> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    Url::parse(value).ok()
}

pub use god::{God, GodStats};
pub use misc::{DataUsed, PatchInfo, ServerStatus};
pub use player::{
    Friend, MergedPlayer, Player, PlayerAccolades, PlayerCurrentStatus, PlayerNameSearchResult,
    PlayerRankedStats,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_url_rejects_empty_and_invalid() {
        assert_eq!(parse_url(None), None);
        assert_eq!(parse_url(Some("")), None);
        assert_eq!(parse_url(Some("   ")), None);
        assert!(parse_url(Some("https://example.com/avatar.png")).is_some());
    }
}
