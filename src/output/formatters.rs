//! Formatting utilities for terminal output

use crate::core::RankStatus;

/// Marker for one rank segment on the progress track
pub const TRACK_DOT: &str = "●";

/// Track on either side of the points marker
///
/// Reached segments go before the marker, the rest after it. Dots are joined
/// by two dashes with a single dash against the marker.
#[must_use]
pub fn rank_track(rank: RankStatus) -> (String, String) {
    let (filled, empty) = rank.segments();

    let mut before = vec![TRACK_DOT; usize::from(filled)].join("──");
    if filled > 0 {
        before.push('─');
    }

    let mut after = String::new();
    if empty > 0 {
        after.push('─');
    }
    after.push_str(&vec![TRACK_DOT; usize::from(empty)].join("──"));

    (before, after)
}

/// Share of total points as a whole percentage string
#[must_use]
pub fn percent_label(current: u32, total: u32) -> String {
    format!("{}%", crate::core::point_percent(current, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_at_beginner() {
        let (before, after) = rank_track(RankStatus::from_percent(0));
        assert_eq!(before, "");
        assert_eq!(after, "─●──●──●──●──●──●──●──●");
    }

    #[test]
    fn track_midway() {
        let (before, after) = rank_track(RankStatus::from_percent(10));
        assert_eq!(before, "●──●──●─");
        assert_eq!(after, "─●──●──●──●──●");
    }

    #[test]
    fn track_at_top() {
        let (before, after) = rank_track(RankStatus::from_percent(100));
        assert_eq!(before, "●──●──●──●──●──●──●──●─");
        assert_eq!(after, "");
    }

    #[test]
    fn percent_rounds_half_to_even() {
        assert_eq!(percent_label(1, 8), "12%");
        assert_eq!(percent_label(0, 0), "0%");
    }
}
