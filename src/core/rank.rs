//! Player rank derived from the share of available points found

/// Number of segments in the rank progress indicator
pub const RANK_SEGMENTS: u8 = 9;

/// Ascending (exclusive upper bound percent, label, rank index)
const RANK_TABLE: [(u32, &str, u8); 9] = [
    (2, "Beginner", 0),
    (5, "Good Start", 1),
    (8, "Moving Up", 2),
    (15, "Good", 3),
    (25, "Solid", 4),
    (40, "Nice", 5),
    (50, "Great", 6),
    (70, "Amazing", 7),
    (100, "Genius", 8),
];

const TOP_RANK: (&str, u8) = ("Queen Bee", 8);

/// Named rank tier and its progress index (0-8)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankStatus {
    pub label: &'static str,
    pub index: u8,
}

impl RankStatus {
    /// Map a whole percentage of total points to a rank
    ///
    /// # Examples
    /// ```
    /// use terminal_bee::core::RankStatus;
    ///
    /// assert_eq!(RankStatus::from_percent(0).label, "Beginner");
    /// assert_eq!(RankStatus::from_percent(24).label, "Solid");
    /// assert_eq!(RankStatus::from_percent(25).label, "Nice");
    /// assert_eq!(RankStatus::from_percent(100).label, "Queen Bee");
    /// ```
    #[must_use]
    pub fn from_percent(percent: u32) -> Self {
        let (label, index) = RANK_TABLE
            .iter()
            .find(|(limit, _, _)| percent < *limit)
            .map_or(TOP_RANK, |&(_, label, index)| (label, index));
        Self { label, index }
    }

    /// Rank for `current` points out of `total`
    ///
    /// A zero total is treated as one so an empty puzzle stays at "Beginner".
    #[must_use]
    pub fn from_points(current: u32, total: u32) -> Self {
        Self::from_percent(point_percent(current, total))
    }

    /// Filled and empty segments either side of the current-value marker
    #[must_use]
    pub const fn segments(self) -> (u8, u8) {
        (self.index, RANK_SEGMENTS - self.index - 1)
    }
}

/// `round(100 * current / max(total, 1))`, rounding halves to even
#[must_use]
pub fn point_percent(current: u32, total: u32) -> u32 {
    let ratio = 100.0 * f64::from(current) / f64::from(total.max(1));
    ratio.round_ties_even() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_from_table() {
        let cases = [
            (0, "Beginner", 0),
            (1, "Beginner", 0),
            (2, "Good Start", 1),
            (5, "Moving Up", 2),
            (8, "Good", 3),
            (15, "Solid", 4),
            (24, "Solid", 4),
            (25, "Nice", 5),
            (40, "Great", 6),
            (50, "Amazing", 7),
            (70, "Genius", 8),
            (99, "Genius", 8),
            (100, "Queen Bee", 8),
        ];
        for (percent, label, index) in cases {
            let status = RankStatus::from_percent(percent);
            assert_eq!(status.label, label, "percent {percent}");
            assert_eq!(status.index, index, "percent {percent}");
        }
    }

    #[test]
    fn thresholds_are_monotonic() {
        let mut last = 0;
        for percent in 0..=100 {
            let index = RankStatus::from_percent(percent).index;
            assert!(index >= last);
            last = index;
        }
    }

    #[test]
    fn zero_total_is_beginner() {
        assert_eq!(RankStatus::from_points(0, 0).label, "Beginner");
    }

    #[test]
    fn percent_rounds_halves_to_even() {
        // 1/40 = 2.5% rounds to 2
        assert_eq!(point_percent(1, 40), 2);
        // 3/40 = 7.5% rounds to 8
        assert_eq!(point_percent(3, 40), 8);
        assert_eq!(point_percent(40, 40), 100);
    }

    #[test]
    fn segments_fill_with_rank() {
        assert_eq!(RankStatus::from_percent(0).segments(), (0, 8));
        assert_eq!(RankStatus::from_percent(30).segments(), (5, 3));
        assert_eq!(RankStatus::from_percent(100).segments(), (8, 0));
    }
}
