/// One row of the rating-difference curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsBand {
    pub lower: u32,
    /// Inclusive; `None` for the open-ended last band
    pub upper: Option<u32>,
    /// Points at stake for the higher-rated side
    pub high: u32,
    /// Points at stake for the lower-rated side
    pub low: u32,
}

impl PointsBand {
    const fn new(lower: u32, upper: Option<u32>, high: u32, low: u32) -> Self {
        Self { lower, upper, high, low }
    }

    pub fn contains(&self, diff: u32) -> bool {
        diff >= self.lower && self.upper.map_or(true, |upper| diff <= upper)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsAward {
    pub high: u32,
    pub low: u32,
}

pub const POINTS_TABLE: [PointsBand; 11] = [
    PointsBand::new(0, Some(12), 8, 8),
    PointsBand::new(13, Some(37), 7, 10),
    PointsBand::new(38, Some(62), 6, 13),
    PointsBand::new(63, Some(87), 5, 16),
    PointsBand::new(88, Some(112), 4, 20),
    PointsBand::new(113, Some(137), 3, 25),
    PointsBand::new(138, Some(162), 2, 30),
    PointsBand::new(163, Some(187), 2, 35),
    PointsBand::new(188, Some(212), 1, 40),
    PointsBand::new(213, Some(237), 1, 45),
    PointsBand::new(238, None, 0, 50),
];

/// Points for an absolute rating difference. Total over `u32`.
pub fn lookup_points(diff: u32) -> PointsAward {
    let band = POINTS_TABLE
        .iter()
        .find(|band| band.contains(diff))
        .unwrap_or(&POINTS_TABLE[POINTS_TABLE.len() - 1]);

    PointsAward {
        high: band.high,
        low: band.low,
    }
}
