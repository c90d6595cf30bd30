/// Half-open coordinate range `[begin, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Interval {
    pub begin: i32,
    pub end: i32,
}

impl Interval {
    pub fn new(begin: i32, end: i32) -> Self {
        Self { begin, end }
    }

    /// Number of positions covered; empty and inverted ranges have length 0.
    #[inline]
    pub fn length(&self) -> i32 {
        (self.end - self.begin).max(0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Number of positions shared with `other`
    #[inline]
    pub fn overlap(&self, other: &Interval) -> i32 {
        (self.end.min(other.end) - self.begin.max(other.begin)).max(0)
    }

    /// Fraction of this interval covered by `other`, 0 for an empty interval.
    #[inline]
    pub fn overlap_factor(&self, other: &Interval) -> f64 {
        let len = self.length();
        if len == 0 {
            return 0.0;
        }
        self.overlap(other) as f64 / len as f64
    }

    pub fn contains(&self, pos: i32) -> bool {
        pos >= self.begin && pos < self.end
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}
