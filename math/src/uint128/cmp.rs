use super::U128;
use core::cmp::Ordering;

impl U128 {
    /// Three-way comparison returning `-1`, `0` or `1`.
    ///
    /// Only the sign is meaningful, so the result never depends on how far
    /// apart the operands are.
    #[inline]
    pub const fn compare(self, other: Self) -> i32 {
        if self.hi != other.hi {
            if self.hi < other.hi { -1 } else { 1 }
        } else if self.lo != other.lo {
            if self.lo < other.lo { -1 } else { 1 }
        } else {
            0
        }
    }
}

impl PartialOrd for U128 {
    #[inline]
    fn partial_cmp(&self, other: &U128) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for U128 {
    #[inline]
    fn cmp(&self, other: &U128) -> Ordering {
        // The high word decides unless it ties
        self.hi.cmp(&other.hi).then(self.lo.cmp(&other.lo))
    }
}

impl PartialEq<u64> for U128 {
    #[inline]
    fn eq(&self, other: &u64) -> bool {
        self.hi == 0 && self.lo == *other
    }
}

impl PartialOrd<u64> for U128 {
    #[inline]
    fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
        if self.hi != 0 { Some(Ordering::Greater) } else { self.lo.partial_cmp(other) }
    }
}

impl PartialEq<u128> for U128 {
    #[inline]
    fn eq(&self, other: &u128) -> bool {
        *self == U128::from_u128(*other)
    }
}

impl PartialOrd<u128> for U128 {
    #[inline]
    fn partial_cmp(&self, other: &u128) -> Option<Ordering> {
        Some(self.cmp(&U128::from_u128(*other)))
    }
}
