use super::U128;

impl U128 {
    #[inline]
    pub const fn count_ones(self) -> u32 {
        self.lo.count_ones() + self.hi.count_ones()
    }

    #[inline]
    pub const fn count_zeros(self) -> u32 {
        Self::BITS - self.count_ones()
    }

    /// Returns 128 for zero.
    #[inline]
    pub const fn leading_zeros(self) -> u32 {
        if self.hi != 0 { self.hi.leading_zeros() } else { 64 + self.lo.leading_zeros() }
    }

    /// Returns 128 for zero.
    #[inline]
    pub const fn trailing_zeros(self) -> u32 {
        if self.lo != 0 { self.lo.trailing_zeros() } else { 64 + self.hi.trailing_zeros() }
    }

    /// Return the least number of bits needed to represent the number
    #[inline]
    pub const fn bits(self) -> u32 {
        Self::BITS - self.leading_zeros()
    }

    /// Tests bit `index`, counted from the least significant bit.
    #[inline]
    #[track_caller]
    pub const fn bit(self, index: u32) -> bool {
        assert!(index < Self::BITS, "bit index out of range");
        self.wrapping_shr(index).lo & 1 == 1
    }
}
