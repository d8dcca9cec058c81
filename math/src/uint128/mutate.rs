use super::{U128, sign_mask};

impl U128 {
    #[inline]
    pub fn set(&mut self, value: U128) -> &mut Self {
        *self = value;
        self
    }

    #[inline]
    pub fn set_i64(&mut self, value: i64) -> &mut Self {
        self.lo = value as u64;
        self.hi = sign_mask(value < 0);
        self
    }

    #[inline]
    pub fn set_u64(&mut self, value: u64) -> &mut Self {
        self.lo = value;
        self.hi = 0;
        self
    }

    #[inline]
    pub fn set_i32(&mut self, value: i32) -> &mut Self {
        self.lo = value as i64 as u64;
        self.hi = sign_mask(value < 0);
        self
    }

    #[inline]
    pub fn set_u32(&mut self, value: u32) -> &mut Self {
        self.lo = value as u64;
        self.hi = 0;
        self
    }

    /// Adds one in place, wrapping at `MAX`.
    ///
    /// The low word wrapped exactly when its top bit went from set to clear.
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        let tmp = self.lo.wrapping_add(1);
        self.hi = self.hi.wrapping_add(((self.lo ^ tmp) & self.lo) >> 63);
        self.lo = tmp;
        self
    }

    /// Subtracts one in place, wrapping at `ZERO`.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        let tmp = self.lo.wrapping_sub(1);
        self.hi = self.hi.wrapping_sub(((self.lo ^ tmp) & tmp) >> 63);
        self.lo = tmp;
        self
    }
}
