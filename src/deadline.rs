/// A point on the wrapping millisecond clock at which work is due.
///
/// Deadlines accumulate: `advance` moves the deadline forward by a period
/// instead of restarting it from the current time, so late iterations do not
/// shift the phase of later ones. Comparisons are made on the wrapped
/// difference, which stays correct across counter overflow as long as the
/// deadline is less than half the clock range (about 24 days) away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline(u32);

impl Deadline {
    pub const fn at(instant_ms: u32) -> Self {
        Deadline(instant_ms)
    }

    pub const fn instant(self) -> u32 {
        self.0
    }

    /// Has this deadline been reached at clock value `now_ms`?
    pub fn is_due(self, now_ms: u32) -> bool {
        (now_ms.wrapping_sub(self.0) as i32) >= 0
    }

    pub fn advance(&mut self, period_ms: u32) {
        self.0 = self.0.wrapping_add(period_ms);
    }

    pub fn reset(&mut self, now_ms: u32) {
        self.0 = now_ms;
    }
}
