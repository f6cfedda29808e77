use crate::counter::COUNTER_MIDPOINT;

/// Two consecutive raw counter samples.
///
/// `previous_count` always holds the value `current_count` had before the
/// most recent [`push`](Self::push). Both fields are private so that only
/// sampling and reset can move the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderState {
    previous_count: u16,
    current_count: u16,
}

impl Default for EncoderState {
    fn default() -> Self {
        Self::at(COUNTER_MIDPOINT)
    }
}

impl EncoderState {
    /// A state at rest on `count`: both samples equal.
    pub const fn at(count: u16) -> Self {
        Self {
            previous_count: count,
            current_count: count,
        }
    }

    /// The sample taken before the most recent one.
    pub fn previous_count(&self) -> u16 {
        self.previous_count
    }

    /// The most recent sample.
    pub fn current_count(&self) -> u16 {
        self.current_count
    }

    /// Record a fresh sample, shifting the current one into `previous`.
    pub fn push(&mut self, count: u16) {
        self.previous_count = self.current_count;
        self.current_count = count;
    }

    /// Put both samples back on [`COUNTER_MIDPOINT`].
    pub fn reset(&mut self) {
        *self = Self::at(COUNTER_MIDPOINT);
    }

    /// Signed movement between the two samples.
    ///
    /// Uses 16-bit wrapping arithmetic, so a counter crossing 0 or 65535
    /// yields the short-way delta (`0 → 65535` is `-1`). Movements larger
    /// than ±32767 counts between two samples cannot be told apart from a
    /// wrap in the other direction.
    pub fn rotation_delta(&self) -> i32 {
        i32::from(self.current_count.wrapping_sub(self.previous_count) as i16)
    }
}
