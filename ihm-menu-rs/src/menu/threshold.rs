/// Lowest threshold voltage that can be set.
pub const THRESHOLD_MIN: u8 = 0;

/// Highest threshold voltage that can be set (the LCD shows two digits).
pub const THRESHOLD_MAX: u8 = 99;

/// A threshold voltage in whole volts, always within
/// `[THRESHOLD_MIN, THRESHOLD_MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Threshold(u8);

impl Threshold {
    /// Create a threshold, clamping `volts` into range.
    pub fn new(volts: i32) -> Self {
        Self(volts.clamp(i32::from(THRESHOLD_MIN), i32::from(THRESHOLD_MAX)) as u8)
    }

    /// Value in whole volts.
    pub fn volts(self) -> u8 {
        self.0
    }

    /// Replace the value, clamping into range.
    pub fn set(&mut self, volts: i32) {
        *self = Self::new(volts);
    }

    /// Move by an encoder delta, clamping at the range ends.
    pub fn adjust(&mut self, delta: i32) {
        *self = Self::new(i32::from(self.0).saturating_add(delta));
    }
}

/// The minimum and maximum thresholds, kept ordered (`min <= max`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThresholdPair {
    min: Threshold,
    max: Threshold,
}

impl Default for ThresholdPair {
    fn default() -> Self {
        Self {
            min: Threshold(THRESHOLD_MIN),
            max: Threshold(THRESHOLD_MAX),
        }
    }
}

impl ThresholdPair {
    /// Create a pair. If `min > max` the two are swapped.
    pub fn new(min: i32, max: i32) -> Self {
        let (a, b) = (Threshold::new(min), Threshold::new(max));
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Lower threshold.
    pub fn min(&self) -> Threshold {
        self.min
    }

    /// Upper threshold.
    pub fn max(&self) -> Threshold {
        self.max
    }

    /// Set the minimum, clamped to `[THRESHOLD_MIN, max]`.
    pub fn set_min(&mut self, volts: i32) {
        self.min = Threshold::new(volts).min(self.max);
    }

    /// Set the maximum, clamped to `[min, THRESHOLD_MAX]`.
    pub fn set_max(&mut self, volts: i32) {
        self.max = Threshold::new(volts).max(self.min);
    }

    /// Move the minimum by an encoder delta.
    pub fn adjust_min(&mut self, delta: i32) {
        self.set_min(i32::from(self.min.volts()).saturating_add(delta));
    }

    /// Move the maximum by an encoder delta.
    pub fn adjust_max(&mut self, delta: i32) {
        self.set_max(i32::from(self.max.volts()).saturating_add(delta));
    }

    /// `true` if `volts` lies within `[min, max]`.
    pub fn contains(&self, volts: u8) -> bool {
        (self.min.volts()..=self.max.volts()).contains(&volts)
    }
}
