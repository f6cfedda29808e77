use super::error::MenuError;
use super::field::{MenuField, MENU_FIELDS};

/// Configuration for a [`MenuSelector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SelectorConfig {
    /// Number of selectable entries. Default: 3 (the main menu).
    pub entries: usize,
    /// Encoder counts needed to move the selection by one entry. Default: 1.
    ///
    /// A detented knob on a timer counting both edges of both channels
    /// produces 4 counts per click.
    pub counts_per_step: u16,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            entries: MENU_FIELDS.len(),
            counts_per_step: 1,
        }
    }
}

/// Turns accumulated rotation into a selected menu index.
///
/// Rotation deltas from the encoder are summed; the selection advances one
/// entry per `counts_per_step` counts and wraps around in both directions.
///
/// # Examples
///
/// ```
/// use ihm_menu::menu::{MenuField, MenuSelector};
///
/// let mut selector = MenuSelector::default();
/// assert_eq!(selector.selected_field(), Ok(MenuField::MinThreshold));
///
/// selector.apply(1);
/// assert_eq!(selector.selected_field(), Ok(MenuField::MaxThreshold));
///
/// // Turning back past the first entry wraps to the last one.
/// selector.apply(-2);
/// assert_eq!(selector.selected_field(), Ok(MenuField::Mode));
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuSelector {
    entries: usize,
    counts_per_step: u16,
    /// Accumulated counts, always in `0..entries * counts_per_step`.
    accumulated: i64,
}

impl Default for MenuSelector {
    fn default() -> Self {
        Self::new(SelectorConfig::default())
    }
}

impl MenuSelector {
    /// Create a selector on entry 0.
    ///
    /// A zero `entries` or `counts_per_step` is treated as 1.
    pub fn new(config: SelectorConfig) -> Self {
        Self {
            entries: config.entries.max(1),
            counts_per_step: config.counts_per_step.max(1),
            accumulated: 0,
        }
    }

    /// Add a rotation delta and return the newly selected index.
    pub fn apply(&mut self, delta: i32) -> usize {
        self.accumulated = (self.accumulated + i64::from(delta)).rem_euclid(self.period());
        self.selected_index()
    }

    /// Index of the selected entry, in `0..entries`.
    pub fn selected_index(&self) -> usize {
        (self.accumulated / i64::from(self.counts_per_step)) as usize
    }

    /// The selected main menu field.
    ///
    /// Returns [`MenuError::InvalidFieldIndex`] when the selector was
    /// configured with more entries than [`MENU_FIELDS`] and the selection is
    /// past the end.
    pub fn selected_field(&self) -> Result<MenuField, MenuError> {
        MenuField::from_index(self.selected_index())
    }

    /// Jump to an entry, discarding any partial step.
    ///
    /// Returns [`MenuError::InvalidFieldIndex`] if `index >= entries`.
    pub fn select(&mut self, index: usize) -> Result<(), MenuError> {
        if index >= self.entries {
            return Err(MenuError::InvalidFieldIndex);
        }
        self.accumulated = index as i64 * i64::from(self.counts_per_step);
        Ok(())
    }

    /// Back to entry 0.
    pub fn reset(&mut self) {
        self.accumulated = 0;
    }

    /// Number of selectable entries.
    pub fn entries(&self) -> usize {
        self.entries
    }

    fn period(&self) -> i64 {
        self.entries as i64 * i64::from(self.counts_per_step)
    }
}
