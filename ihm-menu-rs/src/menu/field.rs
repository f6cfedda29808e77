use super::error::MenuError;

/// A selectable entry of the main menu.
///
/// The discriminant is the entry's position in [`MENU_FIELDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuField {
    /// Minimum threshold voltage (`Vmin`).
    #[default]
    MinThreshold = 0,
    /// Maximum threshold voltage (`Vmax`).
    MaxThreshold = 1,
    /// Automatic / manual mode switch (`Aut`).
    Mode = 2,
}

/// Main menu entries in display order.
pub const MENU_FIELDS: [MenuField; 3] = [
    MenuField::MinThreshold,
    MenuField::MaxThreshold,
    MenuField::Mode,
];

impl MenuField {
    /// Position of this field in [`MENU_FIELDS`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a field by position.
    ///
    /// Returns [`MenuError::InvalidFieldIndex`] if `index >= MENU_FIELDS.len()`.
    pub fn from_index(index: usize) -> Result<Self, MenuError> {
        MENU_FIELDS
            .get(index)
            .copied()
            .ok_or(MenuError::InvalidFieldIndex)
    }
}

/// How the device decides when to act on its measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    /// Thresholds drive the device.
    #[default]
    Auto,
    /// The operator drives the device.
    Manual,
}

impl OperatingMode {
    /// The other mode.
    pub fn toggle(self) -> Self {
        match self {
            OperatingMode::Auto => OperatingMode::Manual,
            OperatingMode::Manual => OperatingMode::Auto,
        }
    }

    /// Returns `true` in [`OperatingMode::Manual`].
    pub fn is_manual(self) -> bool {
        self == OperatingMode::Manual
    }
}
