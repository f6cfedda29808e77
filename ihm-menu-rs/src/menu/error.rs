/// Errors that can occur when working with the menu model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuError {
    /// Field index is out of bounds (must be < MENU_FIELDS.len()).
    InvalidFieldIndex,
}
