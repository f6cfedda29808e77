//! Error types for the LCD driver.

use core::fmt;

/// Failure of a single bus transfer.
///
/// Produced by [`BusTransport`](crate::BusTransport) implementations. The
/// variants are deliberately coarse so that any two-wire bus can map its own
/// error codes onto them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferError {
    /// The transfer did not complete within the allowed time.
    Timeout,
    /// The display controller did not acknowledge its address or a byte.
    NoAcknowledge,
    /// A transfer was already in progress, or bus arbitration was lost.
    Busy,
    /// Any other bus-level fault (bus error, overrun, ...).
    Bus,
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransferError::Timeout => write!(f, "transfer timed out"),
            TransferError::NoAcknowledge => write!(f, "display did not acknowledge"),
            TransferError::Busy => write!(f, "bus busy"),
            TransferError::Bus => write!(f, "bus error"),
        }
    }
}

/// Errors that can occur during LCD operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LcdError {
    /// A command or data frame could not be sent.
    Transfer(TransferError),
    /// The value cannot be shown as two digits (must be 0–99).
    ValueOutOfRange(u8),
    /// An operation was attempted before [`LcdDriver::init()`](crate::LcdDriver::init)
    /// was called.
    NotInitialized,
}

impl From<TransferError> for LcdError {
    fn from(e: TransferError) -> Self {
        LcdError::Transfer(e)
    }
}

impl fmt::Display for LcdError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LcdError::Transfer(e) => write!(f, "LCD transfer failed: {}", e),
            LcdError::ValueOutOfRange(v) => write!(f, "{} does not fit in two digits", v),
            LcdError::NotInitialized => write!(f, "LCD not initialised"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LcdError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            LcdError::Transfer(e) => defmt::write!(f, "Transfer error: {}", e),
            LcdError::ValueOutOfRange(v) => defmt::write!(f, "Value out of range: {}", v),
            LcdError::NotInitialized => defmt::write!(f, "Not initialized"),
        }
    }
}
