//! Error types for the encoder driver.

use core::fmt;

/// Errors that can occur when driving the rotary encoder.
#[derive(Debug, PartialEq, Eq)]
pub enum EncoderError<E> {
    /// Underlying counter peripheral error.
    Counter(E),
}

// Allow ergonomic `?` propagation from raw counter errors.
impl<E> From<E> for EncoderError<E> {
    fn from(error: E) -> Self {
        EncoderError::Counter(error)
    }
}

impl<E: fmt::Debug> fmt::Display for EncoderError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncoderError::Counter(e) => write!(f, "Counter error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for EncoderError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            EncoderError::Counter(e) => defmt::write!(f, "Counter error: {}", e),
        }
    }
}
