//! Hardware counter abstraction.
//!
//! The timer in encoder mode is the only peripheral the encoder driver
//! touches. It is reached through [`QuadratureCounter`] so the driver can be
//! bound to any timer instance, or to a fake in tests.

/// Counter value written on reset.
///
/// Half of the 16-bit range, so the count can move a long way in either
/// direction before wrapping.
pub const COUNTER_MIDPOINT: u16 = 32767;

/// A 16-bit hardware quadrature counter.
///
/// Implementations on a real STM32 timer never fail and should use
/// [`core::convert::Infallible`] as the error type. Counters reached over a
/// bus can report their transport error instead.
pub trait QuadratureCounter {
    /// Error reported by the counter peripheral.
    type Error;

    /// Enable counting on all encoder channels.
    fn start(&mut self) -> Result<(), Self::Error>;

    /// Read the raw counter register.
    fn count(&mut self) -> Result<u16, Self::Error>;

    /// Overwrite the raw counter register.
    fn set_count(&mut self, value: u16) -> Result<(), Self::Error>;
}
