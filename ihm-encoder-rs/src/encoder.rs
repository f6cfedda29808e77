//! High-level interface for a rotary encoder on a hardware counter.
//!
//! [`RotaryEncoder`] wraps a [`QuadratureCounter`] with the sampling window
//! needed to turn an absolute, wrapping count into a rotation delta.

use crate::counter::{QuadratureCounter, COUNTER_MIDPOINT};
use crate::error::EncoderError;
use crate::state::EncoderState;

/// Rotary encoder bound to one hardware quadrature counter.
///
/// # Lifecycle
///
/// 1. [`RotaryEncoder::new()`] — takes ownership of the counter, no
///    register access.
/// 2. [`RotaryEncoder::start()`] — enables counting.
/// 3. [`RotaryEncoder::reset()`] — centres the counter (optional but usual).
/// 4. [`RotaryEncoder::sample()`] + [`RotaryEncoder::rotation_delta()`], or
///    [`RotaryEncoder::poll()`], once per iteration of the caller's loop.
///
/// # Example
///
/// ```no_run
/// use ihm_encoder::{EncoderError, QuadratureCounter, RotaryEncoder};
///
/// # fn example<C: QuadratureCounter>(counter: C) -> Result<(), EncoderError<C::Error>> {
/// let mut encoder = RotaryEncoder::new(counter);
/// encoder.start()?;
/// encoder.reset()?;
///
/// encoder.sample()?;
/// match encoder.rotation_delta() {
///     0 => {}
///     d if d > 0 => { /* clockwise */ }
///     _ => { /* counter-clockwise */ }
/// }
/// # Ok(())
/// # }
/// ```
pub struct RotaryEncoder<C> {
    counter: C,
    state: EncoderState,
}

impl<C> RotaryEncoder<C>
where
    C: QuadratureCounter,
{
    /// Create a new encoder driver.
    ///
    /// The tracked state starts at [`COUNTER_MIDPOINT`]. The hardware
    /// counter is not touched until [`start()`](Self::start) or
    /// [`reset()`](Self::reset).
    pub fn new(counter: C) -> Self {
        Self {
            counter,
            state: EncoderState::default(),
        }
    }

    /// Enable the quadrature counter on all channels.
    pub fn start(&mut self) -> Result<(), EncoderError<C::Error>> {
        self.counter.start()?;
        Ok(())
    }

    /// Centre both the hardware counter and the tracked samples.
    ///
    /// After this call `previous_count` and `current_count` both equal
    /// [`COUNTER_MIDPOINT`] and the next [`rotation_delta()`](Self::rotation_delta)
    /// is `0`.
    pub fn reset(&mut self) -> Result<(), EncoderError<C::Error>> {
        self.counter.set_count(COUNTER_MIDPOINT)?;
        self.state.reset();

        #[cfg(feature = "defmt")]
        defmt::debug!("encoder reset to {}", COUNTER_MIDPOINT);

        Ok(())
    }

    /// Read the hardware counter and slide the sample window.
    pub fn sample(&mut self) -> Result<(), EncoderError<C::Error>> {
        let count = self.counter.count()?;
        self.state.push(count);
        Ok(())
    }

    /// Signed rotation between the last two samples.
    ///
    /// Positive is clockwise, negative counter-clockwise, zero means the
    /// knob did not move. This does not read the hardware.
    pub fn rotation_delta(&self) -> i32 {
        self.state.rotation_delta()
    }

    /// [`sample()`](Self::sample) then [`rotation_delta()`](Self::rotation_delta).
    pub fn poll(&mut self) -> Result<i32, EncoderError<C::Error>> {
        self.sample()?;
        Ok(self.rotation_delta())
    }

    /// Snapshot of the tracked samples.
    pub fn state(&self) -> EncoderState {
        self.state
    }

    /// Mutable access to the underlying counter.
    pub fn counter_mut(&mut self) -> &mut C {
        &mut self.counter
    }

    /// Consume the driver and return the counter peripheral.
    pub fn free(self) -> C {
        self.counter
    }
}
