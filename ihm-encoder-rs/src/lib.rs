//! Rotary encoder driver for a timer running in quadrature encoder mode.
//!
//! The STM32F4 general-purpose and advanced timers can count the edges of a
//! quadrature encoder in hardware. This crate turns that free-running 16-bit
//! counter into a signed rotation delta suitable for menu navigation.
//!
//! # Architecture
//!
//! - **[`QuadratureCounter`]** — the hardware seam. Platform code implements
//!   it on the timer peripheral (start, read and write the counter).
//! - **[`EncoderState`]** — the two-sample sliding window of raw counts.
//! - **[`RotaryEncoder`]** — owns a counter and a state, and exposes
//!   `start`, `reset`, `sample` and `rotation_delta`.
//!
//! Translating accumulated rotation into a selected menu entry is not done
//! here; see the `ihm-menu` crate.
//!
//! # Quick start
//!
//! ```no_run
//! use ihm_encoder::{EncoderError, QuadratureCounter, RotaryEncoder};
//!
//! # fn example<C: QuadratureCounter>(tim1: C) -> Result<(), EncoderError<C::Error>> {
//! // `tim1` is any `QuadratureCounter` implementation
//! let mut encoder = RotaryEncoder::new(tim1);
//! encoder.start()?;
//! encoder.reset()?;
//!
//! loop {
//!     let delta = encoder.poll()?;
//!     // feed `delta` to the menu
//! #   let _ = delta;
//! }
//! # }
//! ```
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on public types
//!   and debug logging.

#![no_std]

pub use counter::{QuadratureCounter, COUNTER_MIDPOINT};
pub use encoder::RotaryEncoder;
pub use error::EncoderError;
pub use state::EncoderState;

mod counter;
mod encoder;
mod error;
mod state;
