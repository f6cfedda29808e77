//! Menu model for the measurement device front panel.
//!
//! The front panel has one rotary encoder and a two-line character LCD. The
//! main menu lists three fields:
//!
//! ```text
//! •Vmin=05V
//! •Vmax=42V •Aut
//! ```
//!
//! Turning the encoder moves the selection between the fields. Selecting a
//! threshold opens its adjustment screen, where rotation changes the value;
//! selecting the mode field toggles between automatic and manual operation.
//!
//! # Separation of concerns
//!
//! The encoder driver only reports a *rotation delta*. Which menu entry is
//! selected is derived here, by [`MenuSelector`], from the rotation
//! accumulated across many samples. The two must not be conflated: a single
//! delta says how far the knob moved since the last poll, not where the
//! cursor is.
//!
//! # `no_std` Compatibility
//!
//! No heap allocation; every type is `Copy` and fixed-size. The optional
//! `defmt` feature derives [`defmt::Format`] on the public types.

mod error;
mod field;
mod selector;
mod threshold;

pub use error::MenuError;
pub use field::{MenuField, OperatingMode, MENU_FIELDS};
pub use selector::{MenuSelector, SelectorConfig};
pub use threshold::{Threshold, ThresholdPair, THRESHOLD_MAX, THRESHOLD_MIN};
