//! Async driver for HD44780-compatible character LCDs behind an I2C
//! controller, plus the front panel screens of the IHM board.
//!
//! This crate provides [`LcdDriver`], which frames every instruction and
//! character as a two-byte control/payload transfer, spaces them with the
//! settle times the controller needs, and guards every write behind a
//! completed [`init()`](LcdDriver::init). On top of the primitives it paints
//! the main menu, the two threshold adjustment screens and the manual mode
//! banner, and [`LcdDriver::show()`] picks the cheapest update between two
//! [`Screen`] snapshots.
//!
//! # Quick Start
//!
//! ```no_run
//! use ihm_lcd_display_rs::{I2cTransport, LcdConfig, LcdDriver, LcdError, Screen};
//! use ihm_menu::menu::{MenuField, ThresholdPair};
//!
//! # async fn example(
//! #     i2c: impl embedded_hal_async::i2c::I2c,
//! #     delay: impl embedded_hal_async::delay::DelayNs,
//! # ) -> Result<(), LcdError> {
//! let mut lcd = LcdDriver::new(I2cTransport::new(i2c), delay, LcdConfig::default());
//! lcd.init().await?;
//! lcd.cursor_blink(true).await?;
//!
//! let thresholds = ThresholdPair::new(5, 42);
//! lcd.show(None, &Screen::menu(&thresholds, MenuField::MinThreshold)).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via [`defmt`](https://docs.rs/defmt).

#![no_std]

pub mod commands;
mod config;
pub mod driver;
pub mod error;
pub mod layout;
pub mod screens;
pub mod transport;

#[cfg(test)]
mod testing;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use config::LcdConfig;
pub use driver::{LcdDriver, MAX_PRINTABLE};
pub use error::{LcdError, TransferError};
pub use layout::{Screen, ScreenChange};
pub use transport::{BusTransport, I2cTransport};
