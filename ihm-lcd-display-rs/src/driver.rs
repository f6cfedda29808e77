//! Core LCD driver speaking the HD44780 two-byte I2C framing.
//!
//! [`LcdDriver`] manages the display lifecycle: construction without bus
//! traffic, explicit async initialisation, then command and character
//! writes. Screen layouts built on top of these primitives live in
//! `screens.rs`.

use core::fmt::Write as _;

use embedded_hal_async::delay::DelayNs;
use heapless::String;

use crate::commands::{
    CHAR_VOLTS, CLEAR_DISPLAY, CONTROL_COMMAND, CONTROL_DATA, DISPLAY_ON, DISPLAY_ON_BLINK,
    INIT_SEQUENCE, LINE_TWO_FLAG, POWER_ON_DELAY_MS, RETURN_HOME,
};
use crate::config::LcdConfig;
use crate::error::LcdError;
use crate::transport::BusTransport;

/// Largest value [`LcdDriver::print_int()`] can show.
pub const MAX_PRINTABLE: u8 = 99;

/// Async driver for a 2-line character LCD behind a [`BusTransport`].
///
/// # Lifecycle
///
/// 1. [`LcdDriver::new()`] — constructs the driver without any bus traffic.
/// 2. [`LcdDriver::init()`] — sends the controller power-on sequence.
/// 3. Write text, numbers and whole screens.
///
/// Every write goes straight to the controller; no copy of the display
/// contents is kept in RAM.
///
/// # Example
///
/// ```no_run
/// use ihm_lcd_display_rs::{I2cTransport, LcdConfig, LcdDriver, LcdError};
///
/// # async fn example(
/// #     i2c: impl embedded_hal_async::i2c::I2c,
/// #     delay: impl embedded_hal_async::delay::DelayNs,
/// # ) -> Result<(), LcdError> {
/// let mut lcd = LcdDriver::new(I2cTransport::new(i2c), delay, LcdConfig::default());
/// lcd.init().await?;
/// lcd.transmit_str("Hello").await?;
/// lcd.print_int(42).await?; // "42V"
/// # Ok(())
/// # }
/// ```
pub struct LcdDriver<T, D> {
    transport: T,
    delay: D,
    config: LcdConfig,
    /// Set to `true` after a successful `init()` call.
    initialized: bool,
}

impl<T, D> LcdDriver<T, D>
where
    T: BusTransport,
    D: DelayNs,
{
    /// Construct an uninitialised driver.
    ///
    /// No bus traffic is generated. You **must** call [`init()`](Self::init)
    /// before any display operations.
    ///
    /// # Arguments
    /// * `transport` — bus the display sits on (takes ownership).
    /// * `delay` — source of the controller settle delays.
    /// * `config` — address, timeout and timings.
    pub fn new(transport: T, delay: D, config: LcdConfig) -> Self {
        Self {
            transport,
            delay,
            config,
            initialized: false,
        }
    }

    /// Run the controller power-on sequence.
    ///
    /// Waits [`POWER_ON_DELAY_MS`], then sends [`INIT_SEQUENCE`] in order,
    /// each instruction followed by its delay. The final settle uses
    /// [`LcdConfig::init_settle_ms`]. The ordering and the delay proportions
    /// are imposed by the controller; the display will not come up reliably
    /// otherwise.
    ///
    /// Can be called again to re-initialise a display that was power-cycled.
    ///
    /// # Errors
    ///
    /// Returns [`LcdError::Transfer`] if any instruction cannot be sent; the
    /// driver is then left uninitialised.
    pub async fn init(&mut self) -> Result<(), LcdError> {
        self.initialized = false;
        self.settle(POWER_ON_DELAY_MS).await;

        let last = INIT_SEQUENCE.len() - 1;
        for (i, &(command, settle_ms)) in INIT_SEQUENCE.iter().enumerate() {
            if let Err(e) = self.transmit_command(command).await {
                #[cfg(feature = "defmt")]
                defmt::warn!("LCD init failed at step {}: {}", i, e);
                return Err(e);
            }
            let settle_ms = if i == last {
                self.config.init_settle_ms
            } else {
                settle_ms
            };
            self.settle(settle_ms).await;
        }

        self.initialized = true;

        #[cfg(feature = "defmt")]
        defmt::info!("LCD initialised at {=u8:#x}", self.config.address);

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Raw frames
    // -----------------------------------------------------------------------

    /// Send one controller instruction as `[0x80, command]`.
    ///
    /// No settle delay is added and no initialisation is required, since
    /// this is what [`init()`](Self::init) itself is built from.
    pub async fn transmit_command(&mut self, command: u8) -> Result<(), LcdError> {
        self.send([CONTROL_COMMAND, command]).await
    }

    /// Write one character code at the cursor as `[0x40, c]`, then wait
    /// [`LcdConfig::char_settle_ms`].
    pub async fn transmit_char(&mut self, c: u8) -> Result<(), LcdError> {
        self.ensure_initialized()?;
        self.write_data(c).await
    }

    /// Write character codes one frame at a time.
    ///
    /// Bytes are sent as-is, so codes from the controller's character ROM
    /// above 0x7F (such as [`CHAR_BULLET`](crate::commands::CHAR_BULLET))
    /// can be used.
    pub async fn transmit_bytes(&mut self, bytes: &[u8]) -> Result<(), LcdError> {
        self.ensure_initialized()?;
        for &b in bytes {
            self.write_data(b).await?;
        }
        Ok(())
    }

    /// Write an ASCII string.
    pub async fn transmit_str(&mut self, text: &str) -> Result<(), LcdError> {
        self.transmit_bytes(text.as_bytes()).await
    }

    // -----------------------------------------------------------------------
    // Cursor and display control
    // -----------------------------------------------------------------------

    /// Move the cursor.
    ///
    /// `row` is the address within a line; `column == 1` selects the second
    /// line by setting [`LINE_TWO_FLAG`], any other value the first line.
    /// The resulting address byte is sent as an instruction, followed by
    /// [`LcdConfig::cursor_settle_ms`].
    pub async fn set_cursor(&mut self, row: u8, column: u8) -> Result<(), LcdError> {
        self.ensure_initialized()?;
        let address = if column == 1 { LINE_TWO_FLAG | row } else { row };
        let settle_ms = self.config.cursor_settle_ms;
        self.command_then_settle(address, settle_ms).await
    }

    /// Return the cursor to the top-left corner.
    pub async fn home(&mut self) -> Result<(), LcdError> {
        self.ensure_initialized()?;
        let settle_ms = self.config.command_settle_ms;
        self.command_then_settle(RETURN_HOME, settle_ms).await
    }

    /// Erase the whole display.
    pub async fn clear(&mut self) -> Result<(), LcdError> {
        self.ensure_initialized()?;
        let settle_ms = self.config.command_settle_ms;
        self.command_then_settle(CLEAR_DISPLAY, settle_ms).await
    }

    /// Switch cursor blinking on or off. The display stays on.
    pub async fn cursor_blink(&mut self, enabled: bool) -> Result<(), LcdError> {
        self.ensure_initialized()?;
        let command = if enabled { DISPLAY_ON_BLINK } else { DISPLAY_ON };
        let settle_ms = self.config.command_settle_ms;
        self.command_then_settle(command, settle_ms).await
    }

    // -----------------------------------------------------------------------
    // Numbers
    // -----------------------------------------------------------------------

    /// Print a voltage as two digits and a `V` suffix: `5` → `"05V"`.
    ///
    /// # Errors
    ///
    /// Returns [`LcdError::ValueOutOfRange`] without touching the bus if
    /// `value` is above [`MAX_PRINTABLE`].
    pub async fn print_int(&mut self, value: u8) -> Result<(), LcdError> {
        self.ensure_initialized()?;
        let text = format_volts(value)?;
        for &b in text.as_bytes() {
            self.write_data(b).await?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Check whether the display has been successfully initialised.
    ///
    /// No bus traffic is generated.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The configuration the driver was built with.
    pub fn config(&self) -> &LcdConfig {
        &self.config
    }

    /// Consume the driver and return the transport and delay.
    pub fn release(self) -> (T, D) {
        (self.transport, self.delay)
    }

    #[cfg(test)]
    pub(crate) fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    // -----------------------------------------------------------------------
    // Crate-internal primitives
    // -----------------------------------------------------------------------

    pub(crate) fn ensure_initialized(&self) -> Result<(), LcdError> {
        if self.initialized {
            Ok(())
        } else {
            Err(LcdError::NotInitialized)
        }
    }

    pub(crate) async fn command_then_settle(
        &mut self,
        command: u8,
        settle_ms: u32,
    ) -> Result<(), LcdError> {
        self.transmit_command(command).await?;
        self.settle(settle_ms).await;
        Ok(())
    }

    async fn write_data(&mut self, c: u8) -> Result<(), LcdError> {
        self.send([CONTROL_DATA, c]).await?;
        let settle_ms = self.config.char_settle_ms;
        self.settle(settle_ms).await;
        Ok(())
    }

    async fn send(&mut self, frame: [u8; 2]) -> Result<(), LcdError> {
        self.transport
            .transmit(self.config.address, &frame, self.config.transfer_timeout)
            .await
            .map_err(LcdError::from)
    }

    async fn settle(&mut self, ms: u32) {
        if ms > 0 {
            self.delay.delay_ms(ms).await;
        }
    }
}

/// Reject values that do not fit in two digits.
pub(crate) fn check_printable(value: u8) -> Result<(), LcdError> {
    if value > MAX_PRINTABLE {
        #[cfg(feature = "defmt")]
        defmt::warn!("{} does not fit in two digits", value);
        return Err(LcdError::ValueOutOfRange(value));
    }
    Ok(())
}

/// `42` → `"42V"`.
fn format_volts(value: u8) -> Result<String<3>, LcdError> {
    check_printable(value)?;
    let mut text: String<3> = String::new();
    write!(text, "{:02}{}", value, CHAR_VOLTS as char)
        .map_err(|_| LcdError::ValueOutOfRange(value))?;
    Ok(text)
}
