//! Front panel screens.
//!
//! Each full screen clears the display and repaints every label. The
//! `refresh_*` variants only reposition the cursor and rewrite the number,
//! which keeps bus traffic down and avoids visible flicker while the knob
//! is being turned.
//!
//! ```text
//! Main menu             Threshold screen      Manual mode
//! ┌────────────────┐    ┌────────────────┐    ┌────────────────┐
//! │•Vmin=05V       │    │Selec Vmin:     │    │Mode manuel ON  │
//! │•Vmax=42V •Aut  │    │05V             │    │                │
//! └────────────────┘    └────────────────┘    └────────────────┘
//! ```

use embedded_hal_async::delay::DelayNs;
use ihm_menu::menu::MenuField;

use crate::commands::{CHAR_BULLET, SECOND_LINE};
use crate::driver::{check_printable, LcdDriver};
use crate::error::LcdError;
use crate::transport::BusTransport;

/// Main menu label in front of the minimum threshold.
pub const MIN_LABEL: &str = "Vmin=";
/// Main menu label in front of the maximum threshold.
pub const MAX_LABEL: &str = "Vmax=";
/// Main menu label of the mode field.
pub const MODE_LABEL: &str = "Aut";
/// First line of the minimum threshold screen.
pub const MIN_THRESHOLD_TITLE: &str = "Selec Vmin:";
/// First line of the maximum threshold screen.
pub const MAX_THRESHOLD_TITLE: &str = "Selec Vmax:";
/// Only line of the manual mode screen.
pub const MANUAL_MODE_BANNER: &str = "Mode manuel ON";

/// Cursor position `(row, column)` of the bullet in front of each menu
/// field, in [`set_cursor`](LcdDriver::set_cursor) coordinates.
pub fn bullet_position(field: MenuField) -> (u8, u8) {
    match field {
        MenuField::MinThreshold => (0, 0),
        MenuField::MaxThreshold => (0, 1),
        // "•Vmax=42V " is ten characters wide.
        MenuField::Mode => (10, 1),
    }
}

impl<T, D> LcdDriver<T, D>
where
    T: BusTransport,
    D: DelayNs,
{
    /// Paint the main menu and park the cursor on the `selected` field.
    ///
    /// Turn on [`cursor_blink`](Self::cursor_blink) to make the selection
    /// visible.
    ///
    /// # Errors
    ///
    /// [`LcdError::ValueOutOfRange`] if either threshold is above 99, checked
    /// before the display is cleared.
    pub async fn menu_screen(
        &mut self,
        vmin: u8,
        vmax: u8,
        selected: MenuField,
    ) -> Result<(), LcdError> {
        self.ensure_initialized()?;
        check_printable(vmin)?;
        check_printable(vmax)?;

        self.clear().await?;
        self.home().await?;
        self.transmit_char(CHAR_BULLET).await?;
        self.transmit_str(MIN_LABEL).await?;
        self.print_int(vmin).await?;

        self.transmit_command(SECOND_LINE).await?;
        self.transmit_char(CHAR_BULLET).await?;
        self.transmit_str(MAX_LABEL).await?;
        self.print_int(vmax).await?;
        self.transmit_char(b' ').await?;
        self.transmit_char(CHAR_BULLET).await?;
        self.transmit_str(MODE_LABEL).await?;

        self.select_menu_field(selected).await
    }

    /// Move the cursor to another field of an already painted main menu.
    pub async fn select_menu_field(&mut self, selected: MenuField) -> Result<(), LcdError> {
        let (row, column) = bullet_position(selected);
        self.set_cursor(row, column).await
    }

    /// Paint the minimum threshold adjustment screen.
    pub async fn min_threshold_screen(&mut self, vmin: u8) -> Result<(), LcdError> {
        self.threshold_screen(MIN_THRESHOLD_TITLE, vmin).await
    }

    /// Rewrite only the value on the minimum threshold screen.
    pub async fn refresh_min_threshold(&mut self, vmin: u8) -> Result<(), LcdError> {
        self.refresh_threshold(vmin).await
    }

    /// Paint the maximum threshold adjustment screen.
    pub async fn max_threshold_screen(&mut self, vmax: u8) -> Result<(), LcdError> {
        self.threshold_screen(MAX_THRESHOLD_TITLE, vmax).await
    }

    /// Rewrite only the value on the maximum threshold screen.
    pub async fn refresh_max_threshold(&mut self, vmax: u8) -> Result<(), LcdError> {
        self.refresh_threshold(vmax).await
    }

    /// Paint the manual mode banner.
    pub async fn manual_mode_screen(&mut self) -> Result<(), LcdError> {
        self.clear().await?;
        self.home().await?;
        self.transmit_str(MANUAL_MODE_BANNER).await
    }

    async fn threshold_screen(&mut self, title: &str, volts: u8) -> Result<(), LcdError> {
        self.ensure_initialized()?;
        check_printable(volts)?;

        self.clear().await?;
        self.home().await?;
        self.transmit_str(title).await?;
        self.transmit_command(SECOND_LINE).await?;
        self.print_int(volts).await
    }

    async fn refresh_threshold(&mut self, volts: u8) -> Result<(), LcdError> {
        self.ensure_initialized()?;
        check_printable(volts)?;

        self.set_cursor(0, 1).await?;
        self.print_int(volts).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{CLEAR_DISPLAY, RETURN_HOME};
    use crate::error::TransferError;
    use crate::testing::{commands, driver, frames, ready_driver, text, Event, Log};
    use embassy_futures::block_on;

    #[test]
    fn menu_screen_text() {
        let log = Log::default();
        let mut lcd = ready_driver(&log);
        block_on(lcd.menu_screen(5, 42, MenuField::MinThreshold)).unwrap();

        assert_eq!(&text(&log)[..], b"\xA5Vmin=05V\xA5Vmax=42V \xA5Aut");
    }

    #[test]
    fn menu_screen_command_order() {
        let log = Log::default();
        let mut lcd = ready_driver(&log);
        block_on(lcd.menu_screen(5, 42, MenuField::MinThreshold)).unwrap();

        // clear, home, new line, park cursor on the Vmin bullet.
        assert_eq!(
            &commands(&log)[..],
            &[CLEAR_DISPLAY, RETURN_HOME, SECOND_LINE, 0x00][..]
        );
        let frames = frames(&log);
        assert_eq!(frames[0], Event::Command(CLEAR_DISPLAY));
        assert_eq!(frames[1], Event::Command(RETURN_HOME));
        assert_eq!(frames[2], Event::Data(CHAR_BULLET));
        // Bullet + "Vmin=" + "05V" precede the line break.
        assert_eq!(frames[11], Event::Command(SECOND_LINE));
    }

    #[test]
    fn menu_screen_parks_cursor_on_selection() {
        for (field, expected) in [
            (MenuField::MinThreshold, 0x00),
            (MenuField::MaxThreshold, 0x40),
            (MenuField::Mode, 0x4A),
        ] {
            let log = Log::default();
            let mut lcd = ready_driver(&log);
            block_on(lcd.menu_screen(1, 2, field)).unwrap();
            assert_eq!(commands(&log).last(), Some(&expected));
        }
    }

    #[test]
    fn menu_screen_rejects_bad_values_before_clearing() {
        let log = Log::default();
        let mut lcd = ready_driver(&log);
        assert_eq!(
            block_on(lcd.menu_screen(5, 120, MenuField::Mode)),
            Err(LcdError::ValueOutOfRange(120))
        );
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn select_menu_field_only_moves_cursor() {
        let log = Log::default();
        let mut lcd = ready_driver(&log);
        block_on(lcd.select_menu_field(MenuField::Mode)).unwrap();
        assert_eq!(&frames(&log)[..], &[Event::Command(0x4A)][..]);
    }

    #[test]
    fn min_threshold_screen_layout() {
        let log = Log::default();
        let mut lcd = ready_driver(&log);
        block_on(lcd.min_threshold_screen(12)).unwrap();

        assert_eq!(&text(&log)[..], b"Selec Vmin:12V");
        assert_eq!(
            &commands(&log)[..],
            &[CLEAR_DISPLAY, RETURN_HOME, SECOND_LINE][..]
        );
    }

    #[test]
    fn max_threshold_screen_layout() {
        let log = Log::default();
        let mut lcd = ready_driver(&log);
        block_on(lcd.max_threshold_screen(7)).unwrap();
        assert_eq!(&text(&log)[..], b"Selec Vmax:07V");
    }

    #[test]
    fn refresh_sends_cursor_move_and_value_only() {
        let log = Log::default();
        let mut lcd = ready_driver(&log);
        block_on(lcd.refresh_min_threshold(5)).unwrap();
        assert_eq!(
            &frames(&log)[..],
            &[
                Event::Command(0x40),
                Event::Data(b'0'),
                Event::Data(b'5'),
                Event::Data(b'V'),
            ][..]
        );

        log.borrow_mut().clear();
        block_on(lcd.refresh_max_threshold(88)).unwrap();
        assert_eq!(&text(&log)[..], b"88V");
        assert_eq!(&commands(&log)[..], &[0x40][..]);
    }

    #[test]
    fn refresh_rejects_out_of_range_without_traffic() {
        let log = Log::default();
        let mut lcd = ready_driver(&log);
        assert_eq!(
            block_on(lcd.refresh_max_threshold(100)),
            Err(LcdError::ValueOutOfRange(100))
        );
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn manual_mode_screen_layout() {
        let log = Log::default();
        let mut lcd = ready_driver(&log);
        block_on(lcd.manual_mode_screen()).unwrap();
        assert_eq!(&text(&log)[..], b"Mode manuel ON");
        assert_eq!(&commands(&log)[..], &[CLEAR_DISPLAY, RETURN_HOME][..]);
    }

    #[test]
    fn screens_require_init() {
        let log = Log::default();
        let mut lcd = driver(&log);
        assert_eq!(
            block_on(lcd.menu_screen(1, 2, MenuField::Mode)),
            Err(LcdError::NotInitialized)
        );
        assert_eq!(block_on(lcd.min_threshold_screen(1)), Err(LcdError::NotInitialized));
        assert_eq!(block_on(lcd.refresh_max_threshold(1)), Err(LcdError::NotInitialized));
        assert_eq!(block_on(lcd.manual_mode_screen()), Err(LcdError::NotInitialized));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn bus_failure_aborts_screen() {
        let log = Log::default();
        let mut lcd = ready_driver(&log);
        let bus = lcd.transport_mut();
        bus.fail_after = Some(bus.sent + 1);
        bus.failure = TransferError::Timeout;

        assert_eq!(
            block_on(lcd.manual_mode_screen()),
            Err(LcdError::Transfer(TransferError::Timeout))
        );
        assert_eq!(&commands(&log)[..], &[CLEAR_DISPLAY][..]);
        assert!(text(&log).is_empty());
    }
}
