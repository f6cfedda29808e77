//! Screen snapshots and redraw decisions.
//!
//! This module defines the immutable [`Screen`] snapshot, the
//! [`ScreenChange`] diff, and [`LcdDriver::show()`], which paints the
//! cheapest update that takes the display from one snapshot to the next.

use embedded_hal_async::delay::DelayNs;
use ihm_menu::menu::{MenuField, ThresholdPair};

use crate::driver::LcdDriver;
use crate::error::LcdError;
use crate::transport::BusTransport;

// ── Screen ───────────────────────────────────────────────────────────────

/// Everything the display needs to paint one screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Main menu with both thresholds and the selected field.
    Menu {
        vmin: u8,
        vmax: u8,
        selected: MenuField,
    },
    /// Minimum threshold adjustment.
    MinThreshold { vmin: u8 },
    /// Maximum threshold adjustment.
    MaxThreshold { vmax: u8 },
    /// Manual mode banner.
    ManualMode,
}

impl Screen {
    /// Main menu for the given thresholds.
    pub fn menu(thresholds: &ThresholdPair, selected: MenuField) -> Self {
        Screen::Menu {
            vmin: thresholds.min().volts(),
            vmax: thresholds.max().volts(),
            selected,
        }
    }

    /// Adjustment screen for `field`, or the main menu for the mode field.
    pub fn editing(field: MenuField, thresholds: &ThresholdPair) -> Self {
        match field {
            MenuField::MinThreshold => Screen::MinThreshold {
                vmin: thresholds.min().volts(),
            },
            MenuField::MaxThreshold => Screen::MaxThreshold {
                vmax: thresholds.max().volts(),
            },
            MenuField::Mode => Screen::menu(thresholds, MenuField::Mode),
        }
    }
}

// ── ScreenChange ─────────────────────────────────────────────────────────

/// The smallest update that turns one [`Screen`] into another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenChange {
    /// Nothing to send.
    Unchanged,
    /// Same main menu values, only the cursor moves.
    SelectionOnly,
    /// Same threshold screen, only the number changes.
    ValueOnly,
    /// Clear and repaint.
    FullRedraw,
}

impl ScreenChange {
    /// Diff two snapshots. `previous` is `None` when the display content is
    /// unknown (after power-up or a failed transfer).
    pub fn detect(previous: Option<&Screen>, next: &Screen) -> Self {
        let Some(previous) = previous else {
            return ScreenChange::FullRedraw;
        };
        if previous == next {
            return ScreenChange::Unchanged;
        }
        match (previous, next) {
            (
                Screen::Menu { vmin: a, vmax: b, .. },
                Screen::Menu { vmin: c, vmax: d, .. },
            ) if a == c && b == d => ScreenChange::SelectionOnly,
            (Screen::MinThreshold { .. }, Screen::MinThreshold { .. })
            | (Screen::MaxThreshold { .. }, Screen::MaxThreshold { .. }) => ScreenChange::ValueOnly,
            _ => ScreenChange::FullRedraw,
        }
    }

    /// Returns `true` if anything has to be sent.
    pub fn any_changed(&self) -> bool {
        *self != ScreenChange::Unchanged
    }
}

// ── Rendering ────────────────────────────────────────────────────────────

impl<T, D> LcdDriver<T, D>
where
    T: BusTransport,
    D: DelayNs,
{
    /// Bring the display from `previous` to `next` with as little traffic
    /// as possible, and report which kind of update was sent.
    ///
    /// On error the display content is unknown; pass `None` as `previous`
    /// next time to force a full redraw.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ihm_lcd_display_rs::{BusTransport, LcdDriver, Screen};
    /// use ihm_menu::menu::{MenuError, MenuSelector, ThresholdPair};
    ///
    /// # async fn example<T: BusTransport, D: embedded_hal_async::delay::DelayNs>(
    /// #     lcd: &mut LcdDriver<T, D>,
    /// #     selector: &MenuSelector,
    /// #     thresholds: &ThresholdPair,
    /// # ) -> Result<(), MenuError> {
    /// let mut shown: Option<Screen> = None;
    /// loop {
    ///     let next = Screen::menu(thresholds, selector.selected_field()?);
    ///     shown = match lcd.show(shown.as_ref(), &next).await {
    ///         Ok(_) => Some(next),
    ///         Err(_) => None,
    ///     };
    /// }
    /// # }
    /// ```
    pub async fn show(
        &mut self,
        previous: Option<&Screen>,
        next: &Screen,
    ) -> Result<ScreenChange, LcdError> {
        self.ensure_initialized()?;
        let change = ScreenChange::detect(previous, next);

        match (change, *next) {
            (ScreenChange::Unchanged, _) => {}
            (ScreenChange::SelectionOnly, Screen::Menu { selected, .. }) => {
                self.select_menu_field(selected).await?
            }
            (ScreenChange::ValueOnly, Screen::MinThreshold { vmin }) => {
                self.refresh_min_threshold(vmin).await?
            }
            (ScreenChange::ValueOnly, Screen::MaxThreshold { vmax }) => {
                self.refresh_max_threshold(vmax).await?
            }
            (_, Screen::Menu { vmin, vmax, selected }) => {
                self.menu_screen(vmin, vmax, selected).await?
            }
            (_, Screen::MinThreshold { vmin }) => self.min_threshold_screen(vmin).await?,
            (_, Screen::MaxThreshold { vmax }) => self.max_threshold_screen(vmax).await?,
            (_, Screen::ManualMode) => self.manual_mode_screen().await?,
        }

        Ok(change)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CLEAR_DISPLAY;
    use crate::testing::{commands, driver, frames, ready_driver, text, Event, Log};
    use embassy_futures::block_on;

    const MENU: Screen = Screen::Menu {
        vmin: 5,
        vmax: 42,
        selected: MenuField::MinThreshold,
    };

    #[test]
    fn first_frame_is_full_redraw() {
        assert_eq!(ScreenChange::detect(None, &MENU), ScreenChange::FullRedraw);
    }

    #[test]
    fn identical_screens_are_unchanged() {
        let change = ScreenChange::detect(Some(&MENU), &MENU);
        assert_eq!(change, ScreenChange::Unchanged);
        assert!(!change.any_changed());
    }

    #[test]
    fn selection_change_moves_cursor_only() {
        let next = Screen::Menu {
            vmin: 5,
            vmax: 42,
            selected: MenuField::Mode,
        };
        assert_eq!(
            ScreenChange::detect(Some(&MENU), &next),
            ScreenChange::SelectionOnly
        );
    }

    #[test]
    fn menu_value_change_redraws() {
        let next = Screen::Menu {
            vmin: 6,
            vmax: 42,
            selected: MenuField::MinThreshold,
        };
        assert_eq!(ScreenChange::detect(Some(&MENU), &next), ScreenChange::FullRedraw);
    }

    #[test]
    fn threshold_value_change_is_value_only() {
        let a = Screen::MinThreshold { vmin: 3 };
        let b = Screen::MinThreshold { vmin: 4 };
        assert_eq!(ScreenChange::detect(Some(&a), &b), ScreenChange::ValueOnly);

        let c = Screen::MaxThreshold { vmax: 3 };
        let d = Screen::MaxThreshold { vmax: 9 };
        assert_eq!(ScreenChange::detect(Some(&c), &d), ScreenChange::ValueOnly);
    }

    #[test]
    fn switching_screens_redraws() {
        let a = Screen::MinThreshold { vmin: 3 };
        let b = Screen::MaxThreshold { vmax: 3 };
        assert_eq!(ScreenChange::detect(Some(&a), &b), ScreenChange::FullRedraw);
        assert_eq!(
            ScreenChange::detect(Some(&MENU), &Screen::ManualMode),
            ScreenChange::FullRedraw
        );
    }

    #[test]
    fn screen_from_thresholds() {
        let thresholds = ThresholdPair::new(5, 42);
        assert_eq!(Screen::menu(&thresholds, MenuField::MinThreshold), MENU);
        assert_eq!(
            Screen::editing(MenuField::MaxThreshold, &thresholds),
            Screen::MaxThreshold { vmax: 42 }
        );
        assert_eq!(
            Screen::editing(MenuField::MinThreshold, &thresholds),
            Screen::MinThreshold { vmin: 5 }
        );
    }

    #[test]
    fn show_full_then_unchanged() {
        let log = Log::default();
        let mut lcd = ready_driver(&log);

        assert_eq!(block_on(lcd.show(None, &MENU)), Ok(ScreenChange::FullRedraw));
        assert_eq!(&text(&log)[..], b"\xA5Vmin=05V\xA5Vmax=42V \xA5Aut");

        log.borrow_mut().clear();
        assert_eq!(block_on(lcd.show(Some(&MENU), &MENU)), Ok(ScreenChange::Unchanged));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn show_selection_only() {
        let log = Log::default();
        let mut lcd = ready_driver(&log);
        let next = Screen::Menu {
            vmin: 5,
            vmax: 42,
            selected: MenuField::MaxThreshold,
        };
        assert_eq!(
            block_on(lcd.show(Some(&MENU), &next)),
            Ok(ScreenChange::SelectionOnly)
        );
        assert_eq!(&frames(&log)[..], &[Event::Command(0x40)][..]);
    }

    #[test]
    fn show_value_only_skips_clear() {
        let log = Log::default();
        let mut lcd = ready_driver(&log);
        let a = Screen::MaxThreshold { vmax: 10 };
        let b = Screen::MaxThreshold { vmax: 11 };
        assert_eq!(block_on(lcd.show(Some(&a), &b)), Ok(ScreenChange::ValueOnly));
        assert!(!commands(&log).contains(&CLEAR_DISPLAY));
        assert_eq!(&text(&log)[..], b"11V");
    }

    #[test]
    fn show_manual_mode() {
        let log = Log::default();
        let mut lcd = ready_driver(&log);
        assert_eq!(
            block_on(lcd.show(Some(&MENU), &Screen::ManualMode)),
            Ok(ScreenChange::FullRedraw)
        );
        assert_eq!(&text(&log)[..], b"Mode manuel ON");
    }

    #[test]
    fn show_requires_init() {
        let log = Log::default();
        let mut lcd = driver(&log);
        assert_eq!(block_on(lcd.show(None, &MENU)), Err(LcdError::NotInitialized));
    }
}
