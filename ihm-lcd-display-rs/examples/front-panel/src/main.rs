//! Front panel example
//!
//! Standalone hardware demonstration that wires [`RotaryEncoder`] and
//! [`LcdDriver`] together on an STM32F411 Nucleo. Turning the knob moves the
//! cursor between the three main menu fields; the LCD only receives traffic
//! when the selection actually changes.
//!
//! # Wiring
//!
//! | Signal    | Nucleo Pin | Notes           |
//! |-----------|------------|-----------------|
//! | Encoder A | PA8        | TIM1_CH1        |
//! | Encoder B | PA9        | TIM1_CH2        |
//! | I2C1 SCL  | PB8        | 4.7 kΩ pull-up  |
//! | I2C1 SDA  | PB9        | 4.7 kΩ pull-up  |
//! | LCD VDD   | 3V3        |                 |
//! | LCD GND   | GND        |                 |

#![no_std]
#![no_main]

use core::convert::Infallible;

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::i2c::{self, I2c};
use embassy_stm32::peripherals::{I2C1, TIM1};
use embassy_stm32::time::Hertz;
use embassy_stm32::timer::qei::{Qei, QeiPin};
use embassy_stm32::{bind_interrupts, pac};
use embassy_time::{Delay, Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use ihm_encoder::{QuadratureCounter, RotaryEncoder};
use ihm_lcd_display_rs::{I2cTransport, LcdConfig, LcdDriver, Screen};
use ihm_menu::menu::{MenuSelector, ThresholdPair};

// Wire the I2C1 interrupts to Embassy's handlers.
bind_interrupts!(struct Irqs {
    I2C1_EV => i2c::EventInterruptHandler<I2C1>;
    I2C1_ER => i2c::ErrorInterruptHandler<I2C1>;
});

/// TIM1 in encoder mode, counting both edges of both channels.
struct Tim1Counter<'d> {
    qei: Qei<'d, TIM1>,
}

impl QuadratureCounter for Tim1Counter<'_> {
    type Error = Infallible;

    fn start(&mut self) -> Result<(), Infallible> {
        pac::TIM1.cr1().modify(|w| w.set_cen(true));
        Ok(())
    }

    fn count(&mut self) -> Result<u16, Infallible> {
        Ok(self.qei.count())
    }

    fn set_count(&mut self, value: u16) -> Result<(), Infallible> {
        pac::TIM1.cnt().write(|w| w.set_cnt(value));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Hardware pin assignments — change here for hardware revisions
// ---------------------------------------------------------------------------
// ENC_A   → PA8  (TIM1_CH1)
// ENC_B   → PA9  (TIM1_CH2)
// I2C_SCL → PB8
// I2C_SDA → PB9
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());
    info!("Front panel example starting");

    // --- Encoder on TIM1 ---
    let qei = Qei::new(p.TIM1, QeiPin::new_ch1(p.PA8), QeiPin::new_ch2(p.PA9));
    let mut encoder = RotaryEncoder::new(Tim1Counter { qei });
    encoder.start().expect("encoder start failed");
    encoder.reset().expect("encoder reset failed");

    // --- LCD on I2C1 ---
    let i2c = I2c::new(
        p.I2C1,
        p.PB8, // SCL
        p.PB9, // SDA
        Irqs,
        p.DMA1_CH6, // TX
        p.DMA1_CH0, // RX
        Hertz::khz(100),
        Default::default(),
    );
    let mut lcd = LcdDriver::new(I2cTransport::new(i2c), Delay, LcdConfig::default());

    lcd.init().await.expect("LCD init failed");
    lcd.cursor_blink(true).await.expect("LCD blink failed");
    info!("LCD initialised");

    let thresholds = ThresholdPair::new(5, 42);
    let mut selector = MenuSelector::default();
    let mut shown: Option<Screen> = None;

    loop {
        let delta = encoder.poll().expect("encoder read failed");
        if delta != 0 {
            selector.apply(delta);
        }

        let field = selector.selected_field().expect("selection out of range");
        let next = Screen::menu(&thresholds, field);

        // A failed update leaves the display content unknown; repaint next time.
        shown = match lcd.show(shown.as_ref(), &next).await {
            Ok(change) => {
                if change.any_changed() {
                    debug!("LCD update: {}", change);
                }
                Some(next)
            }
            Err(e) => {
                warn!("LCD update failed: {}", e);
                None
            }
        };

        Timer::after(Duration::from_millis(50)).await;
    }
}
