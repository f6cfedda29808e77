//! Driver configuration.

use embassy_time::Duration;

use crate::commands::DEFAULT_ADDRESS;

/// Configuration for [`LcdDriver`](crate::LcdDriver).
///
/// [`LcdConfig::default()`] reproduces the timings the display was
/// validated with. Callers can tune every value at construction time
/// without modifying library source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcdConfig {
    /// 7-bit I2C address of the display. Default: `0x3E`.
    pub address: u8,
    /// Upper bound on a single two-byte transfer. Default: 100 ms.
    pub transfer_timeout: Duration,
    /// Delay after every character write, in ms. Default: 5.
    pub char_settle_ms: u32,
    /// Delay after clear, home and blink commands, in ms. Default: 5.
    pub command_settle_ms: u32,
    /// Delay after a cursor move, in ms. Default: 1.
    pub cursor_settle_ms: u32,
    /// Delay at the end of [`init()`](crate::LcdDriver::init), in ms. Default: 2000.
    pub init_settle_ms: u32,
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            transfer_timeout: Duration::from_millis(100),
            char_settle_ms: 5,
            command_settle_ms: 5,
            cursor_settle_ms: 1,
            init_settle_ms: 2000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let c = LcdConfig::default();
        assert_eq!(c.address, 0x3E);
        assert_eq!(c.transfer_timeout, Duration::from_millis(100));
        assert_eq!(c.char_settle_ms, 5);
        assert_eq!(c.command_settle_ms, 5);
        assert_eq!(c.cursor_settle_ms, 1);
        assert_eq!(c.init_settle_ms, 2000);
    }

    #[test]
    fn struct_update_keeps_other_defaults() {
        let c = LcdConfig {
            init_settle_ms: 100,
            ..LcdConfig::default()
        };
        assert_eq!(c.init_settle_ms, 100);
        assert_eq!(c.char_settle_ms, 5);
    }
}
