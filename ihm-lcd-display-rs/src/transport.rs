//! Bus capability used by the driver.
//!
//! The driver never talks to an I2C peripheral directly. It sends frames
//! through [`BusTransport`], which real firmware satisfies with
//! [`I2cTransport`] and tests satisfy with a recording fake.

use embassy_time::{with_timeout, Duration};
use embedded_hal_async::i2c::{Error as _, ErrorKind, I2c};

use crate::error::TransferError;

/// A two-wire bus able to write a buffer to a 7-bit address.
#[allow(async_fn_in_trait)]
pub trait BusTransport {
    /// Write `bytes` to the device at `address`.
    ///
    /// Completes once the transfer has finished, or fails with
    /// [`TransferError::Timeout`] if it has not finished within `timeout`.
    async fn transmit(
        &mut self,
        address: u8,
        bytes: &[u8],
        timeout: Duration,
    ) -> Result<(), TransferError>;
}

/// [`BusTransport`] over any `embedded-hal-async` I2C implementation.
///
/// Each write is raced against an [`embassy_time`] timer, so a display that
/// holds the bus cannot stall the caller forever.
pub struct I2cTransport<I2C> {
    i2c: I2C,
}

impl<I2C> I2cTransport<I2C>
where
    I2C: I2c,
{
    /// Wrap an I2C peripheral (takes ownership for exclusive access).
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Consume the transport and return the I2C peripheral.
    pub fn free(self) -> I2C {
        self.i2c
    }
}

impl<I2C> BusTransport for I2cTransport<I2C>
where
    I2C: I2c,
{
    async fn transmit(
        &mut self,
        address: u8,
        bytes: &[u8],
        timeout: Duration,
    ) -> Result<(), TransferError> {
        match with_timeout(timeout, self.i2c.write(address, bytes)).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                let error = classify(e.kind());
                #[cfg(feature = "defmt")]
                defmt::warn!("I2C write to {=u8:#x} failed: {}", address, error);
                Err(error)
            }
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("I2C write to {=u8:#x} timed out", address);
                Err(TransferError::Timeout)
            }
        }
    }
}

/// Map an `embedded-hal` error kind onto the driver's coarse taxonomy.
fn classify(kind: ErrorKind) -> TransferError {
    match kind {
        ErrorKind::NoAcknowledge(_) => TransferError::NoAcknowledge,
        ErrorKind::ArbitrationLoss => TransferError::Busy,
        _ => TransferError::Bus,
    }
}
