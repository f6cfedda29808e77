//! Recording fakes shared by the unit tests.
//!
//! The bus and the delay append to one [`Log`], so tests can assert on the
//! exact interleaving of frames and waits the controller would see.

use core::cell::RefCell;

use embassy_futures::block_on;
use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;
use heapless::Vec;

use crate::commands::{CONTROL_COMMAND, CONTROL_DATA};
use crate::error::TransferError;
use crate::transport::BusTransport;
use crate::{LcdConfig, LcdDriver};

/// One thing the display controller observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// `[0x80, opcode]` frame.
    Command(u8),
    /// `[0x40, glyph]` frame.
    Data(u8),
    /// Any other two-byte frame.
    Raw(u8, u8),
    /// Delay in milliseconds.
    Delay(u32),
}

pub type Log = RefCell<Vec<Event, 256>>;

pub struct RecordingBus<'a> {
    log: &'a Log,
    /// Refuse every transfer once this many have succeeded.
    pub fail_after: Option<usize>,
    pub failure: TransferError,
    pub sent: usize,
    pub last_address: Option<u8>,
    pub last_timeout: Option<Duration>,
}

impl<'a> RecordingBus<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self {
            log,
            fail_after: None,
            failure: TransferError::Timeout,
            sent: 0,
            last_address: None,
            last_timeout: None,
        }
    }
}

impl BusTransport for RecordingBus<'_> {
    async fn transmit(
        &mut self,
        address: u8,
        bytes: &[u8],
        timeout: Duration,
    ) -> Result<(), TransferError> {
        if self.fail_after.is_some_and(|n| self.sent >= n) {
            return Err(self.failure);
        }
        assert_eq!(bytes.len(), 2, "every frame is two bytes");
        self.sent += 1;
        self.last_address = Some(address);
        self.last_timeout = Some(timeout);

        let event = match bytes[0] {
            CONTROL_COMMAND => Event::Command(bytes[1]),
            CONTROL_DATA => Event::Data(bytes[1]),
            control => Event::Raw(control, bytes[1]),
        };
        self.log.borrow_mut().push(event).expect("log full");
        Ok(())
    }
}

pub struct RecordingDelay<'a> {
    log: &'a Log,
}

impl<'a> RecordingDelay<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self { log }
    }
}

impl DelayNs for RecordingDelay<'_> {
    async fn delay_ns(&mut self, ns: u32) {
        self.log
            .borrow_mut()
            .push(Event::Delay(ns / 1_000_000))
            .expect("log full");
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::Delay(ms)).expect("log full");
    }
}

pub type TestDriver<'a> = LcdDriver<RecordingBus<'a>, RecordingDelay<'a>>;

/// A driver that has not been initialised yet.
pub fn driver(log: &Log) -> TestDriver<'_> {
    LcdDriver::new(RecordingBus::new(log), RecordingDelay::new(log), LcdConfig::default())
}

/// An initialised driver with the init traffic removed from the log.
pub fn ready_driver(log: &Log) -> TestDriver<'_> {
    let mut lcd = driver(log);
    block_on(lcd.init()).expect("init");
    log.borrow_mut().clear();
    lcd
}

/// Every event except delays.
pub fn frames(log: &Log) -> Vec<Event, 256> {
    log.borrow()
        .iter()
        .copied()
        .filter(|e| !matches!(e, Event::Delay(_)))
        .collect()
}

/// The characters written, in order.
pub fn text(log: &Log) -> Vec<u8, 256> {
    log.borrow()
        .iter()
        .filter_map(|e| match e {
            Event::Data(c) => Some(*c),
            _ => None,
        })
        .collect()
}

/// The instruction opcodes sent, in order.
pub fn commands(log: &Log) -> Vec<u8, 256> {
    log.borrow()
        .iter()
        .filter_map(|e| match e {
            Event::Command(c) => Some(*c),
            _ => None,
        })
        .collect()
}
