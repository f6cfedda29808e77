//! Controller constants for the HD44780-compatible LCD.
//!
//! Every bus transfer is two bytes: a control byte telling the controller
//! what the next byte is, then the byte itself.
//!
//! ```text
//! [CONTROL_COMMAND, opcode]   e.g. [0x80, 0x01] clears the display
//! [CONTROL_DATA,    glyph]    e.g. [0x40, b'V'] writes a character
//! ```
//!
//! Opcodes are taken from the HD44780U datasheet instruction table.

// ---------------------------------------------------------------------------
// Addressing and framing
// ---------------------------------------------------------------------------

/// Default 7-bit I2C address of the display (`0x7C` in 8-bit write form).
pub const DEFAULT_ADDRESS: u8 = 0x7C >> 1;

/// Control byte: the following byte is a controller instruction.
pub const CONTROL_COMMAND: u8 = 0x80;

/// Control byte: the following byte is display data (a character code).
pub const CONTROL_DATA: u8 = 0x40;

// ---------------------------------------------------------------------------
// Instructions
// ---------------------------------------------------------------------------

/// Function set: 8-bit interface, 2 lines, 5×8 font.
pub const FUNCTION_SET: u8 = 0x38;

/// Function set with the extended instruction table selected.
pub const FUNCTION_SET_EXTENDED: u8 = 0x3C;

/// Display on, cursor on, blink off.
pub const DISPLAY_ON: u8 = 0x0E;

/// Display on, cursor on, blink on.
pub const DISPLAY_ON_BLINK: u8 = 0x0F;

/// Display, cursor and blink off.
pub const DISPLAY_OFF: u8 = 0x08;

/// Clear the whole display and return the cursor home.
pub const CLEAR_DISPLAY: u8 = 0x01;

/// Entry mode: increment address after each write, no display shift.
pub const ENTRY_MODE_SET: u8 = 0x06;

/// Return the cursor (and any shift) to the top-left position.
pub const RETURN_HOME: u8 = 0x02;

/// Move the cursor to the start of the second line.
pub const SECOND_LINE: u8 = 0xC0;

/// Address offset selecting the second line in [`set_cursor`](crate::LcdDriver::set_cursor).
pub const LINE_TWO_FLAG: u8 = 0x40;

// ---------------------------------------------------------------------------
// Character codes
// ---------------------------------------------------------------------------

/// Centred dot from the controller's character ROM, used as a menu bullet.
pub const CHAR_BULLET: u8 = 0xA5;

/// Unit suffix printed after a voltage.
pub const CHAR_VOLTS: u8 = b'V';

// ---------------------------------------------------------------------------
// Power-on sequence
// ---------------------------------------------------------------------------

/// Wait after power-up before the first instruction, in milliseconds.
pub const POWER_ON_DELAY_MS: u32 = 50;

/// Instruction sequence sent by [`init()`](crate::LcdDriver::init), each
/// paired with the delay in milliseconds that follows it.
///
/// The final 2000 ms settle is the datasheet value; the driver uses
/// [`LcdConfig::init_settle_ms`](crate::LcdConfig::init_settle_ms) in its
/// place.
pub const INIT_SEQUENCE: [(u8, u32); 10] = [
    // Wake-up: function set three times.
    (FUNCTION_SET, 5),
    (FUNCTION_SET, 1),
    (FUNCTION_SET, 1),
    (FUNCTION_SET_EXTENDED, 5),
    (DISPLAY_OFF, 5),
    (CLEAR_DISPLAY, 5),
    (ENTRY_MODE_SET, 5),
    (RETURN_HOME, 5),
    (DISPLAY_ON, 5),
    (ENTRY_MODE_SET, 2000),
];
