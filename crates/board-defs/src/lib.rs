//! Pin assignments for the FED4 board.
//!
//! The main-board lines are plain ESP32-S3 GPIO numbers. Touch pads and the
//! battery ADC are typed channels, and the pins on the I/O expander are
//! [`ExpanderPin`]s so they can't be mixed up with MCU GPIOs.
#![cfg_attr(not(test), no_std)]

mod adc;
mod error;
mod expander;
mod pins;
mod table;
mod touch;

#[cfg(feature = "esp-hal")]
mod board;

pub use adc::*;
pub use error::{Error, MAX_NAME_LEN};
pub use expander::*;
pub use pins::*;
pub use table::{
    gpio_number, group, log_pinout, lookup, owner_of, PinEntry, PinGroup, PinValue, PINOUT,
};
pub use touch::*;

#[cfg(feature = "esp-hal")]
pub use board::*;
#[cfg(feature = "esp-hal")]
pub use esp_hal;
