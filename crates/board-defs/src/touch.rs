use core::fmt;

use crate::pins::GpioNum;

/// A capacitive touch sensor channel, numbered like ESP-IDF's `touch_pad_t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TouchPad {
    Num0 = 0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
    Num10,
    Num11,
    Num12,
    Num13,
    Num14,
}

impl TouchPad {
    pub const fn channel(self) -> u8 {
        self as u8
    }

    /// The GPIO the channel is bonded to. Channel 0 is internal on the
    /// ESP32-S3 and has no pad.
    pub const fn gpio(self) -> Option<GpioNum> {
        match self {
            TouchPad::Num0 => None,
            other => Some(other as u8),
        }
    }
}

impl fmt::Display for TouchPad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TOUCH_PAD_NUM{}", self.channel())
    }
}

pub const TOUCH_PAD_CENTER: TouchPad = TouchPad::Num5;
pub const TOUCH_PAD_RIGHT: TouchPad = TouchPad::Num1;
pub const TOUCH_PAD_LEFT: TouchPad = TouchPad::Num6;
