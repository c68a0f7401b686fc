use core::fmt;

use crate::pins::GpioNum;

/// An input channel of the ESP32-S3's first SAR ADC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Adc1Channel {
    Channel0 = 0,
    Channel1,
    Channel2,
    Channel3,
    Channel4,
    Channel5,
    Channel6,
    Channel7,
    Channel8,
    Channel9,
}

impl Adc1Channel {
    pub const fn channel(self) -> u8 {
        self as u8
    }

    /// ADC1 channel N sits on GPIO N+1.
    pub const fn gpio(self) -> GpioNum {
        self as u8 + 1
    }
}

impl fmt::Display for Adc1Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ADC1_CHANNEL_{}", self.channel())
    }
}

/// Battery voltage divider, the same line as [`crate::BAT_VOLTAGE`].
pub const VBAT_ADC_CHANNEL: Adc1Channel = Adc1Channel::Channel6;
