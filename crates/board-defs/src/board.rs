//! Typed pin bundles for esp-hal. Build one with [`board_def!`](crate::board_def)
//! from the `Peripherals` returned by `esp_hal::init`.

use esp_hal::gpio::AnyPin;

pub struct MotorPinDef {
    pub standby: AnyPin,
    pub pins: [AnyPin; 4],
}

/// Bottom, middle, top.
pub struct ButtonPinDef {
    pub buttons: [AnyPin; 3],
}

pub struct AudioPinDef {
    pub trrs: [AnyPin; 3],
    pub lrclk: AnyPin,
    pub bclk: AnyPin,
    pub din: AnyPin,
    pub sd: AnyPin,
}

pub struct SpiPinDef {
    pub sck: AnyPin,
    pub mosi: AnyPin,
    pub miso: AnyPin,
    pub sd_cs: AnyPin,
    pub display_cs: AnyPin,
}

pub struct I2CPinDef {
    pub scl: AnyPin,
    pub sda: AnyPin,
}

pub struct PowerPinDef {
    pub ldo2_enable: AnyPin,
    pub bat_voltage: AnyPin,
    pub user_18: AnyPin,
}

pub struct LedPinDef {
    pub neopixel: AnyPin,
    pub rgb_strip: AnyPin,
}

pub struct BoardDef {
    pub motor: MotorPinDef,
    pub buttons: ButtonPinDef,
    pub audio: AudioPinDef,
    pub spi: SpiPinDef,
    pub i2c: I2CPinDef,
    pub i2c_2: I2CPinDef,
    pub power: PowerPinDef,
    pub leds: LedPinDef,
}

/// Moves the FED4 pins out of `$peripherals`. The GPIO numbers here must
/// agree with the GPIO constants; the `board_def` integration test checks the
/// two lists against each other.
#[macro_export]
macro_rules! board_def {
    ($peripherals:ident) => {{
        use $crate::esp_hal::gpio::Pin;
        $crate::BoardDef {
            motor: $crate::MotorPinDef {
                standby: $peripherals.GPIO15.degrade(),
                pins: [
                    $peripherals.GPIO46.degrade(),
                    $peripherals.GPIO37.degrade(),
                    $peripherals.GPIO21.degrade(),
                    $peripherals.GPIO38.degrade(),
                ],
            },
            buttons: $crate::ButtonPinDef {
                buttons: [
                    $peripherals.GPIO14.degrade(),
                    $peripherals.GPIO39.degrade(),
                    $peripherals.GPIO40.degrade(),
                ],
            },
            audio: $crate::AudioPinDef {
                trrs: [
                    $peripherals.GPIO4.degrade(),
                    $peripherals.GPIO3.degrade(),
                    $peripherals.GPIO2.degrade(),
                ],
                lrclk: $peripherals.GPIO48.degrade(),
                bclk: $peripherals.GPIO45.degrade(),
                din: $peripherals.GPIO43.degrade(),
                sd: $peripherals.GPIO42.degrade(),
            },
            spi: $crate::SpiPinDef {
                sck: $peripherals.GPIO12.degrade(),
                mosi: $peripherals.GPIO11.degrade(),
                miso: $peripherals.GPIO13.degrade(),
                sd_cs: $peripherals.GPIO10.degrade(),
                display_cs: $peripherals.GPIO17.degrade(),
            },
            i2c: $crate::I2CPinDef {
                scl: $peripherals.GPIO9.degrade(),
                sda: $peripherals.GPIO8.degrade(),
            },
            i2c_2: $crate::I2CPinDef {
                scl: $peripherals.GPIO19.degrade(),
                sda: $peripherals.GPIO20.degrade(),
            },
            power: $crate::PowerPinDef {
                ldo2_enable: $peripherals.GPIO47.degrade(),
                bat_voltage: $peripherals.GPIO7.degrade(),
                user_18: $peripherals.GPIO18.degrade(),
            },
            leds: $crate::LedPinDef {
                neopixel: $peripherals.GPIO35.degrade(),
                rgb_strip: $peripherals.GPIO36.degrade(),
            },
        }
    }};
}
