/// An ESP32-S3 GPIO number.
pub type GpioNum = u8;

// Motor control
pub const MOTOR_MSBY: GpioNum = 15;
pub const MOTOR_PIN_1: GpioNum = 46; // A2
pub const MOTOR_PIN_2: GpioNum = 37; // A3
pub const MOTOR_PIN_3: GpioNum = 21; // A4
pub const MOTOR_PIN_4: GpioNum = 38; // A5

// User buttons
pub const BUTTON_1: GpioNum = 14; // bottom
pub const BUTTON_2: GpioNum = 39; // middle
pub const BUTTON_3: GpioNum = 40; // top

// Audio
pub const AUDIO_TRRS_1: GpioNum = 4;
pub const AUDIO_TRRS_2: GpioNum = 3;
pub const AUDIO_TRRS_3: GpioNum = 2;
pub const AUDIO_LRCLK: GpioNum = 48;
pub const AUDIO_BCLK: GpioNum = 45;
pub const AUDIO_DIN: GpioNum = 43;
pub const AUDIO_SD: GpioNum = 42;

// SPI, shared by the SD card and the display
pub const SD_CS: GpioNum = 10;
pub const DISPLAY_CS: GpioNum = 17;
pub const SPI_MOSI: GpioNum = 11;
pub const SPI_SCK: GpioNum = 12;
pub const SPI_MISO: GpioNum = 13;

// I2C
pub const SDA: GpioNum = 8;
pub const SCL: GpioNum = 9;
pub const SDA_2: GpioNum = 20;
pub const SCL_2: GpioNum = 19;

// Power management
pub const LDO2_ENABLE: GpioNum = 47;
pub const BAT_VOLTAGE: GpioNum = 7;
pub const USER_PIN_18: GpioNum = 18;

// LEDs
pub const NEOPIXEL_PIN: GpioNum = 35;
pub const RGB_STRIP_PIN: GpioNum = 36;

/// Returns true if `gpio` is bonded out on the ESP32-S3. GPIO 22-25 do not
/// exist on this chip.
pub const fn is_valid_gpio(gpio: GpioNum) -> bool {
    matches!(gpio, 0..=21 | 26..=48)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpio_range() {
        assert!(is_valid_gpio(0));
        assert!(is_valid_gpio(21));
        assert!(!is_valid_gpio(22));
        assert!(!is_valid_gpio(25));
        assert!(is_valid_gpio(26));
        assert!(is_valid_gpio(48));
        assert!(!is_valid_gpio(49));
    }
}
