//! The pinout as a table, for tools and bring-up code that want to look pins
//! up by name or walk a whole subsystem.

use core::fmt;

use crate::adc::*;
use crate::error::Error;
use crate::expander::*;
use crate::pins::*;
use crate::touch::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinGroup {
    Motor,
    Buttons,
    Touch,
    Audio,
    Spi,
    I2c,
    Power,
    Led,
    Adc,
    Expander,
}

impl PinGroup {
    pub const ALL: [PinGroup; 10] = [
        PinGroup::Motor,
        PinGroup::Buttons,
        PinGroup::Touch,
        PinGroup::Audio,
        PinGroup::Spi,
        PinGroup::I2c,
        PinGroup::Power,
        PinGroup::Led,
        PinGroup::Adc,
        PinGroup::Expander,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            PinGroup::Motor => "motor",
            PinGroup::Buttons => "buttons",
            PinGroup::Touch => "touch",
            PinGroup::Audio => "audio",
            PinGroup::Spi => "spi",
            PinGroup::I2c => "i2c",
            PinGroup::Power => "power",
            PinGroup::Led => "led",
            PinGroup::Adc => "adc",
            PinGroup::Expander => "expander",
        }
    }
}

impl fmt::Display for PinGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinValue {
    Gpio(GpioNum),
    Touch(TouchPad),
    Adc(Adc1Channel),
    Expander(ExpanderPin),
}

impl PinValue {
    /// The MCU GPIO behind this value, if it has one.
    pub const fn gpio(self) -> Option<GpioNum> {
        match self {
            PinValue::Gpio(n) => Some(n),
            PinValue::Touch(pad) => pad.gpio(),
            PinValue::Adc(ch) => Some(ch.gpio()),
            PinValue::Expander(_) => None,
        }
    }
}

impl fmt::Display for PinValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinValue::Gpio(n) => write!(f, "GPIO{n}"),
            PinValue::Touch(pad) => fmt::Display::fmt(pad, f),
            PinValue::Adc(ch) => fmt::Display::fmt(ch, f),
            PinValue::Expander(pin) => fmt::Display::fmt(pin, f),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinEntry {
    pub name: &'static str,
    pub group: PinGroup,
    pub value: PinValue,
    pub note: Option<&'static str>,
}

const fn gpio(name: &'static str, group: PinGroup, n: GpioNum) -> PinEntry {
    PinEntry {
        name,
        group,
        value: PinValue::Gpio(n),
        note: None,
    }
}

const fn exp(name: &'static str, pin: ExpanderPin, note: &'static str) -> PinEntry {
    PinEntry {
        name,
        group: PinGroup::Expander,
        value: PinValue::Expander(pin),
        note: Some(note),
    }
}

const fn with_note(mut entry: PinEntry, note: &'static str) -> PinEntry {
    entry.note = Some(note);
    entry
}

/// Every named pin on the board, in schematic order.
pub static PINOUT: &[PinEntry] = &[
    with_note(
        gpio("MOTOR_MSBY", PinGroup::Motor, MOTOR_MSBY),
        "driver standby",
    ),
    with_note(
        gpio("MOTOR_PIN_1", PinGroup::Motor, MOTOR_PIN_1),
        "A2",
    ),
    with_note(
        gpio("MOTOR_PIN_2", PinGroup::Motor, MOTOR_PIN_2),
        "A3",
    ),
    with_note(
        gpio("MOTOR_PIN_3", PinGroup::Motor, MOTOR_PIN_3),
        "A4",
    ),
    with_note(
        gpio("MOTOR_PIN_4", PinGroup::Motor, MOTOR_PIN_4),
        "A5",
    ),
    with_note(
        gpio("BUTTON_1", PinGroup::Buttons, BUTTON_1),
        "bottom",
    ),
    with_note(
        gpio("BUTTON_2", PinGroup::Buttons, BUTTON_2),
        "middle",
    ),
    with_note(
        gpio("BUTTON_3", PinGroup::Buttons, BUTTON_3),
        "top",
    ),
    PinEntry {
        name: "TOUCH_PAD_CENTER",
        group: PinGroup::Touch,
        value: PinValue::Touch(TOUCH_PAD_CENTER),
        note: Some("center"),
    },
    PinEntry {
        name: "TOUCH_PAD_RIGHT",
        group: PinGroup::Touch,
        value: PinValue::Touch(TOUCH_PAD_RIGHT),
        note: Some("right"),
    },
    PinEntry {
        name: "TOUCH_PAD_LEFT",
        group: PinGroup::Touch,
        value: PinValue::Touch(TOUCH_PAD_LEFT),
        note: Some("left"),
    },
    gpio("AUDIO_TRRS_1", PinGroup::Audio, AUDIO_TRRS_1),
    gpio("AUDIO_TRRS_2", PinGroup::Audio, AUDIO_TRRS_2),
    gpio("AUDIO_TRRS_3", PinGroup::Audio, AUDIO_TRRS_3),
    gpio("AUDIO_LRCLK", PinGroup::Audio, AUDIO_LRCLK),
    gpio("AUDIO_BCLK", PinGroup::Audio, AUDIO_BCLK),
    gpio("AUDIO_DIN", PinGroup::Audio, AUDIO_DIN),
    with_note(
        gpio("AUDIO_SD", PinGroup::Audio, AUDIO_SD),
        "amplifier shutdown",
    ),
    with_note(gpio("SD_CS", PinGroup::Spi, SD_CS), "SD card"),
    with_note(
        gpio("DISPLAY_CS", PinGroup::Spi, DISPLAY_CS),
        "display",
    ),
    gpio("SPI_MOSI", PinGroup::Spi, SPI_MOSI),
    gpio("SPI_SCK", PinGroup::Spi, SPI_SCK),
    gpio("SPI_MISO", PinGroup::Spi, SPI_MISO),
    gpio("SDA", PinGroup::I2c, SDA),
    gpio("SCL", PinGroup::I2c, SCL),
    with_note(gpio("SDA_2", PinGroup::I2c, SDA_2), "second bus"),
    with_note(gpio("SCL_2", PinGroup::I2c, SCL_2), "second bus"),
    gpio("LDO2_ENABLE", PinGroup::Power, LDO2_ENABLE),
    with_note(
        gpio("BAT_VOLTAGE", PinGroup::Power, BAT_VOLTAGE),
        "battery divider",
    ),
    gpio("USER_PIN_18", PinGroup::Power, USER_PIN_18),
    gpio("NEOPIXEL_PIN", PinGroup::Led, NEOPIXEL_PIN),
    gpio("RGB_STRIP_PIN", PinGroup::Led, RGB_STRIP_PIN),
    PinEntry {
        name: "VBAT_ADC_CHANNEL",
        group: PinGroup::Adc,
        value: PinValue::Adc(VBAT_ADC_CHANNEL),
        note: Some("battery divider"),
    },
    exp("EXP_PHOTOGATE_1", EXP_PHOTOGATE_1, "center"),
    exp("EXP_PHOTOGATE_2", EXP_PHOTOGATE_2, "left"),
    exp("EXP_PHOTOGATE_3", EXP_PHOTOGATE_3, "right"),
    exp("EXP_PHOTOGATE_4", EXP_PHOTOGATE_4, "pellet detector"),
    exp("EXP_XSHUT_1", EXP_XSHUT_1, "ToF standby"),
    exp("EXP_XSHUT_2", EXP_XSHUT_2, "ToF standby"),
    exp("EXP_XSHUT_3", EXP_XSHUT_3, "ToF standby"),
    exp("EXP_LDO3", EXP_LDO3, "enables LDO3"),
    exp("EXP_HAPTIC", EXP_HAPTIC, "haptic motor"),
];

/// Finds a pin by its exact name.
pub fn lookup(name: &str) -> Result<&'static PinEntry, Error> {
    PINOUT
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| Error::unknown_pin(name))
}

/// Resolves a pin name to the MCU GPIO it lands on.
pub fn gpio_number(name: &str) -> Result<GpioNum, Error> {
    let entry = lookup(name)?;
    entry
        .value
        .gpio()
        .ok_or(Error::InvalidGpio { name: entry.name })
}

pub fn group(group: PinGroup) -> impl Iterator<Item = &'static PinEntry> {
    PINOUT.iter().filter(move |entry| entry.group == group)
}

/// The first entry that uses MCU GPIO `gpio`, if any.
pub fn owner_of(gpio: GpioNum) -> Option<&'static PinEntry> {
    PINOUT.iter().find(|entry| entry.value.gpio() == Some(gpio))
}

/// Dumps the pinout through the `log` facade.
pub fn log_pinout() {
    log::info!("FED4 pinout ({} pins)", PINOUT.len());
    for g in PinGroup::ALL {
        log::debug!("{}: {} pins", g, group(g).count());
        for entry in group(g) {
            match entry.note {
                Some(note) => log::info!("  {:<16} {} ({})", entry.name, entry.value, note),
                None => log::info!("  {:<16} {}", entry.name, entry.value),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_exact() {
        assert_eq!(lookup("SPI_SCK").map(|e| e.value), Ok(PinValue::Gpio(12)));
        assert!(matches!(lookup("spi_sck"), Err(Error::UnknownPin { .. })));
        assert!(matches!(lookup("LED_BUILTIN"), Err(Error::UnknownPin { .. })));
    }

    #[test]
    fn expander_pins_have_no_gpio() {
        assert_eq!(
            gpio_number("EXP_XSHUT_1"),
            Err(Error::InvalidGpio { name: "EXP_XSHUT_1" })
        );
        // Same raw number, different address space.
        assert_eq!(gpio_number("AUDIO_TRRS_3"), Ok(2));
    }

    #[test]
    fn channels_resolve_through_bonding() {
        assert_eq!(gpio_number("TOUCH_PAD_CENTER"), Ok(5));
        assert_eq!(gpio_number("TOUCH_PAD_RIGHT"), Ok(1));
        assert_eq!(gpio_number("VBAT_ADC_CHANNEL"), Ok(7));
    }

    #[test]
    fn owner() {
        assert_eq!(owner_of(12).map(|e| e.name), Some("SPI_SCK"));
        assert_eq!(owner_of(7).map(|e| e.name), Some("BAT_VOLTAGE"));
        assert_eq!(owner_of(0), None);
    }

    #[test]
    fn group_sizes() {
        let sizes: Vec<_> = PinGroup::ALL.iter().map(|g| group(*g).count()).collect();
        assert_eq!(sizes, [5, 3, 3, 7, 5, 4, 3, 2, 1, 9]);
        assert_eq!(sizes.iter().sum::<usize>(), PINOUT.len());
    }

    #[test]
    fn value_display() {
        let display = |name: &str| lookup(name).map(|e| e.value.to_string());
        assert_eq!(display("MOTOR_MSBY"), Ok(String::from("GPIO15")));
        assert_eq!(display("EXP_HAPTIC"), Ok(String::from("EXP8")));
    }
}
