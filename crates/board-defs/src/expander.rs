use core::fmt;

/// A line on the board's I/O expander. These numbers are in the expander's
/// own address space and never name an MCU GPIO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpanderPin(u8);

impl ExpanderPin {
    /// Number of lines on the expander.
    pub const COUNT: u8 = 16;

    /// Panics if `number` is not below [`Self::COUNT`]; in a `const` this is
    /// a compile error.
    pub const fn new(number: u8) -> Self {
        assert!(number < Self::COUNT, "expander pin out of range");
        Self(number)
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    /// Port bank and bit within it, for 8-bit-port expanders.
    pub const fn port_bit(self) -> (u8, u8) {
        (self.0 / 8, self.0 % 8)
    }
}

impl fmt::Display for ExpanderPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EXP{}", self.0)
    }
}

// Photogates
pub const EXP_PHOTOGATE_1: ExpanderPin = ExpanderPin::new(12); // center
pub const EXP_PHOTOGATE_2: ExpanderPin = ExpanderPin::new(13); // left
pub const EXP_PHOTOGATE_3: ExpanderPin = ExpanderPin::new(0); // right
pub const EXP_PHOTOGATE_4: ExpanderPin = ExpanderPin::new(11); // pellet detector

// Hold the ToF sensors in standby so they can be addressed one at a time
pub const EXP_XSHUT_1: ExpanderPin = ExpanderPin::new(2);
pub const EXP_XSHUT_2: ExpanderPin = ExpanderPin::new(15);
pub const EXP_XSHUT_3: ExpanderPin = ExpanderPin::new(3);

pub const EXP_LDO3: ExpanderPin = ExpanderPin::new(14);
pub const EXP_HAPTIC: ExpanderPin = ExpanderPin::new(8);
