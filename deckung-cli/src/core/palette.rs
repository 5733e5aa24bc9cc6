use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// Build the color from `0xRRGGBB`.
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_hex(hex: u32) -> Self {
        Self { red: (hex >> 16) as u8, green: (hex >> 8) as u8, blue: hex as u8 }
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub const REVENUE: Rgb = Rgb::from_hex(0x34_98_DB);
pub const VARIABLE_COSTS: Rgb = Rgb::from_hex(0xE7_4C_3C);
pub const CONTRIBUTION_MARGIN: Rgb = Rgb::from_hex(0x2E_CC_71);
pub const FIXED_COSTS: Rgb = Rgb::from_hex(0xF3_9C_12);
pub const PROFIT: Rgb = Rgb::from_hex(0x27_AE_60);
pub const LOSS: Rgb = Rgb::from_hex(0xC0_39_2B);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_ok() {
        assert_eq!(Rgb::from_hex(0x34_98_DB), Rgb { red: 0x34, green: 0x98, blue: 0xDB });
    }

    #[test]
    fn display_ok() {
        assert_eq!(REVENUE.to_string(), "#3498db");
        assert_eq!(LOSS.to_string(), "#c0392b");
    }
}
