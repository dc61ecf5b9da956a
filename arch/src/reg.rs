use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromPrimitive,
    IntoPrimitive,
    EnumString,
    Display,
)]
#[repr(u8)]
pub enum Reg {
    #[default]
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
}

impl Reg {
    /// Exact, case-sensitive match against `R0`..`R7`.
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    /// Register held in the low 3 bits of `field`.
    pub fn from_field(field: u16) -> Self {
        Self::from((field & 0x7) as u8)
    }

    pub fn idx(self) -> u16 {
        u8::from(self) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_registers() {
        for i in 0..8u8 {
            let reg = Reg::parse(&format!("R{i}")).unwrap();
            assert_eq!(u8::from(reg), i);
            assert_eq!(reg.to_string(), format!("R{i}"));
        }
    }

    #[test]
    fn parse_rejects_others() {
        for bad in ["R8", "r1", "R", "", "R01", "X1", "R-1", " R1"] {
            assert_eq!(Reg::parse(bad), None, "{bad:?}");
        }
    }

    #[test]
    fn from_field_masks() {
        assert_eq!(Reg::from_field(0b1011), Reg::R3);
        assert_eq!(Reg::from_field(7), Reg::R7);
    }
}
