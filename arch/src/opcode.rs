use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// 4-bit opcode placed in bits 15:12 of every word.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Default,
    TryFromPrimitive,
    IntoPrimitive,
    EnumString,
    Display,
)]
#[repr(u8)]
pub enum Opcode {
    #[default]
    NOP = 0x0,
    ADD = 0x1,
    SUB = 0x2,
    AND = 0x3,
    OR = 0x4,
    XOR = 0x5,
    NOT = 0x6,
    MOV = 0x7,
    LD = 0x8,
    ST = 0x9,
    BEQZ = 0xA,
    JMP = 0xB,
    HLT = 0xE,
}

impl Opcode {
    pub fn bits(self) -> u16 {
        u8::from(self) as u16
    }
}

#[test]
fn test() {
    assert_eq!(Opcode::HLT.bits(), 0xE);
    assert_eq!("BEQZ".parse::<Opcode>(), Ok(Opcode::BEQZ));
    assert!(Opcode::try_from(0xC).is_err());
    assert!(Opcode::try_from(0xD).is_err());
    assert!(Opcode::try_from(0xF).is_err());
}
