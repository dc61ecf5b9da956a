use crate::opcode::Opcode;

// ----------------------------------------------------------------------------
// Bit layouts (bit 15 = MSB)
//
//  R   | opcode:4 | rd:3 | rs:3 | rt:3 | 0:3 |
//  M   | opcode:4 | rd:3 |      imm:9        |
//  B   | opcode:4 | 0:3  | rs:3 |   imm:6    |
//  J   | opcode:4 |    0:6      |  target:6  |

pub fn enc_r(op: Opcode, rd: u16, rs: u16, rt: u16) -> u16 {
    (op.bits() << 12) | ((rd & 0x7) << 9) | ((rs & 0x7) << 6) | ((rt & 0x7) << 3)
}

pub fn enc_m(op: Opcode, rd: u16, imm: u16) -> u16 {
    (op.bits() << 12) | ((rd & 0x7) << 9) | (imm & 0x1FF)
}

pub fn enc_b(op: Opcode, rs: u16, imm: u16) -> u16 {
    (op.bits() << 12) | ((rs & 0x7) << 6) | (imm & 0x3F)
}

pub fn enc_j(op: Opcode, target: u16) -> u16 {
    (op.bits() << 12) | (target & 0x3F)
}

/// Every field a word can carry, sliced out regardless of its format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields {
    pub opcode: u8,
    pub rd: u16,
    pub rs: u16,
    pub rt: u16,
    pub imm6: u16,
    pub imm9: u16,
}

impl Fields {
    pub fn decode(bin: u16) -> Fields {
        Fields {
            opcode: ((bin >> 12) & 0xF) as u8,
            rd: (bin >> 9) & 0x7,
            rs: (bin >> 6) & 0x7,
            rt: (bin >> 3) & 0x7,
            imm6: bin & 0x3F,
            imm9: bin & 0x1FF,
        }
    }
}

#[test]
fn test_format_r() {
    for rd in 0..8 {
        for rs in 0..8 {
            for rt in 0..8 {
                let bin = enc_r(Opcode::XOR, rd, rs, rt);
                let f = Fields::decode(bin);
                assert_eq!(f.opcode, 0x5);
                assert_eq!((f.rd, f.rs, f.rt), (rd, rs, rt));
                assert_eq!(bin & 0x7, 0);
            }
        }
    }
}

#[test]
fn test_format_m_b_j() {
    assert_eq!(enc_m(Opcode::MOV, 3, 300), 0x7000 | (3 << 9) | 300);
    assert_eq!(Fields::decode(enc_m(Opcode::MOV, 3, 300)).imm9, 300);

    let bin = enc_b(Opcode::BEQZ, 1, 0x3F);
    assert_eq!(bin, 0xA07F);
    assert_eq!(Fields::decode(bin).rd, 0);

    assert_eq!(enc_j(Opcode::JMP, 0x2A), 0xB02A);
}
