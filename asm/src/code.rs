use arch::{
    imm::{Addr6, Imm9},
    inst::Inst,
    reg::Reg,
};
use strum::{Display, EnumString, IntoStaticStr};

use crate::{
    error::Error,
    label::Symbols,
    operand::{parse_imm, parse_reg},
};

// ----------------------------------------------------------------------------
// Mnemonic

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr, Display)]
pub enum Mnemonic {
    NOP,
    ADD,
    SUB,
    AND,
    OR,
    XOR,
    NOT,
    MOV,
    LDR,
    STR,
    BEQZ,
    JMP,
    HLT,
}

impl Mnemonic {
    /// Mnemonics are case-insensitive.
    pub fn parse(s: &str) -> Option<Mnemonic> {
        s.to_ascii_uppercase().parse().ok()
    }
}

// ----------------------------------------------------------------------------
// Operation (registers parsed, immediates still unresolved)

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Code {
    NOP(),
    ADD(Reg, Reg, Reg),
    SUB(Reg, Reg, Reg),
    AND(Reg, Reg, Reg),
    OR(Reg, Reg, Reg),
    XOR(Reg, Reg, Reg),
    NOT(Reg, Reg),
    MOV(Reg, Imm),
    LDR(Reg, Reg),
    STR(Reg, Reg),
    BEQZ(Reg, Imm),
    JMP(Imm),
    HLT(),
}

impl Code {
    pub fn parse(code: &str) -> Result<Code, Error> {
        let words: Vec<&str> = code
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|w| !w.is_empty())
            .collect();
        let Some((op, args)) = words.split_first() else {
            return Err(Error::UnknownInstruction(code.to_string()));
        };
        let mnemonic =
            Mnemonic::parse(op).ok_or_else(|| Error::UnknownInstruction(op.to_ascii_uppercase()))?;

        // Check the operand count before parsing any operand
        // Example: need!(2, "Register and Immediate")
        macro_rules! need {
            ($count:expr, $expected:expr) => {
                if args.len() < $count {
                    return Err(Error::MissingArguments {
                        mnemonic: mnemonic.into(),
                        expected: $expected,
                    });
                }
            };
        }
        macro_rules! reg {
            ($index:expr) => {
                parse_reg(args[$index])?
            };
        }
        macro_rules! imm {
            ($index:expr) => {
                Imm(args[$index].to_string())
            };
        }
        macro_rules! rrr {
            ($variant:ident) => {{
                need!(3, "3 registers (Rd, Rs, Rt)");
                Code::$variant(reg!(0), reg!(1), reg!(2))
            }};
        }

        let code = match mnemonic {
            Mnemonic::NOP => Code::NOP(),
            Mnemonic::ADD => rrr!(ADD),
            Mnemonic::SUB => rrr!(SUB),
            Mnemonic::AND => rrr!(AND),
            Mnemonic::OR => rrr!(OR),
            Mnemonic::XOR => rrr!(XOR),
            Mnemonic::NOT => {
                need!(2, "2 registers (Rd, Rs)");
                Code::NOT(reg!(0), reg!(1))
            }
            Mnemonic::MOV => {
                need!(2, "Register and Immediate (e.g., MOV R1, #5)");
                Code::MOV(reg!(0), imm!(1))
            }
            Mnemonic::LDR => {
                need!(2, "Destination and Address Register (e.g., LDR R1, [R2])");
                Code::LDR(reg!(0), reg!(1))
            }
            Mnemonic::STR => {
                need!(2, "Address Register and Data Register (e.g., STR [R2], R1)");
                Code::STR(reg!(0), reg!(1))
            }
            Mnemonic::BEQZ => {
                need!(2, "Register and Address (e.g., BEQZ R1, 0x07)");
                Code::BEQZ(reg!(0), imm!(1))
            }
            Mnemonic::JMP => {
                need!(1, "an Address");
                Code::JMP(imm!(0))
            }
            Mnemonic::HLT => Code::HLT(),
        };
        Ok(code)
    }

    pub fn resolve(&self, symbols: &Symbols) -> Result<Inst, Error> {
        match self {
            Code::NOP() => Ok(Inst::NOP()),
            Code::ADD(rd, rs, rt) => Ok(Inst::ADD(*rd, *rs, *rt)),
            Code::SUB(rd, rs, rt) => Ok(Inst::SUB(*rd, *rs, *rt)),
            Code::AND(rd, rs, rt) => Ok(Inst::AND(*rd, *rs, *rt)),
            Code::OR(rd, rs, rt) => Ok(Inst::OR(*rd, *rs, *rt)),
            Code::XOR(rd, rs, rt) => Ok(Inst::XOR(*rd, *rs, *rt)),
            Code::NOT(rd, rs) => Ok(Inst::NOT(*rd, *rs)),
            Code::MOV(rd, imm) => {
                let value = imm.resolve(symbols)?;
                let imm = Imm9::new(value).ok_or(Error::ImmediateOutOfRange(value))?;
                Ok(Inst::MOV(*rd, imm))
            }
            Code::LDR(rd, rs) => Ok(Inst::LDR(*rd, *rs)),
            Code::STR(rs, rt) => Ok(Inst::STR(*rs, *rt)),
            Code::BEQZ(rs, imm) => {
                let value = imm.resolve(symbols)?;
                let target = Addr6::new(value).ok_or(Error::BranchTargetOutOfRange(value))?;
                Ok(Inst::BEQZ(*rs, target))
            }
            Code::JMP(imm) => {
                let value = imm.resolve(symbols)?;
                let target = Addr6::new(value).ok_or(Error::JumpTargetOutOfRange(value))?;
                Ok(Inst::JMP(target))
            }
            Code::HLT() => Ok(Inst::HLT()),
        }
    }
}

// ----------------------------------------------------------------------------
// Immediate

/// Raw immediate operand: `#5`, `0x1F`, or a label name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Imm(pub String);

impl Imm {
    pub fn resolve(&self, symbols: &Symbols) -> Result<i64, Error> {
        parse_imm(&self.0, symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enc(code: &str) -> Result<u16, Error> {
        let mut symbols = Symbols::new();
        symbols.insert("TOP".to_string(), 0, 0);
        symbols.insert("FAR".to_string(), 100, 1);
        Code::parse(code)?.resolve(&symbols).map(|inst| inst.to_bin())
    }

    macro_rules! test_enc {
        ($($name:ident: $code:expr => $bin:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(enc($code).unwrap(), $bin);
                }
            )*
        }
    }

    test_enc! {
        enc_nop: "NOP" => 0x0000,
        enc_add: "ADD R1, R2, R3" => 0x1000 | 1 << 9 | 2 << 6 | 3 << 3,
        enc_sub_lower: "sub R1 R2 R3" => 0x2000 | 1 << 9 | 2 << 6 | 3 << 3,
        enc_and_tight: "AND R1,R2,R3" => 0x3000 | 1 << 9 | 2 << 6 | 3 << 3,
        enc_or: "or R0, R0, R7" => 0x4000 | 7 << 3,
        enc_xor: "Xor R7, R7, R7" => 0x5000 | 7 << 9 | 7 << 6 | 7 << 3,
        enc_not: "NOT R4, R5" => 0x6000 | 4 << 9 | 5 << 6,
        enc_mov: "MOV R3, #300" => 0x7000 | 3 << 9 | 300,
        enc_mov_hex: "MOV R1, 0x1F" => 0x7000 | 1 << 9 | 0x1F,
        enc_mov_neg: "MOV R2, #-256" => 0x7000 | 2 << 9 | 0x100,
        enc_mov_label: "MOV R0, #FAR" => 0x7000 | 100,
        enc_ldr: "LDR R1, [R2]" => 0x8000 | 1 << 9 | 2 << 6,
        enc_str: "STR [R2], R1" => 0x9000 | 2 << 6 | 1 << 3,
        enc_beqz: "BEQZ R1, 63" => 0xA000 | 1 << 6 | 0x3F,
        enc_beqz_label: "BEQZ R5, TOP" => 0xA000 | 5 << 6,
        enc_jmp: "JMP 0x2A" => 0xB02A,
        enc_jmp_label: "jmp #TOP" => 0xB000,
        enc_hlt: "HLT" => 0xE000,
        enc_extra_operands: "HLT R1" => 0xE000,
    }

    #[test]
    fn mov_out_of_range() {
        assert!(matches!(enc("MOV R0, #512"), Err(Error::ImmediateOutOfRange(512))));
        assert!(matches!(enc("MOV R0, #-257"), Err(Error::ImmediateOutOfRange(-257))));
        assert!(enc("MOV R0, #511").is_ok());
    }

    #[test]
    fn target_out_of_range() {
        assert!(matches!(enc("BEQZ R1, 70"), Err(Error::BranchTargetOutOfRange(70))));
        assert!(matches!(enc("BEQZ R1, -1"), Err(Error::BranchTargetOutOfRange(-1))));
        assert!(matches!(enc("BEQZ R1, FAR"), Err(Error::BranchTargetOutOfRange(100))));
        assert!(matches!(enc("JMP 64"), Err(Error::JumpTargetOutOfRange(64))));
    }

    #[test]
    fn missing_arguments() {
        for (code, name) in [
            ("ADD R1, R2", "ADD"),
            ("NOT R1", "NOT"),
            ("MOV R1", "MOV"),
            ("LDR R1", "LDR"),
            ("STR", "STR"),
            ("BEQZ R1", "BEQZ"),
            ("JMP", "JMP"),
        ] {
            match enc(code) {
                Err(Error::MissingArguments { mnemonic, .. }) => assert_eq!(mnemonic, name),
                other => panic!("{code}: {other:?}"),
            }
        }
    }

    #[test]
    fn count_checked_before_operands() {
        assert!(matches!(enc("ADD R9, R2"), Err(Error::MissingArguments { .. })));
    }

    #[test]
    fn bad_operands() {
        assert!(matches!(enc("ADD R1, R2, R8"), Err(Error::InvalidRegister(r)) if r == "R8"));
        assert!(matches!(enc("MOV X, #1"), Err(Error::InvalidRegister(r)) if r == "X"));
        assert!(matches!(enc("JMP NOWHERE"), Err(Error::InvalidImmediateOrLabel(t)) if t == "NOWHERE"));
        assert!(matches!(enc("MOV R1, #abc"), Err(Error::InvalidImmediateOrLabel(t)) if t == "abc"));
    }

    #[test]
    fn unknown_instruction() {
        assert!(matches!(enc("PUSH R1"), Err(Error::UnknownInstruction(op)) if op == "PUSH"));
        // LD/ST are opcodes, not mnemonics
        assert!(matches!(enc("LD R1, R2"), Err(Error::UnknownInstruction(_))));
        assert!(matches!(enc(","), Err(Error::UnknownInstruction(_))));
    }
}
