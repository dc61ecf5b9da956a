use crate::{
    format::{enc_b, enc_j, enc_m, enc_r, Fields},
    imm::{Addr6, Imm9},
    opcode::Opcode,
    reg::Reg,
};

use color_print::cformat;

/// One assembled instruction. Operands are already range checked, so
/// encoding cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    NOP(),
    ADD(Reg, Reg, Reg),
    SUB(Reg, Reg, Reg),
    AND(Reg, Reg, Reg),
    OR(Reg, Reg, Reg),
    XOR(Reg, Reg, Reg),
    NOT(Reg, Reg),
    MOV(Reg, Imm9),
    /// `LDR rd, [rs]`
    LDR(Reg, Reg),
    /// `STR [rs], rt`: address register, data register
    STR(Reg, Reg),
    BEQZ(Reg, Addr6),
    JMP(Addr6),
    HLT(),
}

impl Inst {
    pub fn opcode(&self) -> Opcode {
        match self {
            Inst::NOP() => Opcode::NOP,
            Inst::ADD(..) => Opcode::ADD,
            Inst::SUB(..) => Opcode::SUB,
            Inst::AND(..) => Opcode::AND,
            Inst::OR(..) => Opcode::OR,
            Inst::XOR(..) => Opcode::XOR,
            Inst::NOT(..) => Opcode::NOT,
            Inst::MOV(..) => Opcode::MOV,
            Inst::LDR(..) => Opcode::LD,
            Inst::STR(..) => Opcode::ST,
            Inst::BEQZ(..) => Opcode::BEQZ,
            Inst::JMP(..) => Opcode::JMP,
            Inst::HLT() => Opcode::HLT,
        }
    }

    pub fn to_bin(&self) -> u16 {
        let op = self.opcode();
        match *self {
            Inst::ADD(rd, rs, rt)
            | Inst::SUB(rd, rs, rt)
            | Inst::AND(rd, rs, rt)
            | Inst::OR(rd, rs, rt)
            | Inst::XOR(rd, rs, rt) => enc_r(op, rd.idx(), rs.idx(), rt.idx()),
            Inst::NOT(rd, rs) => enc_r(op, rd.idx(), rs.idx(), 0),
            Inst::LDR(rd, rs) => enc_r(op, rd.idx(), rs.idx(), 0),
            Inst::STR(rs, rt) => enc_r(op, 0, rs.idx(), rt.idx()),
            Inst::MOV(rd, imm) => enc_m(op, rd.idx(), imm.get()),
            Inst::BEQZ(rs, target) => enc_b(op, rs.idx(), target.get()),
            Inst::JMP(target) => enc_j(op, target.get()),
            Inst::NOP() | Inst::HLT() => op.bits() << 12,
        }
    }

    /// Returns `None` for the unused opcodes.
    pub fn from_bin(bin: u16) -> Option<Inst> {
        let f = Fields::decode(bin);
        let rd = Reg::from_field(f.rd);
        let rs = Reg::from_field(f.rs);
        let rt = Reg::from_field(f.rt);
        let inst = match Opcode::try_from(f.opcode).ok()? {
            Opcode::NOP => Inst::NOP(),
            Opcode::ADD => Inst::ADD(rd, rs, rt),
            Opcode::SUB => Inst::SUB(rd, rs, rt),
            Opcode::AND => Inst::AND(rd, rs, rt),
            Opcode::OR => Inst::OR(rd, rs, rt),
            Opcode::XOR => Inst::XOR(rd, rs, rt),
            Opcode::NOT => Inst::NOT(rd, rs),
            Opcode::MOV => Inst::MOV(rd, Imm9::from_field(f.imm9)),
            Opcode::LD => Inst::LDR(rd, rs),
            Opcode::ST => Inst::STR(rs, rt),
            Opcode::BEQZ => Inst::BEQZ(rs, Addr6::from_field(f.imm6)),
            Opcode::JMP => Inst::JMP(Addr6::from_field(f.imm6)),
            Opcode::HLT => Inst::HLT(),
        };
        Some(inst)
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        macro_rules! rrr {
            ($name:expr, $rd:expr, $rs:expr, $rt:expr) => {
                cformat!("<r>{:<5}</><b>{:<3} {:<3} {:<3}</>", $name, $rd, $rs, $rt)
            };
        }

        macro_rules! rri {
            ($name:expr, $rd:expr, $imm:expr) => {
                cformat!("<r>{:<5}</><b>{:<3} <y>{}</></>", $name, $rd, $imm)
            };
        }

        match self {
            Inst::NOP() => rrr!("nop", "", "", ""),
            Inst::ADD(rd, rs, rt) => rrr!("add", rd, rs, rt),
            Inst::SUB(rd, rs, rt) => rrr!("sub", rd, rs, rt),
            Inst::AND(rd, rs, rt) => rrr!("and", rd, rs, rt),
            Inst::OR(rd, rs, rt) => rrr!("or", rd, rs, rt),
            Inst::XOR(rd, rs, rt) => rrr!("xor", rd, rs, rt),
            Inst::NOT(rd, rs) => rrr!("not", rd, rs, ""),
            Inst::LDR(rd, rs) => rrr!("ldr", rd, format!("[{}]", rs), ""),
            Inst::STR(rs, rt) => rrr!("str", format!("[{}]", rs), rt, ""),
            Inst::MOV(rd, imm) => rri!("mov", rd, imm),
            Inst::BEQZ(rs, target) => rri!("beqz", rs, target),
            Inst::JMP(target) => rri!("jmp", "", target),
            Inst::HLT() => rrr!("hlt", "", "", ""),
        }
    }
}
