pub mod format;
pub mod imm;
pub mod inst;
pub mod opcode;
pub mod reg;
