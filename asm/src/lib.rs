pub mod assembler;
pub mod code;
pub mod error;
pub mod hex;
pub mod label;
pub mod operand;
pub mod parser;
pub mod util;

pub use assembler::{assemble, Assembled};
pub use error::{Error, LineError};
