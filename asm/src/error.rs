use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid register: `{0}`. Expected R0-R7")]
    InvalidRegister(String),

    #[error("Invalid immediate value or label: `{0}`")]
    InvalidImmediateOrLabel(String),

    #[error("Immediate {0} out of range for 9-bit field (-256 to 511)")]
    ImmediateOutOfRange(i64),

    #[error("Branch target {0} out of range for 6-bit address (0 to 63)")]
    BranchTargetOutOfRange(i64),

    #[error("Jump target {0} out of range for 6-bit address (0 to 63)")]
    JumpTargetOutOfRange(i64),

    #[error("Missing arguments: {mnemonic} requires {expected}")]
    MissingArguments {
        mnemonic: &'static str,
        expected: &'static str,
    },

    #[error("Unknown instruction: `{0}`")]
    UnknownInstruction(String),

    #[error("Invalid label: `{0}`")]
    InvalidLabel(String),

    #[error("Re-defined label: `{0}`")]
    RedefinedLabel(String),

    #[error("Label `{0}` collides with an instruction mnemonic")]
    LabelShadowsMnemonic(String),

    #[error("Input file not found: {0}")]
    InputNotFound(String),

    #[error("Failed to read file: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to serialize symbol table")]
    SymbolExport(#[from] serde_yaml::Error),
}

/// An [`Error`] tied to the source line that produced it.
#[derive(Error, Debug)]
#[error("line {}: {}", .line_idx + 1, .error)]
pub struct LineError {
    /// 0-based
    pub line_idx: usize,
    pub raw: String,
    #[source]
    pub error: Error,
}

impl LineError {
    pub fn new(line_idx: usize, raw: &str, error: Error) -> Self {
        LineError {
            line_idx,
            raw: raw.to_string(),
            error,
        }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str) {
        cprintln!("<red,bold>error</>: {}", self.error);
        print_location(file, self.line_idx, &self.raw);
    }
}

pub fn print_warn(msg: &str, file: &str, line_idx: usize, raw: &str) {
    cprintln!("<yellow,bold>warn</>: {}", msg);
    print_location(file, line_idx, raw);
}

fn print_location(file: &str, line_idx: usize, raw: &str) {
    let line_num = line_idx + 1;
    cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
    cprintln!("      <blue>|</>");
    cprintln!(" <blue>{:>4} |</> {}", line_num, raw);
    cprintln!("      <blue>|</>");
}
