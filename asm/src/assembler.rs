use arch::inst::Inst;

use crate::{
    code::Code,
    error::{Error, LineError},
    hex,
    label::{collect_labels, Symbols},
    parser::Line,
};

/// One emitted instruction word and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word {
    pub addr: usize,
    /// 0-based source line
    pub line_idx: usize,
    pub inst: Inst,
    pub bin: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembled {
    pub symbols: Symbols,
    pub words: Vec<Word>,
}

impl Assembled {
    pub fn bins(&self) -> Vec<u16> {
        self.words.iter().map(|word| word.bin).collect()
    }

    pub fn to_hex(&self) -> String {
        hex::to_hex(&self.bins())
    }
}

/// Encodes a single source line. Blank, comment-only and label-only
/// lines yield `None`.
pub fn assemble_line(raw: &str, symbols: &Symbols) -> Result<Option<Inst>, Error> {
    match Line::parse(raw)?.code {
        Some(code) => Code::parse(code)?.resolve(symbols).map(Some),
        None => Ok(None),
    }
}

/// Pass 2: encode every instruction line against a finished symbol table.
pub fn encode_program(source: &str, symbols: &Symbols) -> Result<Vec<Word>, LineError> {
    let mut words = vec![];
    for (idx, raw) in source.lines().enumerate() {
        let inst = assemble_line(raw, symbols).map_err(|e| LineError::new(idx, raw, e))?;
        if let Some(inst) = inst {
            words.push(Word {
                addr: words.len(),
                line_idx: idx,
                inst,
                bin: inst.to_bin(),
            });
        }
    }
    Ok(words)
}

/// Runs both passes. Stops at the first failing line.
pub fn assemble(source: &str) -> Result<Assembled, LineError> {
    let symbols = collect_labels(source)?;
    let words = encode_program(source, &symbols)?;
    Ok(Assembled { symbols, words })
}
