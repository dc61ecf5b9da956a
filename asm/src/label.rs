use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    code::Mnemonic,
    error::{Error, LineError},
    parser::Line,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub addr: usize,
    /// 1-based source line of the definition
    pub line: usize,
}

/// Label name -> instruction address, in definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Symbols(IndexMap<String, Symbol>);

impl Symbols {
    pub fn new() -> Self {
        Symbols(IndexMap::new())
    }

    pub fn insert(&mut self, name: String, addr: usize, line_idx: usize) -> Option<Symbol> {
        let symbol = Symbol {
            addr,
            line: line_idx + 1,
        };
        self.0.insert(name, symbol)
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.0.get(name).map(|symbol| symbol.addr)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.0.iter().map(|(name, symbol)| (name.as_str(), symbol))
    }
}

/// Pass 1: walk the source once and bind every label to the address of
/// the instruction that follows it.
pub fn collect_labels(source: &str) -> Result<Symbols, LineError> {
    let mut symbols = Symbols::new();
    let mut pc = 0;
    for (idx, raw) in source.lines().enumerate() {
        let line = Line::parse(raw).map_err(|e| LineError::new(idx, raw, e))?;
        if let Some(label) = line.label {
            if Mnemonic::parse(label).is_some() {
                let e = Error::LabelShadowsMnemonic(label.to_string());
                return Err(LineError::new(idx, raw, e));
            }
            if symbols.insert(label.to_string(), pc, idx).is_some() {
                let e = Error::RedefinedLabel(label.to_string());
                return Err(LineError::new(idx, raw, e));
            }
        }
        if line.is_inst() {
            pc += 1;
        }
    }
    Ok(symbols)
}
