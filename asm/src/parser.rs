use crate::error::Error;

/// Drops everything from the first `;` and trims the rest.
pub fn strip_comment(raw: &str) -> &str {
    let code = match raw.find(';') {
        Some(idx) => &raw[..idx],
        None => raw,
    };
    code.trim()
}

/// Lexical shape of one source line. Both passes classify lines through
/// this type, so they always agree on which lines emit a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub label: Option<&'a str>,
    pub code: Option<&'a str>,
}

impl<'a> Line<'a> {
    pub fn parse(raw: &'a str) -> Result<Line<'a>, Error> {
        let text = strip_comment(raw);
        let (label, code) = match text.split_once(':') {
            Some((label, rest)) => {
                let label = label.trim();
                if label.is_empty() || label.contains(|c: char| c.is_whitespace() || c == ',') {
                    return Err(Error::InvalidLabel(label.to_string()));
                }
                (Some(label), rest.trim())
            }
            None => (None, text),
        };
        Ok(Line {
            label,
            code: (!code.is_empty()).then_some(code),
        })
    }

    /// Whether this line occupies an instruction address.
    pub fn is_inst(&self) -> bool {
        self.code.is_some()
    }
}
