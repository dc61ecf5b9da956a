use arch::reg::Reg;

use crate::{error::Error, label::Symbols};

/// `R3`, `[R3]` and `R3,` all name register 3.
pub fn parse_reg(token: &str) -> Result<Reg, Error> {
    let cleaned = token.trim().replace(['[', ']'], "");
    let cleaned = cleaned.trim_end_matches(',');
    Reg::parse(cleaned).ok_or_else(|| Error::InvalidRegister(cleaned.to_string()))
}

/// Resolves `#value`, `value` or `label`. A defined label wins over a
/// literal with the same spelling.
pub fn parse_imm(token: &str, symbols: &Symbols) -> Result<i64, Error> {
    let token = token.trim();
    let token = token.strip_prefix('#').unwrap_or(token);
    if let Some(addr) = symbols.get(token) {
        return Ok(addr as i64);
    }
    parse_int(token).ok_or_else(|| Error::InvalidImmediateOrLabel(token.to_string()))
}

/// Decimal, or `0x`/`0b`/`0o` prefixed, with an optional sign.
pub fn parse_int(s: &str) -> Option<i64> {
    let (neg, body) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match body.get(..2).map(|p| p.to_ascii_lowercase()) {
        Some(p) if p == "0x" => (16, &body[2..]),
        Some(p) if p == "0b" => (2, &body[2..]),
        Some(p) if p == "0o" => (8, &body[2..]),
        _ => (10, body),
    };
    // from_str_radix would take a second sign
    if !digits.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        return None;
    }
    let value = i64::from_str_radix(digits, radix).ok()?;
    Some(if neg { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reg_forms() {
        assert_eq!(parse_reg("R0").unwrap(), Reg::R0);
        assert_eq!(parse_reg("[R3]").unwrap(), Reg::R3);
        assert_eq!(parse_reg("R7,").unwrap(), Reg::R7);
        assert_eq!(parse_reg("[R5],").unwrap(), Reg::R5);
    }

    #[test]
    fn reg_invalid_names_token() {
        for bad in ["R8", "r1", "X", "[SP]", "#3"] {
            match parse_reg(bad) {
                Err(Error::InvalidRegister(tok)) => assert_eq!(tok, bad.replace(['[', ']'], "")),
                other => panic!("{bad}: {other:?}"),
            }
        }
    }

    #[test]
    fn int_literals() {
        assert_eq!(parse_int("5"), Some(5));
        assert_eq!(parse_int("0x3F"), Some(63));
        assert_eq!(parse_int("0X3f"), Some(63));
        assert_eq!(parse_int("0b101"), Some(5));
        assert_eq!(parse_int("0o17"), Some(15));
        assert_eq!(parse_int("-256"), Some(-256));
        assert_eq!(parse_int("-0x10"), Some(-16));
        assert_eq!(parse_int("+7"), Some(7));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("0x"), None);
        assert_eq!(parse_int("0x+5"), None);
        assert_eq!(parse_int("--5"), None);
        assert_eq!(parse_int("LOOP"), None);
        assert_eq!(parse_int("12abc"), None);
    }

    #[test]
    fn imm_prefers_label() {
        let mut symbols = Symbols::new();
        symbols.insert("LOOP".to_string(), 4, 0);
        symbols.insert("10".to_string(), 2, 1);
        assert_eq!(parse_imm("#LOOP", &symbols).unwrap(), 4);
        assert_eq!(parse_imm("LOOP", &symbols).unwrap(), 4);
        assert_eq!(parse_imm("10", &symbols).unwrap(), 2);
        assert_eq!(parse_imm("#0x10", &symbols).unwrap(), 16);
        assert!(matches!(
            parse_imm("loop", &symbols),
            Err(Error::InvalidImmediateOrLabel(tok)) if tok == "loop"
        ));
    }
}
