//! Range-checked immediate fields.
//!
//! A value of one of these types always fits its bit field, so the
//! encoders never have to truncate silently.

use std::fmt;

/// 9-bit MOV immediate. Accepts -256..=511 and stores the masked field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Imm9(u16);

impl Imm9 {
    pub const MIN: i64 = -256;
    pub const MAX: i64 = 511;
    pub const MASK: u16 = 0x1FF;

    pub fn new(value: i64) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Some(Imm9((value as u16) & Self::MASK))
        } else {
            None
        }
    }

    pub fn from_field(field: u16) -> Self {
        Imm9(field & Self::MASK)
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

/// 6-bit absolute instruction address, 0..=63.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Addr6(u16);

impl Addr6 {
    pub const MIN: i64 = 0;
    pub const MAX: i64 = 63;
    pub const MASK: u16 = 0x3F;

    pub fn new(value: i64) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Some(Addr6(value as u16))
        } else {
            None
        }
    }

    pub fn from_field(field: u16) -> Self {
        Addr6(field & Self::MASK)
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Imm9 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:03X}", self.0)
    }
}

impl fmt::Display for Addr6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imm9_bounds() {
        assert_eq!(Imm9::new(-256).map(Imm9::get), Some(0x100));
        assert_eq!(Imm9::new(-1).map(Imm9::get), Some(0x1FF));
        assert_eq!(Imm9::new(300).map(Imm9::get), Some(300));
        assert_eq!(Imm9::new(511).map(Imm9::get), Some(0x1FF));
        assert_eq!(Imm9::new(512), None);
        assert_eq!(Imm9::new(-257), None);
    }

    #[test]
    fn addr6_bounds() {
        assert_eq!(Addr6::new(0).map(Addr6::get), Some(0));
        assert_eq!(Addr6::new(63).map(Addr6::get), Some(0x3F));
        assert_eq!(Addr6::new(64), None);
        assert_eq!(Addr6::new(-1), None);
    }
}
