use serde::{Deserialize, Serialize};

use crate::bitwise::Bits;
use crate::condition::Condition;

/// A raw 32-bit ARM-state instruction word.
///
/// Every accessor is a pure function of the wrapped value. Fields whose
/// meaning depends on the format (`op`, `op1`, `op2`) are read by the
/// resolver of that format, not here.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Serialize, Deserialize)]
pub struct ArmWord(u32);

impl ArmWord {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Bits 31-28.
    #[must_use]
    pub fn condition(self) -> Condition {
        Condition::from(self.0.get_field(28..=31))
    }

    /// Bits 27-26.
    #[must_use]
    pub fn primary_selector(self) -> u8 {
        self.0.get_field(26..=27)
    }

    /// Base register, bits 19-16.
    #[must_use]
    pub fn rn(self) -> u8 {
        self.0.get_field(16..=19)
    }

    /// Destination register, bits 15-12.
    #[must_use]
    pub fn rd(self) -> u8 {
        self.0.get_field(12..=15)
    }
}

impl From<u32> for ArmWord {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<ArmWord> for u32 {
    fn from(word: ArmWord) -> Self {
        word.0
    }
}

impl std::ops::Deref for ArmWord {
    type Target = u32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ArmWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn condition_and_selector() {
        // MOV R0, #840
        let word = ArmWord::new(0xE3A0_0FD2);
        assert_eq!(word.condition(), Condition::AL);
        assert_eq!(word.primary_selector(), 0b00);

        // LDR R2, [R0]
        let word = ArmWord::new(0xE590_2000);
        assert_eq!(word.primary_selector(), 0b01);

        // BEQ
        let word = ArmWord::new(0x0A00_007F);
        assert_eq!(word.condition(), Condition::EQ);
        assert_eq!(word.primary_selector(), 0b10);
    }

    #[test]
    fn registers() {
        // PUSH {r4-r5} = STMDB SP!, {r4-r5}
        let word = ArmWord::new(0xE92D_0030);
        assert_eq!(word.rn(), 13);

        // STR R14, [R9]
        let word = ArmWord::new(0xE589_E000);
        assert_eq!(word.rn(), 9);
        assert_eq!(word.rd(), 14);
    }

    #[test]
    fn deref_to_raw_bits() {
        let word = ArmWord::from(0b1110_1011_0000_0000_0000_0000_0111_1111);
        assert!(word.get_bit(24));
        assert_eq!(word.get_bits(25..=27), 0b101);
        assert_eq!(u32::from(word), 0xEB00_007F);
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(ArmWord::new(0xE3A0_0FD2).to_string(), "0xE3A00FD2");
        assert_eq!(ArmWord::new(0x10).to_string(), "0x00000010");
    }
}
