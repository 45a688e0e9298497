//! # Condition Field
//!
//! Almost every ARM instruction carries a 4-bit condition in bits 31-28.
//! In Thumb state only the conditional branch (`1101 cond offset8`) does,
//! in bits 11-8. The decoder never evaluates a condition against the
//! flags, it only names it.
//!
//! ```text
//! ┌───────┬────────┬─────────────────────┐
//! │ Code  │ Suffix │     Meaning         │
//! ├───────┼────────┼─────────────────────┤
//! │ 0000  │   EQ   │ Equal               │
//! │ 0001  │   NE   │ Not equal           │
//! │ 0010  │   CS   │ Carry set / ≥ (uns) │
//! │ 0011  │   CC   │ Carry clear / < (u) │
//! │ 0100  │   MI   │ Minus / negative    │
//! │ 0101  │   PL   │ Plus / non-negative │
//! │ 0110  │   VS   │ Overflow set        │
//! │ 0111  │   VC   │ Overflow clear      │
//! │ 1000  │   HI   │ Higher (unsigned)   │
//! │ 1001  │   LS   │ Lower/same (unsig)  │
//! │ 1010  │   GE   │ ≥ (signed)          │
//! │ 1011  │   LT   │ < (signed)          │
//! │ 1100  │   GT   │ > (signed)          │
//! │ 1101  │   LE   │ ≤ (signed)          │
//! │ 1110  │   AL   │ Always              │
//! │ 1111  │   NV   │ Unconditional space │
//! └───────┴────────┴─────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

/// Condition codes, see the [module-level documentation](self).
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum Condition {
    EQ = 0x0,
    NE = 0x1,
    CS = 0x2,
    CC = 0x3,
    MI = 0x4,
    PL = 0x5,
    VS = 0x6,
    VC = 0x7,
    HI = 0x8,
    LS = 0x9,
    GE = 0xA,
    LT = 0xB,
    GT = 0xC,
    LE = 0xD,
    AL = 0xE,
    /// In ARMv1/v2 this meant "never execute". From ARMv5 on, an ARM word
    /// with this condition belongs to the unconditional instruction space.
    /// In a Thumb conditional branch this slot encodes `SWI`.
    NV = 0xF,
}

impl From<u8> for Condition {
    /// Only the low nibble is looked at.
    fn from(item: u8) -> Self {
        match item & 0xF {
            0x0 => Self::EQ,
            0x1 => Self::NE,
            0x2 => Self::CS,
            0x3 => Self::CC,
            0x4 => Self::MI,
            0x5 => Self::PL,
            0x6 => Self::VS,
            0x7 => Self::VC,
            0x8 => Self::HI,
            0x9 => Self::LS,
            0xA => Self::GE,
            0xB => Self::LT,
            0xC => Self::GT,
            0xD => Self::LE,
            0xE => Self::AL,
            _ => Self::NV,
        }
    }
}

impl Condition {
    /// Assembler suffix, empty for `AL`.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::EQ => "EQ",
            Self::NE => "NE",
            Self::CS => "CS",
            Self::CC => "CC",
            Self::MI => "MI",
            Self::PL => "PL",
            Self::VS => "VS",
            Self::VC => "VC",
            Self::HI => "HI",
            Self::LS => "LS",
            Self::GE => "GE",
            Self::LT => "LT",
            Self::GT => "GT",
            Self::LE => "LE",
            Self::AL => "",
            Self::NV => "NV",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_nibble() {
        assert_eq!(Condition::from(0b0000), Condition::EQ);
        assert_eq!(Condition::from(0b1101), Condition::LE);
        assert_eq!(Condition::from(0b1110), Condition::AL);
        assert_eq!(Condition::from(0b1111), Condition::NV);
    }

    #[test]
    fn ignores_high_nibble() {
        assert_eq!(Condition::from(0xF0), Condition::EQ);
        assert_eq!(Condition::from(0x1E), Condition::AL);
    }

    #[test]
    fn value_matches_encoding() {
        for nibble in 0..=0xF_u8 {
            assert_eq!(Condition::from(nibble) as u8, nibble);
        }
    }

    #[test]
    fn suffix() {
        assert_eq!(Condition::NE.to_string(), "NE");
        assert_eq!(Condition::AL.to_string(), "");
    }
}
