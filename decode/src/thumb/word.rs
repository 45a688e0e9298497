use serde::{Deserialize, Serialize};

use crate::bitwise::Bits;
use crate::condition::Condition;

/// A raw 16-bit Thumb-state instruction word.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Serialize, Deserialize)]
pub struct ThumbWord(u16);

impl ThumbWord {
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Primary field, bits 15-11.
    #[must_use]
    pub fn op(self) -> u8 {
        self.0.get_field(11..=15)
    }

    /// Secondary field, bits 10-8.
    #[must_use]
    pub fn op1(self) -> u8 {
        self.0.get_field(8..=10)
    }

    /// Condition of a conditional branch, bits 11-8.
    #[must_use]
    pub fn condition(self) -> Condition {
        Condition::from(self.0.get_field(8..=11))
    }
}

impl From<u16> for ThumbWord {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<ThumbWord> for u16 {
    fn from(word: ThumbWord) -> Self {
        word.0
    }
}

impl std::ops::Deref for ThumbWord {
    type Target = u16;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ThumbWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}
