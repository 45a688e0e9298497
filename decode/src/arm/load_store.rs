//! # Load/Store Word and Unsigned Byte (selector `01`)
//!
//! ```text
//! 31-28  27-26  25  24  23  22  21  20  19-16  15-12  11-5      4  3-0
//! [Cond] [ 01 ] [A] [P] [U] [B] [W] [L] [Rn ]  [Rd ]  [offset]  [B] [..]
//!                   └────────── op1 ──────┘
//! ```
//!
//! `op1` (bits 24-20) keys a 32-entry table. Post-indexed (P=0) with
//! write-back (W=1) is the user-mode translation form (`T` suffix); bit 22
//! picks byte over word and bit 20 picks load over store. `A` and the
//! low `B` bit belong to the addressing-mode stage and are not looked at.

use crate::arm::word::ArmWord;
use crate::bitwise::Bits;
use crate::mnemonic::Mnemonic;

/// Indexed by `op1` = P U B W L.
const LOAD_STORE: [Mnemonic; 32] = [
    Mnemonic::Str,   // 00000
    Mnemonic::Ldr,   // 00001
    Mnemonic::Strt,  // 00010
    Mnemonic::Ldrt,  // 00011
    Mnemonic::Strb,  // 00100
    Mnemonic::Ldrb,  // 00101
    Mnemonic::Strbt, // 00110
    Mnemonic::Ldrbt, // 00111
    Mnemonic::Str,   // 01000
    Mnemonic::Ldr,   // 01001
    Mnemonic::Strt,  // 01010
    Mnemonic::Ldrt,  // 01011
    Mnemonic::Strb,  // 01100
    Mnemonic::Ldrb,  // 01101
    Mnemonic::Strbt, // 01110
    Mnemonic::Ldrbt, // 01111
    Mnemonic::Str,   // 10000
    Mnemonic::Ldr,   // 10001
    Mnemonic::Str,   // 10010
    Mnemonic::Ldr,   // 10011
    Mnemonic::Strb,  // 10100
    Mnemonic::Ldrb,  // 10101
    Mnemonic::Strb,  // 10110
    Mnemonic::Ldrb,  // 10111
    Mnemonic::Str,   // 11000
    Mnemonic::Ldr,   // 11001
    Mnemonic::Str,   // 11010
    Mnemonic::Ldr,   // 11011
    Mnemonic::Strb,  // 11100
    Mnemonic::Ldrb,  // 11101
    Mnemonic::Strb,  // 11110
    Mnemonic::Ldrb,  // 11111
];

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct LoadStoreFields {
    /// Bit 25: register offset.
    pub a: bool,
    /// Bit 4.
    pub b: bool,
    /// Bits 24-20.
    pub op1: u8,
}

impl From<ArmWord> for LoadStoreFields {
    fn from(word: ArmWord) -> Self {
        Self {
            a: word.get_bit(25),
            b: word.get_bit(4),
            op1: word.get_field(20..=24),
        }
    }
}

/// Resolves a word the classifier placed in
/// [`Format::LoadStoreWordUnsigned`](crate::Format::LoadStoreWordUnsigned).
#[must_use]
pub fn resolve(word: ArmWord) -> Mnemonic {
    let fields = LoadStoreFields::from(word);

    if let Some(mnemonic) = LOAD_STORE.get(usize::from(fields.op1)) {
        *mnemonic
    } else {
        tracing::debug!(
            "unclassified load/store: word={word}, op1=0b{:05b}, a={}, b={}",
            fields.op1,
            fields.a,
            fields.b
        );
        Mnemonic::Unclassified
    }
}
