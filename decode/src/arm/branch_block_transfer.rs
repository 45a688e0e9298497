//! # Branch and Block Data Transfer (selector `10`)
//!
//! ```text
//! 31-28  27-26  25-20  19-16  15  14-0
//! [Cond] [ 10 ] [ op ] [ Rn ] [R] [register list / offset]
//! ```
//!
//! | op       | Mnemonic                              |
//! |----------|---------------------------------------|
//! | 0000x0   | STMDA                                 |
//! | 0000x1   | LDMDA                                 |
//! | 0010x0   | STM (STMIA)                           |
//! | 0010x1   | LDMIA, POP when op=001011 and Rn=SP   |
//! | 0100x0   | STMDB, PUSH when op=010010 and Rn=SP  |
//! | 0100x1   | LDMDB                                 |
//! | 0110x0   | STMIB                                 |
//! | 0110x1   | LDMIB                                 |
//! | 0xx1x0   | STM of the user bank                  |
//! | 0xx1x1   | LDM of the user bank                  |
//! | 10xxxx   | B                                     |
//! | 11xxxx   | BL                                    |
//!
//! The `x` at bit 21 is the write-back flag. PUSH and POP are the
//! write-back forms on the stack pointer (`STMDB SP!` / `LDMIA SP!`).

use crate::arm::word::ArmWord;
use crate::bitwise::Bits;
use crate::mnemonic::Mnemonic;

const STACK_POINTER: u8 = 0b1101;

const BLOCK_TRANSFERS: [(&str, Mnemonic); 8] = [
    ("0000x0", Mnemonic::Stmda),
    ("0000x1", Mnemonic::Ldmda),
    ("0010x0", Mnemonic::Stm),
    ("0010x1", Mnemonic::Ldmia),
    ("0100x0", Mnemonic::Stmdb),
    ("0100x1", Mnemonic::Ldmdb),
    ("0110x0", Mnemonic::Stmib),
    ("0110x1", Mnemonic::Ldmib),
];

const USER_BANK_TRANSFERS: [(&str, Mnemonic); 2] = [
    ("0xx1x0", Mnemonic::StmUser),
    ("0xx1x1", Mnemonic::LdmUser),
];

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct BranchBlockFields {
    /// Bits 25-20.
    pub op: u8,
    /// Bits 19-16.
    pub rn: u8,
    /// Bit 15: PC in the register list.
    pub r: bool,
}

impl From<ArmWord> for BranchBlockFields {
    fn from(word: ArmWord) -> Self {
        Self {
            op: word.get_field(20..=25),
            rn: word.rn(),
            r: word.get_bit(15),
        }
    }
}

/// Resolves a word the classifier placed in
/// [`Format::BranchOrBlockTransfer`](crate::Format::BranchOrBlockTransfer).
#[must_use]
pub fn resolve(word: ArmWord) -> Mnemonic {
    let fields = BranchBlockFields::from(word);

    if let Some(mnemonic) = block_transfer(fields) {
        return mnemonic;
    }

    if let Some(mnemonic) = lookup(&USER_BANK_TRANSFERS, fields.op) {
        return mnemonic;
    }

    match fields.op.get_bits(4..=5) {
        0b10 => Mnemonic::B,
        0b11 => Mnemonic::Bl,
        _ => {
            tracing::debug!(
                "unclassified branch/block transfer: word={word}, op=0b{:06b}, rn={}, r={}",
                fields.op,
                fields.rn,
                fields.r
            );
            Mnemonic::Unclassified
        }
    }
}

fn block_transfer(fields: BranchBlockFields) -> Option<Mnemonic> {
    let mnemonic = lookup(&BLOCK_TRANSFERS, fields.op)?;

    let on_stack = fields.rn == STACK_POINTER;
    Some(match mnemonic {
        Mnemonic::Ldmia if on_stack && fields.op == 0b00_1011 => Mnemonic::Pop,
        Mnemonic::Stmdb if on_stack && fields.op == 0b01_0010 => Mnemonic::Push,
        other => other,
    })
}

fn lookup(table: &[(&str, Mnemonic)], op: u8) -> Option<Mnemonic> {
    table
        .iter()
        .find(|(pattern, _)| op.matches_pattern(0..=5, pattern))
        .map(|(_, mnemonic)| *mnemonic)
}
