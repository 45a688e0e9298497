//! # Coprocessor (selector `11`)
//!
//! Only the three canonical forms are named, keyed on `op1` (bits 27-25)
//! and `op` (bit 20). The rest of the coprocessor/SIMD space resolves to
//! [`Mnemonic::Unclassified`].

use crate::arm::word::ArmWord;
use crate::bitwise::Bits;
use crate::mnemonic::Mnemonic;

/// Resolves a word the classifier placed in
/// [`Format::CoprocessorOrSimd`](crate::Format::CoprocessorOrSimd).
#[must_use]
pub fn resolve(word: ArmWord) -> Mnemonic {
    let op = word.get_bit(20);
    let op1 = word.get_field(25..=27);

    match op1 {
        0b111 if op => Mnemonic::Stc,
        0b111 => Mnemonic::Ldc,
        0b110 => Mnemonic::Cdp,
        _ => {
            tracing::debug!("unclassified coprocessor: word={word}, op1=0b{op1:03b}");
            Mnemonic::Unclassified
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn resolve_raw(raw: u32) -> Mnemonic {
        resolve(ArmWord::new(raw))
    }

    #[test]
    fn decode_canonical_forms() {
        assert_eq!(resolve_raw(0xEE10_0F10), Mnemonic::Stc);
        assert_eq!(resolve_raw(0xEE00_0F10), Mnemonic::Ldc);
        assert_eq!(resolve_raw(0xEC00_0000), Mnemonic::Cdp);
        assert_eq!(resolve_raw(0xED10_0000), Mnemonic::Cdp);
    }

    #[test]
    fn op_only_matters_for_111() {
        for raw in [0xEC00_0000_u32, 0xEC10_0000] {
            assert_eq!(resolve_raw(raw), Mnemonic::Cdp);
        }
    }

    #[test]
    fn other_op1_is_unclassified() {
        // Not reachable through the classifier, the resolver still answers.
        assert_eq!(resolve_raw(0xE800_0000), Mnemonic::Unclassified);
        assert_eq!(resolve_raw(0x0000_0000), Mnemonic::Unclassified);
    }
}
