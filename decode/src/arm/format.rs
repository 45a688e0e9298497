use serde::{Deserialize, Serialize};

use crate::arm::word::ArmWord;
use crate::condition::Condition;

/// Top-level classification of a 32-bit word, from its primary selector.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum Format {
    /// Selector `00`: ALU operations, multiplies, halfword and signed loads.
    DataProcessingOrMisc,

    /// Selector `01`: word and unsigned byte loads/stores.
    LoadStoreWordUnsigned,

    /// Selector `10`: `LDM`/`STM` and `B`/`BL`.
    BranchOrBlockTransfer,

    /// Selector `11`: coprocessor transfers and data operations.
    CoprocessorOrSimd,

    /// Condition `1111` with selector `11`, only produced when
    /// [`DecoderConfig::escalate_unconditional`](crate::DecoderConfig) is set.
    Unconditional,

    /// Selector values the 2-bit field cannot hold.
    Undefined,
}

impl Format {
    /// Maps the primary selector (bits 27-26) to a format.
    #[must_use]
    pub fn classify(word: ArmWord) -> Self {
        Self::classify_with(word, false)
    }

    /// Same as [`Format::classify`]; with `escalate_unconditional` a word in
    /// the `NV` condition space with selector `11` becomes [`Format::Unconditional`].
    #[must_use]
    pub fn classify_with(word: ArmWord, escalate_unconditional: bool) -> Self {
        match word.primary_selector() {
            0b00 => Self::DataProcessingOrMisc,
            0b01 => Self::LoadStoreWordUnsigned,
            0b10 => Self::BranchOrBlockTransfer,
            0b11 if escalate_unconditional && word.condition() == Condition::NV => {
                Self::Unconditional
            }
            0b11 => Self::CoprocessorOrSimd,
            selector => {
                tracing::debug!(
                    "selector out of range: word={word}, selector=0b{selector:b}"
                );
                Self::Undefined
            }
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataProcessingOrMisc => f.write_str("data processing/misc"),
            Self::LoadStoreWordUnsigned => f.write_str("load/store word unsigned"),
            Self::BranchOrBlockTransfer => f.write_str("branch/block transfer"),
            Self::CoprocessorOrSimd => f.write_str("coprocessor/SIMD"),
            Self::Unconditional => f.write_str("unconditional"),
            Self::Undefined => f.write_str("undefined"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::Rng;

    #[test]
    fn classify_by_selector() {
        assert_eq!(
            Format::classify(ArmWord::new(0xE3A0_0FD2)),
            Format::DataProcessingOrMisc
        );
        assert_eq!(
            Format::classify(ArmWord::new(0xE590_2000)),
            Format::LoadStoreWordUnsigned
        );
        assert_eq!(
            Format::classify(ArmWord::new(0xEA7F_FFFD)),
            Format::BranchOrBlockTransfer
        );
        assert_eq!(
            Format::classify(ArmWord::new(0xEE01_0F10)),
            Format::CoprocessorOrSimd
        );
    }

    #[test]
    fn selector_alone_decides() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let low: u32 = rng.gen_range(0..(1 << 26));
            let condition: u32 = rng.gen_range(0..=0xF);
            for (selector, expected) in [
                (0b00, Format::DataProcessingOrMisc),
                (0b01, Format::LoadStoreWordUnsigned),
                (0b10, Format::BranchOrBlockTransfer),
                (0b11, Format::CoprocessorOrSimd),
            ] {
                let word = ArmWord::new((condition << 28) | (selector << 26) | low);
                assert_eq!(Format::classify(word), expected);
            }
        }
    }

    #[test]
    fn never_undefined_for_real_words() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let word = ArmWord::new(rng.r#gen());
            assert_ne!(Format::classify(word), Format::Undefined);
            assert_ne!(Format::classify(word), Format::Unconditional);
        }
    }

    #[test]
    fn unconditional_only_when_escalating() {
        let word = ArmWord::new(0xFC00_0000);
        assert_eq!(Format::classify(word), Format::CoprocessorOrSimd);
        assert_eq!(Format::classify_with(word, true), Format::Unconditional);

        // NV condition outside selector 11 keeps its format.
        let word = ArmWord::new(0xF590_2000);
        assert_eq!(
            Format::classify_with(word, true),
            Format::LoadStoreWordUnsigned
        );

        // Selector 11 with any other condition stays coprocessor.
        let word = ArmWord::new(0xEC00_0000);
        assert_eq!(Format::classify_with(word, true), Format::CoprocessorOrSimd);
    }
}
