use serde::{Deserialize, Serialize};

use crate::arm::{self, ArmWord, Format};
use crate::config::DecoderConfig;
use crate::error::DecodeError;
use crate::mnemonic::Mnemonic;
use crate::thumb::{self, ThumbWord};

/// CPU state the caller is decoding for.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Arm,
    Thumb,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arm => f.write_str("ARM"),
            Self::Thumb => f.write_str("THUMB"),
        }
    }
}

/// Encoding a [`ResolvedInstruction`] came from.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum InstructionSource {
    Arm(Format),
    Thumb,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Serialize, Deserialize)]
pub struct ResolvedInstruction {
    pub mnemonic: Mnemonic,
    pub source: InstructionSource,
    /// The word as it was decoded. Thumb words sit in the low 16 bits.
    pub raw: u32,
}

impl ResolvedInstruction {
    /// ARM format of the word, `None` for Thumb.
    #[must_use]
    pub const fn format(&self) -> Option<Format> {
        match self.source {
            InstructionSource::Arm(format) => Some(format),
            InstructionSource::Thumb => None,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self.source {
            InstructionSource::Arm(_) => Mode::Arm,
            InstructionSource::Thumb => Mode::Thumb,
        }
    }
}

impl std::fmt::Display for ResolvedInstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.source {
            InstructionSource::Arm(format) => {
                write!(f, "0x{:08X} {} ({format})", self.raw, self.mnemonic)
            }
            InstructionSource::Thumb => write!(f, "0x{:04X} {} (thumb)", self.raw, self.mnemonic),
        }
    }
}

/// Stateless decoder; copies are free and can be shared across threads.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    #[must_use]
    pub const fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> DecoderConfig {
        self.config
    }

    #[must_use]
    pub fn classify(&self, word: ArmWord) -> Format {
        Format::classify_with(word, self.config.escalate_unconditional)
    }

    #[must_use]
    pub fn decode_arm(&self, raw: u32) -> ResolvedInstruction {
        let word = ArmWord::new(raw);
        let format = self.classify(word);

        let mnemonic = match format {
            Format::DataProcessingOrMisc => arm::data_processing::resolve(word),
            Format::LoadStoreWordUnsigned => arm::load_store::resolve(word),
            Format::BranchOrBlockTransfer => arm::branch_block_transfer::resolve(word),
            Format::CoprocessorOrSimd => arm::coprocessor::resolve(word),
            Format::Unconditional | Format::Undefined => Mnemonic::Unclassified,
        };

        tracing::trace!("arm: word={word}, format={format}, mnemonic={mnemonic}");

        ResolvedInstruction {
            mnemonic,
            source: InstructionSource::Arm(format),
            raw,
        }
    }

    #[must_use]
    pub fn decode_thumb(&self, raw: u16) -> ResolvedInstruction {
        let word = ThumbWord::new(raw);
        let mnemonic = thumb::resolve(word);

        tracing::trace!("thumb: word={word}, mnemonic={mnemonic}");

        ResolvedInstruction {
            mnemonic,
            source: InstructionSource::Thumb,
            raw: u32::from(raw),
        }
    }

    /// Decodes `raw` in the given mode.
    ///
    /// # Errors
    ///
    /// [`DecodeError::WordTooWide`] when `mode` is [`Mode::Thumb`] and `raw`
    /// does not fit in 16 bits.
    pub fn decode(&self, raw: u32, mode: Mode) -> Result<ResolvedInstruction, DecodeError> {
        match mode {
            Mode::Arm => Ok(self.decode_arm(raw)),
            Mode::Thumb => {
                let half = u16::try_from(raw).map_err(|_| DecodeError::WordTooWide { word: raw })?;
                Ok(self.decode_thumb(half))
            }
        }
    }
}

/// Decodes a 32-bit ARM word with the default options.
#[must_use]
pub fn decode_arm(raw: u32) -> ResolvedInstruction {
    Decoder::default().decode_arm(raw)
}

/// Decodes a 16-bit Thumb word.
#[must_use]
pub fn decode_thumb(raw: u16) -> ResolvedInstruction {
    Decoder::default().decode_thumb(raw)
}

/// Mode-generic entry with the default options, see [`Decoder::decode`].
///
/// # Errors
///
/// [`DecodeError::WordTooWide`] for a Thumb word wider than 16 bits.
pub fn decode(raw: u32, mode: Mode) -> Result<ResolvedInstruction, DecodeError> {
    Decoder::default().decode(raw, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::Rng;

    #[test]
    fn decode_mov_immediate() {
        // cond 1110, selector 00, op 0, op1 1101
        let raw = 0b1110_00_0_1101_0_0000_0001_0000_0000_0000;
        let resolved = decode_arm(raw);
        assert_eq!(resolved.format(), Some(Format::DataProcessingOrMisc));
        assert_eq!(resolved.mnemonic, Mnemonic::Mov);
        assert_eq!(resolved.raw, raw);
    }

    #[test]
    fn decode_known_arm_encodings() {
        let cases = [
            (0xE3A0_0FD2, Mnemonic::Mov),    // MOV R0, #840
            (0xE92D_0030, Mnemonic::Push),   // PUSH {r4-r5}
            (0xE8BD_8401, Mnemonic::Pop),    // POP {r0, r10, pc}
            (0xE127_09E8, Mnemonic::Smulwy), // SMULWT R7, R8, R9
            (0xEA7F_FFFD, Mnemonic::B),
            (0xEB7F_FFFD, Mnemonic::Bl),
            (0xE591_0000, Mnemonic::Ldr),
            (0xEE10_0F10, Mnemonic::Stc),
        ];
        for (raw, mnemonic) in cases {
            assert_eq!(decode_arm(raw).mnemonic, mnemonic, "word=0x{raw:08X}");
        }
    }

    #[test]
    fn decode_known_thumb_encodings() {
        let resolved = decode_thumb(0x47A0);
        assert_eq!(resolved.mnemonic, Mnemonic::Blx);
        assert_eq!(resolved.source, InstructionSource::Thumb);
        assert_eq!(resolved.format(), None);
        assert_eq!(resolved.raw, 0x47A0);
    }

    #[test]
    fn format_follows_selector() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let raw: u32 = rng.r#gen();
            let expected = match (raw >> 26) & 0b11 {
                0b00 => Format::DataProcessingOrMisc,
                0b01 => Format::LoadStoreWordUnsigned,
                0b10 => Format::BranchOrBlockTransfer,
                _ => Format::CoprocessorOrSimd,
            };
            assert_eq!(decode_arm(raw).format(), Some(expected), "word=0x{raw:08X}");
        }
    }

    #[test]
    fn every_selector_and_condition_resolves() {
        for condition in 0..=0xF_u32 {
            for selector in 0..=0b11_u32 {
                for low in [0, 0x0000_0090, 0x0000_00B0, 0x03FF_FFFF, 0x02D0_0010] {
                    let raw = (condition << 28) | (selector << 26) | (low & 0x03FF_FFFF);
                    let resolved = decode_arm(raw);
                    assert_ne!(resolved.format(), Some(Format::Undefined));
                    assert_ne!(resolved.format(), Some(Format::Unconditional));
                }
            }
        }
    }

    #[test]
    fn escalation_is_opt_in() {
        let raw = 0xFE00_0F10;
        assert_eq!(decode_arm(raw).format(), Some(Format::CoprocessorOrSimd));

        let decoder = Decoder::new(DecoderConfig {
            escalate_unconditional: true,
        });
        let resolved = decoder.decode_arm(raw);
        assert_eq!(resolved.format(), Some(Format::Unconditional));
        assert_eq!(resolved.mnemonic, Mnemonic::Unclassified);

        // Other selectors are unaffected by the condition.
        assert_eq!(
            decoder.decode_arm(0xF3A0_0FD2).format(),
            Some(Format::DataProcessingOrMisc)
        );
        // Selector 11 with a regular condition still reaches the coprocessor table.
        assert_eq!(decoder.decode_arm(0xEE10_0F10).mnemonic, Mnemonic::Stc);
    }

    #[test]
    fn mode_generic_entry() {
        assert_eq!(decode(0xE3A0_0FD2, Mode::Arm).unwrap().mnemonic, Mnemonic::Mov);
        assert_eq!(decode(0x47A0, Mode::Thumb).unwrap().mnemonic, Mnemonic::Blx);
        assert_eq!(
            decode(0x0001_47A0, Mode::Thumb),
            Err(DecodeError::WordTooWide { word: 0x0001_47A0 })
        );
    }

    #[test]
    fn thumb_space_is_total() {
        let decoder = Decoder::default();
        for raw in 0..=u16::MAX {
            let resolved = decoder.decode_thumb(raw);
            assert_eq!(resolved.mode(), Mode::Thumb);
            assert_eq!(resolved.raw, u32::from(raw));
        }
    }

    #[test]
    fn display() {
        assert_eq!(
            decode_arm(0xE3A0_0FD2).to_string(),
            "0xE3A00FD2 MOV (data processing/misc)"
        );
        assert_eq!(decode_thumb(0xDF0C).to_string(), "0xDF0C SWI (thumb)");
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_string(&decode_thumb(0x4720)).unwrap();
        assert_eq!(json, r#"{"mnemonic":"Bx","source":"Thumb","raw":18208}"#);

        let json = serde_json::to_string(&decode_arm(0xE92D_0030)).unwrap();
        assert_eq!(
            json,
            r#"{"mnemonic":"Push","source":{"Arm":"BranchOrBlockTransfer"},"raw":3912040496}"#
        );
    }

    #[test]
    fn decoder_is_shareable() {
        const fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Decoder>();
        assert_send_sync::<ResolvedInstruction>();
    }
}
