//! Bit diagrams of resolved instructions, for checking a decode by eye.
//!
//! ```text
//! INS: 0xE3A00FD2 MOV (data processing/misc)
//! POS: |..3 ..................2 ..................1 ..................0|
//!      |1_0_9_8_7_6_5_4_3_2_1_0_9_8_7_6_5_4_3_2_1_0_9_8_7_6_5_4_3_2_1_0|
//! RAW: |1_1_1_0_0_0_1_1_1_0_1_0_0_0_0_0_0_0_0_0_1_1_1_1_1_1_0_1_0_0_1_0|
//! FMT: |_Cond__|0_0|I|_code__|S|__Rn___|__Rd___|_______operand2________|
//! ```

use crate::arm::Format;
use crate::bitwise::Bits;
use crate::decoder::{InstructionSource, ResolvedInstruction};
use crate::mnemonic::Mnemonic;

const ARM_POSITIONS: &str = "POS: |..3 ..................2 ..................1 ..................0|\n     |1_0_9_8_7_6_5_4_3_2_1_0_9_8_7_6_5_4_3_2_1_0_9_8_7_6_5_4_3_2_1_0|";
const THUMB_POSITIONS: &str =
    "POS: |..........1 ..................0|\n     |5_4_3_2_1_0_9_8_7_6_5_4_3_2_1_0|";

/// Renders a [`ResolvedInstruction`] as an `INS`/`POS`/`RAW`/`FMT` diagram.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct Layout {
    instruction: ResolvedInstruction,
}

impl ResolvedInstruction {
    #[must_use]
    pub const fn layout(self) -> Layout {
        Layout { instruction: self }
    }
}

impl Layout {
    /// Field layout of the instruction, one field per `|` cell.
    #[must_use]
    pub fn fields(&self) -> &'static str {
        match self.instruction.source {
            InstructionSource::Arm(format) => arm_fields(format, self.instruction.mnemonic),
            InstructionSource::Thumb => {
                #[allow(clippy::cast_possible_truncation)]
                let raw = self.instruction.raw as u16;
                thumb_fields(raw, self.instruction.mnemonic)
            }
        }
    }

    /// The raw word one bit per cell, MSB first.
    #[must_use]
    pub fn raw_bits(&self) -> String {
        let width = match self.instruction.source {
            InstructionSource::Arm(_) => 32,
            InstructionSource::Thumb => 16,
        };

        let mut raw_bits = String::new();
        for c in format!("{:0width$b}", self.instruction.raw).chars() {
            raw_bits.push(c);
            raw_bits.push('_');
        }
        raw_bits.pop();
        raw_bits
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let positions = match self.instruction.source {
            InstructionSource::Arm(_) => ARM_POSITIONS,
            InstructionSource::Thumb => THUMB_POSITIONS,
        };

        writeln!(f, "INS: {}", self.instruction)?;
        writeln!(f, "{positions}")?;
        writeln!(f, "RAW: |{}|", self.raw_bits())?;
        write!(f, "FMT: {}", self.fields())
    }
}

const fn arm_fields(format: Format, mnemonic: Mnemonic) -> &'static str {
    use Mnemonic::{
        B, Bl, Cdp, Ldc, Ldrh, Ldrsb, Ldrsh, Mla, Mul, Smlal, Smlalxy, Smlawy, Smlaxy, Smull,
        Smulwy, Smulxy, Stc, Strh, Umaal, Umlal, Umull, Unclassified,
    };

    match (format, mnemonic) {
        (_, Unclassified) | (Format::Unconditional | Format::Undefined, _) => "|_Cond__|",
        (Format::DataProcessingOrMisc, Mul | Mla) => {
            "|_Cond__|0_0_0_0_0_0|A|S|__Rd___|__Rn___|__Rs___|1_0_0_1|__Rm___|"
        }
        (Format::DataProcessingOrMisc, Umaal | Umull | Umlal | Smull | Smlal) => {
            "|_Cond__|0_0_0_0_1|U|A|S|_RdHi__|_RdLo__|__Rs___|1_0_0_1|__Rm___|"
        }
        (Format::DataProcessingOrMisc, Smlaxy | Smlawy | Smulwy | Smlalxy | Smulxy) => {
            "|_Cond__|0_0_0_1_0|op_|0|__Rd___|__Rn___|__Rs___|1|y|x|0|__Rm___|"
        }
        (Format::DataProcessingOrMisc, Ldrh | Strh | Ldrsb | Ldrsh) => {
            "|_Cond__|0_0_0|P|U|I|W|L|__Rn___|__Rd___|_Offset|1|S|H|1|_Offset|"
        }
        (Format::DataProcessingOrMisc, _) => {
            "|_Cond__|0_0|I|_code__|S|__Rn___|__Rd___|_______operand2________|"
        }
        (Format::LoadStoreWordUnsigned, _) => {
            "|_Cond__|0_1|I|P|U|B|W|L|__Rn___|__Rd___|________Offset_________|"
        }
        (Format::BranchOrBlockTransfer, B | Bl) => {
            "|_Cond__|1_0_1|L|______________________Offset___________________|"
        }
        (Format::BranchOrBlockTransfer, _) => {
            "|_Cond__|1_0_0|P|U|S|W|L|__Rn___|_____________Reg_List__________|"
        }
        (Format::CoprocessorOrSimd, Ldc | Stc | Cdp) => {
            "|_Cond__|_op1_|_______|L|__Rn___|__CRd__|__Cp#__|____Offset_____|"
        }
        (Format::CoprocessorOrSimd, _) => "|_Cond__|",
    }
}

fn thumb_fields(raw: u16, mnemonic: Mnemonic) -> &'static str {
    match raw.get_field(11..=15) {
        0b00011 => "|0_0_0_1_1|I|O|RnOff|_Rs__|_Rd__|",
        0b00000..=0b00010 => "|0_0_0|Op_|__Offset_|_Rs__|_Rd__|",
        0b00100..=0b00111 => "|0_0_1|Op_|_Rn__|____Offset_____|",
        0b01000 if raw.get_bit(10) => "|0_1_0_0_0_1|_Op|H|H|Rs/Hs|Rd/Hd|",
        0b01000 => "|0_1_0_0_0_0|__Op___|_Rs__|_Rd__|",
        0b01001 => "|0_1_0_0_1|_Rn__|_____Word8_____|",
        0b01010 | 0b01011 if raw.get_bit(9) => "|0_1_0_1|H|S|1|_Ro__|_Rb__|_Rd__|",
        0b01010 | 0b01011 => "|0_1_0_1|L|B|0|_Ro__|_Rb__|_Rd__|",
        0b01100..=0b01111 => "|0_1_1|B|L|_Offset5_|_Rb__|_Rd__|",
        0b10000 | 0b10001 => "|1_0_0_0|L|_Offset5_|_Rb__|_Rd__|",
        0b10010 | 0b10011 => "|1_0_0_1|L|_Rd__|_____Word8_____|",
        0b10100 | 0b10101 => "|1_0_1_0|S|_Rd__|_____Word8_____|",
        0b10110 | 0b10111 => match mnemonic {
            Mnemonic::Push | Mnemonic::Pop => "|1_0_1_1|L|1_0|R|_____Rlist_____|",
            Mnemonic::Add => "|1_0_1_1_0_0_0_0|S|____Word7____|",
            _ => "|1_0_1_1|",
        },
        0b11000 | 0b11001 => "|1_1_0_0|L|_Rb__|_____Rlist_____|",
        0b11010 | 0b11011 => match mnemonic {
            Mnemonic::Swi => "|1_1_0_1_1_1_1_1|_____Value8____|",
            Mnemonic::Unclassified => "|1_1_0_1|_Cond__|",
            _ => "|1_1_0_1|_Cond__|_____Offset____|",
        },
        0b11100 => "|1_1_1_0_0|________Offset11_____|",
        _ => "|1_1_1|_H_|________Offset11_____|",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::{Decoder, decode_arm, decode_thumb};
    use crate::config::DecoderConfig;
    use pretty_assertions::assert_eq;
    use rand::Rng;

    #[test]
    fn arm_layout() {
        let output = decode_arm(0xE3A0_0FD2).layout().to_string();
        let expected = [
            "INS: 0xE3A00FD2 MOV (data processing/misc)",
            "POS: |..3 ..................2 ..................1 ..................0|",
            "     |1_0_9_8_7_6_5_4_3_2_1_0_9_8_7_6_5_4_3_2_1_0_9_8_7_6_5_4_3_2_1_0|",
            "RAW: |1_1_1_0_0_0_1_1_1_0_1_0_0_0_0_0_0_0_0_0_1_1_1_1_1_1_0_1_0_0_1_0|",
            "FMT: |_Cond__|0_0|I|_code__|S|__Rn___|__Rd___|_______operand2________|",
        ]
        .join("\n");
        assert_eq!(output, expected);
    }

    #[test]
    fn thumb_layout() {
        let output = decode_thumb(0x47A0).layout().to_string();
        let expected = [
            "INS: 0x47A0 BLX (thumb)",
            "POS: |..........1 ..................0|",
            "     |5_4_3_2_1_0_9_8_7_6_5_4_3_2_1_0|",
            "RAW: |0_1_0_0_0_1_1_1_1_0_1_0_0_0_0_0|",
            "FMT: |0_1_0_0_0_1|_Op|H|H|Rs/Hs|Rd/Hd|",
        ]
        .join("\n");
        assert_eq!(output, expected);
    }

    #[test]
    fn fields_by_mnemonic() {
        let fields = |raw: u32| decode_arm(raw).layout().fields();
        assert_eq!(
            fields(0xE92D_0030),
            "|_Cond__|1_0_0|P|U|S|W|L|__Rn___|_____________Reg_List__________|"
        );
        assert_eq!(
            fields(0xEA7F_FFFD),
            "|_Cond__|1_0_1|L|______________________Offset___________________|"
        );
        assert_eq!(
            fields(0xE127_09E8),
            "|_Cond__|0_0_0_1_0|op_|0|__Rd___|__Rn___|__Rs___|1|y|x|0|__Rm___|"
        );
        assert_eq!(
            fields(0xE1D0_00D0),
            "|_Cond__|0_0_0|P|U|I|W|L|__Rn___|__Rd___|_Offset|1|S|H|1|_Offset|"
        );

        let escalated = Decoder::new(DecoderConfig {
            escalate_unconditional: true,
        })
        .decode_arm(0xFE00_0F10);
        assert_eq!(escalated.layout().fields(), "|_Cond__|");

        assert_eq!(
            decode_thumb(0xDF0C).layout().fields(),
            "|1_1_0_1_1_1_1_1|_____Value8____|"
        );
        assert_eq!(
            decode_thumb(0xBC10).layout().fields(),
            "|1_0_1_1|L|1_0|R|_____Rlist_____|"
        );
    }

    #[test]
    fn complete_layouts_span_the_word() {
        let mut rng = rand::thread_rng();
        for _ in 0..5_000 {
            let layout = decode_arm(rng.r#gen()).layout();
            let fields = layout.fields();
            if fields != "|_Cond__|" {
                assert_eq!(fields.len(), layout.raw_bits().len() + 2, "{layout}");
            }
        }

        for raw in (0..=u16::MAX).step_by(7) {
            let resolved = decode_thumb(raw);
            if resolved.mnemonic.is_classified() {
                let layout = resolved.layout();
                assert_eq!(layout.fields().len(), layout.raw_bits().len() + 2, "{layout}");
            }
        }
    }
}
