use crate::bitwise::Bits;
use crate::mnemonic::Mnemonic;
use crate::thumb::word::ThumbWord;

/// Format 4 ALU operations, indexed by bits 9-6. The last slot repeats
/// `BIC`.
const ALU_OPERATIONS: [Mnemonic; 16] = [
    Mnemonic::And, // 0000
    Mnemonic::Eor, // 0001
    Mnemonic::Lsl, // 0010
    Mnemonic::Lsr, // 0011
    Mnemonic::Asr, // 0100
    Mnemonic::Adc, // 0101
    Mnemonic::Sbc, // 0110
    Mnemonic::Ror, // 0111
    Mnemonic::Tst, // 1000
    Mnemonic::Neg, // 1001
    Mnemonic::Cmp, // 1010
    Mnemonic::Cmn, // 1011
    Mnemonic::Orr, // 1100
    Mnemonic::Mul, // 1101
    Mnemonic::Bic, // 1110
    Mnemonic::Bic, // 1111
];

/// Register-offset stores and signed loads (`op == 01010`), indexed by bits 10-9.
const REGISTER_OFFSET_STORES: [Mnemonic; 4] = [
    Mnemonic::Str,
    Mnemonic::Strh,
    Mnemonic::Strb,
    Mnemonic::Ldsb,
];

/// Register-offset loads (`op == 01011`), indexed by bits 10-9.
const REGISTER_OFFSET_LOADS: [Mnemonic; 4] = [
    Mnemonic::Ldr,
    Mnemonic::Ldrh,
    Mnemonic::Ldrb,
    Mnemonic::Ldsh,
];

/// Resolves a 16-bit Thumb word.
#[must_use]
pub fn resolve(word: ThumbWord) -> Mnemonic {
    let mnemonic = match word.op() {
        0b00000 => Mnemonic::Lsl,
        0b00001 => Mnemonic::Lsr,
        0b00010 => Mnemonic::Asr,
        0b00011 if word.get_bit(9) => Mnemonic::Sub,
        0b00011 => Mnemonic::Add,
        0b00100 => Mnemonic::Mov,
        0b00101 => Mnemonic::Cmp,
        0b00110 => Mnemonic::Add,
        0b00111 => Mnemonic::Sub,
        0b01000 => data_processing(word),
        0b01001 => Mnemonic::Ldr,
        0b01010 => register_offset(&REGISTER_OFFSET_STORES, word),
        0b01011 => register_offset(&REGISTER_OFFSET_LOADS, word),
        0b01100 => Mnemonic::Str,
        0b01101 => Mnemonic::Ldr,
        0b01110 => Mnemonic::Strb,
        0b01111 => Mnemonic::Ldrb,
        0b10000 => Mnemonic::Strh,
        0b10001 => Mnemonic::Ldrh,
        0b10010 => Mnemonic::Str,
        0b10011 => Mnemonic::Ldr,
        0b10100 | 0b10101 => Mnemonic::Add,
        0b10110 => stack(word, Mnemonic::Push),
        0b10111 => stack(word, Mnemonic::Pop),
        0b11000 => Mnemonic::Stmia,
        0b11001 => Mnemonic::Ldmia,
        0b11010 | 0b11011 => Mnemonic::conditional_branch(word.condition()),
        0b11100 => Mnemonic::B,
        0b11101 => Mnemonic::BlxSuffix,
        0b11110 => Mnemonic::BlPrefix,
        0b11111 => Mnemonic::BlSuffix,
        _ => Mnemonic::Unclassified,
    };

    if !mnemonic.is_classified() {
        tracing::debug!(
            "unclassified thumb: word={word}, op=0b{:05b}, op1=0b{:03b}",
            word.op(),
            word.op1()
        );
    }

    mnemonic
}

/// `010000` ALU operations or `010001` hi-register operations, split on
/// bit 10 (`op1` bit 2).
fn data_processing(word: ThumbWord) -> Mnemonic {
    let op1 = word.op1();
    if !op1.get_bit(2) {
        return ALU_OPERATIONS
            .get(usize::from(word.get_field(6..=9)))
            .copied()
            .unwrap_or(Mnemonic::Unclassified);
    }

    match op1.get_bits(0..=1) {
        0b00 => Mnemonic::Add,
        0b01 => Mnemonic::Cmp,
        0b10 => Mnemonic::Mov,
        // H1 (bit 7) set is the link form.
        _ if word.get_bit(7) => Mnemonic::Blx,
        _ => Mnemonic::Bx,
    }
}

fn register_offset(table: &[Mnemonic; 4], word: ThumbWord) -> Mnemonic {
    table
        .get(usize::from(word.get_field(9..=10)))
        .copied()
        .unwrap_or(Mnemonic::Unclassified)
}

/// `1011 L 10 R` is PUSH/POP, `1011 x 00 x` adjusts the stack pointer.
fn stack(word: ThumbWord, transfer: Mnemonic) -> Mnemonic {
    match word.get_bits(9..=10) {
        0b10 => transfer,
        0b00 => Mnemonic::Add,
        _ => Mnemonic::Unclassified,
    }
}
