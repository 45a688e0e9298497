//! # Data Processing and Miscellaneous (selector `00`)
//!
//! ```text
//! 31-28  27-26  25   24-21   20-8         7-4   3-0
//! [Cond] [ 00 ] [op] [ op1 ] [........]   [op2] [...]
//! ```
//!
//! ## Decoding Priority
//!
//! The three sub-tables share encodings, the first predicate that holds wins:
//!
//! 1. `op == 0` and `op2` is `1011`, `1101` or `1111`: halfword and signed
//!    loads/stores (LDRH, STRH, LDRSB, LDRSH).
//! 2. `op1` is `10xx`, `op2` is `1xx0`: signed halfword multiplies.
//! 3. `op1` is `0xxx`, `op2` is `1001`: multiplies and long multiplies.
//! 4. Anything else: the 16 ALU operations keyed by `op1`.
//!
//! ```text
//! LDRH R2, [R0]          0xE1D020B0
//!   op=0  op1=1110  op2=1011        -> rule 1, never BIC
//!
//! SMLABT R7, R8, R9, R3  0xE10739C8
//!   op=0  op1=1000  op2=1100        -> rule 2, never TST
//!
//! MOV R0, #840           0xE3A00FD2
//!   op=1  op1=1101  op2=1101        -> rule 4 (op is set, so not rule 1)
//! ```

use crate::arm::word::ArmWord;
use crate::bitwise::Bits;
use crate::mnemonic::Mnemonic;

/// ALU operations, indexed by `op1`.
const GENERIC: [Mnemonic; 16] = [
    Mnemonic::And, // 0000
    Mnemonic::Eor, // 0001
    Mnemonic::Sub, // 0010
    Mnemonic::Rsb, // 0011
    Mnemonic::Add, // 0100
    Mnemonic::Adc, // 0101
    Mnemonic::Sbc, // 0110
    Mnemonic::Rsc, // 0111
    Mnemonic::Tst, // 1000
    Mnemonic::Teq, // 1001
    Mnemonic::Cmp, // 1010
    Mnemonic::Cmn, // 1011
    Mnemonic::Orr, // 1100
    Mnemonic::Mov, // 1101
    Mnemonic::Bic, // 1110
    Mnemonic::Mvn, // 1111
];

/// The fields this format is keyed on.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct DataProcessingFields {
    /// Bit 25: immediate operand.
    pub op: bool,
    /// Bits 24-21.
    pub op1: u8,
    /// Bits 7-4.
    pub op2: u8,
}

impl From<ArmWord> for DataProcessingFields {
    fn from(word: ArmWord) -> Self {
        Self {
            op: word.get_bit(25),
            op1: word.get_field(21..=24),
            op2: word.get_field(4..=7),
        }
    }
}

impl DataProcessingFields {
    fn is_misc_load_store(self) -> bool {
        !self.op && matches!(self.op2, 0b1011 | 0b1101 | 0b1111)
    }

    fn is_multiply(self) -> bool {
        match self.op1 {
            0b1000..=0b1011 => self.op2.get_bit(3) && !self.op2.get_bit(0),
            0b0000..=0b0111 => self.op2 == 0b1001,
            _ => false,
        }
    }
}

/// Resolves a word the classifier placed in
/// [`Format::DataProcessingOrMisc`](crate::Format::DataProcessingOrMisc).
#[must_use]
pub fn resolve(word: ArmWord) -> Mnemonic {
    let fields = DataProcessingFields::from(word);

    if fields.is_misc_load_store() {
        misc_load_store(word)
    } else if fields.is_multiply() {
        multiply(word)
    } else {
        generic(fields.op1)
    }
}

fn generic(op1: u8) -> Mnemonic {
    GENERIC
        .get(usize::from(op1))
        .copied()
        .unwrap_or(Mnemonic::Unclassified)
}

/// Multiply sub-table, keyed on `op1`. Bit 5 (`x`) splits the
/// `SMLAWy`/`SMULWy` pair that shares `op1 == 1001`.
fn multiply(word: ArmWord) -> Mnemonic {
    let op1 = word.get_field(21..=24);
    let x = word.get_bit(5);

    match op1 {
        0b0000 => Mnemonic::Mul,
        0b0001 => Mnemonic::Mla,
        0b0010 => Mnemonic::Umaal,
        0b0100 => Mnemonic::Umull,
        0b0101 => Mnemonic::Umlal,
        0b0110 => Mnemonic::Smull,
        0b0111 => Mnemonic::Smlal,
        0b1000 => Mnemonic::Smlaxy,
        0b1001 if x => Mnemonic::Smulwy,
        0b1001 => Mnemonic::Smlawy,
        0b1010 => Mnemonic::Smlalxy,
        0b1011 => Mnemonic::Smulxy,
        _ => {
            tracing::debug!(
                "unclassified multiply: word={word}, op1=0b{op1:04b}, op2=0b{:04b}",
                word.get_bits(4..=7)
            );
            Mnemonic::Unclassified
        }
    }
}

/// Halfword and signed byte/halfword transfers, keyed on L (bit 20) and
/// the S/H pair (bits 6-5). `SH == 00` is the swap/multiply space.
fn misc_load_store(word: ArmWord) -> Mnemonic {
    let load = word.get_bit(20);
    let sh = word.get_field(5..=6);

    match (sh, load) {
        (0b01, true) => Mnemonic::Ldrh,
        (0b01, false) => Mnemonic::Strh,
        (0b10, _) => Mnemonic::Ldrsb,
        (0b11, _) => Mnemonic::Ldrsh,
        _ => {
            tracing::debug!("unclassified misc load/store: word={word}, sh=0b{sh:02b}");
            Mnemonic::Unclassified
        }
    }
}
