use serde::{Deserialize, Serialize};

use crate::condition::Condition;

/// Every instruction name the decoder can resolve to.
///
/// ARM and Thumb share the enumeration: `ADD` out of a 32-bit word and
/// `ADD` out of a 16-bit word are the same mnemonic, the encoding they
/// came from travels in [`ResolvedInstruction`](crate::ResolvedInstruction).
/// Bit patterns no table covers resolve to [`Mnemonic::Unclassified`].
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum Mnemonic {
    // Data processing
    And,
    Eor,
    Sub,
    Rsb,
    Add,
    Adc,
    Sbc,
    Rsc,
    Tst,
    Teq,
    Cmp,
    Cmn,
    Orr,
    Mov,
    Bic,
    Mvn,

    // Multiply
    Mul,
    Mla,
    Umaal,
    Umull,
    Umlal,
    Smull,
    Smlal,
    Smlaxy,
    Smlawy,
    Smulwy,
    Smlalxy,
    Smulxy,

    // Loads and stores
    Ldr,
    Ldrt,
    Ldrb,
    Ldrbt,
    Str,
    Strt,
    Strb,
    Strbt,
    Ldrh,
    Strh,
    Ldrsb,
    Ldrsh,
    /// Thumb spelling of a sign-extended byte load.
    Ldsb,
    /// Thumb spelling of a sign-extended halfword load.
    Ldsh,

    // Block transfers
    Stmda,
    Ldmda,
    Stm,
    Ldmia,
    Stmdb,
    Ldmdb,
    Stmib,
    Ldmib,
    Stmia,
    Push,
    Pop,
    /// `STM` of the user-mode register bank (`STM{..} Rn, {..}^`).
    StmUser,
    /// `LDM` of the user-mode register bank (`LDM{..} Rn, {..}^`).
    LdmUser,

    // Branches
    B,
    Bl,
    Bx,
    Blx,
    Beq,
    Bne,
    Bcs,
    Bcc,
    Bmi,
    Bpl,
    Bvs,
    Bvc,
    Bhi,
    Bls,
    Bge,
    Blt,
    Bgt,
    Ble,
    /// First half of a Thumb long branch with link (`H=0`, target high bits).
    BlPrefix,
    /// Second half of a Thumb long branch with link (`H=1`, stays in Thumb).
    BlSuffix,
    /// Second half of a Thumb long branch with link and exchange.
    BlxSuffix,
    Swi,

    // Thumb shifts and ALU extras
    Lsl,
    Lsr,
    Asr,
    Ror,
    Neg,

    // Coprocessor
    Ldc,
    Stc,
    Cdp,

    Unclassified,
}

impl Mnemonic {
    #[must_use]
    pub const fn is_classified(self) -> bool {
        !matches!(self, Self::Unclassified)
    }

    /// Conditional branch for a Thumb `1101 cond` word. `AL` has no
    /// conditional branch form and `NV` is the `SWI` slot.
    #[must_use]
    pub const fn conditional_branch(condition: Condition) -> Self {
        match condition {
            Condition::EQ => Self::Beq,
            Condition::NE => Self::Bne,
            Condition::CS => Self::Bcs,
            Condition::CC => Self::Bcc,
            Condition::MI => Self::Bmi,
            Condition::PL => Self::Bpl,
            Condition::VS => Self::Bvs,
            Condition::VC => Self::Bvc,
            Condition::HI => Self::Bhi,
            Condition::LS => Self::Bls,
            Condition::GE => Self::Bge,
            Condition::LT => Self::Blt,
            Condition::GT => Self::Bgt,
            Condition::LE => Self::Ble,
            Condition::AL => Self::Unclassified,
            Condition::NV => Self::Swi,
        }
    }
}

impl std::fmt::Display for Mnemonic {
    #[allow(clippy::too_many_lines)]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::And => "AND",
            Self::Eor => "EOR",
            Self::Sub => "SUB",
            Self::Rsb => "RSB",
            Self::Add => "ADD",
            Self::Adc => "ADC",
            Self::Sbc => "SBC",
            Self::Rsc => "RSC",
            Self::Tst => "TST",
            Self::Teq => "TEQ",
            Self::Cmp => "CMP",
            Self::Cmn => "CMN",
            Self::Orr => "ORR",
            Self::Mov => "MOV",
            Self::Bic => "BIC",
            Self::Mvn => "MVN",
            Self::Mul => "MUL",
            Self::Mla => "MLA",
            Self::Umaal => "UMAAL",
            Self::Umull => "UMULL",
            Self::Umlal => "UMLAL",
            Self::Smull => "SMULL",
            Self::Smlal => "SMLAL",
            Self::Smlaxy => "SMLAxy",
            Self::Smlawy => "SMLAWy",
            Self::Smulwy => "SMULWy",
            Self::Smlalxy => "SMLALxy",
            Self::Smulxy => "SMULxy",
            Self::Ldr => "LDR",
            Self::Ldrt => "LDRT",
            Self::Ldrb => "LDRB",
            Self::Ldrbt => "LDRBT",
            Self::Str => "STR",
            Self::Strt => "STRT",
            Self::Strb => "STRB",
            Self::Strbt => "STRBT",
            Self::Ldrh => "LDRH",
            Self::Strh => "STRH",
            Self::Ldrsb => "LDRSB",
            Self::Ldrsh => "LDRSH",
            Self::Ldsb => "LDSB",
            Self::Ldsh => "LDSH",
            Self::Stmda => "STMDA",
            Self::Ldmda => "LDMDA",
            Self::Stm => "STM",
            Self::Ldmia => "LDMIA",
            Self::Stmdb => "STMDB",
            Self::Ldmdb => "LDMDB",
            Self::Stmib => "STMIB",
            Self::Ldmib => "LDMIB",
            Self::Stmia => "STMIA",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::StmUser => "STM^",
            Self::LdmUser => "LDM^",
            Self::B => "B",
            Self::Bl => "BL",
            Self::Bx => "BX",
            Self::Blx => "BLX",
            Self::Beq => "BEQ",
            Self::Bne => "BNE",
            Self::Bcs => "BCS",
            Self::Bcc => "BCC",
            Self::Bmi => "BMI",
            Self::Bpl => "BPL",
            Self::Bvs => "BVS",
            Self::Bvc => "BVC",
            Self::Bhi => "BHI",
            Self::Bls => "BLS",
            Self::Bge => "BGE",
            Self::Blt => "BLT",
            Self::Bgt => "BGT",
            Self::Ble => "BLE",
            Self::BlPrefix => "BL (prefix)",
            Self::BlSuffix => "BL (suffix)",
            Self::BlxSuffix => "BLX (suffix)",
            Self::Swi => "SWI",
            Self::Lsl => "LSL",
            Self::Lsr => "LSR",
            Self::Asr => "ASR",
            Self::Ror => "ROR",
            Self::Neg => "NEG",
            Self::Ldc => "LDC",
            Self::Stc => "STC",
            Self::Cdp => "CDP",
            Self::Unclassified => "UNCLASSIFIED",
        };

        f.write_str(name)
    }
}
