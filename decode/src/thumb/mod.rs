//! # Thumb Instruction Set (16-bit)
//!
//! Thumb words are resolved on their top five bits (`op`, bits 15-11),
//! a few rows refine on lower bits:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  op      Refined on        Mnemonics                                   │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  000xx   -                 LSL, LSR, ASR (immediate)                   │
//! │  00011   bit 9             ADD / SUB (3-bit register or immediate)     │
//! │  001xx   -                 MOV, CMP, ADD, SUB (8-bit immediate)        │
//! │  01000   bits 10-6         ALU ops, or hi-register ADD/CMP/MOV/BX/BLX  │
//! │  01001   -                 LDR (PC-relative)                           │
//! │  0101x   bits 10-9         STR/STRH/STRB/LDSB, LDR/LDRH/LDRB/LDSH      │
//! │  011xx   -                 STR, LDR, STRB, LDRB (immediate offset)     │
//! │  1000x   -                 STRH, LDRH                                  │
//! │  1001x   -                 STR, LDR (SP-relative)                      │
//! │  1010x   -                 ADD (PC/SP-relative address)                │
//! │  1011x   bits 10-9         PUSH/POP, ADD SP                            │
//! │  1100x   -                 STMIA, LDMIA                                │
//! │  1101x   bits 11-8         Bcc, SWI                                    │
//! │  11100   -                 B                                           │
//! │  11101   -                 BLX (suffix)                                │
//! │  1111x   -                 BL (prefix / suffix)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Long Branch (BL)
//!
//! BL spans two 16-bit words. Each half resolves on its own; pairing them
//! up is left to the caller:
//!
//! ```text
//! First:  1111 0xxx xxxx xxxx  ; BL prefix, offset high bits
//! Second: 1111 1xxx xxxx xxxx  ; BL suffix, offset low bits
//!         1110 1xxx xxxx xxxx  ; BLX suffix
//! ```

pub mod resolver;
pub mod word;

pub use resolver::resolve;
pub use word::ThumbWord;
