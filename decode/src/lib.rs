//! Decode front end for ARM (32-bit) and Thumb (16-bit) instruction words.
//!
//! A word goes through a primary classification (ARM only) and a
//! per-format resolution table, and comes out as a [`Mnemonic`] wrapped
//! in a [`ResolvedInstruction`]. Words no table covers resolve to
//! [`Mnemonic::Unclassified`]; decoding never fails on the word itself.
//!
//! ```
//! use decode::{Mnemonic, Mode, decode, decode_arm, decode_thumb};
//!
//! assert_eq!(decode_arm(0xE3A0_0FD2).mnemonic, Mnemonic::Mov);
//! assert_eq!(decode_thumb(0x47A0).mnemonic, Mnemonic::Blx);
//! assert!(decode(0x1_0000, Mode::Thumb).is_err());
//! ```

#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::unreadable_literal)]
#[allow(clippy::unusual_byte_groupings)]
pub mod arm;

#[allow(clippy::cast_possible_truncation)]
pub mod bitwise;

pub mod condition;
pub mod config;

#[allow(clippy::unreadable_literal)]
#[allow(clippy::unusual_byte_groupings)]
pub mod decoder;

pub mod error;

#[allow(clippy::unreadable_literal)]
pub mod layout;

pub mod mnemonic;

#[allow(clippy::unusual_byte_groupings)]
pub mod thumb;

pub use arm::{ArmWord, Format};
pub use condition::Condition;
pub use config::DecoderConfig;
pub use decoder::{
    Decoder, InstructionSource, Mode, ResolvedInstruction, decode, decode_arm, decode_thumb,
};
pub use error::DecodeError;
pub use layout::Layout;
pub use mnemonic::Mnemonic;
pub use thumb::ThumbWord;
