//! # ARM Instruction Set (32-bit)
//!
//! ## Format
//!
//! ```text
//! 31-28   27-26    25-0
//! [Cond] [Selector] [Format-specific]
//! ```
//!
//! - **Condition (bits 28-31)**: See [`condition`](crate::condition)
//! - **Primary selector (bits 26-27)**: Picks the [`Format`]
//!
//! ## Formats
//!
//! | Bits 27-26 | Format                  | Resolved by                       |
//! |------------|-------------------------|-----------------------------------|
//! | 00         | Data processing / misc  | [`data_processing`]               |
//! | 01         | Load/store word, byte   | [`load_store`]                    |
//! | 10         | Branch / block transfer | [`branch_block_transfer`]         |
//! | 11         | Coprocessor / SIMD      | [`coprocessor`]                   |
//!
//! Each resolver is a pure function of an [`ArmWord`] that the
//! classifier already placed in its format. Patterns a table does not
//! cover come back as [`Mnemonic::Unclassified`](crate::Mnemonic::Unclassified).
//!
//! ## Submodules
//!
//! - [`word`] - Raw word wrapper and shared field accessors
//! - [`format`] - Primary format classification

pub mod branch_block_transfer;
pub mod coprocessor;
pub mod data_processing;
pub mod format;
pub mod load_store;
pub mod word;

pub use format::Format;
pub use word::ArmWord;
