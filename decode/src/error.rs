use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq, Copy, Clone)]
pub enum DecodeError {
    /// A Thumb decode was asked for a word that does not fit in 16 bits.
    #[error("word 0x{word:08X} does not fit in 16 bits")]
    WordTooWide { word: u32 },
}
