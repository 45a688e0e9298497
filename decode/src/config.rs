use serde::{Deserialize, Serialize};

/// Options that change how words are classified.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Classify words with condition `1111` and primary selector `11` as
    /// [`Format::Unconditional`](crate::Format::Unconditional) instead of
    /// coprocessor.
    pub escalate_unconditional: bool,
}
