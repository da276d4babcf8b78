//! Conversion errors
//!
//! The instrument files are trusted, hand-maintained data; any
//! inconsistency indicates an authoring bug, so every error here is fatal
//! and aborts the run without partial output.

/// Conversion errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("Invalid bank number: {0}")]
    InvalidBankNumber(u32),

    #[error("Melodic section not found: {0}")]
    MelodicSectionNotFound(String),

    #[error("Drum section not found: {0}")]
    DrumSectionNotFound(String),

    #[error("Patch section not found: {0}")]
    PatchSectionNotFound(String),

    #[error("Invalid patch number: {0}")]
    InvalidPatchNumber(u32),

    #[error("Drum bank number invalid: ({0}, {1})")]
    InvalidDrumBank(u32, u32),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
