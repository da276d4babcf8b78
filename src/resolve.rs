//! Bank address resolution
//!
//! Different vendor files encode the same logical bank address with
//! different numbering conventions. These resolvers normalize every mode's
//! raw selectors to one canonical address space: (MSB, LSB) for melodic
//! banks, (MSB, program) for drum banks.

use crate::error::{ConvertError, Result};
use crate::mode::Mode;

/// Canonical melodic bank address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MelodicAddress {
    pub msb: u8,
    pub lsb: u8,
}

impl MelodicAddress {
    /// Single-integer form used as the bank map key
    pub fn flatten(self) -> u32 {
        u32::from(self.msb) * 128 + u32::from(self.lsb)
    }
}

/// Canonical drum bank address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrumAddress {
    pub msb: u8,
    pub program: u8,
}

impl DrumAddress {
    pub fn flatten(self) -> u32 {
        u32::from(self.msb) * 128 + u32::from(self.program)
    }
}

/// Split a raw melodic bank selector into (MSB, LSB)
pub fn resolve_melodic(bankno: u32) -> Result<MelodicAddress> {
    let msb = bankno / 128;
    let lsb = bankno % 128;
    if msb >= 128 || lsb >= 128 {
        return Err(ConvertError::InvalidBankNumber(bankno));
    }
    Ok(MelodicAddress {
        msb: msb as u8,
        lsb: lsb as u8,
    })
}

/// Normalize a raw drum bank selector pair to (MSB, program)
///
/// XG-family files store the first selector as a combined bank value that
/// must divide evenly by 128; everywhere else it is the MSB as written.
pub fn resolve_drum(mode: Mode, bankno1: u32, bankno2: u32) -> Result<DrumAddress> {
    let mut msb = bankno1;
    let program = bankno2;

    if mode.config().combined_drum_banks {
        if bankno1 % 128 != 0 {
            return Err(ConvertError::InvalidDrumBank(bankno1, bankno2));
        }
        msb = bankno1 / 128;
    }

    if msb >= 128 || program >= 128 {
        return Err(ConvertError::InvalidDrumBank(bankno1, bankno2));
    }

    Ok(DrumAddress {
        msb: msb as u8,
        program: program as u8,
    })
}
