//! Bank table construction
//!
//! Walks a mode's melodic-set and drum-set sections, resolves each bank
//! selector, and fills the two bank maps from the referenced patch
//! sections.

use crate::bank::{BankMap, Instrument, InstrumentTables};
use crate::error::{ConvertError, Result};
use crate::keys::{classify, KeyPattern};
use crate::mode::Mode;
use crate::resolve::{resolve_drum, resolve_melodic};

/// Ordered section lookup, as supplied by the file reader
///
/// The builder only needs named sections with their key/value pairs in
/// file order; anything that can provide that can drive a conversion.
pub trait SectionSource {
    fn section(&self, name: &str) -> Option<&[(String, String)]>;
}

impl SectionSource for ins_file::IniDocument {
    fn section(&self, name: &str) -> Option<&[(String, String)]> {
        self.section(name).map(|section| section.entries())
    }
}

/// Builds the instrument tables for one mode from one source document
pub struct TableBuilder<'a, S: SectionSource> {
    mode: Mode,
    source: &'a S,
}

impl<'a, S: SectionSource> TableBuilder<'a, S> {
    pub fn new(mode: Mode, source: &'a S) -> Self {
        Self { mode, source }
    }

    /// Process both set sections and return the populated tables
    pub fn build(&self) -> Result<InstrumentTables> {
        let config = self.mode.config();
        let mut tables = InstrumentTables::default();
        self.process_melodics(config.melodic_section, &mut tables.melodic)?;
        self.process_drums(config.drum_section, &mut tables.percussive)?;
        Ok(tables)
    }

    fn process_melodics(&self, set_name: &str, map: &mut BankMap) -> Result<()> {
        let set = self
            .source
            .section(set_name)
            .ok_or_else(|| ConvertError::MelodicSectionNotFound(set_name.to_string()))?;

        for (key, bank_name) in set {
            if let Some(KeyPattern::MelodicBank(bankno)) = classify(key) {
                let addr = resolve_melodic(bankno)?;
                self.fill_bank(map, addr.flatten(), addr.msb, addr.lsb, bank_name)?;
            }
        }
        Ok(())
    }

    fn process_drums(&self, set_name: &str, map: &mut BankMap) -> Result<()> {
        let set = self
            .source
            .section(set_name)
            .ok_or_else(|| ConvertError::DrumSectionNotFound(set_name.to_string()))?;

        for (key, bank_name) in set {
            if let Some(KeyPattern::DrumBank(bankno1, bankno2)) = classify(key) {
                let addr = resolve_drum(self.mode, bankno1, bankno2)?;
                self.fill_bank(map, addr.flatten(), addr.msb, addr.program, bank_name)?;
            }
        }
        Ok(())
    }

    // Shared bank fields are overwritten on every insertion at the same
    // address (last write wins); instrument slots stay independent.
    fn fill_bank(
        &self,
        map: &mut BankMap,
        addr: u32,
        msb: u8,
        lsb: u8,
        bank_name: &str,
    ) -> Result<()> {
        let patches = self
            .source
            .section(bank_name)
            .ok_or_else(|| ConvertError::PatchSectionNotFound(bank_name.to_string()))?;

        for (key, patch_name) in patches {
            if let Some(KeyPattern::Program(patchno)) = classify(key) {
                if patchno >= 128 {
                    return Err(ConvertError::InvalidPatchNumber(patchno));
                }
                let bank = map.entry(addr);
                bank.msb = Some(msb);
                bank.lsb = Some(lsb);
                bank.name = bank_name.to_string();
                bank.instruments[patchno as usize] = Some(Instrument {
                    program: patchno as u8,
                    name: patch_name.to_string(),
                });
            }
        }
        Ok(())
    }
}
