//! Bank and instrument data model
//!
//! One conversion run owns two ordered bank maps (melodic, percussive),
//! both keyed by the flattened bank address. Banks come into existence
//! lazily on the first patch insertion at an address and keep absorbing
//! later insertions at the same address.

use std::collections::BTreeMap;

/// Number of program slots per bank
pub const BANK_SLOTS: usize = 128;

/// One instrument inside a bank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instrument {
    pub program: u8,
    pub name: String,
}

/// A named bank of up to 128 instruments
///
/// `msb` and `lsb` stay unset until an insertion addresses the bank; for
/// percussive banks the `lsb` field holds the drum program number.
#[derive(Debug, Clone)]
pub struct Bank {
    pub msb: Option<u8>,
    pub lsb: Option<u8>,
    pub name: String,
    pub instruments: [Option<Instrument>; BANK_SLOTS],
}

impl Bank {
    fn empty() -> Self {
        Bank {
            msb: None,
            lsb: None,
            name: String::new(),
            instruments: std::array::from_fn(|_| None),
        }
    }

    /// A bank is addressed once both halves of its address are set
    pub fn is_addressed(&self) -> bool {
        self.msb.is_some() && self.lsb.is_some()
    }

    /// Populated slots in ascending program order
    pub fn iter_instruments(&self) -> impl Iterator<Item = &Instrument> {
        self.instruments.iter().flatten()
    }
}

/// Ordered bank collection keyed by flattened address
#[derive(Debug, Clone, Default)]
pub struct BankMap {
    banks: BTreeMap<u32, Bank>,
}

impl BankMap {
    /// Fetch the bank at `addr`, creating an empty one on first use
    pub fn entry(&mut self, addr: u32) -> &mut Bank {
        self.banks.entry(addr).or_insert_with(Bank::empty)
    }

    pub fn get(&self, addr: u32) -> Option<&Bank> {
        self.banks.get(&addr)
    }

    /// Banks in ascending flattened-address order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Bank)> {
        self.banks.iter().map(|(&addr, bank)| (addr, bank))
    }

    pub fn len(&self) -> usize {
        self.banks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }
}

/// The two bank collections owned by one conversion run
#[derive(Debug, Clone, Default)]
pub struct InstrumentTables {
    pub melodic: BankMap,
    pub percussive: BankMap,
}
