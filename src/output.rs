//! Row emission and name normalization
//!
//! Walks the finished bank tables in address order and renders one row per
//! instrument, either as C array-entry literals for embedding or as JSON.

use serde::Serialize;

use crate::bank::{BankMap, InstrumentTables};
use crate::mode::Mode;

/// One finalized output row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub kind: char,
    pub bank_msb: u8,
    pub bank_lsb: u8,
    pub program: u8,
    pub bank_name: String,
    pub instrument_name: String,
}

/// Renders instrument tables for one mode
pub struct RowEmitter {
    mode: Mode,
}

impl RowEmitter {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// All surviving rows: melodic first, then percussive, each group in
    /// ascending flattened-address then program order
    pub fn collect_rows(&self, tables: &InstrumentTables) -> Vec<Row> {
        let mut rows = self.bank_rows('M', &tables.melodic);
        rows.extend(self.bank_rows('P', &tables.percussive));
        rows
    }

    fn bank_rows(&self, indicator: char, banks: &BankMap) -> Vec<Row> {
        let config = self.mode.config();
        let mut rows = Vec::new();

        for (addr, bank) in banks.iter() {
            let mut bank_msb = (addr / 128) as u8;
            let bank_lsb = (addr % 128) as u8;

            // XG devices list percussion banks in reverse MSB order.
            if config.reversed_drum_msb && indicator == 'P' {
                bank_msb = 127 - bank_msb;
            }

            for instrument in bank.iter_instruments() {
                if self.skip_instrument(indicator, addr, instrument.program) {
                    continue;
                }

                rows.push(Row {
                    kind: indicator,
                    bank_msb,
                    bank_lsb,
                    program: instrument.program,
                    bank_name: self.rewrite_bank_name(&bank.name),
                    instrument_name: instrument.name.clone(),
                });
            }
        }

        rows
    }

    // Bank 0 is the device default set; only GM prints it.
    fn skip_instrument(&self, indicator: char, addr: u32, program: u8) -> bool {
        if self.mode == Mode::Gm || addr != 0 {
            return false;
        }
        if indicator == 'M' {
            return true;
        }
        indicator == 'P' && (program >= 35 || program <= 81)
    }

    /// Bank display names carry vendor prefixes; fold the canonical one
    /// down to its short form
    fn rewrite_bank_name(&self, name: &str) -> String {
        if let Some(rewrite) = &self.mode.config().name_rewrite {
            if let Some(rest) = name.strip_prefix(rewrite.strip) {
                return format!("{}{}", rewrite.replace_with, rest);
            }
        }
        name.to_string()
    }

    /// Render rows as C array-entry literals
    pub fn build_output(&self, rows: &[Row]) -> String {
        let mut output = String::new();
        for row in rows {
            output.push_str(&format!(
                "    {{'{}', {:3}, {:3}, {:3}, \"{}\", \"{}\"}},\n",
                row.kind,
                row.bank_msb,
                row.bank_lsb,
                row.program,
                escape_quotes(&row.bank_name),
                escape_quotes(&row.instrument_name),
            ));
        }
        output
    }

    /// Render rows as a JSON document
    pub fn build_output_json(&self, rows: &[Row]) -> String {
        #[derive(Serialize)]
        struct JsonOutput<'a> {
            mode: &'a str,
            rows: &'a [Row],
        }

        let output = JsonOutput {
            mode: self.mode.name(),
            rows,
        };

        serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
            eprintln!("Error serializing to JSON: {}", e);
            "{}".to_string()
        })
    }
}

/// Backslash-escape double quotes; nothing else needs escaping here
pub fn escape_quotes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '"' {
            result.push('\\');
        }
        result.push(c);
    }
    result
}
