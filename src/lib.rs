//! Translation between English text and Unified English Braille (UEB)
//! grade 1, the uncontracted variant.
//!
//! All translation goes through one builtin [`SymbolTable`] that maps
//! letters, digits and punctuation to braille cells, plus the indicator
//! cells that mark capitals and numbers. The table is built and
//! validated once; [`encode`] and [`decode`] are pure functions over it
//! and never fail, dropping anything they cannot map.

pub mod braille;
pub mod table;
pub mod translator;

pub use table::{SymbolTable, TableError};

/// Translate text to UEB grade 1 braille using the builtin table.
pub fn encode(text: &str) -> String {
    SymbolTable::global().encode(text)
}

/// Translate UEB grade 1 braille back to text using the builtin table.
pub fn decode(braille: &str) -> String {
    SymbolTable::global().decode(braille)
}
