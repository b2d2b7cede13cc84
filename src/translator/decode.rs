//! Braille to text

use log::debug;

use crate::table::SymbolTable;
use crate::translator::modes::Modes;

impl SymbolTable {
    /// Translate a sequence of braille cells back to text.
    ///
    /// A single forward pass with one cell of lookahead at the capital
    /// indicator. Indicator cells toggle modes and produce no output;
    /// every other mapped cell becomes a literal character. Cells
    /// without a mapping are skipped. Leading and trailing whitespace is
    /// trimmed from the result.
    pub fn decode(&self, braille: &str) -> String {
        let cells: Vec<char> = braille.chars().collect();
        let mut text = String::new();
        let mut modes = Modes::new();
        let mut i = 0;
        while i < cells.len() {
            let cell = cells[i];
            if cell == self.capital_indicator() {
                match cells.get(i + 1) {
                    // a doubled capital indicator switches on capital
                    // word mode
                    Some(&next) if next == self.capital_indicator() => {
                        modes.begin_capital_word();
                        i += 2;
                    }
                    Some(&next) => match self.letter_of(next) {
                        Some(letter) => {
                            text.push(letter.to_ascii_uppercase());
                            i += 2;
                        }
                        // an indicator before a non-letter contributes
                        // no output
                        None => i += 1,
                    },
                    None => i += 1,
                }
                continue;
            }
            if cell == self.numeric_indicator() {
                modes.begin_number();
                i += 1;
                continue;
            }
            if cell == self.decimal_marker() {
                // read as a literal period whether or not a number
                // precedes it; it does end the number it follows
                text.push('.');
                modes.end_number();
                i += 1;
                continue;
            }
            if modes.numeric() {
                if let Some(digit) = self.digit_of(cell) {
                    text.push(digit);
                    i += 1;
                    continue;
                }
                // hyphens join digit groups without ending the number
                if cell == self.hyphen() {
                    text.push('-');
                    i += 1;
                    continue;
                }
            }
            if let Some(character) = self.char_of(cell) {
                text.push(modes.literal(character));
            } else {
                debug!("skipping unmapped cell {cell:?}");
            }
            i += 1;
        }
        text.trim().to_string()
    }
}
