//! Text to braille

use log::debug;

use crate::table::SymbolTable;
use crate::translator::modes::Modes;

impl SymbolTable {
    /// Translate `text` to uncontracted UEB braille.
    ///
    /// A single forward scan carrying numeric mode: the numeric
    /// indicator is emitted before the first digit of a run, a capital
    /// indicator before each uppercase letter, and every other mapped
    /// character becomes its cell(s) verbatim. Characters without a
    /// mapping are dropped.
    pub fn encode(&self, text: &str) -> String {
        // Smart quotes fold to the plain double quote before the scan.
        // This is the only substitution performed.
        let text = text.replace(['“', '”'], "\"");
        let mut braille = String::new();
        let mut modes = Modes::new();
        for character in text.chars() {
            if let Some(cell) = self.digit_cell(character) {
                if !modes.numeric() {
                    braille.push(self.numeric_indicator());
                    modes.begin_number();
                }
                braille.push(cell);
                continue;
            }
            // a number ends at the first non-digit, without a
            // terminator cell
            modes.end_number();
            if let Some(cells) = self.punctuation_cells(character) {
                braille.push_str(cells);
            } else if character.is_ascii_uppercase() {
                braille.push(self.capital_indicator());
                braille.extend(self.letter_cell(character.to_ascii_lowercase()));
            } else if let Some(cell) = self.letter_cell(character) {
                braille.push(cell);
            } else {
                debug!("dropping unmapped character {character:?}");
            }
        }
        braille
    }
}
