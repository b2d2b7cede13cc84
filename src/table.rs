//! The symbol table shared by both translation directions
//!
//! All associations between text characters and braille cells live here,
//! written as liblouis-style dot-number strings and converted to Unicode
//! cells when the table is built. The table is validated once at
//! construction and never mutated afterwards; the process-wide instance
//! behind [`SymbolTable::global`] can be shared freely across threads.

use std::{collections::HashMap, sync::LazyLock};

use tabled::Tabled;

use crate::braille::{self, ParseError};

/// Letters a–z with their dot patterns.
const LETTERS: [(char, &str); 26] = [
    ('a', "1"),
    ('b', "12"),
    ('c', "14"),
    ('d', "145"),
    ('e', "15"),
    ('f', "124"),
    ('g', "1245"),
    ('h', "125"),
    ('i', "24"),
    ('j', "245"),
    ('k', "13"),
    ('l', "123"),
    ('m', "134"),
    ('n', "1345"),
    ('o', "135"),
    ('p', "1234"),
    ('q', "12345"),
    ('r', "1235"),
    ('s', "234"),
    ('t', "2345"),
    ('u', "136"),
    ('v', "1236"),
    ('w', "2456"),
    ('x', "1346"),
    ('y', "13456"),
    ('z', "1356"),
];

/// Digits 1–0 reuse the cells of the letters a–j; only numeric mode
/// tells the two readings apart.
const DIGITS: [(char, &str); 10] = [
    ('1', "1"),
    ('2', "12"),
    ('3', "14"),
    ('4', "145"),
    ('5', "15"),
    ('6', "124"),
    ('7', "1245"),
    ('8', "125"),
    ('9', "24"),
    ('0', "245"),
];

/// Punctuation. The parentheses are the one two-cell case; their cells
/// are emitted together on encode.
const PUNCTUATION: [(char, &str); 11] = [
    ('.', "256"),
    (',', "2"),
    ('!', "235"),
    ('?', "236"),
    (':', "25"),
    (';', "23"),
    ('-', "36"),
    ('\'', "3"),
    ('"', "2356"),
    ('(', "5-126"),
    (')', "5-345"),
];

/// Precedes a single letter to mark it uppercase; doubled it switches on
/// capital word mode.
const CAPITAL_INDICATOR: &str = "6";
/// Switches the a–j cells into digit reading until the number ends.
const NUMERIC_INDICATOR: &str = "3456";
/// Doubles as the literal dash and as a continuation inside numbers.
const HYPHEN: &str = "36";
/// Decode-side only; always read as a literal period.
const DECIMAL_MARKER: &str = "46";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TableError {
    #[error(transparent)]
    InvalidDots(#[from] ParseError),
    #[error("cell {cell} maps to both {existing:?} and {duplicate:?}")]
    DuplicateCell {
        cell: char,
        existing: char,
        duplicate: char,
    },
    #[error("indicator cell {cell} collides with the mapping for {existing:?}")]
    ReservedCell { cell: char, existing: char },
    #[error("digit {digit:?} uses cell {cell} which is not a letter cell")]
    UnalignedDigit { digit: char, cell: char },
}

/// The static bidirectional mapping between text characters and braille
/// cells, plus the control cells used as mode switches.
///
/// Both directions are derived from the same underlying associations, so
/// decoding an encoded string restores it for any input limited to the
/// supported character set.
#[derive(Debug)]
pub struct SymbolTable {
    letter_to_cell: HashMap<char, char>,
    digit_to_cell: HashMap<char, char>,
    punctuation_to_cells: HashMap<char, String>,
    cell_to_char: HashMap<char, char>,
    cell_to_digit: HashMap<char, char>,
    capital_indicator: char,
    numeric_indicator: char,
    hyphen: char,
    decimal_marker: char,
}

impl SymbolTable {
    /// Build and validate the builtin table.
    pub fn build() -> Result<Self, TableError> {
        let mut letter_to_cell = HashMap::new();
        let mut digit_to_cell = HashMap::new();
        let mut punctuation_to_cells = HashMap::new();
        let mut cell_to_char = HashMap::new();
        let mut cell_to_digit = HashMap::new();

        for (character, dots) in LETTERS {
            let cell = braille::cell(dots)?.to_unicode();
            letter_to_cell.insert(character, cell);
            insert_unique(&mut cell_to_char, cell, character)?;
        }

        // The space is the one mapping without a dot pattern: it passes
        // through as the plain space character.
        punctuation_to_cells.insert(' ', " ".to_string());
        insert_unique(&mut cell_to_char, ' ', ' ')?;
        for (character, dots) in PUNCTUATION {
            let cells = braille::cells(dots)?;
            // Only the final cell of a sequence is known to the decode
            // direction; the lead cell of the two-cell forms is skipped
            // there as unmapped.
            if let Some(last) = cells.last() {
                insert_unique(&mut cell_to_char, last.to_unicode(), character)?;
            }
            punctuation_to_cells.insert(character, cells.to_string());
        }

        for (digit, dots) in DIGITS {
            let cell = braille::cell(dots)?.to_unicode();
            match cell_to_char.get(&cell) {
                Some(c) if c.is_ascii_lowercase() => (),
                _ => return Err(TableError::UnalignedDigit { digit, cell }),
            }
            digit_to_cell.insert(digit, cell);
            insert_unique(&mut cell_to_digit, cell, digit)?;
        }

        let capital_indicator = braille::cell(CAPITAL_INDICATOR)?.to_unicode();
        let numeric_indicator = braille::cell(NUMERIC_INDICATOR)?.to_unicode();
        let hyphen = braille::cell(HYPHEN)?.to_unicode();
        let decimal_marker = braille::cell(DECIMAL_MARKER)?.to_unicode();
        // The indicators must stay disjoint from the literal mappings.
        // The hyphen is exempt: it is the literal dash as well.
        for cell in [capital_indicator, numeric_indicator, decimal_marker] {
            if let Some(&existing) = cell_to_char.get(&cell) {
                return Err(TableError::ReservedCell { cell, existing });
            }
        }

        Ok(SymbolTable {
            letter_to_cell,
            digit_to_cell,
            punctuation_to_cells,
            cell_to_char,
            cell_to_digit,
            capital_indicator,
            numeric_indicator,
            hyphen,
            decimal_marker,
        })
    }

    /// The builtin table, built on first use and shared read-only for
    /// the rest of the process.
    pub fn global() -> &'static SymbolTable {
        static TABLE: LazyLock<SymbolTable> =
            LazyLock::new(|| SymbolTable::build().expect("builtin symbol table is well-formed"));
        &TABLE
    }

    /// The cell for a lowercase letter.
    pub fn letter_cell(&self, character: char) -> Option<char> {
        self.letter_to_cell.get(&character).copied()
    }

    /// The cell for a digit, shared with the letters a–j.
    pub fn digit_cell(&self, character: char) -> Option<char> {
        self.digit_to_cell.get(&character).copied()
    }

    /// The cell sequence for a punctuation mark or the space.
    pub fn punctuation_cells(&self, character: char) -> Option<&str> {
        self.punctuation_to_cells
            .get(&character)
            .map(|cells| cells.as_str())
    }

    /// The literal character for a cell, letters and punctuation combined.
    pub fn char_of(&self, cell: char) -> Option<char> {
        self.cell_to_char.get(&cell).copied()
    }

    /// The digit reading of a cell, meaningful only in numeric mode.
    pub fn digit_of(&self, cell: char) -> Option<char> {
        self.cell_to_digit.get(&cell).copied()
    }

    /// The decoded character for `cell` if it is a letter cell.
    pub fn letter_of(&self, cell: char) -> Option<char> {
        self.char_of(cell).filter(char::is_ascii_alphabetic)
    }

    pub fn capital_indicator(&self) -> char {
        self.capital_indicator
    }

    pub fn numeric_indicator(&self) -> char {
        self.numeric_indicator
    }

    pub fn hyphen(&self) -> char {
        self.hyphen
    }

    pub fn decimal_marker(&self) -> char {
        self.decimal_marker
    }
}

fn insert_unique(
    map: &mut HashMap<char, char>,
    cell: char,
    character: char,
) -> Result<(), TableError> {
    match map.insert(cell, character) {
        Some(existing) if existing != character => Err(TableError::DuplicateCell {
            cell,
            existing,
            duplicate: character,
        }),
        _ => Ok(()),
    }
}

/// One row of the symbol table listing printed by the command line tool.
#[derive(Tabled)]
pub struct Mapping {
    pub character: String,
    pub dots: &'static str,
    pub braille: String,
}

/// All table entries in listing order: letters, digits, punctuation,
/// then the control cells.
pub fn mappings() -> Result<Vec<Mapping>, TableError> {
    let mut rows = Vec::new();
    for &(character, dots) in LETTERS.iter().chain(DIGITS.iter()) {
        rows.push(Mapping {
            character: character.to_string(),
            dots,
            braille: braille::cell(dots)?.to_unicode().to_string(),
        });
    }
    rows.push(Mapping {
        character: "space".to_string(),
        dots: "",
        braille: " ".to_string(),
    });
    for (character, dots) in PUNCTUATION {
        rows.push(Mapping {
            character: character.to_string(),
            dots,
            braille: braille::cells(dots)?.to_string(),
        });
    }
    for (name, dots) in [
        ("capital indicator", CAPITAL_INDICATOR),
        ("numeric indicator", NUMERIC_INDICATOR),
        ("decimal marker", DECIMAL_MARKER),
    ] {
        rows.push(Mapping {
            character: name.to_string(),
            dots,
            braille: braille::cell(dots)?.to_unicode().to_string(),
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_well_formed() {
        assert!(SymbolTable::build().is_ok());
    }

    #[test]
    fn letters_round_trip_through_cells() {
        let table = SymbolTable::build().unwrap();
        for c in 'a'..='z' {
            let cell = table.letter_cell(c).unwrap();
            assert_eq!(table.char_of(cell), Some(c));
            assert_eq!(table.letter_of(cell), Some(c));
        }
    }

    #[test]
    fn digits_share_the_letter_cells() {
        let table = SymbolTable::build().unwrap();
        for (digit, letter) in "1234567890".chars().zip("abcdefghij".chars()) {
            assert_eq!(table.digit_cell(digit), table.letter_cell(letter));
            assert_eq!(table.digit_of(table.letter_cell(letter).unwrap()), Some(digit));
        }
    }

    #[test]
    fn indicators_are_disjoint_from_literals() {
        let table = SymbolTable::build().unwrap();
        for cell in [
            table.capital_indicator(),
            table.numeric_indicator(),
            table.decimal_marker(),
        ] {
            assert_eq!(table.char_of(cell), None);
        }
        // the hyphen cell is the literal dash as well
        assert_eq!(table.char_of(table.hyphen()), Some('-'));
    }

    #[test]
    fn parentheses_are_two_cells() {
        let table = SymbolTable::build().unwrap();
        assert_eq!(table.punctuation_cells('('), Some("⠐⠣"));
        assert_eq!(table.punctuation_cells(')'), Some("⠐⠜"));
        assert_eq!(table.char_of('⠣'), Some('('));
        assert_eq!(table.char_of('⠜'), Some(')'));
        assert_eq!(table.char_of('⠐'), None);
    }

    #[test]
    fn duplicate_cells_are_rejected() {
        let mut map = std::collections::HashMap::new();
        assert_eq!(insert_unique(&mut map, '⠁', 'a'), Ok(()));
        assert_eq!(insert_unique(&mut map, '⠁', 'a'), Ok(()));
        assert_eq!(
            insert_unique(&mut map, '⠁', 'b'),
            Err(TableError::DuplicateCell {
                cell: '⠁',
                existing: 'a',
                duplicate: 'b'
            })
        );
    }

    #[test]
    fn listing_covers_the_whole_table() {
        let rows = mappings().unwrap();
        // 26 letters, 10 digits, space, 11 punctuation marks, 3 indicators
        assert_eq!(rows.len(), 51);
        assert!(rows.iter().any(|r| r.character == "w" && r.braille == "⠺"));
        assert!(rows.iter().any(|r| r.character == "(" && r.braille == "⠐⠣"));
    }
}
