//! Dot-level representation of braille cells
//!
//! A cell is a set of up to six dots, built with [`enumset`] and rendered
//! as a codepoint in the Unicode braille patterns block (U+2800–U+283F).
//! Cells are written as dot-number strings, e.g. `"145"` for the cell
//! with dots 1, 4 and 5, and multi-cell sequences with a dash, e.g.
//! `"5-126"`.

use enumset::{EnumSet, EnumSetType};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Invalid braille dot {character:?}")]
    InvalidDot { character: Option<char> },
}

/// The six dots of a braille cell, numbered down the left column first.
#[derive(EnumSetType, Debug)]
pub enum BrailleDot {
    Dot1,
    Dot2,
    Dot3,
    Dot4,
    Dot5,
    Dot6,
}

/// A single braille cell, one of the 64 six-dot patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrailleCell(EnumSet<BrailleDot>);

impl From<EnumSet<BrailleDot>> for BrailleCell {
    fn from(value: EnumSet<BrailleDot>) -> Self {
        BrailleCell(value)
    }
}

impl BrailleCell {
    pub fn to_unicode(&self) -> char {
        let unicode = self
            .0
            .iter()
            .map(|dot| dot_to_hex(&dot))
            .fold(0x2800, |acc, x| acc | x);
        char::from_u32(unicode).unwrap()
    }
}

impl std::fmt::Display for BrailleCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_unicode())
    }
}

impl FromIterator<BrailleDot> for BrailleCell {
    fn from_iter<T: IntoIterator<Item = BrailleDot>>(iter: T) -> Self {
        BrailleCell(EnumSet::from_iter(iter))
    }
}

/// A sequence of braille cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrailleCells(Vec<BrailleCell>);

impl std::ops::Deref for BrailleCells {
    type Target = Vec<BrailleCell>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<BrailleCell>> for BrailleCells {
    fn from(value: Vec<BrailleCell>) -> Self {
        BrailleCells(value)
    }
}

impl std::fmt::Display for BrailleCells {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.0.iter().map(|b| b.to_unicode()).collect::<String>()
        )
    }
}

impl FromIterator<BrailleCell> for BrailleCells {
    fn from_iter<T: IntoIterator<Item = BrailleCell>>(iter: T) -> Self {
        BrailleCells(iter.into_iter().collect())
    }
}

fn char_to_dot(char: char) -> Result<BrailleDot, ParseError> {
    match char {
        '1' => Ok(BrailleDot::Dot1),
        '2' => Ok(BrailleDot::Dot2),
        '3' => Ok(BrailleDot::Dot3),
        '4' => Ok(BrailleDot::Dot4),
        '5' => Ok(BrailleDot::Dot5),
        '6' => Ok(BrailleDot::Dot6),
        invalid => Err(ParseError::InvalidDot {
            character: Some(invalid),
        }),
    }
}

/// Parse a dot-number string such as `"145"` into a single cell.
pub fn cell(dots: &str) -> Result<BrailleCell, ParseError> {
    if dots.is_empty() {
        Err(ParseError::InvalidDot { character: None })
    } else {
        dots.chars().map(char_to_dot).collect()
    }
}

/// Parse a dash-separated dot-number string such as `"5-126"` into a
/// sequence of cells.
pub fn cells(dots: &str) -> Result<BrailleCells, ParseError> {
    dots.split('-').map(cell).collect()
}

fn dot_to_hex(dot: &BrailleDot) -> u32 {
    match dot {
        BrailleDot::Dot1 => 0x0001,
        BrailleDot::Dot2 => 0x0002,
        BrailleDot::Dot3 => 0x0004,
        BrailleDot::Dot4 => 0x0008,
        BrailleDot::Dot5 => 0x0010,
        BrailleDot::Dot6 => 0x0020,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use enumset::enum_set;

    #[test]
    fn test_cell() {
        assert_eq!(
            cell("123"),
            Ok(BrailleCell(enum_set!(
                BrailleDot::Dot1 | BrailleDot::Dot2 | BrailleDot::Dot3
            )))
        );
        assert_eq!(cell("6"), Ok(BrailleCell(enum_set!(BrailleDot::Dot6))));
        assert_eq!(
            cell("7"),
            Err(ParseError::InvalidDot {
                character: Some('7')
            })
        );
        assert_eq!(cell(""), Err(ParseError::InvalidDot { character: None }));
    }

    #[test]
    fn test_cells() {
        assert_eq!(
            cells("1-1"),
            Ok(BrailleCells(vec![
                BrailleCell(enum_set!(BrailleDot::Dot1)),
                BrailleCell(enum_set!(BrailleDot::Dot1))
            ]))
        );
        assert_eq!(cells("1-"), Err(ParseError::InvalidDot { character: None }));
        assert_eq!(cells("-"), Err(ParseError::InvalidDot { character: None }));
        assert_eq!(cells(""), Err(ParseError::InvalidDot { character: None }));
    }

    #[test]
    fn test_to_unicode() {
        assert_eq!(cell("1").unwrap().to_unicode(), '⠁');
        assert_eq!(cell("3456").unwrap().to_unicode(), '⠼');
        assert_eq!(cells("5-126").unwrap().to_string(), "⠐⠣");
    }
}
