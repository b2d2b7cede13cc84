//! Translation mode tracking
//!
//! [`Modes`] is a simple state machine with two orthogonal flags that is
//! advanced once per input unit while scanning. Numeric mode starts at a
//! numeric indicator (or, on the encode side, at the first digit of a
//! run) and ends at the first unit that is neither a digit cell nor the
//! hyphen cell. Capital word mode starts at a doubled capital indicator,
//! upper-cases every letter while active, and ends at the first literal
//! that is not a letter or digit.

/// Tracks numeric and capital word mode across one scan.
///
/// Both flags start out cleared; a fresh value is local to each
/// translation call.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Modes {
    numeric: bool,
    capital_word: bool,
}

impl Modes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn numeric(&self) -> bool {
        self.numeric
    }

    /// Transition at a numeric indicator.
    pub fn begin_number(&mut self) {
        self.numeric = true;
    }

    /// Transition at a unit that ends a number. There is no terminator
    /// cell; the mode ends implicitly.
    pub fn end_number(&mut self) {
        self.numeric = false;
    }

    /// Transition at a doubled capital indicator.
    pub fn begin_capital_word(&mut self) {
        self.capital_word = true;
    }

    /// Transition at an ordinary literal and return the character to
    /// emit for it. Any literal ends numeric mode; letters are
    /// upper-cased while capital word mode is active; punctuation and
    /// whitespace end capital word mode.
    pub fn literal(&mut self, character: char) -> char {
        self.numeric = false;
        let emitted = if self.capital_word && character.is_ascii_alphabetic() {
            character.to_ascii_uppercase()
        } else {
            character
        };
        if !character.is_ascii_alphanumeric() {
            self.capital_word = false;
        }
        emitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_mode_transitions() {
        let mut modes = Modes::new();
        assert!(!modes.numeric());
        modes.begin_number();
        assert!(modes.numeric());
        modes.end_number();
        assert!(!modes.numeric());
    }

    #[test]
    fn literal_ends_numeric_mode() {
        let mut modes = Modes::new();
        modes.begin_number();
        assert_eq!(modes.literal('a'), 'a');
        assert!(!modes.numeric());
    }

    #[test]
    fn capital_word_mode_uppercases_letters() {
        let mut modes = Modes::new();
        modes.begin_capital_word();
        assert_eq!(modes.literal('h'), 'H');
        assert_eq!(modes.literal('i'), 'I');
    }

    #[test]
    fn capital_word_mode_survives_digits() {
        let mut modes = Modes::new();
        modes.begin_capital_word();
        assert_eq!(modes.literal('3'), '3');
        assert_eq!(modes.literal('a'), 'A');
    }

    #[test]
    fn punctuation_ends_capital_word_mode() {
        let mut modes = Modes::new();
        modes.begin_capital_word();
        assert_eq!(modes.literal('a'), 'A');
        assert_eq!(modes.literal(' '), ' ');
        assert_eq!(modes.literal('a'), 'a');

        let mut modes = Modes::new();
        modes.begin_capital_word();
        assert_eq!(modes.literal('!'), '!');
        assert_eq!(modes.literal('b'), 'b');
    }

    #[test]
    fn literal_without_modes_is_unchanged() {
        let mut modes = Modes::new();
        assert_eq!(modes.literal('x'), 'x');
        assert_eq!(modes.literal('?'), '?');
    }
}
