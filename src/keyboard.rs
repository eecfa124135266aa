pub const BACKSPACE_SYMBOL: char = '⌫';
pub const ENTER_SYMBOL: char = '⏎';

// The three rows of the on-screen Russian keyboard. The bottom row
// carries the two control keys.
const LAYOUT: [&str; 3] = ["ЙЦУКЕНГШЩЗХЪ", "ФЫВАПРОЛДЖЭ", "⌫ЯЧСМИТЬБЮ⏎"];

/// One button of the virtual keyboard. The two control keys get their
/// own behavior; everything else types its letter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Backspace,
    Enter,
}

impl Key {
    pub fn from_symbol(symbol: char) -> Key {
        match symbol {
            BACKSPACE_SYMBOL => Key::Backspace,
            ENTER_SYMBOL => Key::Enter,
            letter => Key::Letter(letter),
        }
    }

    /// The character shown on the key face.
    pub fn symbol(self) -> char {
        match self {
            Key::Letter(letter) => letter,
            Key::Backspace => BACKSPACE_SYMBOL,
            Key::Enter => ENTER_SYMBOL,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Keyboard {
    rows: Vec<Vec<Key>>,
}

impl Keyboard {
    pub fn russian() -> Keyboard {
        Keyboard {
            rows: LAYOUT
                .iter()
                .map(|row| row.chars().map(Key::from_symbol).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<Key>] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_layout_has_three_rows() {
        let keyboard = Keyboard::russian();
        assert_eq!(keyboard.rows().len(), 3);
        assert_eq!(keyboard.rows()[0].len(), 12);
        assert_eq!(keyboard.rows()[1].len(), 11);
        assert_eq!(keyboard.rows()[2].len(), 11);
    }

    #[test]
    fn the_control_keys_frame_the_bottom_row() {
        let keyboard = Keyboard::russian();
        let bottom = &keyboard.rows()[2];
        assert_eq!(bottom.first(), Some(&Key::Backspace));
        assert_eq!(bottom.last(), Some(&Key::Enter));
    }

    #[test]
    fn every_other_key_types_a_letter() {
        let keyboard = Keyboard::russian();
        let letters = keyboard
            .rows()
            .iter()
            .flatten()
            .filter(|key| matches!(key, Key::Letter(_)))
            .count();
        assert_eq!(letters, 32);
    }

    #[test]
    fn symbols_round_trip() {
        for key in Keyboard::russian().rows().iter().flatten() {
            assert_eq!(Key::from_symbol(key.symbol()), *key);
        }
    }
}
