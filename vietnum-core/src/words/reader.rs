//! Triple reader
//!
//! Converts one group of three digits into words, including the
//! irregular digit-pair forms.

use crate::words::grouping::Triple;
use crate::words::lexicon;

/// Reader for one 3-digit group.
pub struct TripleReader;

impl TripleReader {
    /// Convert one triple into words.
    ///
    /// `show_zero_hundred` controls whether a zero hundreds digit is
    /// spoken as "không trăm". A fully zero triple always reads empty,
    /// and when it does not apply, a lone units digit is read bare
    /// ("chín") rather than through the digit pair ("lẻ chín").
    pub fn read(triple: Triple, show_zero_hundred: bool) -> String {
        let Triple {
            hundreds: a,
            tens: b,
            units: c,
        } = triple;

        match a {
            0 if b == 0 && c == 0 => String::new(),
            0 if show_zero_hundred => {
                format!("{} {}", lexicon::ZERO_HUNDRED, Self::read_pair(b, c))
            }
            0 if b == 0 => lexicon::digit_word(c).to_string(),
            0 => Self::read_pair(b, c),
            _ => {
                let hundreds = format!("{} {}", lexicon::digit_word(a), lexicon::HUNDRED);
                match Self::read_pair(b, c) {
                    pair if pair.is_empty() => hundreds,
                    pair => format!("{} {}", hundreds, pair),
                }
            }
        }
    }

    /// Convert the tens and units digits into words.
    ///
    /// One, four and five change form after a tens word: "mốt", "tư"
    /// and "lăm" after "mươi", only "lăm" after "mười".
    pub fn read_pair(b: u8, c: u8) -> String {
        match b {
            0 => match c {
                0 => String::new(),
                _ => format!("{} {}", lexicon::ODD, lexicon::digit_word(c)),
            },
            1 => {
                let units = match c {
                    0 => return lexicon::TEN.to_string(),
                    5 => lexicon::FIVE_AFTER_TENS,
                    _ => lexicon::digit_word(c),
                };
                format!("{} {}", lexicon::TEN, units)
            }
            _ => {
                let tens = format!("{} {}", lexicon::digit_word(b), lexicon::TENS);
                let units = match c {
                    0 => return tens,
                    1 => lexicon::ONE_AFTER_TENS,
                    4 => lexicon::FOUR_AFTER_TENS,
                    5 => lexicon::FIVE_AFTER_TENS,
                    _ => lexicon::digit_word(c),
                };
                format!("{} {}", tens, units)
            }
        }
    }
}
