//! Number-to-words converter
//!
//! Top level of the conversion: sign handling, per-group reading, scale
//! label attachment, assembly and capitalization.

use crate::words::grouping;
use crate::words::lexicon;
use crate::words::reader::TripleReader;

/// Converts signed 64-bit integers into spoken Vietnamese.
pub struct VietnameseNumberConverter;

impl VietnameseNumberConverter {
    /// Convert a number into its spoken Vietnamese representation.
    ///
    /// Total over all of `i64`, including `i64::MIN`.
    ///
    /// # Examples
    /// ```
    /// # use vietnum_core::words::converter::VietnameseNumberConverter;
    /// assert_eq!(
    ///     VietnameseNumberConverter::convert(1009),
    ///     "Một nghìn không trăm lẻ chín"
    /// );
    /// assert_eq!(VietnameseNumberConverter::convert(-55), "Âm năm mươi lăm");
    /// ```
    pub fn convert(n: i64) -> String {
        if n == 0 {
            return capitalize(lexicon::digit_word(0));
        }

        // unsigned_abs keeps i64::MIN convertible: its magnitude does
        // not survive a same-width signed negation.
        let magnitude = Self::read_magnitude(n.unsigned_abs());

        let words = if n < 0 {
            capitalize(&format!("{} {}", lexicon::NEGATIVE, magnitude))
        } else {
            capitalize(&magnitude)
        };

        tracing::trace!(n, words = %words, "converted number to words");
        words
    }

    /// Read an unsigned magnitude, uncapitalized.
    fn read_magnitude(magnitude: u64) -> String {
        let triples = grouping::split_into_triples(magnitude);
        let show_zero_hundred = grouping::show_zero_hundred(&triples);
        let last = triples.len() - 1;

        let mut raw = String::new();
        for (index, triple) in triples.iter().enumerate() {
            // The most significant triple never speaks its padding zeros
            let text = TripleReader::read(*triple, show_zero_hundred && index > 0);
            let distance = last - index;
            let label = if !text.is_empty() || forces_billion_marker(triples.len(), distance) {
                lexicon::scale_label(distance).unwrap_or_default()
            } else {
                ""
            };

            raw.push(' ');
            raw.push_str(&text);
            raw.push(' ');
            raw.push_str(label);
        }

        collapse_whitespace(&raw)
    }
}

/// A silent billions group keeps its marker once the number spans five
/// or more groups; the groups above it combine with that "tỷ" to form
/// the compound scales "nghìn tỷ", "triệu tỷ" and "tỷ tỷ".
fn forces_billion_marker(group_count: usize, distance: usize) -> bool {
    group_count >= 5 && distance == lexicon::BILLION_DISTANCE
}

/// Collapse whitespace runs to single spaces and trim the ends.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Uppercase the first character, lowercase the rest.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(VietnameseNumberConverter::convert(0), "Không");
    }

    #[test]
    fn test_single_digits() {
        assert_eq!(VietnameseNumberConverter::convert(1), "Một");
        assert_eq!(VietnameseNumberConverter::convert(9), "Chín");
    }

    #[test]
    fn test_tens() {
        assert_eq!(VietnameseNumberConverter::convert(10), "Mười");
        assert_eq!(VietnameseNumberConverter::convert(15), "Mười lăm");
        assert_eq!(VietnameseNumberConverter::convert(55), "Năm mươi lăm");
        assert_eq!(VietnameseNumberConverter::convert(90), "Chín mươi");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(VietnameseNumberConverter::convert(100), "Một trăm");
        assert_eq!(VietnameseNumberConverter::convert(105), "Một trăm lẻ năm");
        assert_eq!(VietnameseNumberConverter::convert(900), "Chín trăm");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(
            VietnameseNumberConverter::convert(1009),
            "Một nghìn không trăm lẻ chín"
        );
        assert_eq!(VietnameseNumberConverter::convert(20_000), "Hai mươi nghìn");
    }

    #[test]
    fn test_negative() {
        assert_eq!(VietnameseNumberConverter::convert(-55), "Âm năm mươi lăm");
        assert_eq!(
            VietnameseNumberConverter::convert(-1055),
            "Âm một nghìn không trăm năm mươi lăm"
        );
    }

    #[test]
    fn test_round_scales() {
        assert_eq!(VietnameseNumberConverter::convert(1_000_000), "Một triệu");
        assert_eq!(
            VietnameseNumberConverter::convert(1_000_000_000),
            "Một tỷ"
        );
    }

    #[test]
    fn test_interior_zero_hundred() {
        assert_eq!(
            VietnameseNumberConverter::convert(1_000_010),
            "Một triệu không trăm mười"
        );
        assert_eq!(
            VietnameseNumberConverter::convert(1_090_000),
            "Một triệu không trăm chín mươi nghìn"
        );
        assert_eq!(
            VietnameseNumberConverter::convert(1_090_010),
            "Một triệu không trăm chín mươi nghìn không trăm mười"
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("âm năm"), "Âm năm");
        assert_eq!(capitalize("MỘT trăm"), "Một trăm");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  một   nghìn  "), "một nghìn");
        assert_eq!(collapse_whitespace(" "), "");
    }
}
