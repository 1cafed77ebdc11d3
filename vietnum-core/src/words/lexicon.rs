//! Numeral lexicon
//!
//! Static word tables for spoken Vietnamese numbers: digit words, scale
//! labels per group of three, and the irregular forms some digits take
//! after a tens word.

/// Digit words, index = digit value.
pub const DIGITS: [&str; 10] = [
    "không", "một", "hai", "ba", "bốn", "năm", "sáu", "bảy", "tám", "chín",
];

/// Base scale labels, index = group distance from the least-significant
/// group.
///
/// The base labels repeat beyond "tỷ"; together with the billion marker
/// kept at [`BILLION_DISTANCE`] they form the compound scales
/// "nghìn tỷ", "triệu tỷ" and "tỷ tỷ".
pub const SCALES: [&str; 7] = ["", "nghìn", "triệu", "tỷ", "nghìn", "triệu", "tỷ"];

/// Group distance at which the "tỷ" marker is never dropped.
pub const BILLION_DISTANCE: usize = 3;

/// Hundreds word.
pub const HUNDRED: &str = "trăm";

/// Spoken placeholder for a zero hundreds digit in an interior group.
pub const ZERO_HUNDRED: &str = "không trăm";

/// Connective between a hundreds group and a bare units digit
/// ("một trăm lẻ năm").
pub const ODD: &str = "lẻ";

/// Ten, for a tens digit of one.
pub const TEN: &str = "mười";

/// Tens-multiple suffix, for tens digits of two through nine.
pub const TENS: &str = "mươi";

/// One after a tens multiple ("hai mươi mốt").
pub const ONE_AFTER_TENS: &str = "mốt";

/// Four after a tens multiple ("hai mươi tư").
pub const FOUR_AFTER_TENS: &str = "tư";

/// Five after "mười" or a tens multiple ("mười lăm", "năm mươi lăm").
pub const FIVE_AFTER_TENS: &str = "lăm";

/// Sign word for negative numbers.
pub const NEGATIVE: &str = "âm";

/// Word for a single digit.
pub fn digit_word(digit: u8) -> &'static str {
    DIGITS[usize::from(digit)]
}

/// Base scale label for a group distance, if the distance is in range.
pub fn scale_label(distance: usize) -> Option<&'static str> {
    SCALES.get(distance).copied()
}
