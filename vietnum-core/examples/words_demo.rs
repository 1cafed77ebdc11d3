//! Number-to-words demo
//!
//! Shows the conversion on hand-picked magnitudes and prints
//! expected-vs-actual for each.
//!
//! Run: cargo run --example words_demo

use vietnum_core::VietnameseNumberConverter;

fn main() {
    println!("=== Vietnum number-to-words demo ===\n");

    let cases: Vec<(i64, &str)> = vec![
        // Small numbers and irregular pairs
        (9, "Chín"),
        (10, "Mười"),
        (15, "Mười lăm"),
        (21, "Hai mươi mốt"),
        (24, "Hai mươi tư"),
        (55, "Năm mươi lăm"),
        // The odd marker and the zero hundred placeholder
        (105, "Một trăm lẻ năm"),
        (1009, "Một nghìn không trăm lẻ chín"),
        (1_000_010, "Một triệu không trăm mười"),
        // Signs
        (-55, "Âm năm mươi lăm"),
        (-1055, "Âm một nghìn không trăm năm mươi lăm"),
        // Round scales, including the compound ones
        (1_000_000, "Một triệu"),
        (100_000_000_000, "Một trăm tỷ"),
        (1_000_000_000_000, "Một nghìn tỷ"),
        (1_000_000_000_000_000_000, "Một tỷ tỷ"),
        // A silent billions group keeps its marker
        (1_000_000_000_222_000_000, "Một tỷ tỷ hai trăm hai mươi hai triệu"),
    ];

    for (i, (n, expected)) in cases.iter().enumerate() {
        let words = VietnameseNumberConverter::convert(*n);
        let status = if &words == expected { "✓" } else { "✗" };

        println!("#{} {} {}", i + 1, status, n);
        println!("     words:    \"{}\"", words);
        println!("     expected: \"{}\"", expected);
        println!();
    }

    println!("\n=== Extremes ===\n");
    println!("i64::MAX = {}", VietnameseNumberConverter::convert(i64::MAX));
    println!("i64::MIN = {}", VietnameseNumberConverter::convert(i64::MIN));
}
