//! Vietnum demo driver
//!
//! Prints numbers next to their spoken Vietnamese words: either the
//! configured showcase, or the numbers given on the command line.
//!
//! Run: cargo run -p vietnum-cli [-- <number>...]

use vietnum_core::{VietnameseNumberConverter, VietnumError, VietnumResult};

mod config;
mod format;

use config::ShowcaseConfig;

fn main() -> VietnumResult<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let numbers = if args.is_empty() {
        let config = ShowcaseConfig::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to built-in showcase");
            ShowcaseConfig::default()
        });
        config.numbers()
    } else {
        parse_numbers(&args)?
    };

    for n in numbers {
        println!(
            "{} = {}",
            format::group_digits(n),
            VietnameseNumberConverter::convert(n)
        );
    }

    Ok(())
}

/// Parse command-line arguments as signed 64-bit integers. Separator
/// characters ("1,055" or "1_055") are accepted.
fn parse_numbers(args: &[String]) -> VietnumResult<Vec<i64>> {
    args.iter()
        .map(|arg| {
            arg.replace([',', '_'], "")
                .parse::<i64>()
                .map_err(|_| VietnumError::InvalidNumber(arg.clone()))
        })
        .collect()
}
