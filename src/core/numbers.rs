// LogTally - core/numbers.rs
//
// Extraction and summing of real numbers embedded in free text.
// A number only counts when whitespace (or the string edge) sits on both
// sides of it, so "324.00," or "$5" are ignored.

use regex::Regex;
use std::sync::OnceLock;

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Anchored per token: the regex crate has no look-around.
    PATTERN.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+(?:\.\d+)?|\.\d+)$").expect("number pattern is valid")
    })
}

/// Yield every whitespace-delimited number in `text`, in order.
pub fn generator_numbers(text: &str) -> impl Iterator<Item = f64> + '_ {
    let pattern = number_pattern();
    text.split_whitespace()
        .filter(move |token| pattern.is_match(token))
        .filter_map(|token| token.parse::<f64>().ok())
}

/// Sum the numbers produced by `extract` over `text`.
pub fn sum_profit<'a, F, I>(text: &'a str, extract: F) -> f64
where
    F: Fn(&'a str) -> I,
    I: IntoIterator<Item = f64>,
{
    extract(text).into_iter().sum()
}
