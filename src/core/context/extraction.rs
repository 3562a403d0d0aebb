use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::core::features::unit_converter::lookup_alias;
use crate::shared::types::ExtractedQuery;
use super::numbers::{is_number_connector, is_number_word, parse_number_words};

// Strict numeric literal: "5", "5.0", "-40"
static NUMERIC_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?\d+(\.\d+)?$").expect("valid numeric token regex")
});

// Splits glued tokens such as "5km" into a numeric run and a letter run
static TOKEN_RUNS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+(?:[.,]\d+)*|\D+").expect("valid token run regex")
});

/// Split free text into word tokens, dropping whitespace and punctuation.
///
/// A `-` that opens the text or follows whitespace stays on the number after it,
/// so "-40" is one signed token while "5-10" is two.
pub fn tokenize(text: &str) -> Vec<String> {
    text.unicode_word_indices()
        .flat_map(|(start, word)| {
            let negated = is_negated(text, start);
            TOKEN_RUNS.find_iter(word).enumerate().map(move |(i, m)| {
                let run = m.as_str();
                if run.starts_with(|c: char| c.is_ascii_digit()) {
                    // Thousands separators: "5,000" -> "5000"
                    let digits = run.replace(',', "");
                    if negated && i == 0 {
                        format!("-{}", digits)
                    } else {
                        digits
                    }
                } else {
                    run.to_string()
                }
            })
        })
        .collect()
}

fn is_negated(text: &str, word_start: usize) -> bool {
    let mut before = text[..word_start].chars().rev();
    before.next() == Some('-') && before.next().map_or(true, char::is_whitespace)
}

fn classify_number(token: &str) -> Option<f64> {
    if NUMERIC_TOKEN.is_match(token) {
        token.parse::<f64>().ok()
    } else {
        parse_number_words(token)
    }
}

/// Parse the longest run of number words at the head of `words`.
///
/// Returns the value and how many words it used. A run never ends on a connector,
/// so a trailing "and" is left for classification on its own.
fn number_phrase(words: &[String]) -> Option<(f64, usize)> {
    let mut end = words
        .iter()
        .take_while(|w| is_number_word(w) || is_number_connector(w))
        .count();
    while end > 0 && is_number_connector(&words[end - 1]) {
        end -= 1;
    }
    if end == 0 {
        return None;
    }
    parse_number_words(&words[..end].join(" ")).map(|number| (number, end))
}

/// Three alphabetic characters that are not a unit alias read as a currency code
fn currency_candidate(token: &str) -> Option<String> {
    let token = token.trim();
    if token.chars().count() != 3 || !token.chars().all(char::is_alphabetic) {
        return None;
    }
    let code = token.to_uppercase();
    lookup_alias(&code).is_none().then_some(code)
}

/// Pull a value and up to two units out of a free-text query.
///
/// Tokens are classified as either a number or a unit, never both. Adjacent
/// number words ("twenty five", "two hundred and five") read as one number. When
/// several numbers appear the last one wins. The first two unit-like tokens become
/// the from/to units in encounter order.
pub fn extract_units_from_text(text: &str) -> ExtractedQuery {
    let tokens = tokenize(text);
    debug!(?tokens, "tokens detected");

    let lowered: Vec<String> = tokens.iter().map(|t| t.trim().to_lowercase()).collect();
    let mut value = None;
    let mut detected_units: Vec<String> = Vec::new();

    let mut i = 0;
    while i < lowered.len() {
        let token_text = &lowered[i];

        if is_number_word(token_text) {
            if let Some((number, used)) = number_phrase(&lowered[i..]) {
                value = Some(number);
                i += used;
                continue;
            }
        }

        if let Some(number) = classify_number(token_text) {
            value = Some(number);
        } else if let Some(unit) = lookup_alias(token_text) {
            detected_units.push(unit.to_string());
        } else if let Some(code) = currency_candidate(&tokens[i]) {
            detected_units.push(code);
        }
        i += 1;
    }

    debug!(?value, units = ?detected_units, "extraction finished");

    let mut units = detected_units.into_iter();
    ExtractedQuery {
        value,
        from_unit: units.next(),
        to_unit: units.next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extracted(value: Option<f64>, from: Option<&str>, to: Option<&str>) -> ExtractedQuery {
        ExtractedQuery {
            value,
            from_unit: from.map(String::from),
            to_unit: to.map(String::from),
        }
    }

    #[test]
    fn test_digits_and_units() {
        assert_eq!(
            extract_units_from_text("Convert 5 meters to feet"),
            extracted(Some(5.0), Some("Meters"), Some("Feet"))
        );
    }

    #[test]
    fn test_number_words() {
        assert_eq!(
            extract_units_from_text("five kilometers to miles"),
            extracted(Some(5.0), Some("Kilometers"), Some("Miles"))
        );
    }

    #[test]
    fn test_decimal_and_punctuation() {
        assert_eq!(
            extract_units_from_text("What is 2.5 kg in pounds?"),
            extracted(Some(2.5), Some("Kilograms"), Some("Pounds"))
        );
    }

    #[test]
    fn test_glued_number_and_unit() {
        assert_eq!(
            extract_units_from_text("10km to miles"),
            extracted(Some(10.0), Some("Kilometers"), Some("Miles"))
        );
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(extract_units_from_text("5,000 grams to kg").value, Some(5000.0));
    }

    #[test]
    fn test_no_value() {
        let query = extract_units_from_text("meters to feet");
        assert_eq!(query.value, None);
        assert_eq!(query.from_unit.as_deref(), Some("Meters"));
    }

    #[test]
    fn test_single_unit_has_no_target() {
        let query = extract_units_from_text("12 inches");
        assert_eq!(query.value, Some(12.0));
        assert_eq!(query.from_unit.as_deref(), Some("Inches"));
        assert_eq!(query.to_unit, None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_units_from_text(""), ExtractedQuery::default());
    }

    #[test]
    fn test_currency_codes() {
        assert_eq!(
            extract_units_from_text("100 usd to eur"),
            extracted(Some(100.0), Some("USD"), Some("EUR"))
        );
    }

    #[test]
    fn test_number_word_is_not_a_currency_code() {
        // "ten" is three letters but is consumed as a number
        assert_eq!(
            extract_units_from_text("ten gbp to jpy"),
            extracted(Some(10.0), Some("GBP"), Some("JPY"))
        );
    }

    #[test]
    fn test_last_number_wins() {
        // Compound lengths are not summed: only the final number is kept
        let query = extract_units_from_text("5 feet 2 inches to cm");
        assert_eq!(query.value, Some(2.0));
        assert_eq!(query.from_unit.as_deref(), Some("Feet"));
        assert_eq!(query.to_unit.as_deref(), Some("Inches"));
    }

    #[test]
    fn test_first_two_units_win() {
        let query = extract_units_from_text("3 celsius fahrenheit kelvin");
        assert_eq!(query.from_unit.as_deref(), Some("Celsius"));
        assert_eq!(query.to_unit.as_deref(), Some("Fahrenheit"));
    }

    #[test]
    fn test_currency_candidate() {
        assert_eq!(currency_candidate("usd"), Some("USD".to_string()));
        assert_eq!(currency_candidate("euro"), None);
        assert_eq!(currency_candidate("u5d"), None);
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("Convert 5km, please!"), vec!["Convert", "5", "km", "please"]);
    }

    #[test]
    fn test_tokenize_keeps_leading_minus() {
        assert_eq!(tokenize("-40 celsius"), vec!["-40", "celsius"]);
        assert_eq!(tokenize("from -3.5km"), vec!["from", "-3.5", "km"]);
        assert_eq!(tokenize("5-10 km"), vec!["5", "10", "km"]);
    }

    #[test]
    fn test_negative_value() {
        assert_eq!(
            extract_units_from_text("-40 celsius to fahrenheit"),
            extracted(Some(-40.0), Some("Celsius"), Some("Fahrenheit"))
        );
    }

    #[test]
    fn test_compound_number_words() {
        assert_eq!(
            extract_units_from_text("twenty-five meters to feet"),
            extracted(Some(25.0), Some("Meters"), Some("Feet"))
        );
        assert_eq!(
            extract_units_from_text("two hundred and five grams to kg").value,
            Some(205.0)
        );
        assert_eq!(extract_units_from_text("three point five km to miles").value, Some(3.5));
    }

    #[test]
    fn test_trailing_and_is_not_part_of_number() {
        // "and" is left over and reads as a three-letter code
        let query = extract_units_from_text("five and usd");
        assert_eq!(query.value, Some(5.0));
        assert_eq!(query.from_unit.as_deref(), Some("AND"));
        assert_eq!(query.to_unit.as_deref(), Some("USD"));
    }
}
