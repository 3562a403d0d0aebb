//! English number words
//!
//! Turns spelled-out numbers ("five", "twenty-five", "two hundred and five",
//! "three point five") into values.

const ONES: &[(&str, u64)] = &[
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
];

const TENS: &[(&str, u64)] = &[
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

const SCALES: &[(&str, u64)] = &[
    ("thousand", 1_000),
    ("million", 1_000_000),
    ("billion", 1_000_000_000),
];

fn lookup(table: &[(&str, u64)], w: &str) -> Option<u64> {
    table.iter().find(|(name, _)| *name == w).map(|(_, v)| *v)
}

/// True for a word that can start a spelled-out number ("and"/"point" cannot)
pub fn is_number_word(word: &str) -> bool {
    word == "hundred" || [ONES, TENS, SCALES].iter().any(|table| lookup(table, word).is_some())
}

/// Words that may only continue a spelled-out number
pub(crate) fn is_number_connector(word: &str) -> bool {
    word == "and" || word == "point"
}

/// Parse spelled-out English number words.
///
/// Words may be separated by spaces or hyphens. `and` is accepted between number
/// words but never alone. Returns `None` if any word is not a number word.
pub fn parse_number_words(text: &str) -> Option<f64> {
    let lower = text.trim().to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|w| !w.is_empty())
        .collect();

    let mut total: u64 = 0;
    let mut current: u64 = 0;
    let mut found_any = false;
    let mut decimals: Option<String> = None;

    for word in words {
        if let Some(digits) = decimals.as_mut() {
            // Only single digits may follow "point"
            match lookup(ONES, word) {
                Some(d) if d < 10 => digits.push(char::from(b'0' + d as u8)),
                _ => return None,
            }
            continue;
        }

        if word == "and" {
            continue;
        }
        if word == "point" {
            decimals = Some(String::new());
            continue;
        }

        // Overflow means the phrase is not a usable number
        if let Some(v) = lookup(ONES, word).or_else(|| lookup(TENS, word)) {
            current = current.checked_add(v)?;
        } else if word == "hundred" {
            current = current.max(1).checked_mul(100)?;
        } else if let Some(scale) = lookup(SCALES, word) {
            total = current.max(1).checked_mul(scale)?.checked_add(total)?;
            current = 0;
        } else {
            return None;
        }
        found_any = true;
    }

    if !found_any {
        return None;
    }

    let whole = total.checked_add(current)?;
    match decimals {
        Some(digits) if !digits.is_empty() => format!("{}.{}", whole, digits).parse().ok(),
        Some(_) => None,
        None => Some(whole as f64),
    }
}
