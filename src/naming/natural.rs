use std::cmp::Ordering;

/// Width every digit run is left-padded to before comparison.
const DIGIT_RUN_WIDTH: usize = 20;

/// Builds the sort key for `name`: each maximal run of ASCII digits is
/// left-padded with zeros to a fixed width so that lexical comparison of keys
/// orders numbers by value.
#[must_use]
pub fn natural_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len() + DIGIT_RUN_WIDTH);
    let mut digits = String::new();

    for ch in name.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        flush_digits(&mut key, &mut digits);
        key.push(ch);
    }
    flush_digits(&mut key, &mut digits);

    key
}

fn flush_digits(key: &mut String, digits: &mut String) {
    if digits.is_empty() {
        return;
    }
    for _ in digits.len()..DIGIT_RUN_WIDTH {
        key.push('0');
    }
    key.push_str(digits);
    digits.clear();
}

/// Natural ordering of two names.
///
/// Names with equal keys (`"01"` and `"1"`) fall back to plain comparison,
/// keeping the order total.
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key(a)
        .cmp(&natural_key(b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
#[path = "natural_tests.rs"]
mod tests;
