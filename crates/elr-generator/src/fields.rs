//! Low-level field value generators.
//!
//! Free functions generic over [`rand::Rng`] so callers (and tests)
//! can inject a seeded RNG.

use rand::Rng;

/// Generate a string of exactly `count` random digit characters.
///
/// Every position is chosen independently and uniformly from 0-9;
/// there is no leading-zero restriction. `count == 0` yields the
/// empty string, and larger-than-sane counts are the caller's problem
/// (`count` is a `usize`, so negative counts cannot be expressed).
pub fn digits<R: Rng>(rng: &mut R, count: usize) -> String {
    let mut out = String::with_capacity(count);
    for _ in 0..count {
        out.push(char::from((b'0') + rng.random_range(0..10u8)));
    }
    out
}

/// Generate a string of exactly `count` random lowercase ASCII letters.
pub fn letters<R: Rng>(rng: &mut R, count: usize) -> String {
    let mut out = String::with_capacity(count);
    for _ in 0..count {
        out.push(char::from(rng.random_range(b'a'..=b'z')));
    }
    out
}

/// Build a synthetic surname from a base surname.
///
/// The base is lower-cased, 5 random lowercase filler letters are
/// appended, the first character is upper-cased, and then every
/// character that is not an ASCII letter or digit is stripped.
/// Apostrophes and hyphens in source surnames are removed entirely,
/// not replaced, so "O'Brien" contributes "OBrien...". The filler
/// letters guarantee at least 5 characters survive the strip.
pub fn random_last_name<R: Rng>(rng: &mut R, base: &str) -> String {
    let mut name = base.to_lowercase();
    name.push_str(&letters(rng, 5));

    let capitalized: String = {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    };

    capitalized
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Generate a 12-digit `YYYYMMDDHHmm` timestamp for a random instant
/// between the Unix epoch and now.
///
/// The instant is `epoch + random_fraction * (now - epoch)` and is
/// formatted with local calendar fields, matching the rest of the
/// record's local-time semantics. Months are 1-indexed and every
/// component is zero-padded.
pub fn timestamp<R: Rng>(rng: &mut R) -> String {
    use chrono::{Local, TimeZone};

    let now = Local::now();
    let now_ms = now.timestamp_millis();
    let random_ms = if now_ms > 0 {
        rng.random_range(0..now_ms)
    } else {
        0
    };

    let instant = Local.timestamp_millis_opt(random_ms).single().unwrap_or(now);
    instant.format("%Y%m%d%H%M").to_string()
}

/// Generate a four-digit 19xx year of birth.
///
/// This is the fallback for the date-of-birth fragment when the caller
/// leaves it blank: the literal "19" followed by two random digits.
pub fn birth_year<R: Rng>(rng: &mut R) -> String {
    format!("19{}", digits(rng, 2))
}
