use anyhow::{anyhow, Result};

use crate::time::MONTH_NAMES;

/// Resolve an abbreviated argument against a fixed set of names.
///
/// An exact match (ignoring case) wins, then a unique prefix. Several
/// prefix matches are ambiguous.
pub fn expand_key<'a>(key: &str, candidates: &[&'a str]) -> Result<&'a str> {
    let key = key.trim();
    if key.is_empty() {
        return Err(anyhow!("Empty key"));
    }

    if let Some(exact) = candidates.iter().find(|c| c.eq_ignore_ascii_case(key)) {
        return Ok(exact);
    }

    let lower = key.to_lowercase();
    let matches: Vec<&'a str> = candidates
        .iter()
        .filter(|c| c.to_lowercase().starts_with(&lower))
        .copied()
        .collect();

    match matches.len() {
        1 => Ok(matches[0]),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

/// `"sep"` → `"September"`, `"10"` → `"October"`.
pub fn expand_month(input: &str) -> Result<&'static str> {
    if let Ok(number) = input.trim().parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|i| MONTH_NAMES.get(i))
            .copied()
            .ok_or_else(|| anyhow!("Month out of range: {}", number));
    }
    expand_key(input, &MONTH_NAMES)
}
