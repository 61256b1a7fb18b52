//! Assignment token normalization
//!
//! Cells are typed by hand, so tokens arrive padded, lower-case, merged
//! ("RA") or with a Cyrillic `С` in place of a Latin `C`. Every recognizable
//! letter is kept in order; everything else is dropped without error.

use raci_model::RaciLetter;

/// Characters rendered identically to a Latin letter
const CONFUSABLES: &[(char, char)] = &[('\u{0421}', 'C'), ('\u{0441}', 'C')];

/// Normalize one cell's raw tokens into responsibility letters
///
/// An empty result is the caller's signal to raise a warning.
///
/// # Example
///
/// ```rust
/// use raci_enrich::normalize_tokens;
/// use raci_model::RaciLetter;
///
/// let letters = normalize_tokens(["r", " A ", "x", ""]);
/// assert_eq!(letters, vec![RaciLetter::R, RaciLetter::A]);
/// ```
pub fn normalize_tokens<'a, I>(tokens: I) -> Vec<RaciLetter>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut letters = Vec::new();
    for token in tokens {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        let upper = replace_confusables(token).to_uppercase();
        letters.extend(upper.chars().filter_map(RaciLetter::from_char));
    }
    letters
}

fn replace_confusables(token: &str) -> String {
    token
        .chars()
        .map(|c| {
            CONFUSABLES
                .iter()
                .find(|(from, _)| *from == c)
                .map_or(c, |(_, to)| *to)
        })
        .collect()
}
