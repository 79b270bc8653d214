//! Station name normalization.
//!
//! Produces the comparison key used for fuzzy matching and transfer
//! detection. The key is never shown to users.

use std::sync::LazyLock;

use regex::Regex;

/// Roadway and transit suffixes, matched as whole words.
static SUFFIXES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:street|st|avenue|ave|road|rd|boulevard|blvd|plaza|square|sq|station|subway|stop)\b",
    )
    .expect("suffix pattern is valid")
});

/// Borough and city tokens.
static PLACES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:new\s+york|ny|brooklyn|manhattan|queens|bronx)\b")
        .expect("place pattern is valid")
});

/// Street addresses such as "20 w 34th".
static ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d+\s*(?:west|east|north|south|w|e|n|s)\s*\d+\w*")
        .expect("address pattern is valid")
});

/// Ordinal numbers: "14th" -> "14".
static ORDINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d+)(?:st|nd|rd|th)\b").expect("ordinal pattern is valid")
});

/// Normalize a free-text station or address string.
///
/// Lowercases, drops street suffixes, borough names and street addresses,
/// reduces ordinals to digits, turns punctuation into spaces and collapses
/// whitespace. The sequence is repeated until the result is stable, so
/// `normalize(normalize(s)) == normalize(s)`.
///
/// # Examples
///
/// ```
/// use ride_server::stations::normalize;
///
/// assert_eq!(normalize("14 St-Union Sq"), "14 union");
/// assert_eq!(normalize("Empire State Building, 20 W 34th St, New York, NY"), "empire state building");
/// ```
pub fn normalize(raw: &str) -> String {
    // After the first pass every further pass either changes nothing or
    // shortens the string, so this terminates.
    let mut current = normalize_once(raw);
    loop {
        let next = normalize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_once(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let s = SUFFIXES.replace_all(&lowered, " ");
    let s = PLACES.replace_all(&s, " ");
    let s = ADDRESS.replace_all(&s, " ");
    let s = ORDINAL.replace_all(&s, "$1");

    let spaced: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a normalized name into its words.
pub(crate) fn words(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split(' ').filter(|w| !w.is_empty())
}

/// Collapse runs of whitespace for display.
///
/// Unlike [`normalize`], this keeps the name readable: case, suffixes and
/// punctuation are untouched.
pub fn tidy_stop_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}
