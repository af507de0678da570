//! URL-safe names for pages and themes.

use convert_case::{Case, Casing};

/// Convert a human title into a lowercase kebab-case slug.
///
/// `"Getting Started"` becomes `"getting-started"`. The result only holds
/// `[a-z0-9-]`, with no leading, trailing or doubled `-`: every other
/// character (path separators, dots, punctuation, non-ASCII) acts as a word
/// break. A title with no ASCII letters or digits yields an empty string.
pub fn slugify(title: &str) -> String {
    let kebab = title.trim().to_case(Case::Kebab);
    kebab
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
