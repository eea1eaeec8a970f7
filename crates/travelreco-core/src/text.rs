// crates/travelreco-core/src/text.rs

//! # Text Normalization
//!
//! Every comparison in the crate goes through [`normalize`]: trim, then
//! lowercase. There is deliberately no transliteration or tokenization; a
//! query matches when its normalized form is a substring of the normalized
//! field.

/// Trims surrounding whitespace and lowercases.
///
/// Total over any input.
///
/// # Examples
///
/// ```rust
/// use travelreco_core::text::normalize;
///
/// assert_eq!(normalize("  Kyoto "), "kyoto");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Naive singular form of a word.
///
/// Normalizes first, then strips a trailing `"es"`, or failing that a
/// trailing `"s"`. Purely suffix based: `"beaches"` becomes `"beach"` but
/// `"bus"` becomes `"bu"`.
///
/// ```rust
/// use travelreco_core::text::singularize;
///
/// assert_eq!(singularize("Beaches"), "beach");
/// assert_eq!(singularize("temples"), "templ");
/// assert_eq!(singularize("Temple"), "temple");
/// ```
pub fn singularize(word: &str) -> String {
    let mut s = normalize(word);
    if s.ends_with("es") {
        s.truncate(s.len() - 2);
    } else if s.ends_with('s') {
        s.truncate(s.len() - 1);
    }
    s
}

/// Case-insensitive containment: does the normalized `haystack` contain any
/// of the normalized `needles`? Empty needles never match.
pub fn contains_any<S: AsRef<str>>(haystack: &str, needles: &[S]) -> bool {
    let h = normalize(haystack);
    needles.iter().any(|n| {
        let n: &str = n.as_ref();
        !n.is_empty() && h.contains(&normalize(n))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("\t São Paulo \n"), "são paulo");
    }

    #[test]
    fn singularize_strips_suffixes() {
        assert_eq!(singularize("beaches"), "beach");
        assert_eq!(singularize("Cities"), "citi");
        assert_eq!(singularize("shrines"), "shrin");
        assert_eq!(singularize("temple"), "temple");
        assert_eq!(singularize("bus"), "bu");
        assert_eq!(singularize("s"), "");
        assert_eq!(singularize("es"), "");
        assert_eq!(singularize(""), "");
    }

    #[test]
    fn singularize_normalizes_before_stripping() {
        assert_eq!(singularize("  TEMPLES  "), "templ");
        assert_eq!(singularize("Beach "), "beach");
    }

    #[test]
    fn contains_any_skips_empty_needles() {
        assert!(contains_any("Sunny Coastline", &["coast"]));
        assert!(!contains_any("mountains", &["", "coast"]));
        assert!(!contains_any("anything", &[] as &[&str]));
    }
}
