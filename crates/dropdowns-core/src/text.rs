// crates/dropdowns-core/src/text.rs

//! Key normalization shared by lookups, builders and search.
//!
//! Two flavours of comparison live here:
//! - **case-insensitive equality** on trimmed input ([`eq_ignore_case`],
//!   [`KeySet`]). Lookups and builder filters use this; accents matter.
//! - **folded matching** ([`fold_key`]): accents and case are dropped. Only
//!   type-ahead search uses it.

use std::collections::BTreeSet;

/// Trims `query` and rejects blank input.
///
/// ```
/// use dropdowns_core::text::normalize_query;
///
/// assert_eq!(normalize_query("  tx "), Some("tx"));
/// assert_eq!(normalize_query("   "), None);
/// ```
#[inline]
pub fn normalize_query(query: &str) -> Option<&str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Case key used for case-insensitive sets and comparisons.
///
/// Folds to Unicode lowercase, not uppercase. The two agree on every value
/// and label in the bundled tables; they only differ for characters such as
/// `ß` whose uppercase form is longer.
///
/// ```
/// use dropdowns_core::text::fold_case;
///
/// assert_eq!(fold_case("QUE"), fold_case("que"));
/// assert_eq!(fold_case("Querétaro"), "querétaro");
/// ```
#[inline]
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive equality without allocating in the ASCII case.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Convert a string into a folded key suitable for accent-insensitive matching.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Querétaro` -> `Queretaro`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```
/// use dropdowns_core::text::fold_key;
///
/// assert_eq!(fold_key("Michoacán"), "michoacan");
/// assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// A case-insensitive set of trimmed, non-blank strings.
///
/// Blank entries are silently dropped on insert, so feeding user input
/// straight in is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet {
    keys: BTreeSet<String>,
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every non-blank value, trimmed.
    pub fn extend<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for value in values {
            if let Some(v) = normalize_query(value.as_ref()) {
                self.keys.insert(fold_case(v));
            }
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        !self.keys.is_empty() && self.keys.contains(&fold_case(value))
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Folded keys in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = KeySet::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_ignore_case_handles_accents() {
        assert!(eq_ignore_case("México", "MÉXICO"));
        assert!(eq_ignore_case("TX", "tx"));
        assert!(!eq_ignore_case("México", "Mexico"));
    }

    #[test]
    fn key_set_trims_and_folds() {
        let set: KeySet = [" TX ", "", "   ", "tx", "Ca"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains("tx"));
        assert!(set.contains("CA"));
        assert!(!set.contains("NY"));
    }

    #[test]
    fn empty_key_set_contains_nothing() {
        let set = KeySet::new();
        assert!(set.is_empty());
        assert!(!set.contains(""));
    }
}
