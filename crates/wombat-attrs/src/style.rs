//! Inline style strings.
//!
//! A style string is a run of `property: value;` declarations, as found in a
//! `style="..."` attribute. Tokenization here is deliberately small: no
//! quoting, no escapes, no comments.

use std::collections::HashMap;
use std::{iter, mem, slice};

use serde::{Serialize, Serializer};
use wombat_common::warning::warn_once;

/// Iterator over the `(property, value)` pairs of a [`StyleMap`].
pub type Iter<'a> = iter::Map<
    slice::Iter<'a, (String, String)>,
    for<'b> fn(&'b (String, String)) -> (&'b str, &'b str),
>;

/// Property → value map produced by [`parse_style`].
///
/// Keys are unique. Iteration follows the position where each property was
/// first declared; a redeclared property keeps its position and takes the
/// new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    /// Create an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set a property, returning the value it replaced.
    pub fn insert(&mut self, property: String, value: String) -> Option<String> {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(key, _)| *key == property) {
            return Some(mem::replace(existing, value));
        }
        self.entries.push((property, value));
        None
    }

    /// The value declared for a property.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == property)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the property was declared.
    #[must_use]
    pub fn contains_key(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    /// Number of distinct properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no property was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(property, value)` pairs in declaration order.
    pub fn iter(&self) -> Iter<'_> {
        self.entries
            .iter()
            .map(as_pair as for<'b> fn(&'b (String, String)) -> (&'b str, &'b str))
    }
}

fn as_pair((key, value): &(String, String)) -> (&str, &str) {
    (key.as_str(), value.as_str())
}

impl<'a> IntoIterator for &'a StyleMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<StyleMap> for HashMap<String, String> {
    fn from(map: StyleMap) -> Self {
        map.entries.into_iter().collect()
    }
}

impl Serialize for StyleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Parse a `property: value; property: value` style string.
///
/// Whitespace (space, CR, LF, tab, form feed, backspace) is dropped
/// everywhere, including inside values: `margin: 1px 2px` yields `1px2px`.
/// A final declaration without `;` is still committed. A `;` with no
/// property name before it is ignored. Repeated properties keep the last
/// value.
#[must_use]
pub fn parse_style(text: &str) -> StyleMap {
    let mut map = StyleMap::new();
    let mut buffer = String::new();
    let mut property: Option<String> = None;

    for c in text.chars() {
        match c {
            ';' => {
                let value = mem::take(&mut buffer);
                if let Some(key) = property.take() {
                    let _ = map.insert(key, value);
                } else if !value.is_empty() {
                    warn_once(
                        "attrs",
                        "style declaration without a property name, ignoring",
                    );
                }
            }
            ':' => property = Some(mem::take(&mut buffer)),
            ' ' | '\r' | '\n' | '\t' | '\u{000C}' | '\u{0008}' => {}
            _ => buffer.push(c),
        }
    }

    if let Some(key) = property {
        let _ = map.insert(key, buffer);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut map = StyleMap::new();
        assert_eq!(map.insert("a".to_string(), "1".to_string()), None);
        assert_eq!(map.insert("b".to_string(), "2".to_string()), None);
        assert_eq!(
            map.insert("a".to_string(), "3".to_string()),
            Some("1".to_string())
        );
        assert_eq!(map.iter().collect::<Vec<_>>(), vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_later_colon_replaces_property() {
        let map = parse_style("a:b:c");
        assert_eq!(map.iter().collect::<Vec<_>>(), vec![("b", "c")]);
    }
}
