//! Conversion warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used when an attribute value is accepted in a degraded form (an unknown
//! unit suffix, a style declaration without a property name).
//!
//! At most a fixed number of distinct warnings are remembered; once the set
//! is full, further new warnings are dropped.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Distinct warnings remembered before new ones are dropped.
const MAX_RECORDED: usize = 256;

/// Record a warning, returning `true` the first time a given message is seen.
fn record(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    insert_bounded(guard.get_or_insert_with(HashSet::new), key)
}

/// Insert unless the set is full. A full set reports every key as seen.
fn insert_bounded(seen: &mut HashSet<String>, key: String) -> bool {
    if seen.len() >= MAX_RECORDED {
        return false;
    }
    seen.insert(key)
}

/// Warn about degraded input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("attrs", "unsupported unit 'vw' in '10vw', treating as unset");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record(component, message) {
        eprintln!("{}", format!("[Wombat {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings so they are reported again.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deduplicates() {
        assert!(record("test-dedup", "first"));
        assert!(!record("test-dedup", "first"));
        assert!(record("test-dedup", "second"));
    }

    #[test]
    fn test_insert_bounded_stops_at_capacity() {
        let mut seen = HashSet::new();
        for i in 0..MAX_RECORDED {
            assert!(insert_bounded(&mut seen, format!("warning {i}")));
        }
        assert!(!insert_bounded(&mut seen, "one too many".to_string()));
        assert!(!insert_bounded(&mut seen, "warning 0".to_string()));
        assert_eq!(seen.len(), MAX_RECORDED);
    }

    #[test]
    fn test_component_is_part_of_the_key() {
        assert!(record("test-a", "same message"));
        assert!(record("test-b", "same message"));
    }
}
