use std::{cmp::Ordering, collections::BTreeMap};

use crate::core::{FoundKey, TranslationCatalog};

/// Catalog keys that were never found, ordered by [`compare_keys`].
pub fn unused_keys(catalog: &TranslationCatalog, found: &BTreeMap<String, FoundKey>) -> Vec<String> {
    let mut unused: Vec<String> = catalog
        .keys()
        .filter(|key| !found.contains_key(*key))
        .map(str::to_string)
        .collect();
    unused.sort_by(|a, b| compare_keys(a, b));
    unused
}

/// Case-insensitive key order, ties broken by exact byte order so the
/// result is total and stable.
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
