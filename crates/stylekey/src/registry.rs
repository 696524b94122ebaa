//! Style registry and short-token allocation.
//!
//! The [`Registry`] is owned by one compilation pass. It works in two
//! phases:
//!
//! 1. **Collection**: every key produced by the encoders is
//!    [`register`](Registry::register)ed. The first registration decodes the
//!    key into its CSS rule; later ones only bump the usage count.
//! 2. **Materialization**: [`finish`](Registry::finish) consumes the
//!    registry, assigns each entry a short token and returns the
//!    [`CompiledStyles`].
//!
//! # Short tokens
//!
//! Tokens are a bijective base-26 numbering of the entry index:
//!
//! | index | token |
//! |-------|-------|
//! | 0 | `a` |
//! | 25 | `z` |
//! | 26 | `aa` |
//! | 701 | `zz` |
//! | 702 | `aaa` |
//!
//! so tokens grow in (length, lexicographic) order and are never reused.
//!
//! ```rust
//! use stylekey::{AllocationOrder, ClassNaming, Registry};
//!
//! let mut registry = Registry::new();
//! registry.register("paddingTop__16").unwrap();
//! registry.register("textSize__16").unwrap();
//! registry.register("paddingTop__16").unwrap();
//! assert_eq!(registry.uses("paddingTop__16"), 2);
//!
//! let styles = registry.finish(AllocationOrder::Insertion, ClassNaming::Short);
//! assert_eq!(styles.class_for("textSize__16"), Some("b"));
//! assert!(styles.stylesheet().contains(".b { font-size: 1rem; }"));
//! ```

use indexmap::map::Entry;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::{AllocationOrder, ClassNaming};
use crate::css::CssRule;
use crate::decode::KeyDecoder;
use crate::error::Result;
use crate::vocab::Family;

const ALPHABET_LEN: u128 = 26;

/// Short token for an entry index.
pub fn short_token(index: usize) -> String {
    // Widened so that `usize::MAX + 1` still fits.
    let mut n = index as u128 + 1;
    let mut token = Vec::new();
    while n > 0 {
        n -= 1;
        token.push(b'a' + (n % ALPHABET_LEN) as u8);
        n /= ALPHABET_LEN;
    }
    token.reverse();
    token.into_iter().map(char::from).collect()
}

/// Inverse of [`short_token`]. `None` for anything that is not a non-empty
/// run of lowercase ASCII letters, or that would overflow.
pub fn token_index(token: &str) -> Option<usize> {
    if token.is_empty() {
        return None;
    }
    let mut n: u128 = 0;
    for byte in token.bytes() {
        if !byte.is_ascii_lowercase() {
            return None;
        }
        let digit = (byte - b'a') as u128 + 1;
        n = n.checked_mul(ALPHABET_LEN)?.checked_add(digit)?;
    }
    usize::try_from(n - 1).ok()
}

/// A registered key with its rule and usage count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleEntry {
    pub key: String,
    pub uses: usize,
    pub rule: CssRule,
}

/// Deduplicating collection of style keys for one compilation.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    decoder: KeyDecoder,
    entries: IndexMap<String, StyleEntry>,
}

impl Registry {
    /// Empty registry with the default decoder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decoder(decoder: KeyDecoder) -> Self {
        Self {
            decoder,
            entries: IndexMap::new(),
        }
    }

    pub fn decoder(&self) -> &KeyDecoder {
        &self.decoder
    }

    /// Registers a key of any family.
    ///
    /// # Errors
    ///
    /// Returns the decode error of a new key; nothing is recorded for it.
    pub fn register(&mut self, key: &str) -> Result<&StyleEntry> {
        self.insert_with(key, |decoder, key| decoder.decode(key))
    }

    /// Registers a key decoded with the grammar of `family`.
    pub fn register_as(&mut self, family: Family, key: &str) -> Result<&StyleEntry> {
        self.insert_with(key, |decoder, key| decoder.decode_as(family, key))
    }

    fn insert_with<F>(&mut self, key: &str, decode: F) -> Result<&StyleEntry>
    where
        F: FnOnce(&KeyDecoder, &str) -> Result<CssRule>,
    {
        let index = match self.entries.get_index_of(key) {
            Some(index) => index,
            None => {
                let rule = decode(&self.decoder, key)?;
                trace!(key, class = %rule.class_name, "registered style key");
                let entry = StyleEntry {
                    key: key.to_string(),
                    uses: 0,
                    rule,
                };
                self.entries.insert_full(key.to_string(), entry).0
            }
        };
        self.entries[index].uses += 1;
        Ok(&self.entries[index])
    }

    /// Adds the entries of another registry. Counts of shared keys add up;
    /// new keys keep the rule `other` decoded them into.
    pub fn merge(&mut self, other: Registry) {
        for (key, entry) in other.entries {
            match self.entries.entry(key) {
                Entry::Occupied(mut existing) => existing.get_mut().uses += entry.uses,
                Entry::Vacant(slot) => {
                    slot.insert(entry);
                }
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&StyleEntry> {
        self.entries.get(key)
    }

    /// Usage count of a key; `0` if it was never registered.
    pub fn uses(&self, key: &str) -> usize {
        self.entries.get(key).map_or(0, |entry| entry.uses)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &StyleEntry> {
        self.entries.values()
    }

    /// Allocates short tokens and materializes the registry.
    pub fn finish(self, allocation: AllocationOrder, naming: ClassNaming) -> CompiledStyles {
        let mut entries: Vec<StyleEntry> = self.entries.into_values().collect();
        if allocation == AllocationOrder::Sorted {
            entries.sort_by(|a, b| a.key.cmp(&b.key));
        }

        let entries: IndexMap<String, ClassEntry> = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let token = short_token(index);
                let class_name = match naming {
                    ClassNaming::Short => token.clone(),
                    ClassNaming::Verbose => entry.rule.class_name.clone(),
                };
                let class_entry = ClassEntry {
                    key: entry.key.clone(),
                    token,
                    class_name,
                    uses: entry.uses,
                    rule: entry.rule,
                };
                (entry.key, class_entry)
            })
            .collect();

        debug!(entries = entries.len(), ?allocation, ?naming, "materialized style registry");
        CompiledStyles { entries }
    }
}

/// A materialized registry entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassEntry {
    pub key: String,
    /// Allocated short token.
    pub token: String,
    /// Class the rule is emitted under.
    pub class_name: String,
    pub uses: usize,
    pub rule: CssRule,
}

impl ClassEntry {
    pub fn render(&self) -> String {
        self.rule.render_as(&self.class_name)
    }
}

/// The result of materializing a registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompiledStyles {
    entries: IndexMap<String, ClassEntry>,
}

impl CompiledStyles {
    /// Entries in allocation order.
    pub fn entries(&self) -> impl Iterator<Item = &ClassEntry> {
        self.entries.values()
    }

    pub fn get(&self, key: &str) -> Option<&ClassEntry> {
        self.entries.get(key)
    }

    /// Class emitted for a key.
    pub fn class_for(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|entry| entry.class_name.as_str())
    }

    /// `{ style key -> class }`, in allocation order.
    pub fn class_map(&self) -> IndexMap<String, String> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.clone(), entry.class_name.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders every rule, one per line.
    ///
    /// Rules without a media query come first, in allocation order, then
    /// media rules by ascending min-width. A rule that renders identically
    /// to an earlier one is written once.
    pub fn stylesheet(&self) -> String {
        let mut ordered: Vec<&ClassEntry> = self.entries.values().collect();
        // Stable: allocation order is kept within each width.
        ordered.sort_by_key(|entry| entry.rule.min_width);

        let rules: IndexSet<String> = ordered.into_iter().map(ClassEntry::render).collect();
        let mut css = String::new();
        for rule in rules {
            css.push_str(&rule);
            css.push('\n');
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StyleKeyError;

    // =========================================================================
    // Short tokens
    // =========================================================================

    #[test]
    fn test_short_token_boundaries() {
        assert_eq!(short_token(0), "a");
        assert_eq!(short_token(25), "z");
        assert_eq!(short_token(26), "aa");
        assert_eq!(short_token(27), "ab");
        assert_eq!(short_token(701), "zz");
        assert_eq!(short_token(702), "aaa");
    }

    #[test]
    fn test_token_index_inverts() {
        for index in [0, 1, 25, 26, 51, 701, 702, 18277, 18278] {
            assert_eq!(token_index(&short_token(index)), Some(index));
        }
    }

    #[test]
    fn test_token_index_rejects_non_tokens() {
        assert_eq!(token_index(""), None);
        assert_eq!(token_index("A"), None);
        assert_eq!(token_index("a1"), None);
        assert_eq!(token_index(&"z".repeat(40)), None);
        assert_eq!(token_index(&"z".repeat(20)), None);
    }

    #[test]
    fn test_largest_index_has_a_token() {
        let token = short_token(usize::MAX);
        assert!(token.bytes().all(|b| b.is_ascii_lowercase()));
        assert_eq!(token_index(&token), Some(usize::MAX));
    }

    // =========================================================================
    // Registration
    // =========================================================================

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = Registry::new();
        registry.register("borderStyle__solid").unwrap();
        let entry = registry.register("borderStyle__solid").unwrap();
        assert_eq!(entry.uses, 2);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_failed_key_is_not_recorded() {
        let mut registry = Registry::new();
        assert!(matches!(
            registry.register("borderStyle__wavy"),
            Err(StyleKeyError::UnsupportedValue { .. })
        ));
        assert!(registry.is_empty());
        assert_eq!(registry.uses("borderStyle__wavy"), 0);
    }

    #[test]
    fn test_register_as_uses_family_grammar() {
        let mut registry = Registry::new();
        assert!(matches!(
            registry.register_as(Family::Scale, "zIndex__1"),
            Err(StyleKeyError::NoMatchingDimensionKey { .. })
        ));
        registry.register_as(Family::Palette, "textColor__[0,0,0,1]").unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_merge_adds_counts() {
        let mut left = Registry::new();
        left.register("paddingTop__4").unwrap();
        left.register("paddingTop__4").unwrap();

        let mut right = Registry::new();
        right.register("paddingTop__4").unwrap();
        right.register("gap__8").unwrap();

        left.merge(right);
        assert_eq!(left.uses("paddingTop__4"), 3);
        assert_eq!(left.uses("gap__8"), 1);
        assert_eq!(left.len(), 2);
    }

    // =========================================================================
    // Materialization
    // =========================================================================

    #[test]
    fn test_insertion_allocation() {
        let mut registry = Registry::new();
        registry.register("textSize__16").unwrap();
        registry.register("paddingTop__16").unwrap();
        let styles = registry.finish(AllocationOrder::Insertion, ClassNaming::Short);
        assert_eq!(styles.class_for("textSize__16"), Some("a"));
        assert_eq!(styles.class_for("paddingTop__16"), Some("b"));
    }

    #[test]
    fn test_sorted_allocation_ignores_build_order() {
        let build = |keys: &[&str]| {
            let mut registry = Registry::new();
            for key in keys {
                registry.register(key).unwrap();
            }
            registry.finish(AllocationOrder::Sorted, ClassNaming::Short).class_map()
        };
        let forward = build(&["textSize__16", "gap__4", "paddingTop__16"]);
        let backward = build(&["paddingTop__16", "gap__4", "textSize__16"]);
        assert_eq!(forward, backward);
        assert_eq!(forward["gap__4"], "a");
    }

    #[test]
    fn test_verbose_naming_uses_rule_class() {
        let mut registry = Registry::new();
        registry.register("paddingTop--s:sm:1::bp:lg:1__16").unwrap();
        let styles = registry.finish(AllocationOrder::Insertion, ClassNaming::Verbose);
        let entry = styles.get("paddingTop--s:sm:1::bp:lg:1__16").unwrap();
        assert_eq!(entry.token, "a");
        assert_eq!(entry.class_name, "paddingTop--lg1__16");
    }

    #[test]
    fn test_stylesheet_orders_media_last() {
        let mut registry = Registry::new();
        registry.register("paddingTop--s:all::bp:xl:1__24").unwrap();
        registry.register("paddingTop--s:all::bp:sm:1__8").unwrap();
        registry.register("paddingTop__4").unwrap();
        let css = registry
            .finish(AllocationOrder::Insertion, ClassNaming::Short)
            .stylesheet();
        let lines: Vec<&str> = css.lines().collect();
        assert_eq!(
            lines,
            vec![
                ".c { padding-top: 4px; }",
                "@media (min-width: 480px) { .b { padding-top: 8px; } }",
                "@media (min-width: 1440px) { .a { padding-top: 24px; } }",
            ]
        );
    }

    #[test]
    fn test_stylesheet_writes_identical_rules_once() {
        let mut registry = Registry::new();
        registry.register("paddingTop--s:sm:1::bp:lg:1__16").unwrap();
        registry.register("paddingTop--s:md:1::bp:lg:1__16").unwrap();
        let styles = registry.finish(AllocationOrder::Insertion, ClassNaming::Verbose);
        assert_eq!(styles.len(), 2);
        assert_eq!(styles.stylesheet().lines().count(), 1);
    }
}
