//! Placeholder expansion over a property map
//!
//! Values may reference other properties as `{key}`. Expansion is purely
//! textual: it repeats whole-map substitution sweeps until a sweep changes
//! nothing or the pass budget runs out. There is no cycle detection and no
//! escaping for literal braces.

use crate::map::PropertyMap;
use lazy_static::lazy_static;
use regex::Regex;

/// Upper bound on whole-map substitution sweeps
///
/// Chains of references resolve one level per sweep, so this also caps the
/// reference depth that can be fully expanded.
const MAX_EXPANSION_PASSES: usize = 10;

lazy_static! {
    /// Matches a brace-delimited placeholder, shortest interior first
    static ref PLACEHOLDER_RE: Regex = Regex::new(r"\{.+?\}").unwrap();
}

impl PropertyMap {
    /// Replaces every `{key}` occurrence in `input` with the value stored
    /// under `key`, for every key in this map
    ///
    /// Substitution is applied iteratively, up to ten whole-map sweeps, so
    /// values that themselves contain placeholders are resolved
    /// transitively. The loop stops early once a sweep changes nothing.
    ///
    /// Placeholders referencing absent keys are left as literal text, and a
    /// self-referential entry never resolves: substituting it reintroduces
    /// the same placeholder, which counts as no change. Never fails.
    ///
    /// ```
    /// use props_map::PropertyMap;
    ///
    /// let mut props = PropertyMap::new();
    /// props.set("key1", "42");
    /// props.set("key2", "{key1}");
    ///
    /// assert_eq!(props.expand("{key1} == {key2} == true"), "42 == 42 == true");
    /// ```
    pub fn expand(&self, input: &str) -> String {
        let mut current = input.to_string();
        for _ in 0..MAX_EXPANSION_PASSES {
            let mut replaced = false;
            for (key, value) in self.iter() {
                let placeholder = format!("{{{key}}}");
                let next = current.replace(&placeholder, value);
                if next != current {
                    current = next;
                    replaced = true;
                }
            }
            if !replaced {
                break;
            }
        }
        current
    }
}

/// Removes every unresolved `{...}` placeholder from `input`
///
/// Matching is non-greedy: a match never spans across a `}` to reach a
/// later `{`. Text without brace pairs, including unbalanced lone braces,
/// passes through unchanged. Applied as a post-pass after
/// [`PropertyMap::expand`] to scrub references to nonexistent keys.
pub fn delete_unexpanded_props(input: &str) -> String {
    PLACEHOLDER_RE.replace_all(input, "").into_owned()
}
