use crate::breakpoint::Breakpoint;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An opaque, CSS-like bag of property/value pairs.
pub type StyleBag = Map<String, Value>;

/// Styles keyed by breakpoint name.
///
/// The `default` entry is the base; every other entry is a sparse override. Keys that
/// do not name a breakpoint are kept so documents round-trip unchanged, but the
/// cascade never reads them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(IndexMap<String, StyleBag>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// A map holding only a `default` entry.
    pub fn default_only(bag: StyleBag) -> Self {
        let mut map = Self::new();
        map.insert(Breakpoint::Default, bag);
        map
    }

    pub fn get(&self, bp: Breakpoint) -> Option<&StyleBag> {
        self.0.get(bp.as_str())
    }

    pub fn insert(&mut self, bp: Breakpoint, bag: StyleBag) -> Option<StyleBag> {
        self.0.insert(bp.as_str().to_string(), bag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merges the base styles with the overrides of `bp`.
    pub fn resolve(&self, bp: Breakpoint) -> StyleBag {
        resolve_styles(self, bp)
    }
}

impl FromIterator<(Breakpoint, StyleBag)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (Breakpoint, StyleBag)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (bp, bag) in iter {
            map.insert(bp, bag);
        }
        map
    }
}

/// Produces the merged style object for a breakpoint.
///
/// Starts from a copy of the `default` bag (or an empty bag) and, for any other
/// breakpoint, overwrites it key by key with that breakpoint's entry. Keys the
/// override leaves out keep their base value. The input map is never mutated.
pub fn resolve_styles(styles: &StyleMap, bp: Breakpoint) -> StyleBag {
    let base = styles
        .get(Breakpoint::Default)
        .cloned()
        .unwrap_or_default();

    match styles.get(bp) {
        Some(overrides) if bp != Breakpoint::Default => overlay(base, overrides),
        _ => base,
    }
}

/// Overlays `top` onto `base` key by key, returning the merged bag.
pub fn overlay(mut base: StyleBag, top: &StyleBag) -> StyleBag {
    for (key, value) in top {
        base.insert(key.clone(), value.clone());
    }
    base
}
