//! Memoized style derivation.

use std::rc::Rc;

use super::sheet::{create_styles, StyleSheet};
use crate::palette::Palette;

/// Hit/miss counters for a [`StyleCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleCacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Remembers the style sheet derived from the most recent palette.
///
/// Scheme changes swap between two palettes, so one entry is enough: asking
/// again for the current palette returns the same shared sheet, and asking
/// for a different one derives a fresh sheet and replaces the entry.
#[derive(Debug, Default)]
pub struct StyleCache {
    last: Option<(Palette, Rc<StyleSheet>)>,
    hits: u64,
    misses: u64,
}

impl StyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The style sheet for `palette`, derived only if the palette changed.
    pub fn get(&mut self, palette: &Palette) -> Rc<StyleSheet> {
        if let Some((cached, sheet)) = &self.last {
            if cached == palette {
                self.hits += 1;
                tracing::trace!(hits = self.hits, "style sheet cache hit");
                return Rc::clone(sheet);
            }
        }

        self.misses += 1;
        tracing::trace!(misses = self.misses, "deriving style sheet");
        let sheet = Rc::new(create_styles(palette));
        self.last = Some((palette.clone(), Rc::clone(&sheet)));
        sheet
    }

    pub fn stats(&self) -> StyleCacheStats {
        StyleCacheStats {
            hits: self.hits,
            misses: self.misses,
        }
    }

    /// Forgets the cached sheet. Counters are kept.
    pub fn clear(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteSet;
    use crate::scheme::Scheme;

    #[test]
    fn test_same_palette_is_shared() {
        let set = PaletteSet::builtin();
        let mut cache = StyleCache::new();
        let a = cache.get(set.for_scheme(Scheme::Dark));
        let b = cache.get(set.for_scheme(Scheme::Dark));
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(cache.stats(), StyleCacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn test_palette_change_recomputes() {
        let set = PaletteSet::builtin();
        let mut cache = StyleCache::new();
        let dark = cache.get(set.for_scheme(Scheme::Dark));
        let light = cache.get(set.for_scheme(Scheme::Light));
        assert_ne!(*dark, *light);
        cache.get(set.for_scheme(Scheme::Dark));
        assert_eq!(cache.stats().misses, 3);
    }

    #[test]
    fn test_clear_forces_recompute() {
        let set = PaletteSet::builtin();
        let mut cache = StyleCache::new();
        cache.get(set.for_scheme(Scheme::Light));
        cache.clear();
        cache.get(set.for_scheme(Scheme::Light));
        assert_eq!(cache.stats(), StyleCacheStats { hits: 0, misses: 2 });
    }
}
