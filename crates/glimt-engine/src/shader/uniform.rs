use std::collections::HashMap;

/// Name-to-location cache for uniform lookups.
///
/// Owned by one program instance and cleared whenever that program is
/// reloaded; locations are only valid for the lifetime of one linked
/// program, so the cache is never shared. Misses are cached too (as `None`)
/// so an absent uniform costs exactly one backend query and one warning.
///
/// Generic over the location type so the lookup discipline is testable
/// without a GL context.
#[derive(Debug)]
pub(crate) struct UniformCache<L> {
    locations: HashMap<String, Option<L>>,
}

impl<L: Clone> UniformCache<L> {
    pub fn new() -> Self {
        Self {
            locations: HashMap::new(),
        }
    }

    /// Resolves `name`, consulting `lookup` only on a cache miss.
    pub fn resolve(&mut self, name: &str, lookup: impl FnOnce(&str) -> Option<L>) -> Option<L> {
        if let Some(cached) = self.locations.get(name) {
            return cached.clone();
        }

        let location = lookup(name);
        if location.is_none() {
            log::warn!("no uniform named '{name}' in the active program");
        }
        self.locations.insert(name.to_owned(), location.clone());
        location
    }

    pub fn clear(&mut self) {
        self.locations.clear();
    }
}

impl<L: Clone> Default for UniformCache<L> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_lookup_hits_the_cache() {
        let mut cache: UniformCache<i32> = UniformCache::new();
        let mut queries = 0;

        let first = cache.resolve("u_time", |_| {
            queries += 1;
            Some(3)
        });
        let second = cache.resolve("u_time", |_| {
            queries += 1;
            Some(99)
        });

        assert_eq!(first, Some(3));
        assert_eq!(second, Some(3));
        assert_eq!(queries, 1);
    }

    #[test]
    fn misses_are_cached() {
        let mut cache: UniformCache<i32> = UniformCache::new();
        let mut queries = 0;

        assert_eq!(
            cache.resolve("u_missing", |_| {
                queries += 1;
                None
            }),
            None
        );
        assert_eq!(
            cache.resolve("u_missing", |_| {
                queries += 1;
                Some(7)
            }),
            None
        );
        assert_eq!(queries, 1);
    }

    #[test]
    fn instances_do_not_share_entries() {
        let mut a: UniformCache<i32> = UniformCache::new();
        let mut b: UniformCache<i32> = UniformCache::new();

        assert_eq!(a.resolve("u_color", |_| Some(1)), Some(1));
        // A fresh instance (e.g. a reloaded program) re-queries.
        assert_eq!(b.resolve("u_color", |_| Some(2)), Some(2));
    }

    #[test]
    fn clear_forces_requery() {
        let mut cache: UniformCache<i32> = UniformCache::new();

        assert_eq!(cache.resolve("u_mvp", |_| Some(5)), Some(5));
        cache.clear();
        assert_eq!(cache.resolve("u_mvp", |_| Some(8)), Some(8));
    }
}
