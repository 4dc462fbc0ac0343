//! Hash collections used across Rosette.
//!
//! Re-exports the AHash-backed map and set so every crate hashes the same way.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_ahash() {
        let mut map = HashMap::new();
        map.insert("click", 1);
        assert_eq!(map.get("click"), Some(&1));
    }

    #[test]
    fn test_hashset_ahash() {
        let mut set = HashSet::new();
        set.insert("0.1");
        assert!(set.contains("0.1"));
    }
}
